//! Dashboard Configuration
//! Fixed startup settings. There are no CLI flags or environment overrides.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Dataset file read once at startup, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/spacex_launch_dash.csv";

/// Address the page is served on.
pub const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 8050);

/// Heading shown at the top of the page.
pub const PAGE_TITLE: &str = "SpaceX Launch Records Dashboard";

#[derive(Debug, Clone)]
pub struct DashConfig {
    pub data_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub title: String,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            title: PAGE_TITLE.to_string(),
        }
    }
}
