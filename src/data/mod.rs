//! Data module - launch record loading, selector domain and filtering

mod loader;
mod processor;
mod selection;

pub use loader::LaunchDataset;
pub use processor::{DataProcessor, ProcessorError};
pub use selection::{PayloadRange, SelectionError, SiteOptions, SiteSelection};

/// Launch site column (category).
pub const LAUNCH_SITE: &str = "Launch Site";
/// Payload mass in kilograms (non-negative number).
pub const PAYLOAD_MASS: &str = "Payload Mass (kg)";
/// Booster version category column (category).
pub const BOOSTER_CATEGORY: &str = "Booster Version Category";
/// Outcome class column: 1 = success, 0 = failure.
pub const CLASS: &str = "class";

/// Columns the dataset must carry. Anything else in the file is ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [LAUNCH_SITE, PAYLOAD_MASS, BOOSTER_CATEGORY, CLASS];

#[cfg(test)]
pub(crate) mod fixtures;
