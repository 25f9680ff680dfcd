//! Shared test fixtures.

use super::{LaunchDataset, BOOSTER_CATEGORY, CLASS, LAUNCH_SITE, PAYLOAD_MASS};
use polars::prelude::*;

/// Ten launches over three sites and four booster categories, payloads 0..=9600.
///
/// Per site: CCAFS LC-40 has 4 rows (1 success), VAFB SLC-4E has 2 rows (0 successes),
/// KSC LC-39A has 4 rows (3 successes).
pub(crate) fn sample_dataset() -> LaunchDataset {
    let df = df!(
        "Flight Number" => [1i64, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        LAUNCH_SITE => [
            "CCAFS LC-40", "CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS LC-40",
            "KSC LC-39A", "VAFB SLC-4E", "KSC LC-39A", "CCAFS LC-40", "KSC LC-39A",
        ],
        PAYLOAD_MASS => [0.0, 525.0, 500.0, 5000.0, 3170.0, 9600.0, 9600.0, 2490.0, 5000.0, 4600.0],
        BOOSTER_CATEGORY => ["v1.0", "v1.0", "v1.1", "FT", "v1.1", "FT", "FT", "B4", "FT", "B4"],
        CLASS => [0i64, 0, 0, 1, 0, 1, 0, 1, 1, 0],
    )
    .unwrap();
    LaunchDataset::from_frame(df).unwrap()
}

/// The dataset shipped in `data/`, 56 launches over four sites.
pub(crate) fn bundled_dataset() -> LaunchDataset {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/spacex_launch_dash.csv");
    LaunchDataset::load(&path).unwrap()
}
