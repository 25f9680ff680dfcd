//! Launch Dataset Loader
//! Reads the launch record CSV once at startup and derives the payload bounds
//! and the distinct launch sites. The result is immutable for the process lifetime.

use super::{BOOSTER_CATEGORY, CLASS, LAUNCH_SITE, PAYLOAD_MASS, REQUIRED_COLUMNS};
use polars::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Dataset file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Required column missing: {0}")]
    MissingColumn(String),
    #[error("Column '{0}' contains null or unparseable values")]
    NullValues(String),
    #[error("Outcome class must be 0 or 1, found {0}")]
    InvalidClass(i64),
    #[error("Payload mass must be non-negative, found {0}")]
    NegativePayload(f64),
    #[error("Dataset contains no launch records")]
    EmptyDataset,
}

/// The in-memory launch record table plus values derived from it at load time.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    df: DataFrame,
    min_payload: f64,
    max_payload: f64,
    sites: Vec<String>,
}

impl LaunchDataset {
    /// Load the launch record CSV. Any failure here is fatal to startup.
    pub fn load(path: &Path) -> Result<Self, LoaderError> {
        if !path.exists() {
            return Err(LoaderError::NotFound(path.to_path_buf()));
        }

        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        tracing::debug!(path = %path.display(), rows = df.height(), "read launch CSV");
        Self::from_frame(df)
    }

    /// Validate an already-read frame and derive bounds and sites.
    ///
    /// Only the required columns are kept, with payload cast to `Float64` and
    /// class cast to `Int64`.
    pub fn from_frame(df: DataFrame) -> Result<Self, LoaderError> {
        for name in REQUIRED_COLUMNS {
            if df.column(name).is_err() {
                return Err(LoaderError::MissingColumn(name.to_string()));
            }
        }

        let df = df
            .lazy()
            .select([
                col(LAUNCH_SITE).cast(DataType::String),
                col(PAYLOAD_MASS).cast(DataType::Float64),
                col(BOOSTER_CATEGORY).cast(DataType::String),
                col(CLASS).cast(DataType::Int64),
            ])
            .collect()?;

        if df.height() == 0 {
            return Err(LoaderError::EmptyDataset);
        }

        // No partial loads: a null anywhere in a required column rejects the file.
        for name in REQUIRED_COLUMNS {
            if df.column(name)?.null_count() > 0 {
                return Err(LoaderError::NullValues(name.to_string()));
            }
        }

        if let Some(bad) = df
            .column(CLASS)?
            .i64()?
            .into_iter()
            .flatten()
            .find(|c| *c != 0 && *c != 1)
        {
            return Err(LoaderError::InvalidClass(bad));
        }

        let payload = df.column(PAYLOAD_MASS)?.f64()?;
        if let Some(bad) = payload.into_iter().flatten().find(|p| *p < 0.0) {
            return Err(LoaderError::NegativePayload(bad));
        }
        let min_payload = payload.min().ok_or(LoaderError::EmptyDataset)?;
        let max_payload = payload.max().ok_or(LoaderError::EmptyDataset)?;

        // First-appearance order, like the order rows were recorded in.
        let mut seen = HashSet::new();
        let sites: Vec<String> = df
            .column(LAUNCH_SITE)?
            .as_materialized_series()
            .str()?
            .into_iter()
            .flatten()
            .filter(|site| seen.insert(*site))
            .map(|site| site.to_string())
            .collect();

        tracing::info!(
            rows = df.height(),
            min_payload,
            max_payload,
            sites = ?sites,
            "launch dataset loaded"
        );

        Ok(Self {
            df,
            min_payload,
            max_payload,
            sites,
        })
    }

    /// Get a reference to the loaded DataFrame.
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Distinct launch sites in first-appearance order, without the sentinel.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Get the number of rows in the DataFrame.
    #[cfg(test)]
    pub fn row_count(&self) -> usize {
        self.df.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{bundled_dataset, sample_dataset};

    #[test]
    fn derives_bounds_and_sites_in_first_appearance_order() {
        let ds = sample_dataset();
        assert_eq!(ds.row_count(), 10);
        assert_eq!(ds.min_payload(), 0.0);
        assert_eq!(ds.max_payload(), 9600.0);
        assert_eq!(ds.sites(), ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);
    }

    #[test]
    fn drops_columns_that_are_not_required() {
        let ds = sample_dataset();
        assert!(ds.frame().column("Flight Number").is_err());
        assert_eq!(ds.frame().width(), REQUIRED_COLUMNS.len());
    }

    #[test]
    fn missing_column_is_named() {
        let df = df!(
            LAUNCH_SITE => ["A"],
            PAYLOAD_MASS => [1.0],
            CLASS => [1i64],
        )
        .unwrap();
        match LaunchDataset::from_frame(df) {
            Err(LoaderError::MissingColumn(name)) => assert_eq!(name, BOOSTER_CATEGORY),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn rejects_class_outside_binary_domain() {
        let df = df!(
            LAUNCH_SITE => ["A", "A"],
            PAYLOAD_MASS => [1.0, 2.0],
            BOOSTER_CATEGORY => ["FT", "FT"],
            CLASS => [1i64, 2],
        )
        .unwrap();
        assert!(matches!(
            LaunchDataset::from_frame(df),
            Err(LoaderError::InvalidClass(2))
        ));
    }

    #[test]
    fn rejects_null_payload() {
        let df = df!(
            LAUNCH_SITE => ["A", "A"],
            PAYLOAD_MASS => [Some(1.0), None],
            BOOSTER_CATEGORY => ["FT", "FT"],
            CLASS => [1i64, 0],
        )
        .unwrap();
        match LaunchDataset::from_frame(df) {
            Err(LoaderError::NullValues(name)) => assert_eq!(name, PAYLOAD_MASS),
            other => panic!("expected NullValues, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_frame() {
        let df = df!(
            LAUNCH_SITE => Vec::<String>::new(),
            PAYLOAD_MASS => Vec::<f64>::new(),
            BOOSTER_CATEGORY => Vec::<String>::new(),
            CLASS => Vec::<i64>::new(),
        )
        .unwrap();
        assert!(matches!(
            LaunchDataset::from_frame(df),
            Err(LoaderError::EmptyDataset)
        ));
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = LaunchDataset::load(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, LoaderError::NotFound(_)));
    }

    #[test]
    fn loads_bundled_dataset() {
        let ds = bundled_dataset();
        assert_eq!(ds.row_count(), 56);
        assert_eq!(
            ds.sites(),
            ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
        );
        assert_eq!(ds.min_payload(), 0.0);
        assert_eq!(ds.max_payload(), 9600.0);
    }
}
