//! Selector Domain
//! Explicit value domains for the site dropdown and the payload range slider.
//! Raw selector values are validated here, once, before any view runs.

use super::LaunchDataset;
use thiserror::Error;

/// Sentinel option meaning "no site restriction".
pub const ALL_SITES: &str = "All Sites";

#[derive(Error, Debug, PartialEq)]
pub enum SelectionError {
    #[error("Unknown launch site: {0}")]
    UnknownSite(String),
    #[error("Payload range must be two finite numbers [low, high], got {0:?}")]
    MalformedRange(Vec<f64>),
}

/// A validated site dropdown value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    AllSites,
    Site(String),
}

impl SiteSelection {
    /// The dropdown value this selection corresponds to.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::AllSites => ALL_SITES,
            SiteSelection::Site(name) => name,
        }
    }
}

impl Default for SiteSelection {
    fn default() -> Self {
        SiteSelection::AllSites
    }
}

/// The complete set of dropdown options: the sentinel followed by every loaded site.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    options: Vec<String>,
}

impl SiteOptions {
    pub fn from_dataset(dataset: &LaunchDataset) -> Self {
        let mut options = Vec::with_capacity(dataset.sites().len() + 1);
        options.push(ALL_SITES.to_string());
        options.extend(dataset.sites().iter().cloned());
        Self { options }
    }

    /// Dropdown options in display order, sentinel first.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Map a raw dropdown value onto the enumerated domain.
    pub fn parse(&self, raw: &str) -> Result<SiteSelection, SelectionError> {
        if raw == ALL_SITES {
            return Ok(SiteSelection::AllSites);
        }
        self.options[1..]
            .iter()
            .find(|site| site.as_str() == raw)
            .map(|site| SiteSelection::Site(site.clone()))
            .ok_or_else(|| SelectionError::UnknownSite(raw.to_string()))
    }
}

/// Inclusive payload mass interval in kilograms.
///
/// `low > high` is allowed and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Build from the slider's `[low, high]` value.
    pub fn from_slider(value: &[f64]) -> Result<Self, SelectionError> {
        match value {
            [low, high] if low.is_finite() && high.is_finite() => Ok(Self::new(*low, *high)),
            _ => Err(SelectionError::MalformedRange(value.to_vec())),
        }
    }

    /// Full range of the loaded dataset, the slider's initial value.
    pub fn of_dataset(dataset: &LaunchDataset) -> Self {
        Self::new(dataset.min_payload(), dataset.max_payload())
    }
}
