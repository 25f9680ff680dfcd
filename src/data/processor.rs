//! Data Processor Module
//! Filtering and aggregation over the launch record table.
//! Every operation reads the shared frame and returns a fresh result.

use super::{PayloadRange, SiteSelection, BOOSTER_CATEGORY, CLASS, LAUNCH_SITE, PAYLOAD_MASS};
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Failure and success counts for one site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutcomeCounts {
    pub failure: u64,
    pub success: u64,
}

/// One launch as plotted on the payload/outcome scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterRow {
    pub payload: f64,
    pub class: i64,
    pub booster: String,
}

/// Stateless filter and aggregate operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Row predicate for a site selection. All sites matches every row.
    pub fn site_predicate(site: &SiteSelection) -> Expr {
        match site {
            SiteSelection::AllSites => lit(true),
            SiteSelection::Site(name) => col(LAUNCH_SITE).eq(lit(name.as_str())),
        }
    }

    /// Row predicate for an inclusive payload range. Both bounds apply to the same input.
    pub fn payload_predicate(range: PayloadRange) -> Expr {
        col(PAYLOAD_MASS)
            .gt_eq(lit(range.low))
            .and(col(PAYLOAD_MASS).lt_eq(lit(range.high)))
    }

    /// Filter DataFrame for a site selection.
    pub fn filter_site(df: &DataFrame, site: &SiteSelection) -> Result<DataFrame, ProcessorError> {
        let filtered = df
            .clone()
            .lazy()
            .filter(Self::site_predicate(site))
            .collect()?;
        Ok(filtered)
    }

    /// Rows matching both the site selection and the payload range.
    pub fn filter_rows(
        df: &DataFrame,
        site: &SiteSelection,
        range: PayloadRange,
    ) -> Result<DataFrame, ProcessorError> {
        let filtered = df
            .clone()
            .lazy()
            .filter(Self::site_predicate(site))
            .filter(Self::payload_predicate(range))
            .collect()?;
        Ok(filtered)
    }

    /// Success count per launch site, sites in first-appearance order.
    ///
    /// Class is 0/1, so summing it per site counts successes.
    pub fn successes_by_site(df: &DataFrame) -> Result<Vec<(String, u64)>, ProcessorError> {
        let grouped = df
            .clone()
            .lazy()
            .group_by_stable([col(LAUNCH_SITE)])
            .agg([col(CLASS).sum()])
            .collect()?;

        let sites = grouped.column(LAUNCH_SITE)?.as_materialized_series().str()?;
        let successes = grouped.column(CLASS)?.cast(&DataType::UInt64)?;
        let successes = successes.u64()?;

        let result = sites
            .into_iter()
            .zip(successes.into_iter())
            .filter_map(|(site, count)| Some((site?.to_string(), count.unwrap_or(0))))
            .collect();
        Ok(result)
    }

    /// Failure and success counts for a selection. An outcome that never
    /// occurs is reported as zero.
    pub fn outcome_counts(
        df: &DataFrame,
        site: &SiteSelection,
    ) -> Result<OutcomeCounts, ProcessorError> {
        let filtered = Self::filter_site(df, site)?;
        let mut counts = OutcomeCounts::default();

        for class in filtered.column(CLASS)?.i64()?.into_iter().flatten() {
            match class {
                0 => counts.failure += 1,
                1 => counts.success += 1,
                _ => {}
            }
        }

        Ok(counts)
    }

    /// Scatter points for a site selection and payload range, in row order.
    pub fn scatter_rows(
        df: &DataFrame,
        site: &SiteSelection,
        range: PayloadRange,
    ) -> Result<Vec<ScatterRow>, ProcessorError> {
        let filtered = Self::filter_rows(df, site, range)?;

        let payload = filtered.column(PAYLOAD_MASS)?.f64()?;
        let class = filtered.column(CLASS)?.i64()?;
        let booster = filtered
            .column(BOOSTER_CATEGORY)?
            .as_materialized_series()
            .str()?;

        let mut rows = Vec::with_capacity(filtered.height());
        for i in 0..filtered.height() {
            if let (Some(p), Some(c), Some(b)) = (payload.get(i), class.get(i), booster.get(i)) {
                rows.push(ScatterRow {
                    payload: p,
                    class: c,
                    booster: b.to_string(),
                });
            }
        }

        Ok(rows)
    }
}
