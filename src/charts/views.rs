//! Chart Views
//! The two dashboard views. Each is a pure function of the dataset and the
//! current selector values, recomputed in full on every change.

use crate::charts::figure::{
    palette_color, Axis, Figure, Legend, PieMarker, PieTrace, ScatterMarker, ScatterTrace, Title,
    Trace,
};
use crate::data::{
    DataProcessor, LaunchDataset, PayloadRange, ProcessorError, SiteSelection, BOOSTER_CATEGORY,
    CLASS, LAUNCH_SITE, PAYLOAD_MASS,
};

pub const ALL_SITES_PIE_TITLE: &str = "Total Successes for All Launch Sites";
pub const SCATTER_TITLE: &str = "Correlation between Payload Mass (Kg) and Launch Outcome";

/// Builds chart specifications from the launch dataset.
pub struct LaunchCharts;

impl LaunchCharts {
    /// Outcome distribution pie.
    ///
    /// All sites: one slice per site valued at its success count.
    /// Single site: a "Failure" and a "Success" slice; a zero-valued slice is kept.
    pub fn outcome_pie(
        dataset: &LaunchDataset,
        site: &SiteSelection,
    ) -> Result<Figure, ProcessorError> {
        let figure = match site {
            SiteSelection::AllSites => {
                let per_site = DataProcessor::successes_by_site(dataset.frame())?;
                let colors = (0..per_site.len())
                    .map(|i| palette_color(i).to_string())
                    .collect();
                let (labels, values) = per_site.into_iter().unzip();

                Figure::new(ALL_SITES_PIE_TITLE).with_trace(Trace::Pie(PieTrace {
                    labels,
                    values,
                    marker: PieMarker { colors },
                    hovertemplate: format!("{LAUNCH_SITE}=%{{label}}<br>Total=%{{value}}<extra></extra>"),
                }))
            }
            SiteSelection::Site(name) => {
                let counts = DataProcessor::outcome_counts(dataset.frame(), site)?;

                Figure::new(format!("Total Success Launches for {name}")).with_trace(Trace::Pie(
                    PieTrace {
                        labels: vec!["Failure".to_string(), "Success".to_string()],
                        values: vec![counts.failure, counts.success],
                        marker: PieMarker {
                            colors: vec![palette_color(0).to_string(), palette_color(1).to_string()],
                        },
                        hovertemplate: format!("name=%{{label}}<br>{CLASS}=%{{value}}<extra></extra>"),
                    },
                ))
            }
        };

        Ok(figure)
    }

    /// Payload vs. outcome scatter, one coloured trace per booster version category.
    ///
    /// An empty selection yields a figure with no traces.
    pub fn payload_scatter(
        dataset: &LaunchDataset,
        site: &SiteSelection,
        range: PayloadRange,
    ) -> Result<Figure, ProcessorError> {
        let rows = DataProcessor::scatter_rows(dataset.frame(), site, range)?;

        // Group by booster category, keeping first-appearance order for colours.
        let mut groups: Vec<ScatterTrace> = Vec::new();
        for row in rows {
            let index = match groups.iter().position(|g| g.name == row.booster) {
                Some(index) => index,
                None => {
                    groups.push(Self::booster_trace(&row.booster, groups.len()));
                    groups.len() - 1
                }
            };
            groups[index].x.push(row.payload);
            groups[index].y.push(row.class);
        }

        let mut figure = Figure::new(SCATTER_TITLE);
        figure.layout.legend = Some(Legend {
            title: Title::new(BOOSTER_CATEGORY),
            tracegroupgap: 0,
        });
        figure.layout.xaxis = Some(Axis::titled(PAYLOAD_MASS));
        figure.layout.yaxis = Some(Axis::titled(CLASS));
        figure.data = groups.into_iter().map(Trace::Scatter).collect();

        Ok(figure)
    }

    fn booster_trace(booster: &str, index: usize) -> ScatterTrace {
        ScatterTrace {
            name: booster.to_string(),
            legendgroup: booster.to_string(),
            mode: "markers",
            x: Vec::new(),
            y: Vec::new(),
            marker: ScatterMarker {
                color: palette_color(index).to_string(),
                symbol: "circle",
            },
            showlegend: true,
            hovertemplate: format!(
                "{BOOSTER_CATEGORY}={booster}<br>{PAYLOAD_MASS}=%{{x}}<br>{CLASS}=%{{y}}<extra></extra>"
            ),
        }
    }
}
