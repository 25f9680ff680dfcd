//! Callback Router
//! Associates each output region of the page with a pure function of its
//! declared inputs. Raw selector values are validated here before a view runs.

use crate::charts::{Figure, LaunchCharts};
use crate::data::{
    LaunchDataset, PayloadRange, ProcessorError, SelectionError, SiteOptions, SiteSelection,
};
use crate::web::layout::{PAYLOAD_SLIDER, PIE_CHART, SCATTER_CHART, SITE_DROPDOWN};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CallbackError {
    #[error("No callback is registered for output '{0}'")]
    UnknownOutput(String),
    #[error("Callback for '{output}' requires input '{input}'")]
    MissingInput { output: String, input: &'static str },
    #[error("Input '{input}' has the wrong shape: expected {expected}")]
    WrongType {
        input: &'static str,
        expected: &'static str,
    },
    #[error(transparent)]
    InvalidSelection(#[from] SelectionError),
    #[error("Failed to compute view: {0}")]
    View(#[from] ProcessorError),
}

/// Read-only data every view function sees.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub dataset: LaunchDataset,
    pub sites: SiteOptions,
}

impl ViewContext {
    pub fn new(dataset: LaunchDataset) -> Self {
        let sites = SiteOptions::from_dataset(&dataset);
        Self { dataset, sites }
    }
}

/// Input values of one change event, keyed by component id.
pub struct InputValues<'a> {
    values: &'a Map<String, Value>,
}

impl<'a> InputValues<'a> {
    pub fn new(values: &'a Map<String, Value>) -> Self {
        Self { values }
    }

    /// The site dropdown value, mapped onto the configured options.
    pub fn site(&self, sites: &SiteOptions) -> Result<SiteSelection, CallbackError> {
        let raw = self
            .values
            .get(SITE_DROPDOWN)
            .and_then(Value::as_str)
            .ok_or(CallbackError::WrongType {
                input: SITE_DROPDOWN,
                expected: "a string",
            })?;
        Ok(sites.parse(raw)?)
    }

    /// The payload slider value as an inclusive range.
    pub fn payload_range(&self) -> Result<PayloadRange, CallbackError> {
        let bounds = self
            .values
            .get(PAYLOAD_SLIDER)
            .and_then(Value::as_array)
            .and_then(|raw| raw.iter().map(Value::as_f64).collect::<Option<Vec<f64>>>())
            .ok_or(CallbackError::WrongType {
                input: PAYLOAD_SLIDER,
                expected: "an array of numbers",
            })?;
        Ok(PayloadRange::from_slider(&bounds)?)
    }
}

type ViewFn = fn(&ViewContext, &InputValues<'_>) -> Result<Figure, CallbackError>;

/// One output region and the inputs it depends on.
pub struct Callback {
    pub output: &'static str,
    pub inputs: &'static [&'static str],
    view: ViewFn,
}

/// Dependency entry as published to the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dependency {
    pub output: &'static str,
    pub inputs: &'static [&'static str],
}

pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    /// The dashboard's two callbacks: the pie on the dropdown, the scatter on
    /// the dropdown and the slider.
    pub fn dashboard() -> Self {
        Self {
            callbacks: vec![
                Callback {
                    output: PIE_CHART,
                    inputs: &[SITE_DROPDOWN],
                    view: update_pie_chart,
                },
                Callback {
                    output: SCATTER_CHART,
                    inputs: &[SITE_DROPDOWN, PAYLOAD_SLIDER],
                    view: update_scatter_chart,
                },
            ],
        }
    }

    pub fn dependencies(&self) -> Vec<Dependency> {
        self.callbacks
            .iter()
            .map(|cb| Dependency {
                output: cb.output,
                inputs: cb.inputs,
            })
            .collect()
    }

    /// Run the callback for `output` against one change event.
    pub fn dispatch(
        &self,
        ctx: &ViewContext,
        output: &str,
        inputs: &Map<String, Value>,
    ) -> Result<Figure, CallbackError> {
        let callback = self
            .callbacks
            .iter()
            .find(|cb| cb.output == output)
            .ok_or_else(|| CallbackError::UnknownOutput(output.to_string()))?;

        if let Some(missing) = callback.inputs.iter().find(|id| !inputs.contains_key(**id)) {
            return Err(CallbackError::MissingInput {
                output: output.to_string(),
                input: *missing,
            });
        }

        (callback.view)(ctx, &InputValues::new(inputs))
    }
}

fn update_pie_chart(ctx: &ViewContext, inputs: &InputValues<'_>) -> Result<Figure, CallbackError> {
    let site = inputs.site(&ctx.sites)?;
    Ok(LaunchCharts::outcome_pie(&ctx.dataset, &site)?)
}

fn update_scatter_chart(
    ctx: &ViewContext,
    inputs: &InputValues<'_>,
) -> Result<Figure, CallbackError> {
    let site = inputs.site(&ctx.sites)?;
    let range = inputs.payload_range()?;
    tracing::debug!(site = site.label(), low = range.low, high = range.high, "scatter update");
    Ok(LaunchCharts::payload_scatter(&ctx.dataset, &site, range)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_dataset;
    use serde_json::json;

    fn inputs(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("inputs must be an object"),
        }
    }

    #[test]
    fn publishes_both_dependencies() {
        let deps = CallbackRegistry::dashboard().dependencies();
        assert_eq!(
            deps,
            vec![
                Dependency {
                    output: PIE_CHART,
                    inputs: &[SITE_DROPDOWN],
                },
                Dependency {
                    output: SCATTER_CHART,
                    inputs: &[SITE_DROPDOWN, PAYLOAD_SLIDER],
                },
            ]
        );
    }

    #[test]
    fn dispatches_to_the_matching_view() {
        let ctx = ViewContext::new(sample_dataset());
        let registry = CallbackRegistry::dashboard();
        let event = inputs(json!({
            "site-dropdown": "All Sites",
            "payload-slider": [0, 10000],
        }));

        let pie = registry.dispatch(&ctx, PIE_CHART, &event).unwrap();
        assert_eq!(pie.title(), "Total Successes for All Launch Sites");

        let scatter = registry.dispatch(&ctx, SCATTER_CHART, &event).unwrap();
        assert_eq!(
            scatter.title(),
            "Correlation between Payload Mass (Kg) and Launch Outcome"
        );
    }

    #[test]
    fn rejects_unknown_output() {
        let ctx = ViewContext::new(sample_dataset());
        let err = CallbackRegistry::dashboard()
            .dispatch(&ctx, "nope", &Map::new())
            .unwrap_err();
        assert!(matches!(err, CallbackError::UnknownOutput(id) if id == "nope"));
    }

    #[test]
    fn rejects_missing_input() {
        let ctx = ViewContext::new(sample_dataset());
        let event = inputs(json!({ "site-dropdown": "All Sites" }));
        let err = CallbackRegistry::dashboard()
            .dispatch(&ctx, SCATTER_CHART, &event)
            .unwrap_err();
        assert!(matches!(
            err,
            CallbackError::MissingInput { input: PAYLOAD_SLIDER, .. }
        ));
    }

    #[test]
    fn rejects_values_outside_the_domain() {
        let ctx = ViewContext::new(sample_dataset());
        let registry = CallbackRegistry::dashboard();

        let unknown_site = inputs(json!({ "site-dropdown": "Boca Chica" }));
        assert!(matches!(
            registry.dispatch(&ctx, PIE_CHART, &unknown_site),
            Err(CallbackError::InvalidSelection(SelectionError::UnknownSite(_)))
        ));

        let bad_range = inputs(json!({
            "site-dropdown": "All Sites",
            "payload-slider": [1000],
        }));
        assert!(matches!(
            registry.dispatch(&ctx, SCATTER_CHART, &bad_range),
            Err(CallbackError::InvalidSelection(SelectionError::MalformedRange(_)))
        ));

        let not_numbers = inputs(json!({
            "site-dropdown": "All Sites",
            "payload-slider": ["low", "high"],
        }));
        assert!(matches!(
            registry.dispatch(&ctx, SCATTER_CHART, &not_numbers),
            Err(CallbackError::WrongType { .. })
        ));
    }
}
