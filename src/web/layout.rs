//! Page Layout
//! Declarative component tree for the dashboard page, served as JSON and
//! rendered by the page script.

use crate::data::{PayloadRange, SiteOptions, SiteSelection};
use serde::Serialize;
use std::collections::BTreeMap;

pub const SITE_DROPDOWN: &str = "site-dropdown";
pub const PAYLOAD_SLIDER: &str = "payload-slider";
pub const PIE_CHART: &str = "success-pie-chart";
pub const SCATTER_CHART: &str = "success-payload-scatter-chart";

/// Slider bounds, independent of the loaded data.
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10000.0;
pub const SLIDER_STEP: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Component {
    Div {
        children: Vec<Component>,
    },
    H1 {
        text: String,
        style: Style,
    },
    P {
        text: String,
    },
    Br,
    Dropdown {
        id: &'static str,
        options: Vec<DropdownOption>,
        value: String,
        placeholder: &'static str,
        searchable: bool,
    },
    RangeSlider {
        id: &'static str,
        min: f64,
        max: f64,
        step: f64,
        value: [f64; 2],
        marks: BTreeMap<u32, &'static str>,
    },
    Graph {
        id: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub text_align: &'static str,
    pub color: &'static str,
    pub font_size: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Build the dashboard page: heading, site dropdown, pie chart, payload
/// slider and scatter chart, top to bottom.
pub fn dashboard_layout(title: &str, sites: &SiteOptions, initial: PayloadRange) -> Component {
    let options = sites
        .options()
        .iter()
        .map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        })
        .collect();

    let marks = BTreeMap::from([
        (0, "0 kg"),
        (2500, "2500"),
        (5000, "5000"),
        (7500, "7500"),
        (10000, "10000"),
    ]);

    Component::Div {
        children: vec![
            Component::H1 {
                text: title.to_string(),
                style: Style {
                    text_align: "center",
                    color: "#503D36",
                    font_size: "40px",
                },
            },
            Component::Dropdown {
                id: SITE_DROPDOWN,
                options,
                value: SiteSelection::default().label().to_string(),
                placeholder: "Select a Launch Site here",
                searchable: true,
            },
            Component::Br,
            Component::Div {
                children: vec![Component::Graph { id: PIE_CHART }],
            },
            Component::Br,
            Component::P {
                text: "Payload range (Kg):".to_string(),
            },
            Component::RangeSlider {
                id: PAYLOAD_SLIDER,
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                value: [initial.low, initial.high],
                marks,
            },
            Component::Div {
                children: vec![Component::Graph { id: SCATTER_CHART }],
            },
        ],
    }
}
