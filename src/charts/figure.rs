//! Figure Model
//! Serializable chart specification in Plotly's JSON figure format
//! (`{"data": [...], "layout": {...}}`), handed unchanged to `Plotly.react`.

use serde::Serialize;

/// Color palette for slices and booster categories.
pub const PALETTE: [&str; 10] = [
    "#e74c3c", // Red
    "#2ecc71", // Green
    "#9b59b6", // Purple
    "#f39c12", // Orange
    "#1abc9c", // Teal
    "#e91e63", // Pink
    "#00bcd4", // Cyan
    "#ff5722", // Deep Orange
    "#795548", // Brown
    "#607d8b", // Blue Grey
];

/// Get palette color for the n-th series.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// A complete, renderable chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            layout: Layout {
                title: Title::new(title),
                ..Default::default()
            },
        }
    }

    pub fn with_trace(mut self, trace: Trace) -> Self {
        self.data.push(trace);
        self
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(PieTrace),
    Scatter(ScatterTrace),
}

/// Proportion chart: one slice per label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub marker: PieMarker,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieMarker {
    pub colors: Vec<String>,
}

/// One colour group of a scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub name: String,
    pub legendgroup: String,
    pub mode: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<i64>,
    pub marker: ScatterMarker,
    pub showlegend: bool,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterMarker {
    pub color: String,
    pub symbol: &'static str,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
    pub tracegroupgap: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title::new(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pie_serializes_as_plotly_trace() {
        let fig = Figure::new("Outcomes").with_trace(Trace::Pie(PieTrace {
            labels: vec!["Failure".into(), "Success".into()],
            values: vec![3, 0],
            marker: PieMarker {
                colors: vec![palette_color(0).into(), palette_color(1).into()],
            },
            hovertemplate: "name=%{label}<br>class=%{value}<extra></extra>".into(),
        }));

        let value = serde_json::to_value(&fig).unwrap();
        assert_eq!(value["data"][0]["type"], "pie");
        assert_eq!(value["data"][0]["values"], json!([3, 0]));
        assert_eq!(value["layout"]["title"]["text"], "Outcomes");
        assert!(value["layout"].get("xaxis").is_none());
    }

    #[test]
    fn empty_figure_still_has_layout() {
        let value = serde_json::to_value(Figure::new("Nothing")).unwrap();
        assert_eq!(value["data"], json!([]));
        assert_eq!(value["layout"]["title"]["text"], "Nothing");
    }

    #[test]
    fn palette_wraps_around() {
        assert_eq!(palette_color(0), palette_color(PALETTE.len()));
    }
}
