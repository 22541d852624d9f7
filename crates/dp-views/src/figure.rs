//! Plotly figure description
//!
//! The figure is plain data. Its JSON form follows the Plotly figure schema
//! (`{"data": [...], "layout": {...}}`) so the host plotting library can
//! render it directly.

use serde::Serialize;
use serde_json::Value;

use crate::Result;

/// A chart with one scatter trace
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<ScatterTrace>,
    pub layout: Value,
}

impl Figure {
    /// The single scatter trace
    pub fn trace(&self) -> Option<&ScatterTrace> {
        self.data.first()
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Scatter trace in Plotly's `scatter` schema
#[derive(Debug, Clone, Serialize)]
pub struct ScatterTrace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub x: Vec<Value>,
    pub y: Vec<Value>,
    pub mode: &'static str,
    /// Marker properties after style overrides were merged in
    pub marker: Value,
    pub hoverinfo: &'static str,
    pub hovertemplate: String,
    pub customdata: Vec<Vec<Value>>,
    pub name: String,
}

impl ScatterTrace {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Base marker, before template overrides
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub size: Vec<f64>,
    pub color: Vec<Value>,
    /// `[fraction, color]` pairs
    pub colorscale: Vec<(f64, String)>,
    pub opacity: f64,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Linear,
    Log,
}

/// Axis settings a plot configuration controls
#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    /// `None` leaves the type to the renderer
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
    pub title: Title,
    pub showgrid: bool,
}

impl Axis {
    pub fn new(title: String, log: bool, showgrid: bool) -> Self {
        Self {
            axis_type: log.then_some(AxisType::Log),
            title: Title { text: title },
            showgrid,
        }
    }
}

/// Base layout, before template overrides
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub xaxis: Axis,
    pub yaxis: Axis,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_axis_type_only_when_log() {
        let linear = serde_json::to_value(Axis::new("mass".into(), false, true)).unwrap();
        assert_eq!(linear, json!({"title": {"text": "mass"}, "showgrid": true}));

        let log = serde_json::to_value(Axis::new("mass".into(), true, false)).unwrap();
        assert_eq!(log["type"], "log");
        assert_eq!(log["showgrid"], false);
    }

    #[test]
    fn test_colorscale_serializes_as_pairs() {
        let marker = Marker {
            size: vec![4.0],
            color: vec![json!(1)],
            colorscale: vec![(0.0, "#000000".into()), (1.0, "#ffffff".into())],
            opacity: 0.5,
            colorbar: ColorBar {
                title: Title { text: "c".into() },
            },
        };
        let value = serde_json::to_value(marker).unwrap();
        assert_eq!(value["colorscale"], json!([[0.0, "#000000"], [1.0, "#ffffff"]]));
        assert_eq!(value["colorbar"]["title"]["text"], "c");
    }
}
