//! Scatter plot configuration

use dp_core::{SessionKey, SessionState};
use dp_data::Dataset;
use dp_templates::colormaps::{self, ColorMap, DEFAULT_COLORMAP};
use dp_templates::templates::{self, DEFAULT_TEMPLATE};
use dp_templates::merge_json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::figure::{Axis, ColorBar, Figure, Layout, Marker, ScatterTrace, Title};
use crate::hover::{self, HoverInfo};
use crate::normalize::{normalize_color, normalize_size};
use crate::{Channel, Result, ViewError};

/// Label transform applied to column names in axis titles
pub type LabelFormat = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Opacity slider range and default, in percent
const OPACITY_PERCENT: (f64, f64, f64) = (1.0, 100.0, 85.0);
/// Width/height input range
const DIMENSION_RANGE: (f64, f64) = (200.0, 3000.0);
const DEFAULT_INPUT_WIDTH: u32 = 800;
const DEFAULT_INPUT_HEIGHT: u32 = 600;

/// Which axes draw grid lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridLines {
    #[serde(rename = "")]
    None,
    #[default]
    Both,
    X,
    Y,
}

impl GridLines {
    pub fn shows_x(self) -> bool {
        matches!(self, GridLines::Both | GridLines::X)
    }

    pub fn shows_y(self) -> bool {
        matches!(self, GridLines::Both | GridLines::Y)
    }

    /// The input value for this setting
    pub fn as_str(self) -> &'static str {
        match self {
            GridLines::None => "",
            GridLines::Both => "both",
            GridLines::X => "x",
            GridLines::Y => "y",
        }
    }
}

impl FromStr for GridLines {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "none" => Ok(GridLines::None),
            "both" => Ok(GridLines::Both),
            "x" => Ok(GridLines::X),
            "y" => Ok(GridLines::Y),
            other => Err(ViewError::InvalidGrid(other.to_string())),
        }
    }
}

/// Defaults the host supplies when building a configuration from inputs
#[derive(Clone, Default)]
pub struct PlotDefaults {
    pub label_format: Option<LabelFormat>,
    pub default_x: Option<String>,
    pub default_y: Option<String>,
    pub default_s: Option<String>,
    pub default_c: Option<String>,
    /// Column shown as the hover title; the first plottable column if unset
    pub title_col: Option<String>,
}

/// Configuration of one scatter plot
#[derive(Clone)]
pub struct ScatterPlot {
    pub x: Channel,
    pub y: Channel,
    /// Marker size channel
    pub s: Channel,
    /// Marker color channel
    pub c: Channel,
    /// Column that decides draw order
    pub z: Option<String>,
    pub z_reverse: bool,
    pub opacity: f64,
    pub grid: GridLines,
    pub title_col: Option<String>,
    pub colormap: ColorMap,
    /// Key into the style template table
    pub template: String,
    pub width: u32,
    pub height: u32,
    pub format: Option<LabelFormat>,
    pub hover_cols: Option<Vec<String>>,
}

impl fmt::Debug for ScatterPlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScatterPlot")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("s", &self.s)
            .field("c", &self.c)
            .field("z", &self.z)
            .field("z_reverse", &self.z_reverse)
            .field("opacity", &self.opacity)
            .field("grid", &self.grid)
            .field("title_col", &self.title_col)
            .field("colormap", &self.colormap.name)
            .field("template", &self.template)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format.is_some())
            .field("hover_cols", &self.hover_cols)
            .finish()
    }
}

impl ScatterPlot {
    /// A configuration with default styling: fully opaque, both grids,
    /// the `burg` color map, the basic template and an 800x800 figure
    pub fn new(x: Channel, y: Channel, s: Channel, c: Channel) -> Result<Self> {
        Ok(Self {
            x,
            y,
            s,
            c,
            z: None,
            z_reverse: false,
            opacity: 1.0,
            grid: GridLines::Both,
            title_col: None,
            colormap: colormaps::get("burg")?.clone(),
            template: DEFAULT_TEMPLATE.to_string(),
            width: 800,
            height: 800,
            format: None,
            hover_cols: None,
        })
    }

    /// Build the configuration from the current session inputs.
    ///
    /// Only plottable columns are offered; size and color are limited to
    /// numeric ones. Missing inputs take their defaults and numeric inputs
    /// are clamped to their widget ranges.
    pub fn from_inputs(dataset: &Dataset, state: &mut SessionState, defaults: &PlotDefaults) -> Result<Self> {
        let plottable = dataset.plottable_columns();
        let data = dataset.select(&plottable)?;
        let numeric = data.numeric_columns();

        let x = Channel::select(&data, state, "x", None, defaults.default_x.as_deref())?;
        let y = Channel::select(&data, state, "y", None, defaults.default_y.as_deref())?;
        let s = Channel::select(&data, state, "s", Some(&numeric), defaults.default_s.as_deref())?;
        let c = Channel::select(&data, state, "c", Some(&numeric), defaults.default_c.as_deref())?;

        let (low, high, default) = OPACITY_PERCENT;
        let opacity = state
            .number(SessionKey::OPACITY)
            .unwrap_or(default)
            .clamp(low, high)
            .round()
            / 100.0;

        let z = match state.text(SessionKey::Z_ORDER).filter(|z| !z.is_empty()) {
            Some(z) if plottable.iter().any(|c| c == z) => Some(z.to_string()),
            Some(z) => {
                tracing::warn!("Ignoring z-order column '{}': not a plottable column", z);
                None
            }
            None => None,
        };
        let z_reverse = z.is_some() && state.flag(SessionKey::Z_REVERSE).unwrap_or(false);

        let colormap = colormaps::get(state.text(SessionKey::COLORMAP).unwrap_or(DEFAULT_COLORMAP))?;
        let colormap = if state.flag(SessionKey::COLORMAP_REVERSED).unwrap_or(true) {
            colormap.reversed()
        } else {
            colormap.clone()
        };

        let template = state
            .text(SessionKey::STYLE_TEMPLATE)
            .unwrap_or(DEFAULT_TEMPLATE)
            .to_string();
        templates::get(&template)?;

        let grid = state
            .text(SessionKey::GRIDLINES)
            .unwrap_or(GridLines::default().as_str())
            .parse::<GridLines>()?;

        let width = dimension(state.number(SessionKey::WIDTH), DEFAULT_INPUT_WIDTH);
        let height = dimension(state.number(SessionKey::HEIGHT), DEFAULT_INPUT_HEIGHT);

        let hover_cols = state.list(SessionKey::HOVER_COLS).map(|cols| {
            cols.iter()
                .filter(|col| {
                    let known = data.has_column(col);
                    if !known {
                        tracing::warn!("Dropping unknown hover column '{}'", col);
                    }
                    known
                })
                .cloned()
                .collect::<Vec<_>>()
        });

        let title_col = defaults
            .title_col
            .clone()
            .or_else(|| plottable.first().cloned());

        Ok(Self {
            x,
            y,
            s,
            c,
            z,
            z_reverse,
            opacity,
            grid,
            title_col,
            colormap,
            template,
            width,
            height,
            format: defaults.label_format.clone(),
            hover_cols: hover_cols.or_else(|| Some(Vec::new())),
        })
    }

    /// Check the configuration's invariants
    pub fn validate(&self) -> Result<()> {
        templates::get(&self.template)?;
        self.colormap.validate()?;
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ViewError::InvalidOpacity(self.opacity));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ViewError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Axis or color bar label for a column
    pub fn label(&self, column: &str) -> String {
        match &self.format {
            Some(format) => format(column),
            None => column.to_string(),
        }
    }

    /// Hover columns in order: title, x, y, size, color, then the extra
    /// hover columns, without repeats
    pub fn hover_columns(&self, dataset: &Dataset) -> Vec<String> {
        let title = self
            .title_col
            .clone()
            .or_else(|| dataset.plottable_columns().into_iter().next())
            .unwrap_or_else(|| self.x.name.clone());

        let base = [
            title,
            self.x.name.clone(),
            self.y.name.clone(),
            self.s.name.clone(),
            self.c.name.clone(),
        ];
        let extra = self.hover_cols.iter().flatten().cloned();
        hover::remove_duplicates(base.into_iter().chain(extra))
    }

    /// Hover template and custom data for the dataset
    pub fn hover_info(&self, dataset: &Dataset) -> Result<HoverInfo> {
        hover::build(dataset, self.hover_columns(dataset), &self.x.name, &self.y.name)
    }

    /// Build the figure for a dataset
    pub fn make_fig(&self, dataset: &Dataset) -> Result<Figure> {
        self.validate()?;

        let data = match &self.z {
            Some(z) => dataset.sort_by(z, self.z_reverse)?,
            None => dataset.clone(),
        };

        let mut color_title = self.label(&self.c.name);
        if self.c.log {
            color_title.push_str(" (scaled)");
        }

        let hover = self.hover_info(&data)?;
        let template = templates::get(&self.template)?;

        let marker = Marker {
            size: normalize_size(&data, &self.s)?,
            color: normalize_color(&data, &self.c)?,
            colorscale: self.colormap.stops(),
            opacity: self.opacity,
            colorbar: ColorBar {
                title: Title { text: color_title },
            },
        };
        let mut marker = serde_json::to_value(marker)?;
        merge_json(&mut marker, &template.marker_settings);

        let layout = Layout {
            xaxis: Axis::new(self.label(&self.x.name), self.x.log, self.grid.shows_x()),
            yaxis: Axis::new(self.label(&self.y.name), self.y.log, self.grid.shows_y()),
        };
        let mut layout = serde_json::to_value(layout)?;
        merge_json(&mut layout, &template.layout);
        merge_json(&mut layout, &json!({"width": self.width, "height": self.height}));

        let trace = ScatterTrace {
            trace_type: "scatter",
            x: data.json_values(&self.x.name)?,
            y: data.json_values(&self.y.name)?,
            mode: "markers+text",
            marker,
            hoverinfo: "text",
            hovertemplate: hover.template,
            customdata: hover.rows,
            name: String::new(),
        };

        tracing::info!(
            "Built scatter figure: {} points, x='{}', y='{}', size='{}', color='{}', template='{}'",
            trace.len(),
            self.x.name,
            self.y.name,
            self.s.name,
            self.c.name,
            self.template
        );
        Ok(Figure {
            data: vec![trace],
            layout,
        })
    }
}

/// Width/height input: clamped to the widget range, default when unset
fn dimension(value: Option<f64>, default: u32) -> u32 {
    let (low, high) = DIMENSION_RANGE;
    match value {
        Some(value) if value.is_finite() => value.clamp(low, high).round() as u32,
        _ => default,
    }
}
