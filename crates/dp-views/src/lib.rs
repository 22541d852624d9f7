//! Scatter plot configuration and figure construction
//!
//! A [`ScatterPlot`] binds dataset columns to the x, y, size and color
//! channels of a single scatter trace. [`ScatterPlot::from_inputs`] builds
//! one from the current [`dp_core::SessionState`], and
//! [`ScatterPlot::make_fig`] turns it plus a [`dp_data::Dataset`] into a
//! Plotly figure description.

pub mod channel;
pub mod display;
pub mod figure;
pub mod hover;
pub mod normalize;
pub mod scatter;

use dp_data::{ColumnKind, DataError};
use dp_templates::TemplateError;
use thiserror::Error;

pub use channel::Channel;
pub use display::{download, DisplayConfig, Download, ExportFormat, ImageRenderer, EXPORT_SCALE};
pub use figure::Figure;
pub use hover::HoverInfo;
pub use normalize::{normalize_color, normalize_size};
pub use scatter::{GridLines, LabelFormat, PlotDefaults, ScatterPlot};

/// Errors that can occur while configuring or building a plot
#[derive(Error, Debug)]
pub enum ViewError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("No candidate columns for the '{role}' channel")]
    NoCandidateColumns { role: String },

    #[error("Column '{column}' is {kind} and cannot drive the size channel")]
    NonNumericColumn { column: String, kind: ColumnKind },

    #[error("Invalid grid setting '{0}', expected one of \"\", both, x, y")]
    InvalidGrid(String),

    #[error("Opacity {0} is outside [0, 1]")]
    InvalidOpacity(f64),

    #[error("Invalid figure size {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image export failed: {0}")]
    Export(String),
}

pub type Result<T, E = ViewError> = std::result::Result<T, E>;

#[cfg(test)]
pub(crate) mod testing;
