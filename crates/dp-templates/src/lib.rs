//! Style presets for scatter plots
//!
//! This crate holds the static lookup tables a plot configuration picks
//! from: layout/marker style templates and the named color maps. Both are
//! read-only and shared by reference.

pub mod colormaps;
pub mod merge;
pub mod templates;

use thiserror::Error;

pub use colormaps::ColorMap;
pub use merge::merge_json;
pub use templates::StyleTemplate;

/// Errors raised when looking up or validating presets
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("Unknown style template '{0}'")]
    UnknownTemplate(String),

    #[error("Unknown color map '{0}'")]
    UnknownColorMap(String),

    #[error("Color map '{0}' has no colors")]
    EmptyColorMap(String),

    #[error("Color map '{name}' has an invalid color '{color}'")]
    InvalidColor { name: String, color: String },
}
