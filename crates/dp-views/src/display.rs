//! Display options and image export

use serde::Serialize;

use crate::{Figure, Result, ScatterPlot, ViewError};

/// Scale factor for every exported raster image
pub const EXPORT_SCALE: u32 = 5;

/// Theme name under which the host applies its own styling
pub const HOST_THEME: &str = "streamlit";

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
    Webp,
    Svg,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Webp => "webp",
            ExportFormat::Svg => "svg",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Webp => "image/webp",
            ExportFormat::Svg => "image/svg+xml",
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

/// Options passed alongside the figure when the host displays it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayConfig {
    /// Host theme; `None` keeps the figure's own styling
    pub theme: Option<&'static str>,
    pub config: PlotConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotConfig {
    #[serde(rename = "toImageButtonOptions")]
    pub to_image_button_options: ImageButtonOptions,
}

/// Settings of the chart's "download as image" button
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageButtonOptions {
    pub format: ExportFormat,
    pub filename: String,
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

impl ScatterPlot {
    /// Display options: the basic template follows the host theme, every
    /// other template keeps its own look
    pub fn display_config(&self, filename: &str) -> DisplayConfig {
        let theme = (self.template == dp_templates::templates::DEFAULT_TEMPLATE).then_some(HOST_THEME);
        DisplayConfig {
            theme,
            config: PlotConfig {
                to_image_button_options: ImageButtonOptions {
                    format: ExportFormat::Png,
                    filename: filename.to_string(),
                    width: self.width,
                    height: self.height,
                    scale: EXPORT_SCALE,
                },
            },
        }
    }
}

/// Raster export provided by the host plotting library
pub trait ImageRenderer {
    /// Render the figure to encoded image bytes
    fn render(&self, figure: &Figure, format: ExportFormat, scale: u32) -> Result<Vec<u8>>;
}

/// A rendered image ready to hand to the user
#[derive(Debug, Clone, PartialEq)]
pub struct Download {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Render the figure at [`EXPORT_SCALE`] for download
pub fn download(
    figure: &Figure,
    renderer: &dyn ImageRenderer,
    filename: &str,
    format: ExportFormat,
) -> Result<Download> {
    let bytes = renderer.render(figure, format, EXPORT_SCALE)?;
    if bytes.is_empty() {
        return Err(ViewError::Export(format!("renderer returned no data for {filename}")));
    }

    tracing::debug!("Rendered {} ({} bytes)", filename, bytes.len());
    Ok(Download {
        file_name: filename.to_string(),
        mime: format.mime(),
        bytes,
    })
}
