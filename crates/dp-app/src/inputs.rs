//! Command-line inputs applied as user choices

use clap::Parser;
use dp_core::{SessionKey, SessionState};
use std::path::PathBuf;
use std::sync::Arc;

use dp_views::{LabelFormat, PlotDefaults};

#[derive(Parser, Debug)]
#[command(name = "dataplot")]
#[command(about = "Build a styled scatter plot figure from a CSV file", long_about = None)]
pub struct Args {
    /// CSV file to plot
    pub input: PathBuf,

    /// Session settings to start from (JSON)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Write the resolved settings here after building the figure
    #[arg(long)]
    pub save_settings: Option<PathBuf>,

    /// Write the figure JSON here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the columns and their types, then exit
    #[arg(long)]
    pub list_columns: bool,

    /// Print the style templates and color maps, then exit
    #[arg(long)]
    pub list_presets: bool,

    /// X axis column
    #[arg(long)]
    pub x: Option<String>,
    /// Y axis column
    #[arg(long)]
    pub y: Option<String>,
    /// Marker size column
    #[arg(long)]
    pub size: Option<String>,
    /// Marker color column
    #[arg(long)]
    pub color: Option<String>,

    #[arg(long, overrides_with = "no_log_x")]
    pub log_x: bool,
    #[arg(long, overrides_with = "no_log_y")]
    pub log_y: bool,
    #[arg(long, overrides_with = "no_log_size")]
    pub log_size: bool,
    #[arg(long, overrides_with = "no_log_color")]
    pub log_color: bool,

    /// Clear a log scale stored in the settings file
    #[arg(long, overrides_with = "log_x")]
    pub no_log_x: bool,
    #[arg(long, overrides_with = "log_y")]
    pub no_log_y: bool,
    #[arg(long, overrides_with = "log_size")]
    pub no_log_size: bool,
    #[arg(long, overrides_with = "log_color")]
    pub no_log_color: bool,

    /// Column that decides draw order
    #[arg(long)]
    pub z: Option<String>,
    /// Draw in descending z order
    #[arg(long)]
    pub z_reverse: bool,

    /// Marker opacity in percent (1-100)
    #[arg(long)]
    pub opacity: Option<f64>,

    /// Style template name
    #[arg(long)]
    pub template: Option<String>,

    /// Color map name
    #[arg(long)]
    pub colormap: Option<String>,

    /// Keep the color map in its listed order (it is reversed by default)
    #[arg(long)]
    pub no_reverse_colormap: bool,

    /// Grid lines: none, both, x or y
    #[arg(long)]
    pub grid: Option<String>,

    #[arg(long)]
    pub width: Option<u32>,
    #[arg(long)]
    pub height: Option<u32>,

    /// Column used as the hover title
    #[arg(long)]
    pub title_col: Option<String>,

    /// Extra columns shown on hover
    #[arg(long, num_args = 1..)]
    pub hover: Vec<String>,

    /// Turn column names like `pl_orbper` into `Pl orbper` in axis titles
    #[arg(long)]
    pub pretty_labels: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Record the command-line choices in the session state, as if the
    /// user had made them in the widgets. Options left out keep whatever
    /// the state already holds.
    pub fn apply(&self, state: &mut SessionState) {
        let channels = [
            ("x", &self.x, self.log_x, self.no_log_x),
            ("y", &self.y, self.log_y, self.no_log_y),
            ("s", &self.size, self.log_size, self.no_log_size),
            ("c", &self.color, self.log_color, self.no_log_color),
        ];
        for (label, column, log, no_log) in channels {
            if let Some(column) = column {
                state.set_text(SessionKey::channel(label), column.clone());
            }
            if log {
                state.set_flag(SessionKey::log(label), true);
            } else if no_log {
                state.set_flag(SessionKey::log(label), false);
            }
        }

        if let Some(z) = &self.z {
            state.set_text(SessionKey::Z_ORDER, z.clone());
        }
        if self.z_reverse {
            state.set_flag(SessionKey::Z_REVERSE, true);
        }
        if let Some(opacity) = self.opacity {
            state.set_number(SessionKey::OPACITY, opacity);
        }
        if let Some(template) = &self.template {
            state.set_text(SessionKey::STYLE_TEMPLATE, template.clone());
        }
        if let Some(colormap) = &self.colormap {
            state.set_text(SessionKey::COLORMAP, colormap.clone());
        }
        if self.no_reverse_colormap {
            state.set_flag(SessionKey::COLORMAP_REVERSED, false);
        }
        if let Some(grid) = &self.grid {
            state.set_text(SessionKey::GRIDLINES, grid.clone());
        }
        if let Some(width) = self.width {
            state.set_number(SessionKey::WIDTH, f64::from(width));
        }
        if let Some(height) = self.height {
            state.set_number(SessionKey::HEIGHT, f64::from(height));
        }
        if !self.hover.is_empty() {
            state.set_list(SessionKey::HOVER_COLS, self.hover.clone());
        }
    }

    /// Host defaults for building the configuration
    pub fn defaults(&self) -> PlotDefaults {
        PlotDefaults {
            label_format: self.pretty_labels.then(pretty_label),
            title_col: self.title_col.clone(),
            ..PlotDefaults::default()
        }
    }
}

fn pretty_label() -> LabelFormat {
    Arc::new(|name: &str| {
        let spaced = name.replace('_', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    })
}
