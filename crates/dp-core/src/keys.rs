//! Session key builder
//!
//! Every widget choice lives in [`crate::SessionState`] under a string key.
//! Keys are built here so the selection code and the host application agree
//! on the exact spelling.

use std::fmt::Display;

/// Session key builder that joins components with `_`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKey {
    components: Vec<String>,
}

impl SessionKey {
    /// Column chosen for the channel `label` (`{label}_channel`)
    pub const CHANNEL_SUFFIX: &'static str = "channel";
    /// Prefix of the log flag for the channel `label` (`log_{label}`)
    pub const LOG_PREFIX: &'static str = "log";

    pub const OPACITY: &'static str = "opacity";
    pub const Z_ORDER: &'static str = "z_order";
    pub const Z_REVERSE: &'static str = "z_reverse";
    pub const COLORMAP: &'static str = "colormap";
    pub const COLORMAP_REVERSED: &'static str = "colormap_reversed";
    pub const STYLE_TEMPLATE: &'static str = "style_template";
    pub const GRIDLINES: &'static str = "gridlines";
    pub const WIDTH: &'static str = "width";
    pub const HEIGHT: &'static str = "height";
    pub const HOVER_COLS: &'static str = "hover_cols";

    /// Create a new key builder
    pub fn new(base: impl Display) -> Self {
        Self {
            components: vec![base.to_string()],
        }
    }

    /// Add a component to the key
    pub fn with(mut self, component: impl Display) -> Self {
        self.components.push(component.to_string());
        self
    }

    /// Build the final key string
    pub fn build(&self) -> String {
        self.components.join("_")
    }

    /// Key holding the selected column of a channel
    pub fn channel(label: &str) -> String {
        Self::new(label).with(Self::CHANNEL_SUFFIX).build()
    }

    /// Key holding the log flag of a channel
    pub fn log(label: &str) -> String {
        Self::new(Self::LOG_PREFIX).with(label).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_builder() {
        let key = SessionKey::new("plot").with("x").with(3).build();
        assert_eq!(key, "plot_x_3");
    }

    #[test]
    fn test_channel_keys() {
        assert_eq!(SessionKey::channel("x"), "x_channel");
        assert_eq!(SessionKey::log("s"), "log_s");
    }
}
