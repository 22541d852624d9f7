//! Explicit session state
//!
//! Widget choices are stored here between renders. The host application
//! owns one [`SessionState`] per user session and passes it by reference
//! into the selection functions. Keys are built with [`crate::SessionKey`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or saving session state
#[derive(Error, Debug)]
pub enum StateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid session state file: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single stored widget value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WidgetValue {
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

/// Key/value store of widget choices, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionState {
    values: IndexMap<String, WidgetValue>,
}

impl SessionState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Load state from a JSON file
    pub fn load(path: &Path) -> Result<Self, StateError> {
        let text = fs::read_to_string(path)?;
        let state: Self = serde_json::from_str(&text)?;
        tracing::debug!("Loaded {} session values from {}", state.len(), path.display());
        Ok(state)
    }

    /// Save state as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), StateError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn set(&mut self, key: impl Into<String>, value: WidgetValue) {
        self.values.insert(key.into(), value);
    }

    /// Text value, if the key holds one
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(WidgetValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Flag value; a missing or non-flag entry reads as `None`
    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(WidgetValue::Flag(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.values.get(key) {
            Some(WidgetValue::Number(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn list(&self, key: &str) -> Option<&[String]> {
        match self.values.get(key) {
            Some(WidgetValue::List(values)) => Some(values),
            _ => None,
        }
    }

    pub fn set_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, WidgetValue::Text(value.into()));
    }

    pub fn set_flag(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, WidgetValue::Flag(value));
    }

    pub fn set_number(&mut self, key: impl Into<String>, value: f64) {
        self.set(key, WidgetValue::Number(value));
    }

    pub fn set_list(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.set(key, WidgetValue::List(values));
    }

    /// Iterate over all stored entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WidgetValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SessionKey;

    #[test]
    fn test_typed_accessors() {
        let mut state = SessionState::new();
        state.set_text(SessionKey::channel("x"), "mass");
        state.set_flag(SessionKey::log("x"), true);
        state.set_number(SessionKey::OPACITY, 40.0);

        assert_eq!(state.text("x_channel"), Some("mass"));
        assert_eq!(state.flag("log_x"), Some(true));
        assert_eq!(state.number("opacity"), Some(40.0));

        // Wrong type reads as missing
        assert_eq!(state.flag("x_channel"), None);
        assert_eq!(state.text("missing"), None);
    }

    #[test]
    fn test_untagged_json() {
        let state: SessionState = serde_json::from_str(
            r#"{"x_channel": "mass", "log_x": true, "width": 900, "hover_cols": ["host"]}"#,
        )
        .unwrap();

        assert_eq!(state.text("x_channel"), Some("mass"));
        assert_eq!(state.flag("log_x"), Some(true));
        assert_eq!(state.number("width"), Some(900.0));
        assert_eq!(state.list("hover_cols"), Some(&["host".to_string()][..]));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut state = SessionState::new();
        state.set_text("style_template", "formal");
        state.set_list("hover_cols", vec!["a".into(), "b".into()]);
        state.save(&path).unwrap();

        let loaded = SessionState::load(&path).unwrap();
        assert_eq!(loaded, state);
        let keys: Vec<_> = loaded.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["style_template", "hover_cols"]);
    }
}
