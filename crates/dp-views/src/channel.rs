//! Data-to-visual channel bindings

use dp_core::{SessionKey, SessionState};
use dp_data::Dataset;
use serde::{Deserialize, Serialize};

use crate::{Result, ViewError};

/// One column bound to a visual role, with an optional log transform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    #[serde(default)]
    pub log: bool,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            log: false,
        }
    }

    /// A channel with the log transform switched on
    pub fn log(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            log: true,
        }
    }

    /// Resolve the channel for role `label` from the session state.
    ///
    /// Candidates are `columns`, or every dataset column when `None`. The
    /// stored `{label}_channel` choice wins, then `default`, then the first
    /// candidate. The chosen column is written back to the state.
    ///
    /// A log flag left over from a non-numeric column is cleared, and the
    /// returned channel only carries `log` when the column is numeric.
    pub fn select(
        dataset: &Dataset,
        state: &mut SessionState,
        label: &str,
        columns: Option<&[String]>,
        default: Option<&str>,
    ) -> Result<Self> {
        let candidates = match columns {
            Some(columns) => columns.to_vec(),
            None => dataset.column_names(),
        };
        if candidates.is_empty() {
            return Err(ViewError::NoCandidateColumns {
                role: label.to_string(),
            });
        }

        let channel_key = SessionKey::channel(label);
        let log_key = SessionKey::log(label);

        if let Some(previous) = state.text(&channel_key) {
            if dataset.has_column(previous) && !dataset.kind(previous)?.is_numeric() {
                state.set_flag(log_key.clone(), false);
            }
        }

        let requested = state
            .text(&channel_key)
            .map(str::to_string)
            .or_else(|| default.map(str::to_string));
        let name = match requested {
            Some(name) if candidates.contains(&name) => name,
            Some(name) => {
                tracing::warn!(
                    "Column '{}' is not available for the {} channel, using '{}'",
                    name,
                    label,
                    candidates[0]
                );
                candidates[0].clone()
            }
            None => candidates[0].clone(),
        };

        let log = Self::log_enabled(dataset, &name)? && state.flag(&log_key).unwrap_or(false);
        state.set_text(channel_key, name.clone());

        tracing::debug!("Selected {} channel: '{}' (log: {})", label, name, log);
        Ok(Self { name, log })
    }

    /// Whether the log control is available for a column
    pub fn log_enabled(dataset: &Dataset, column: &str) -> Result<bool> {
        Ok(dataset.kind(column)?.supports_log())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::planets;

    #[test]
    fn test_first_candidate_by_default() {
        let data = planets();
        let mut state = SessionState::new();

        let channel = Channel::select(&data, &mut state, "x", None, None).unwrap();
        assert_eq!(channel, Channel::new("pl_name"));
        assert_eq!(state.text("x_channel"), Some("pl_name"));
    }

    #[test]
    fn test_default_then_stored_choice() {
        let data = planets();
        let mut state = SessionState::new();

        let channel = Channel::select(&data, &mut state, "y", None, Some("mass")).unwrap();
        assert_eq!(channel.name, "mass");

        state.set_text("y_channel", "radius");
        let channel = Channel::select(&data, &mut state, "y", None, Some("mass")).unwrap();
        assert_eq!(channel.name, "radius");
    }

    #[test]
    fn test_unknown_choice_falls_back() {
        let data = planets();
        let mut state = SessionState::new();
        state.set_text("s_channel", "host");

        let numeric = data.numeric_columns();
        let channel = Channel::select(&data, &mut state, "s", Some(&numeric), None).unwrap();
        assert_eq!(channel.name, numeric[0]);
        assert_eq!(state.text("s_channel"), Some(numeric[0].as_str()));
    }

    #[test]
    fn test_log_flag_requires_numeric_column() {
        let data = planets();
        let mut state = SessionState::new();
        state.set_text("x_channel", "mass");
        state.set_flag("log_x", true);

        let channel = Channel::select(&data, &mut state, "x", None, None).unwrap();
        assert!(channel.log);

        state.set_text("x_channel", "host");
        let channel = Channel::select(&data, &mut state, "x", None, None).unwrap();
        assert!(!channel.log);
        assert_eq!(state.flag("log_x"), Some(false));
    }

    #[test]
    fn test_stale_log_flag_is_cleared_before_switching_back() {
        let data = planets();
        let mut state = SessionState::new();
        state.set_text("c_channel", "host");
        state.set_flag("log_c", true);

        Channel::select(&data, &mut state, "c", None, None).unwrap();
        state.set_text("c_channel", "mass");
        let channel = Channel::select(&data, &mut state, "c", None, None).unwrap();
        assert!(!channel.log);
    }

    #[test]
    fn test_boolean_columns_have_no_log_control() {
        let data = planets();
        assert!(!Channel::log_enabled(&data, "habitable").unwrap());
        assert!(Channel::log_enabled(&data, "mass").unwrap());
    }

    #[test]
    fn test_no_candidates_is_an_error() {
        let data = planets();
        let mut state = SessionState::new();
        let result = Channel::select(&data, &mut state, "s", Some(&[][..]), None);
        assert!(matches!(result, Err(ViewError::NoCandidateColumns { role }) if role == "s"));
    }
}
