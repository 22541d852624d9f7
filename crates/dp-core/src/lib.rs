//! Core functionality for the scatter plot helper
//!
//! This crate owns the per-session widget state that the host application
//! keeps between renders, and the key builder used to address it.

pub mod keys;
pub mod state;

// Re-export commonly used types
pub use keys::SessionKey;
pub use state::{SessionState, StateError, WidgetValue};
