//! Application state for the salary adjustment engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::DefaultsLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded engine defaults.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine defaults.
    defaults: Arc<DefaultsLoader>,
}

impl AppState {
    /// Creates a new application state with the given defaults loader.
    pub fn new(defaults: DefaultsLoader) -> Self {
        Self {
            defaults: Arc::new(defaults),
        }
    }

    /// Returns a reference to the defaults loader.
    pub fn defaults(&self) -> &DefaultsLoader {
        &self.defaults
    }
}
