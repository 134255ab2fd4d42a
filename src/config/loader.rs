//! Defaults loading functionality.
//!
//! This module provides the [`DefaultsLoader`] type for loading the
//! engine defaults from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineDefaults;

/// Loads and provides access to the engine defaults.
///
/// # File format
///
/// ```text
/// form:
///   monthly_salary: ""
///   working_days: ""
///   required_daily_hours: "8"
/// day:
///   start: ""
///   end: ""
///   worked: true
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_adjuster::config::DefaultsLoader;
///
/// let loader = DefaultsLoader::load("./config/defaults.yaml")?;
/// assert_eq!(loader.defaults().form.required_daily_hours, "8");
/// # Ok::<(), salary_adjuster::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DefaultsLoader {
    defaults: EngineDefaults,
}

impl DefaultsLoader {
    /// Loads the defaults from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the defaults file (e.g. "./config/defaults.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `DefaultsLoader` on success, or an error if the file is
    /// missing ([`EngineError::ConfigNotFound`]) or is not valid YAML for
    /// the expected structure ([`EngineError::ConfigParseError`]).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let defaults =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { defaults })
    }

    /// Returns the loaded defaults.
    pub fn defaults(&self) -> &EngineDefaults {
        &self.defaults
    }
}
