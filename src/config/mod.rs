//! Engine defaults loading and management.
//!
//! This module provides functionality to load the engine defaults from a
//! YAML file: the values the attendance form returns to when reset, and
//! the template a freshly created day starts from.
//!
//! # Example
//!
//! ```no_run
//! use salary_adjuster::config::DefaultsLoader;
//!
//! let loader = DefaultsLoader::load("./config/defaults.yaml").unwrap();
//! println!("Default required hours: {}", loader.defaults().form.required_daily_hours);
//! ```

mod loader;
mod types;

pub use loader::DefaultsLoader;
pub use types::{DayDefaults, EngineDefaults, FormDefaults};
