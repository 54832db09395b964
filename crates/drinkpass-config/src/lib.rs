//! drinkpass-config
//!
//! Persistent user preferences: defaults for a new cruise session and
//! presentation settings. Owns the Config data structure plus disk helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{Config, CruiseDefaults, Theme};
