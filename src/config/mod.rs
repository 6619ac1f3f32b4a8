//! Configuration management module
//!
//! Loads the optional settings file from `<data dir>/config.json`. The
//! simulator only reads it; missing or broken files fall back to defaults.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{AppConfig, CameraSettings, ThermostatSettings};
