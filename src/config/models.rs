//! Configuration data models
//!
//! This module defines the data structures used for application configuration.

use crate::error::{Result, SmartHomeError, StringError};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::PathBuf;
use std::time::Duration;

/// Shortest allowed temperature refresh interval
pub const MIN_REFRESH_INTERVAL_MS: u64 = 500;
/// Longest allowed temperature refresh interval
pub const MAX_REFRESH_INTERVAL_MS: u64 = 60_000;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Simulated thermostat settings
    pub thermostat: ThermostatSettings,
    /// Simulated security camera settings
    pub camera: CameraSettings,
}

/// Simulated thermostat settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermostatSettings {
    /// Lower bound (inclusive) of sampled room temperatures in °C
    pub min_celsius: f64,
    /// Upper bound (exclusive) of sampled room temperatures in °C
    pub max_celsius: f64,
    /// Periodic temperature refresh interval in milliseconds (500-60000)
    pub refresh_interval_ms: u64,
}

/// Simulated security camera settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Image shown as the intruder snapshot, relative to the working directory
    pub snapshot_path: PathBuf,
    /// Width the snapshot is resized to
    pub width: u32,
    /// Height the snapshot is resized to
    pub height: u32,
}

impl Default for ThermostatSettings {
    fn default() -> Self {
        Self {
            min_celsius: 18.0,
            max_celsius: 25.0,
            refresh_interval_ms: 5000,
        }
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("intruder_snapshot.jpg"),
            width: 200,
            height: 150,
        }
    }
}

impl ThermostatSettings {
    /// Half-open range sampled temperatures are drawn from
    pub fn range(&self) -> Range<f64> {
        self.min_celsius..self.max_celsius
    }

    /// Refresh interval clamped to 500-60000 ms
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(
            self.refresh_interval_ms
                .clamp(MIN_REFRESH_INTERVAL_MS, MAX_REFRESH_INTERVAL_MS),
        )
    }
}

impl AppConfig {
    /// Check values that serde cannot reject on its own
    pub fn validate(&self) -> Result<()> {
        let thermostat = &self.thermostat;
        if !thermostat.min_celsius.is_finite() || !thermostat.max_celsius.is_finite() {
            return Err(SmartHomeError::ConfigError(StringError::new(
                "temperature bounds must be finite",
            )));
        }
        if thermostat.min_celsius >= thermostat.max_celsius {
            return Err(SmartHomeError::ConfigError(StringError::new(format!(
                "min_celsius ({}) must be below max_celsius ({})",
                thermostat.min_celsius, thermostat.max_celsius
            ))));
        }
        // Uniform sampling needs max - min to be representable
        if !(thermostat.max_celsius - thermostat.min_celsius).is_finite() {
            return Err(SmartHomeError::ConfigError(StringError::new(format!(
                "temperature range {}..{} is too wide",
                thermostat.min_celsius, thermostat.max_celsius
            ))));
        }
        if self.camera.width == 0 || self.camera.height == 0 {
            return Err(SmartHomeError::ConfigError(StringError::new(
                "snapshot size must be non-zero",
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.thermostat.range(), 18.0..25.0);
        assert_eq!(config.thermostat.refresh_interval(), Duration::from_millis(5000));
        assert_eq!(config.camera.snapshot_path, PathBuf::from("intruder_snapshot.jpg"));
        assert_eq!((config.camera.width, config.camera.height), (200, 150));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "thermostat": { "refresh_interval_ms": 1000 } }"#).unwrap();
        assert_eq!(config.thermostat.refresh_interval_ms, 1000);
        assert!((config.thermostat.min_celsius - 18.0).abs() < f64::EPSILON);
        assert_eq!(config.camera, CameraSettings::default());
    }

    #[test]
    fn test_refresh_interval_is_clamped() {
        let mut settings = ThermostatSettings {
            refresh_interval_ms: 10,
            ..ThermostatSettings::default()
        };
        assert_eq!(settings.refresh_interval(), Duration::from_millis(500));

        settings.refresh_interval_ms = 3_600_000;
        assert_eq!(settings.refresh_interval(), Duration::from_millis(60_000));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut config = AppConfig::default();
        config.thermostat.min_celsius = 25.0;
        config.thermostat.max_celsius = 18.0;
        assert!(matches!(config.validate(), Err(SmartHomeError::ConfigError(_))));
    }

    #[test]
    fn test_validate_rejects_non_finite_bounds() {
        let mut config = AppConfig::default();
        config.thermostat.max_celsius = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_overflowing_range() {
        let mut config = AppConfig::default();
        config.thermostat.min_celsius = -1.7e308;
        config.thermostat.max_celsius = 1.7e308;
        assert!(matches!(config.validate(), Err(SmartHomeError::ConfigError(_))));

        config.thermostat.min_celsius = -1.0e300;
        config.thermostat.max_celsius = 1.0e300;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_snapshot() {
        let mut config = AppConfig::default();
        config.camera.height = 0;
        assert!(config.validate().is_err());
    }
}
