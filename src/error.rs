//! Error types for `SmartHomeSim`
//!
//! This module defines all error types used throughout the application.
//! Error variants use `#[source]` to preserve error chains so the log file
//! shows the underlying cause.

use std::path::PathBuf;
use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `SmartHomeSim`
#[derive(Debug, Error)]
pub enum SmartHomeError {
    /// Thermostat input could not be parsed as a number
    #[error("Invalid temperature input {input:?}: {source}")]
    InvalidTemperature {
        /// Raw text entered by the user
        input: String,
        /// Parser failure
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Room name is not one of the known rooms
    #[error("Unknown room: {0}")]
    UnknownRoom(String),

    /// Brightness outside 0-100
    #[error("Brightness {0}% is out of range (0-100)")]
    BrightnessOutOfRange(u32),

    /// Intruder snapshot could not be opened or decoded
    #[error("Intruder snapshot {} unavailable: {source}", .path.display())]
    SnapshotUnavailable {
        /// Path that was read
        path: PathBuf,
        /// Decoder or I/O failure
        #[source]
        source: image::ImageError,
    },

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for `SmartHomeSim` operations
pub type Result<T> = std::result::Result<T, SmartHomeError>;

/// Convert an error to a user-friendly message for error dialogs
pub fn get_user_friendly_error(error: &SmartHomeError) -> String {
    match error {
        SmartHomeError::InvalidTemperature { .. } => {
            "Invalid temperature input. Please enter a valid number.".to_string()
        }
        SmartHomeError::UnknownRoom(room) => {
            format!(
                "Unknown room: {room}\n\n\
                 Please pick one of the rooms from the list."
            )
        }
        SmartHomeError::BrightnessOutOfRange(value) => {
            format!("Brightness must be between 0 and 100 (got {value}).")
        }
        SmartHomeError::SnapshotUnavailable { path, source } => {
            let file_name = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
            format!(
                "Could not capture the intruder snapshot.\n\n\
                 Failed to load {}:\n{source}\n\n\
                 Place an image named {file_name} in the working directory.",
                path.display()
            )
        }
        SmartHomeError::ConfigError(_) => "Failed to load configuration.\n\n\
             Default settings will be used."
            .to_string(),
        SmartHomeError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        SmartHomeError::JsonError(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 The application will use default settings."
            )
        }
    }
}
