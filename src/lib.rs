//! `SmartHomeSim` - a toy smart-home control panel
//!
//! Simulates a thermostat, per-room smart lights, a security camera and an
//! activity log. All device behaviour is random or hard-coded; nothing talks
//! to real hardware.
//!
//! The library holds the window-independent state (`panel::ControlPanel`),
//! the snapshot camera, configuration and logging. The Slint window lives in
//! the binary and drives the panel through `panel::Command`.

// Module declarations
pub mod config;
pub mod error;
pub mod panel;
pub mod snapshot;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use error::{Result, SmartHomeError};
