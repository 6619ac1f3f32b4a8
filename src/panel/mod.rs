//! Control panel state and handlers
//!
//! This module holds everything the window shows, independent of the window
//! itself, so every handler can be exercised from tests.
//!
//! # Architecture
//!
//! - `ControlPanel`: owns room brightness, the displayed temperature and the
//!   activity log; one method per user action plus the periodic tick
//! - `Command`: one variant per button or timer event, routed through
//!   `ControlPanel::dispatch`
//! - `TemperatureSource`: where "current temperature" readings come from
//!   (`RandomTemperature` in the application)
//!
//! # Event Flow
//!
//! ```text
//! Slint callback / Timer tick → Command → ControlPanel::dispatch
//!                                              ↓
//!                              log lines + temperature → window
//! ```
//!
//! All of this runs on the UI thread; the Slint event loop delivers one
//! event at a time, so the panel needs no locking.

pub mod activity_log;
pub mod control_panel;
pub mod rooms;
pub mod thermostat;

pub use activity_log::ActivityLog;
pub use control_panel::{Command, ControlPanel, Outcome};
pub use rooms::{Room, RoomStates, brightness_from_slider};
pub use thermostat::{RandomTemperature, TemperatureSource, ThermostatAction};
