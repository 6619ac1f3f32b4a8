//! GUI module
//!
//! Provides the Slint-based control panel window and the intruder snapshot
//! window, and keeps them in sync with the `ControlPanel` state.

pub mod gui_controller;

pub use gui_controller::GuiController;
