//! `SmartHomeSim` - toy smart-home control panel
//!
//! Opens the control panel window: thermostat, smart lights, security
//! camera and activity log. All device behaviour is simulated.

#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use gui::GuiController;
use smarthome_sim::{config::ConfigManager, panel::ControlPanel, utils};
use tracing::{error, info};

// Include Slint-generated code
slint::include_modules!();

fn main() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;

    info!("SmartHomeSim v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = ConfigManager::load().context("Failed to load application configuration")?;
    info!(
        "Configuration loaded: temperatures {:?}, snapshot {}",
        config.thermostat.range(),
        config.camera.snapshot_path.display()
    );

    let panel = ControlPanel::from_config(&config);

    let gui_controller =
        match GuiController::new(panel, config.thermostat.refresh_interval()) {
            Ok(controller) => controller,
            Err(e) => {
                error!("Failed to create GUI: {:#}", e);
                show_error_and_exit(&format!(
                    "Failed to start Smart Home IoT Simulator:\n\n{e:#}"
                ));
                return Err(e);
            }
        };

    info!("Starting GUI event loop");
    gui_controller
        .run()
        .context("GUI event loop terminated with error")?;

    info!("SmartHomeSim shutting down");

    Ok(())
}

/// Shows an error dialog and exits the application.
fn show_error_and_exit(message: &str) {
    use rfd::MessageDialog;

    MessageDialog::new()
        .set_title("Smart Home IoT Simulator - Error")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .set_level(rfd::MessageLevel::Error)
        .show();

    std::process::exit(1);
}
