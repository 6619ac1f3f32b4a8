//! GUI controller
//!
//! Owns the main window, the periodic temperature timer and every open
//! snapshot window. Widget callbacks and timer ticks become `Command`s for
//! the shared `ControlPanel`; after each command the window is refreshed from
//! the panel's state.
//!
//! Everything here runs on the Slint event loop thread. Shared state is
//! `Rc<RefCell<_>>`, so it cannot leak to another thread.

use crate::{MainWindow, SnapshotWindow};
use anyhow::{Context, Result};
use slint::{
    CloseRequestResponse, ComponentHandle, Image, Model, ModelRc, Rgba8Pixel, SharedPixelBuffer,
    SharedString, Timer, TimerMode, VecModel,
};
use smarthome_sim::error::{SmartHomeError, get_user_friendly_error};
use smarthome_sim::panel::{Command, ControlPanel, Outcome, Room, brightness_from_slider};
use smarthome_sim::snapshot::Snapshot;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Drives the main window
pub struct GuiController {
    main_window: MainWindow,
    driver: Rc<PanelDriver>,
    refresh_timer: Timer,
    refresh_interval: Duration,
}

/// State shared by all callbacks
struct PanelDriver {
    /// Weak so the callbacks stored in the window do not keep it alive
    window: slint::Weak<MainWindow>,
    panel: RefCell<ControlPanel>,
    log_lines: Rc<VecModel<SharedString>>,
    /// Snapshot windows stay alive for the rest of the session
    snapshot_windows: RefCell<Vec<SnapshotWindow>>,
}

impl GuiController {
    /// Build the main window around `panel` and wire its callbacks
    pub fn new(panel: ControlPanel, refresh_interval: Duration) -> Result<Self> {
        info!("Creating main window");
        let main_window = MainWindow::new().context("Failed to create main window")?;

        let rooms: Vec<SharedString> = Room::ALL
            .iter()
            .map(|room| SharedString::from(room.name()))
            .collect();
        main_window.set_rooms(ModelRc::new(VecModel::from(rooms)));
        main_window.set_selected_room(Room::LivingRoom.name().into());

        let log_lines = Rc::new(VecModel::default());
        main_window.set_log_lines(ModelRc::from(Rc::clone(&log_lines)));

        let driver = Rc::new(PanelDriver {
            window: main_window.as_weak(),
            panel: RefCell::new(panel),
            log_lines,
            snapshot_windows: RefCell::new(Vec::new()),
        });
        driver.refresh_view();

        Self::wire_callbacks(&main_window, &driver);

        Ok(Self {
            main_window,
            driver,
            refresh_timer: Timer::default(),
            refresh_interval,
        })
    }

    fn wire_callbacks(main_window: &MainWindow, driver: &Rc<PanelDriver>) {
        let d = Rc::clone(driver);
        main_window.on_adjust_thermostat(move |input| {
            d.send(Command::AdjustThermostat(input.to_string()));
        });

        let d = Rc::clone(driver);
        main_window.on_lights_on(move |room, brightness| match room.as_str().parse::<Room>() {
            Ok(room) => d.send(Command::LightsOn {
                room,
                brightness: brightness_from_slider(brightness),
            }),
            Err(e) => report_error(&e),
        });

        let d = Rc::clone(driver);
        main_window.on_lights_off(move |room| match room.as_str().parse::<Room>() {
            Ok(room) => d.send(Command::LightsOff(room)),
            Err(e) => report_error(&e),
        });

        let d = Rc::clone(driver);
        main_window.on_check_camera(move || d.send(Command::CheckCamera));

        // Closing the control panel ends the session even if snapshot windows are open
        main_window.window().on_close_requested(|| {
            if let Err(e) = slint::quit_event_loop() {
                warn!("Failed to stop event loop: {}", e);
            }
            CloseRequestResponse::HideWindow
        });
    }

    /// Start the temperature timer and run the event loop until the window closes
    pub fn run(self) -> Result<()> {
        let driver = Rc::clone(&self.driver);
        self.refresh_timer
            .start(TimerMode::Repeated, self.refresh_interval, move || {
                driver.send(Command::TemperatureTick);
            });
        info!(
            "Temperature refresh every {} ms",
            self.refresh_interval.as_millis()
        );

        self.main_window
            .run()
            .context("Failed to run main window event loop")?;

        self.refresh_timer.stop();
        info!(
            "Main window closed after {} activity entries",
            self.driver.panel.borrow().log().len()
        );
        Ok(())
    }
}

impl PanelDriver {
    /// Dispatch one command and reflect the result in the UI
    fn send(&self, command: Command) {
        let result = self.panel.borrow_mut().dispatch(command);
        self.refresh_view();

        match result {
            Ok(Outcome::Updated) => {}
            Ok(Outcome::SnapshotCaptured(snapshot)) => {
                if let Err(e) = self.show_snapshot(&snapshot) {
                    error!("Failed to open snapshot window: {:#}", e);
                }
            }
            Err(e) => report_error(&e),
        }
    }

    /// Copy the temperature label and any new log lines into the window
    fn refresh_view(&self) {
        let Some(window) = self.window.upgrade() else {
            return;
        };
        let panel = self.panel.borrow();

        window.set_current_temperature(panel.temperature_label().into());

        let new_lines = panel.log().since(self.log_lines.row_count());
        if !new_lines.is_empty() {
            for line in new_lines {
                self.log_lines.push(SharedString::from(line.as_str()));
            }
            window.invoke_scroll_log_to_end();
        }
    }

    fn show_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        let window = SnapshotWindow::new().context("Failed to create snapshot window")?;
        window.set_snapshot(snapshot_image(snapshot));
        window.show().context("Failed to show snapshot window")?;

        let mut windows = self.snapshot_windows.borrow_mut();
        windows.push(window);
        debug!("{} snapshot window(s) open", windows.len());
        Ok(())
    }
}

/// Snapshot failures get a dialog; the rest only reach the log file
fn report_error(error: &SmartHomeError) {
    match error {
        SmartHomeError::SnapshotUnavailable { .. } => {
            error!("Intruder capture failed: {}", error);
            show_error_dialog(&get_user_friendly_error(error));
        }
        _ => warn!("Command rejected: {}", error),
    }
}

fn snapshot_image(snapshot: &Snapshot) -> Image {
    let buffer = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(
        &snapshot.rgba,
        snapshot.width,
        snapshot.height,
    );
    Image::from_rgba8(buffer)
}

/// Non-fatal error dialog; the main window stays usable afterwards
fn show_error_dialog(message: &str) {
    use rfd::MessageDialog;

    MessageDialog::new()
        .set_title("Smart Home IoT Simulator - Error")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .set_level(rfd::MessageLevel::Error)
        .show();
}
