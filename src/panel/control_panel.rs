//! Control panel implementation
//!
//! `ControlPanel` is the whole simulated home: room lights, the displayed
//! temperature, the camera and the activity log. The GUI turns each button
//! press or timer tick into a `Command` and calls `dispatch`.

use crate::config::AppConfig;
use crate::error::{Result, SmartHomeError};
use crate::panel::activity_log::ActivityLog;
use crate::panel::rooms::{Room, RoomStates};
use crate::panel::thermostat::{
    self, INITIAL_TEMPERATURE_CELSIUS, INVALID_INPUT_MESSAGE, RandomTemperature, TemperatureSource,
    ThermostatAction,
};
use crate::snapshot::{Snapshot, SnapshotCamera};
use tracing::{debug, info, warn};

/// One user action or timer event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// "Adjust Thermostat" with the raw text of the temperature field
    AdjustThermostat(String),
    /// "Lights On" for a room at a brightness percentage
    LightsOn {
        /// Selected room
        room: Room,
        /// Brightness, 0-100
        brightness: u8,
    },
    /// "Lights Off" for a room
    LightsOff(Room),
    /// "Check Security Camera"
    CheckCamera,
    /// Periodic temperature refresh
    TemperatureTick,
}

/// Result of a dispatched command the GUI has to act on
#[derive(Debug)]
pub enum Outcome {
    /// State and log were updated; refreshing the window is enough
    Updated,
    /// The camera captured an image to show in its own window
    SnapshotCaptured(Snapshot),
}

/// Application state behind the control panel window
pub struct ControlPanel<S = RandomTemperature> {
    temperature_source: S,
    camera: SnapshotCamera,
    rooms: RoomStates,
    current_temperature: f64,
    temperature_readings: u64,
    log: ActivityLog,
}

impl ControlPanel<RandomTemperature> {
    /// Panel with random readings and camera taken from `config`
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            RandomTemperature::new(config.thermostat.range()),
            SnapshotCamera::from_settings(&config.camera),
        )
    }
}

impl<S: TemperatureSource> ControlPanel<S> {
    /// All lights off, empty log, display at the initial 25 °C
    pub fn new(temperature_source: S, camera: SnapshotCamera) -> Self {
        Self {
            temperature_source,
            camera,
            rooms: RoomStates::new(),
            current_temperature: INITIAL_TEMPERATURE_CELSIUS,
            temperature_readings: 0,
            log: ActivityLog::new(),
        }
    }

    /// Route a command to its handler
    ///
    /// Invalid thermostat input is handled here (it only produces a log
    /// line). Snapshot and precondition errors are returned to the caller.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        debug!("Dispatching {:?}", command);

        match command {
            Command::AdjustThermostat(input) => match self.adjust_thermostat(&input) {
                Ok(_) | Err(SmartHomeError::InvalidTemperature { .. }) => Ok(Outcome::Updated),
                Err(e) => Err(e),
            },
            Command::LightsOn { room, brightness } => {
                self.turn_lights_on(room, brightness)?;
                Ok(Outcome::Updated)
            }
            Command::LightsOff(room) => {
                self.turn_lights_off(room);
                Ok(Outcome::Updated)
            }
            Command::CheckCamera => self
                .check_security_camera()
                .map(Outcome::SnapshotCaptured),
            Command::TemperatureTick => {
                self.update_temperature();
                Ok(Outcome::Updated)
            }
        }
    }

    /// Compare a fresh reading with the requested temperature and log the
    /// heater/AC decision
    ///
    /// Unparsable input logs the invalid-input message, leaves the display
    /// alone and returns `SmartHomeError::InvalidTemperature`.
    pub fn adjust_thermostat(&mut self, input: &str) -> Result<ThermostatAction> {
        let desired = match thermostat::parse_temperature(input) {
            Ok(desired) => desired,
            Err(e) => {
                warn!("Rejected thermostat input: {}", e);
                self.log.record(INVALID_INPUT_MESSAGE);
                return Err(e);
            }
        };

        let current = self.take_reading();
        let action = ThermostatAction::decide(current, desired);
        info!(
            "Thermostat adjusted: desired={} current={:.2} action={:?}",
            desired, current, action
        );
        self.log.record(action.message());

        Ok(action)
    }

    /// Switch a room's light on at `brightness` percent
    pub fn turn_lights_on(&mut self, room: Room, brightness: u8) -> Result<()> {
        self.rooms.set_brightness(room, brightness)?;
        self.log.record(format!(
            "Lights in {room} are turned on with brightness {brightness}%."
        ));
        Ok(())
    }

    /// Switch a room's light off
    pub fn turn_lights_off(&mut self, room: Room) {
        self.rooms.switch_off(room);
        self.log.record(format!("Lights in {room} are turned off."));
    }

    /// Report movement and an intruder, then capture a snapshot
    ///
    /// Every call reports an intrusion. Both log lines are written before
    /// the capture, so they appear even when the capture fails.
    pub fn check_security_camera(&mut self) -> Result<Snapshot> {
        self.log.record("Movement is detected.");
        self.log.record("Intruder detected! Capturing snapshot.");
        self.capture_intruder()
    }

    /// Load the intruder snapshot from the camera
    pub fn capture_intruder(&self) -> Result<Snapshot> {
        self.camera.capture()
    }

    /// Periodic tick: take a new reading and show it
    pub fn update_temperature(&mut self) -> f64 {
        let current = self.take_reading();
        debug!("Periodic temperature update: {:.2}°C", current);
        current
    }

    fn take_reading(&mut self) -> f64 {
        self.current_temperature = self.temperature_source.sample();
        self.temperature_readings += 1;
        self.current_temperature
    }

    /// Temperature currently displayed
    pub fn current_temperature(&self) -> f64 {
        self.current_temperature
    }

    /// Text of the current-temperature label
    pub fn temperature_label(&self) -> String {
        thermostat::temperature_label(self.current_temperature)
    }

    /// How many readings have replaced the displayed temperature
    pub fn temperature_readings(&self) -> u64 {
        self.temperature_readings
    }

    /// Per-room brightness
    pub fn rooms(&self) -> &RoomStates {
        &self.rooms
    }

    /// Activity log
    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// Camera used for snapshots
    pub fn camera(&self) -> &SnapshotCamera {
        &self.camera
    }
}
