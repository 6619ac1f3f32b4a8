//! Rooms and per-room light state

use crate::error::{Result, SmartHomeError};
use std::fmt;
use std::str::FromStr;

/// Highest brightness a light accepts
pub const MAX_BRIGHTNESS: u8 = 100;

/// A room with an independently dimmable light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Room {
    /// "Living Room"
    LivingRoom,
    /// "Bedroom"
    Bedroom,
    /// "Kitchen"
    Kitchen,
}

impl Room {
    /// Every room, in the order the room picker lists them
    pub const ALL: [Room; 3] = [Room::LivingRoom, Room::Bedroom, Room::Kitchen];

    /// Name shown in the UI and in log messages
    pub fn name(self) -> &'static str {
        match self {
            Room::LivingRoom => "Living Room",
            Room::Bedroom => "Bedroom",
            Room::Kitchen => "Kitchen",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Room {
    type Err = SmartHomeError;

    fn from_str(s: &str) -> Result<Self> {
        Room::ALL
            .into_iter()
            .find(|room| room.name() == s)
            .ok_or_else(|| SmartHomeError::UnknownRoom(s.to_string()))
    }
}

/// Brightness of every room's light, 0 (off) to 100
///
/// Backed by a fixed array indexed by `Room`, so every room always has an
/// entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomStates {
    brightness: [u8; Room::ALL.len()],
}

impl RoomStates {
    /// All lights off
    pub fn new() -> Self {
        Self::default()
    }

    /// Current brightness of `room`
    pub fn brightness(&self, room: Room) -> u8 {
        self.brightness[room.index()]
    }

    /// Set `room` to `brightness`; values above 100 are rejected
    pub fn set_brightness(&mut self, room: Room, brightness: u8) -> Result<()> {
        if brightness > MAX_BRIGHTNESS {
            return Err(SmartHomeError::BrightnessOutOfRange(u32::from(brightness)));
        }
        self.brightness[room.index()] = brightness;
        Ok(())
    }

    /// Set `room` to 0
    pub fn switch_off(&mut self, room: Room) {
        self.brightness[room.index()] = 0;
    }

    /// `(room, brightness)` pairs in picker order
    pub fn iter(&self) -> impl Iterator<Item = (Room, u8)> + '_ {
        Room::ALL.into_iter().map(|room| (room, self.brightness(room)))
    }
}

/// Convert a slider position to a whole brightness percentage
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Value is rounded and clamped to 0..=100 before the cast"
)]
pub fn brightness_from_slider(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, f32::from(MAX_BRIGHTNESS)) as u8
}
