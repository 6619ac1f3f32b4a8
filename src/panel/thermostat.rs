//! Simulated thermostat
//!
//! Readings are random; the heater/AC choice follows a fixed decision table:
//!
//! | condition                                  | action   |
//! |--------------------------------------------|----------|
//! | current < desired AND desired > 20         | heating  |
//! | current > desired OR desired <= 20         | cooling  |
//! | otherwise                                  | holding  |
//!
//! The second row wins for every desired value at or below 20 °C, so
//! "holding" is only reachable when current == desired above 20 °C.

use crate::error::{Result, SmartHomeError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::borrow::Cow;
use std::ops::Range;

/// Desired temperatures at or below this always select the AC
pub const HEATING_THRESHOLD_CELSIUS: f64 = 20.0;

/// Temperature the display shows before the first reading
pub const INITIAL_TEMPERATURE_CELSIUS: f64 = 25.0;

/// Message logged when the thermostat input is not a number
pub const INVALID_INPUT_MESSAGE: &str = "Invalid temperature input. Please enter a valid number.";

/// Source of simulated "current temperature" readings
pub trait TemperatureSource {
    /// Take one reading in °C
    fn sample(&mut self) -> f64;
}

/// Uniformly random readings over a half-open range
pub struct RandomTemperature {
    range: Range<f64>,
    rng: StdRng,
}

impl RandomTemperature {
    /// Sample from `range` using an entropy-seeded generator
    ///
    /// `range` must be non-empty; `AppConfig::validate` guarantees this for
    /// configured ranges.
    pub fn new(range: Range<f64>) -> Self {
        Self::with_rng(range, StdRng::from_entropy())
    }

    /// Sample from `range` with a fixed seed
    pub fn seeded(range: Range<f64>, seed: u64) -> Self {
        Self::with_rng(range, StdRng::seed_from_u64(seed))
    }

    fn with_rng(range: Range<f64>, rng: StdRng) -> Self {
        debug_assert!(range.start < range.end, "empty temperature range");
        Self { range, rng }
    }
}

impl TemperatureSource for RandomTemperature {
    fn sample(&mut self) -> f64 {
        self.rng.gen_range(self.range.clone())
    }
}

/// What the thermostat does after comparing a reading with the target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThermostatAction {
    /// Heater runs until `target`
    Heating {
        /// Desired temperature in °C
        target: f64,
    },
    /// AC runs until `target`
    Cooling {
        /// Desired temperature in °C
        target: f64,
    },
    /// Room is already at the target
    Holding,
}

impl ThermostatAction {
    /// Apply the decision table to a reading and a target
    pub fn decide(current: f64, desired: f64) -> Self {
        if current < desired && desired > HEATING_THRESHOLD_CELSIUS {
            ThermostatAction::Heating { target: desired }
        } else if current > desired || desired <= HEATING_THRESHOLD_CELSIUS {
            ThermostatAction::Cooling { target: desired }
        } else {
            ThermostatAction::Holding
        }
    }

    /// Activity log line for this action
    pub fn message(&self) -> String {
        match self {
            ThermostatAction::Heating { target } => {
                format!("Heater is turned on until {}°C.", format_celsius(*target))
            }
            ThermostatAction::Cooling { target } => {
                format!("AC is turned on until {}°C.", format_celsius(*target))
            }
            ThermostatAction::Holding => "Temperature is already at the desired level.".to_string(),
        }
    }
}

/// Parse the thermostat text field
///
/// Surrounding whitespace is ignored and single underscores between digits
/// are accepted as separators (`1_000`).
pub fn parse_temperature(input: &str) -> Result<f64> {
    strip_digit_separators(input.trim())
        .parse::<f64>()
        .map_err(|source| SmartHomeError::InvalidTemperature {
            input: input.to_string(),
            source,
        })
}

/// Drop `_` separators when every one sits between two digits; otherwise
/// return the text unchanged so the float parser rejects it
fn strip_digit_separators(text: &str) -> Cow<'_, str> {
    if !text.contains('_') {
        return Cow::Borrowed(text);
    }
    let bytes = text.as_bytes();
    let well_placed = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if well_placed {
        Cow::Owned(text.replace('_', ""))
    } else {
        Cow::Borrowed(text)
    }
}

/// Render a user-entered temperature, always with a fractional part (`22` → `22.0`)
///
/// Very large or small magnitudes use a signed two-digit exponent
/// (`1e+16`, `1e-05`). NaN renders as `nan`.
pub fn format_celsius(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    // Debug keeps the shortest round-trip digits and a trailing ".0"
    let shortest = format!("{value:?}");
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => shortest,
    }
}

/// Text of the "current temperature" label
pub fn temperature_label(current: f64) -> String {
    format!("Current Temperature: {current:.2}°C")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heating_when_colder_and_target_above_threshold() {
        let action = ThermostatAction::decide(19.5, 23.0);
        assert_eq!(action, ThermostatAction::Heating { target: 23.0 });
        assert_eq!(action.message(), "Heater is turned on until 23.0°C.");
    }

    #[test]
    fn test_cooling_when_warmer() {
        let action = ThermostatAction::decide(24.0, 21.5);
        assert_eq!(action, ThermostatAction::Cooling { target: 21.5 });
        assert_eq!(action.message(), "AC is turned on until 21.5°C.");
    }

    #[test]
    fn test_cooling_when_target_at_or_below_threshold() {
        // Colder than the target, yet the low target still selects the AC
        assert_eq!(
            ThermostatAction::decide(18.2, 20.0),
            ThermostatAction::Cooling { target: 20.0 }
        );
        assert_eq!(
            ThermostatAction::decide(18.0, 19.0),
            ThermostatAction::Cooling { target: 19.0 }
        );
    }

    #[test]
    fn test_holding_only_when_equal_above_threshold() {
        let action = ThermostatAction::decide(22.0, 22.0);
        assert_eq!(action, ThermostatAction::Holding);
        assert_eq!(action.message(), "Temperature is already at the desired level.");
    }

    #[test]
    fn test_equal_at_or_below_threshold_is_cooling() {
        assert_eq!(
            ThermostatAction::decide(20.0, 20.0),
            ThermostatAction::Cooling { target: 20.0 }
        );
        assert_eq!(
            ThermostatAction::decide(19.0, 19.0),
            ThermostatAction::Cooling { target: 19.0 }
        );
    }

    #[test]
    fn test_parse_temperature() {
        assert!((parse_temperature("21.5").unwrap() - 21.5).abs() < f64::EPSILON);
        assert!((parse_temperature("  22 ").unwrap() - 22.0).abs() < f64::EPSILON);
        assert!((parse_temperature("-4").unwrap() + 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_temperature_rejects_text() {
        for input in ["abc", "", "   ", "21,5", "22°C"] {
            let err = parse_temperature(input).unwrap_err();
            assert!(
                matches!(err, SmartHomeError::InvalidTemperature { .. }),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_format_celsius() {
        assert_eq!(format_celsius(22.0), "22.0");
        assert_eq!(format_celsius(22.5), "22.5");
        assert_eq!(format_celsius(-3.0), "-3.0");
        assert_eq!(format_celsius(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_celsius_exponents() {
        assert_eq!(format_celsius(1e15), "1000000000000000.0");
        assert_eq!(format_celsius(1e16), "1e+16");
        assert_eq!(format_celsius(-2.5e300), "-2.5e+300");
        assert_eq!(format_celsius(1e-5), "1e-05");
        assert_eq!(format_celsius(1.5e-123), "1.5e-123");
        assert_eq!(format_celsius(0.0001), "0.0001");
    }

    #[test]
    fn test_format_celsius_non_finite() {
        assert_eq!(format_celsius(f64::NAN), "nan");
        assert_eq!(format_celsius(f64::INFINITY), "inf");
        assert_eq!(format_celsius(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_parse_temperature_digit_separators() {
        assert!((parse_temperature("1_000").unwrap() - 1000.0).abs() < f64::EPSILON);
        assert!((parse_temperature("2_2.5").unwrap() - 22.5).abs() < f64::EPSILON);
        for input in ["_22", "22_", "2__2", "22_.5", "22._5"] {
            assert!(parse_temperature(input).is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_nan_target_holds() {
        let desired = parse_temperature("nan").unwrap();
        assert!(desired.is_nan());

        // Every comparison with NaN is false, so only the last row matches
        let action = ThermostatAction::decide(22.0, desired);
        assert_eq!(action, ThermostatAction::Holding);
        assert_eq!(action.message(), "Temperature is already at the desired level.");
    }

    #[test]
    fn test_infinite_target_heats() {
        let desired = parse_temperature("inf").unwrap();
        let action = ThermostatAction::decide(22.0, desired);
        assert_eq!(action, ThermostatAction::Heating { target: f64::INFINITY });
        assert_eq!(action.message(), "Heater is turned on until inf°C.");

        let action = ThermostatAction::decide(22.0, parse_temperature("-inf").unwrap());
        assert_eq!(action.message(), "AC is turned on until -inf°C.");
    }

    #[test]
    fn test_temperature_label() {
        assert_eq!(
            temperature_label(INITIAL_TEMPERATURE_CELSIUS),
            "Current Temperature: 25.00°C"
        );
        assert_eq!(temperature_label(18.456), "Current Temperature: 18.46°C");
    }

    #[test]
    fn test_seeded_source_is_deterministic() {
        let mut a = RandomTemperature::seeded(18.0..25.0, 7);
        let mut b = RandomTemperature::seeded(18.0..25.0, 7);
        for _ in 0..10 {
            assert!((a.sample() - b.sample()).abs() < f64::EPSILON);
        }
    }

    // Property-based tests using proptest
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the decision table picks exactly the row whose condition holds first
            #[test]
            fn decision_table_matches_conditions(
                current in 18.0f64..25.0,
                desired in -10.0f64..40.0
            ) {
                let action = ThermostatAction::decide(current, desired);
                if current < desired && desired > 20.0 {
                    prop_assert_eq!(action, ThermostatAction::Heating { target: desired });
                } else if current > desired || desired <= 20.0 {
                    prop_assert_eq!(action, ThermostatAction::Cooling { target: desired });
                } else {
                    prop_assert_eq!(action, ThermostatAction::Holding);
                }
            }

            /// Property: low targets never hold, whatever the reading
            #[test]
            fn holding_unreachable_at_or_below_threshold(
                current in 18.0f64..25.0,
                desired in -50.0f64..=20.0
            ) {
                prop_assert_ne!(ThermostatAction::decide(current, desired), ThermostatAction::Holding);
            }

            /// Property: random readings stay inside the configured half-open range
            #[test]
            fn random_readings_stay_in_range(seed in any::<u64>()) {
                let mut source = RandomTemperature::seeded(18.0..25.0, seed);
                for _ in 0..32 {
                    let reading = source.sample();
                    prop_assert!((18.0..25.0).contains(&reading));
                }
            }
        }
    }
}
