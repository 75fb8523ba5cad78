//! Random telemetry generator.
//!
//! Each field is drawn independently and uniformly from its inclusive range.
//! Tire pressures and battery voltage are rounded to one decimal place; the
//! range endpoints are themselves one-decimal values, so rounding never leaves
//! the range.

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::TelemetryError;
use crate::reading::{Reading, TimestampFormat, TirePressure};
use crate::source::ReadingSource;

pub const SPEED_RANGE: RangeInclusive<u32> = 0..=120;
pub const FUEL_RANGE: RangeInclusive<u32> = 0..=100;
pub const ENGINE_TEMP_RANGE: RangeInclusive<u32> = 70..=120;
pub const TIRE_PRESSURE_RANGE: RangeInclusive<f64> = 30.0..=36.0;
pub const BATTERY_VOLTAGE_RANGE: RangeInclusive<f64> = 11.8..=14.2;
pub const RPM_RANGE: RangeInclusive<u32> = 600..=4000;

/// Seedable random source of simulated readings.
pub struct TelemetryGenerator {
    rng: StdRng,
    timestamp_format: TimestampFormat,
}

impl Default for TelemetryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Create a deterministic generator. Same seed, same sequence of values.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            timestamp_format: TimestampFormat::default(),
        }
    }

    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        self.timestamp_format
    }

    /// Generate a reading stamped with the current time.
    pub fn generate(&mut self) -> Reading {
        self.generate_at(Utc::now())
    }

    /// Generate a reading stamped with `at`.
    pub fn generate_at(&mut self, at: DateTime<Utc>) -> Reading {
        Reading {
            speed: self.rng.random_range(SPEED_RANGE),
            fuel: self.rng.random_range(FUEL_RANGE),
            engine_temp: self.rng.random_range(ENGINE_TEMP_RANGE),
            tire_pressure: TirePressure {
                front_left: self.tenths(TIRE_PRESSURE_RANGE),
                front_right: self.tenths(TIRE_PRESSURE_RANGE),
                rear_left: self.tenths(TIRE_PRESSURE_RANGE),
                rear_right: self.tenths(TIRE_PRESSURE_RANGE),
            },
            battery_voltage: self.tenths(BATTERY_VOLTAGE_RANGE),
            rpm: self.rng.random_range(RPM_RANGE),
            timestamp: self.timestamp_format.render(at),
        }
    }

    fn tenths(&mut self, range: RangeInclusive<f64>) -> f64 {
        round_tenth(self.rng.random_range(range))
    }
}

impl ReadingSource for TelemetryGenerator {
    fn name(&self) -> &str {
        "simulated"
    }

    fn sample(&mut self) -> Result<Reading, TelemetryError> {
        Ok(self.generate())
    }
}

/// Round to one decimal place, half away from zero.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
