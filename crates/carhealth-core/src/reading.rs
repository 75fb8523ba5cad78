//! Telemetry reading model and its JSON shape.
//!
//! Field names serialize in camelCase (`engineTemp`, `tirePressure`,
//! `batteryVoltage`, ...) so the payload matches what dashboard clients expect.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One simulated snapshot of vehicle telemetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// Vehicle speed, 0-120.
    pub speed: u32,
    /// Fuel level in percent, 0-100.
    pub fuel: u32,
    /// Engine temperature, 70-120.
    pub engine_temp: u32,
    pub tire_pressure: TirePressure,
    /// Battery voltage, 11.8-14.2, one decimal place.
    pub battery_voltage: f64,
    /// Engine speed, 600-4000.
    pub rpm: u32,
    /// Capture instant in UTC, rendered per [`TimestampFormat`].
    pub timestamp: String,
}

/// Pressure of each tire, 30.0-36.0 with one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TirePressure {
    pub front_left: f64,
    pub front_right: f64,
    pub rear_left: f64,
    pub rear_right: f64,
}

impl TirePressure {
    /// All four pressures in front-left, front-right, rear-left, rear-right order.
    pub fn all(&self) -> [f64; 4] {
        [
            self.front_left,
            self.front_right,
            self.rear_left,
            self.rear_right,
        ]
    }
}

/// How reading timestamps are rendered. Both forms carry a UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampFormat {
    /// RFC 3339 with microseconds and a `Z` suffix: `2026-10-19T08:15:42.123456Z`.
    #[default]
    Zulu,
    /// Same instant without the suffix: `2026-10-19T08:15:42.123456`.
    Naive,
}

impl TimestampFormat {
    /// Render `at` in this format.
    pub fn render(self, at: DateTime<Utc>) -> String {
        match self {
            Self::Zulu => at.to_rfc3339_opts(SecondsFormat::Micros, true),
            Self::Naive => at.naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
        }
    }

    /// Parse a format name (`zulu`/`z`/`utc` or `naive`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "zulu" | "z" | "utc" => Some(Self::Zulu),
            "naive" => Some(Self::Naive),
            _ => None,
        }
    }
}

impl std::fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zulu => write!(f, "zulu"),
            Self::Naive => write!(f, "naive"),
        }
    }
}
