//! Error type shared by the telemetry core.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TelemetryError {
    /// A history buffer must hold at least one reading.
    #[error("history capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    /// A reading source could not produce a reading.
    #[error("reading source {name} unavailable: {reason}")]
    SourceUnavailable { name: String, reason: String },
}
