//! Abstract reading source trait.
//!
//! Anything that can produce a [`Reading`] on demand implements
//! [`ReadingSource`]. The random [`TelemetryGenerator`](crate::TelemetryGenerator)
//! never fails; other sources report failures as [`TelemetryError`].

use crate::error::TelemetryError;
use crate::reading::Reading;

/// A producer of telemetry readings.
pub trait ReadingSource: Send {
    /// Short identifier used in logs (e.g. `"simulated"`).
    fn name(&self) -> &str;

    /// Produce one reading.
    fn sample(&mut self) -> Result<Reading, TelemetryError>;
}
