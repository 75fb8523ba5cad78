//! Car monitor: one reading source plus the history of its readings.
//!
//! The monitor is a plain owned value with no interior locking. Callers that
//! share it across threads (the HTTP server) wrap it in a single mutex, so
//! "sample, record, maybe evict" and "read snapshot" never interleave.

use crate::error::TelemetryError;
use crate::generator::TelemetryGenerator;
use crate::history::HistoryBuffer;
use crate::reading::Reading;
use crate::source::ReadingSource;

pub struct CarMonitor {
    source: Box<dyn ReadingSource>,
    history: HistoryBuffer<Reading>,
}

impl CarMonitor {
    pub fn new(source: Box<dyn ReadingSource>, history: HistoryBuffer<Reading>) -> Self {
        Self { source, history }
    }

    /// Random generator with the default history capacity.
    pub fn simulated() -> Self {
        Self::new(Box::new(TelemetryGenerator::new()), HistoryBuffer::new())
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Take a new reading and record it. Nothing is recorded on failure.
    pub fn status(&mut self) -> Result<Reading, TelemetryError> {
        let reading = self.source.sample()?;
        if self.history.record(reading.clone()).is_some() {
            log::trace!(
                "history full ({}), evicted oldest reading",
                self.history.capacity()
            );
        }
        Ok(reading)
    }

    /// Recorded readings, oldest first.
    pub fn history(&self) -> Vec<Reading> {
        self.history.all()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_capacity(&self) -> usize {
        self.history.capacity()
    }
}

impl std::fmt::Debug for CarMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarMonitor")
            .field("source", &self.source.name())
            .field("history", &self.history)
            .finish()
    }
}
