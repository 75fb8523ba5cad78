pub mod sample;
pub mod serve;

use anyhow::Context;

use carhealth_core::{CarMonitor, HistoryBuffer, TelemetryGenerator, TimestampFormat};

/// `--timestamp` values. Both render the UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TimestampStyle {
    /// RFC 3339 with a `Z` suffix
    Zulu,
    /// Same instant, no suffix
    Naive,
}

impl From<TimestampStyle> for TimestampFormat {
    fn from(style: TimestampStyle) -> Self {
        match style {
            TimestampStyle::Zulu => TimestampFormat::Zulu,
            TimestampStyle::Naive => TimestampFormat::Naive,
        }
    }
}

/// Build a generator, seeded when `seed` is given.
pub fn make_generator(seed: Option<u64>, format: TimestampFormat) -> TelemetryGenerator {
    let generator = match seed {
        Some(seed) => TelemetryGenerator::seeded(seed),
        None => TelemetryGenerator::new(),
    };
    generator.with_timestamp_format(format)
}

/// Build the monitor served over HTTP.
pub fn make_monitor(history: usize, format: TimestampFormat) -> anyhow::Result<CarMonitor> {
    let history = HistoryBuffer::with_capacity(history).context("invalid --history")?;
    Ok(CarMonitor::new(
        Box::new(make_generator(None, format)),
        history,
    ))
}
