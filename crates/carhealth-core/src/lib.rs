//! # carhealth-core
//!
//! Simulated vehicle telemetry and a bounded, in-memory history of readings.
//!
//! ## Quick Start
//!
//! ```
//! use carhealth_core::CarMonitor;
//!
//! let mut monitor = CarMonitor::simulated();
//! let reading = monitor.status().unwrap();
//! assert!(reading.speed <= 120);
//! assert_eq!(monitor.history(), vec![reading]);
//! ```
//!
//! ## Architecture
//!
//! Source → Reading → History (last N, oldest first)
//!
//! Every producer of readings implements the [`ReadingSource`] trait. The
//! [`TelemetryGenerator`] is the random implementation used by the server.
//! The [`CarMonitor`] owns one source and one [`HistoryBuffer`] and records
//! every successful reading.

pub mod error;
pub mod generator;
pub mod history;
pub mod monitor;
pub mod reading;
pub mod source;

pub use error::TelemetryError;
pub use generator::TelemetryGenerator;
pub use history::{DEFAULT_HISTORY_CAPACITY, HistoryBuffer};
pub use monitor::CarMonitor;
pub use reading::{Reading, TimestampFormat, TirePressure};
pub use source::ReadingSource;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
