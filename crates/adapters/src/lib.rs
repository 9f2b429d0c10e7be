//! # logbridge-adapters
//!
//! Adapter implementations for the logbridge boundary contracts: the
//! bidirectional slog bridge, a JSON-line logger, a capture logger for
//! tests, and the statsd pass-through reporter.

pub mod encode;
pub mod json_logger;
pub mod memory;
pub mod slog_bridge;
pub mod stats;

pub use json_logger::{JsonLogger, LogSink, StderrLogSink};
pub use memory::{CapturedRecord, MemoryLogger};
pub use slog_bridge::{from_slog, into_slog, BridgeError, LoggerDrain, SlogLogger};
pub use stats::{Statter, StatterReporter};
