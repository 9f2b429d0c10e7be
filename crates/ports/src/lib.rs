//! # logbridge-ports
//!
//! Boundary contracts for the logbridge adapter layer.
//!
//! This crate defines the small, stable logging/metrics interfaces that
//! application code depends on. Concrete engines live behind these traits in
//! the `adapters` crate, so the underlying implementation can be swapped
//! without touching call sites.

pub mod field;
pub mod level;
pub mod logger;
pub mod record;
pub mod stats;

mod macros;

pub use field::{FieldValue, Fields};
pub use level::Level;
pub use logger::{Logger, ERROR_FIELD};
pub use record::{CallSite, Record};
pub use stats::{StatsReporter, Tags};
