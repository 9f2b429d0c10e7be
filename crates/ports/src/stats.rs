//! Metrics-reporter boundary contract.

use std::collections::BTreeMap;
use std::time::Duration;

/// Metric tags. Keep tags low-cardinality; backends without tag support are
/// free to drop them.
pub type Tags = BTreeMap<String, String>;

/// Thin pass-through contract for a statistics client.
///
/// No buffering, batching, or aggregation happens behind this trait; each
/// call maps to one client call on the wrapped delegate.
pub trait StatsReporter: Send + Sync {
    /// Increment a counter by `value`.
    fn incr_counter(&self, name: &str, tags: Option<&Tags>, value: i64);

    /// Set a gauge to `value`.
    fn update_gauge(&self, name: &str, tags: Option<&Tags>, value: i64);

    /// Record one timer observation.
    fn record_timer(&self, name: &str, tags: Option<&Tags>, duration: Duration);
}
