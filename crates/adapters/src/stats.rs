//! Pass-through reporter over a plain statsd-style client.

use logbridge_ports::{StatsReporter, Tags};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// The statsd-style client surface this reporter delegates to.
///
/// `rate` is the client-side sample rate in `[0.0, 1.0]`.
pub trait Statter: Send + Sync {
    /// Add `value` to the named counter.
    fn count(&self, name: &str, value: i64, rate: f32) -> io::Result<()>;

    /// Set the named gauge to `value`.
    fn gauge(&self, name: &str, value: i64, rate: f32) -> io::Result<()>;

    /// Record one observation of the named timer.
    fn timing(&self, name: &str, duration: Duration, rate: f32) -> io::Result<()>;
}

/// Reporter that forwards every call unsampled to a wrapped [`Statter`].
///
/// The wrapped client has no tag support, so tags are dropped. Emission
/// errors are discarded: metric delivery is best-effort and must never
/// disturb the caller.
pub struct StatterReporter {
    delegate: Arc<dyn Statter>,
}

impl StatterReporter {
    /// Wrap a client.
    pub fn new(delegate: Arc<dyn Statter>) -> Self {
        Self { delegate }
    }
}

impl StatsReporter for StatterReporter {
    fn incr_counter(&self, name: &str, _tags: Option<&Tags>, value: i64) {
        let _ = self.delegate.count(name, value, 1.0);
    }

    fn update_gauge(&self, name: &str, _tags: Option<&Tags>, value: i64) {
        let _ = self.delegate.gauge(name, value, 1.0);
    }

    fn record_timer(&self, name: &str, _tags: Option<&Tags>, duration: Duration) {
        let _ = self.delegate.timing(name, duration, 1.0);
    }
}
