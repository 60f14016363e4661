//! src/search/deadline.rs
//! Wall-clock budget shared read-only by every enumeration layer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A monotonic deadline with an optional cooperative cancel flag.
///
/// Checked between units of work only; a worker may overshoot by one trial.
#[derive(Debug, Clone)]
pub struct Deadline {
    started: Instant,
    limit: Duration,
    cancel: Option<Arc<AtomicBool>>,
}

impl Deadline {
    /// Expires `limit` from now. A zero limit is expired immediately.
    #[must_use]
    pub fn after(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            limit,
            cancel: None,
        }
    }

    /// Also expire as soon as `flag` is set.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    #[must_use]
    pub fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    #[inline]
    #[must_use]
    pub fn expired(&self) -> bool {
        self.cancelled() || self.started.elapsed() >= self.limit
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    #[must_use]
    pub fn limit(&self) -> Duration {
        self.limit
    }
}
