//! Progress reporting for analysis runs.
//!
//! A single [`ProgressSink`] is threaded through one analysis run. Stage
//! transitions and OCR sub-progress all flow through a [`ProgressChannel`],
//! which keeps the reported percent monotonically non-decreasing even when
//! concurrent extraction tasks report out of order.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

/// Callback contract for progress reporting: a human-readable stage
/// message and a completion estimate in `[0, 100]`.
pub trait ProgressSink: Send + Sync {
    fn report(&self, message: &str, percent: u8);
}

impl<F> ProgressSink for F
where
    F: Fn(&str, u8) + Send + Sync,
{
    fn report(&self, message: &str, percent: u8) {
        self(message, percent)
    }
}

/// Monotonic wrapper around a [`ProgressSink`].
///
/// Concurrent extraction tasks (and OCR sub-progress) may emit percents
/// out of order; the channel clamps every emission to the high-water mark
/// so the caller never observes the percent moving backward within a run.
pub struct ProgressChannel {
    sink: Arc<dyn ProgressSink>,
    high_water: AtomicU8,
}

impl ProgressChannel {
    pub fn new(sink: Arc<dyn ProgressSink>) -> Self {
        Self {
            sink,
            high_water: AtomicU8::new(0),
        }
    }

    /// Emit a progress event. The percent is capped at 100 and never
    /// reported lower than a previously reported value.
    pub fn emit(&self, message: &str, percent: u8) {
        let pct = percent.min(100);
        let prev = self.high_water.fetch_max(pct, Ordering::SeqCst);
        self.sink.report(message, pct.max(prev));
    }
}

/// Test/diagnostic sink that records every event it receives.
#[derive(Default)]
pub struct CollectingSink {
    events: Mutex<Vec<(String, u8)>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, u8)> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl ProgressSink for CollectingSink {
    fn report(&self, message: &str, percent: u8) {
        if let Ok(mut events) = self.events.lock() {
            events.push((message.to_string(), percent));
        }
    }
}
