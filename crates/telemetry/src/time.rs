// Path: crates/telemetry/src/time.rs
use crate::sinks::ExecutorMetricsSink;
use std::time::Instant;

/// An RAII timer that records its scope's elapsed duration as the
/// block-apply latency metric when dropped.
pub struct Timer<'a> {
    sink: &'a dyn ExecutorMetricsSink,
    start: Instant,
}

impl<'a> Timer<'a> {
    /// Starts a new timer against `sink`.
    pub fn new(sink: &'a dyn ExecutorMetricsSink) -> Self {
        Self {
            sink,
            start: Instant::now(),
        }
    }
}

impl Drop for Timer<'_> {
    fn drop(&mut self) {
        self.sink
            .observe_block_apply_latency(self.start.elapsed().as_secs_f64());
    }
}
