// Path: crates/telemetry/src/sinks.rs
//! Defines abstract traits for metrics reporting, decoupling core logic from the backend.

use once_cell::sync::OnceCell;

// --- Static Sink Access ---

/// A no-op sink for use in tests or when telemetry is disabled.
#[derive(Debug, Clone, Copy)]
pub struct NopSink;

/// A lazily-initialized static reference to the global `MetricsSink` implementation.
pub static SINK: OnceCell<&'static dyn MetricsSink> = OnceCell::new();
static NOP_SINK: NopSink = NopSink;

/// Returns a static reference to the configured error metrics sink.
/// If no sink has been initialized, it returns a no-op sink.
pub fn error_metrics() -> &'static dyn ErrorMetricsSink {
    SINK.get().copied().unwrap_or(&NOP_SINK)
}

/// Returns a static reference to the configured executor metrics sink.
/// If no sink has been initialized, it returns a no-op sink.
pub fn executor_metrics() -> &'static dyn ExecutorMetricsSink {
    SINK.get().copied().unwrap_or(&NOP_SINK)
}

// --- Trait Definitions ---

/// A sink for metrics related to the versioned state tree and its byte-store backend.
pub trait StorageMetricsSink: Send + Sync + std::fmt::Debug {
    /// Increments the total number of state tree nodes written for a commit.
    fn inc_nodes_written(&self, count: u64);
    /// Increments the total number of bytes written to the storage backend for new nodes.
    fn inc_bytes_written_total(&self, bytes: u64);
    /// Sets the gauge for the current committed tree height.
    fn set_committed_height(&self, height: u64);
}
impl StorageMetricsSink for NopSink {
    fn inc_nodes_written(&self, _count: u64) {}
    fn inc_bytes_written_total(&self, _bytes: u64) {}
    fn set_committed_height(&self, _height: u64) {}
}

/// A sink for recording structured error metrics.
pub trait ErrorMetricsSink: Send + Sync + std::fmt::Debug {
    /// Increments a counter for a specific error, categorized by its kind and variant.
    fn inc_error(&self, kind: &'static str, variant: &'static str);
}
impl ErrorMetricsSink for NopSink {
    fn inc_error(&self, _kind: &'static str, _variant: &'static str) {}
}

/// A sink for metrics related to transaction-executor and orchestrator dispatch.
pub trait ExecutorMetricsSink: Send + Sync + std::fmt::Debug {
    /// Observes the latency of applying one committed block, labeled by outcome.
    fn observe_block_apply_latency(&self, duration_secs: f64);
    /// Observes the latency of executing a single transaction, labeled by its kind.
    fn observe_tx_exec_latency(&self, tx_kind: &str, duration_secs: f64);
    /// Increments a counter for executor failures, labeled by tx kind and reason.
    fn inc_exec_error(&self, tx_kind: &str, reason: &'static str);
}
impl ExecutorMetricsSink for NopSink {
    fn observe_block_apply_latency(&self, _duration_secs: f64) {}
    fn observe_tx_exec_latency(&self, _tx_kind: &str, _duration_secs: f64) {}
    fn inc_exec_error(&self, _tx_kind: &str, _reason: &'static str) {}
}

/// A unified sink that implements all domain-specific traits, providing a single
/// point of implementation for metrics backends like Prometheus.
pub trait MetricsSink: StorageMetricsSink + ErrorMetricsSink + ExecutorMetricsSink {}

// Blanket implementation to allow any type that implements all sub-traits
// to be used as a `MetricsSink`.
impl<T> MetricsSink for T where T: StorageMetricsSink + ErrorMetricsSink + ExecutorMetricsSink {}
