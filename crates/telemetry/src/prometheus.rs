// Path: crates/telemetry/src/prometheus.rs
//! A concrete implementation of the metrics sinks using the Prometheus crate.

use crate::sinks::*;
use once_cell::sync::OnceCell;
use prometheus::{
    exponential_buckets, register_gauge, register_histogram, register_histogram_vec,
    register_int_counter, register_int_counter_vec, Gauge, Histogram, HistogramVec, IntCounter,
    IntCounterVec,
};

// --- Metric Statics ---
// We use OnceCell to hold the metric collectors. They will be initialized
// exactly once by the `install` function.

static STORAGE_COMMITTED_HEIGHT: OnceCell<Gauge> = OnceCell::new();
static STORAGE_NODES_WRITTEN_TOTAL: OnceCell<IntCounter> = OnceCell::new();
static STORAGE_BYTES_WRITTEN_TOTAL: OnceCell<IntCounter> = OnceCell::new();
static ERRORS_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();
static BLOCK_APPLY_DURATION_SECONDS: OnceCell<Histogram> = OnceCell::new();
static TX_EXEC_DURATION_SECONDS: OnceCell<HistogramVec> = OnceCell::new();
static TX_EXEC_ERRORS_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();

#[derive(Debug, Clone, Copy)]
pub struct PrometheusSink;

/// Helper macro to reduce boilerplate for getting a metric from OnceCell.
/// This will panic if `install()` has not been called, which is intentional
/// as it indicates a critical application setup error.
macro_rules! get_metric {
    ($metric:ident) => {
        $metric
            .get()
            .expect("Prometheus sink not initialized. Call telemetry::prometheus::install() first.")
    };
}

impl StorageMetricsSink for PrometheusSink {
    fn inc_nodes_written(&self, count: u64) {
        get_metric!(STORAGE_NODES_WRITTEN_TOTAL).inc_by(count);
    }
    fn inc_bytes_written_total(&self, bytes: u64) {
        get_metric!(STORAGE_BYTES_WRITTEN_TOTAL).inc_by(bytes);
    }
    fn set_committed_height(&self, height: u64) {
        get_metric!(STORAGE_COMMITTED_HEIGHT).set(height as f64);
    }
}

impl ErrorMetricsSink for PrometheusSink {
    fn inc_error(&self, kind: &'static str, variant: &'static str) {
        get_metric!(ERRORS_TOTAL)
            .with_label_values(&[kind, variant])
            .inc();
    }
}

impl ExecutorMetricsSink for PrometheusSink {
    fn observe_block_apply_latency(&self, duration_secs: f64) {
        get_metric!(BLOCK_APPLY_DURATION_SECONDS).observe(duration_secs);
    }
    fn observe_tx_exec_latency(&self, tx_kind: &str, duration_secs: f64) {
        get_metric!(TX_EXEC_DURATION_SECONDS)
            .with_label_values(&[tx_kind])
            .observe(duration_secs);
    }
    fn inc_exec_error(&self, tx_kind: &str, reason: &'static str) {
        get_metric!(TX_EXEC_ERRORS_TOTAL)
            .with_label_values(&[tx_kind, reason])
            .inc();
    }
}

/// Initializes all Prometheus metrics collectors and returns a static reference to the sink.
/// This function must be called only once at application startup.
#[allow(clippy::expect_used)]
pub fn install() -> Result<&'static dyn MetricsSink, prometheus::Error> {
    STORAGE_COMMITTED_HEIGHT
        .set(register_gauge!(
            "ticketchain_storage_committed_height",
            "Height of the most recently committed state tree version."
        )?)
        .expect("static already initialized");
    STORAGE_NODES_WRITTEN_TOTAL
        .set(register_int_counter!(
            "ticketchain_storage_nodes_written_total",
            "Total number of state tree nodes persisted by commits."
        )?)
        .expect("static already initialized");
    STORAGE_BYTES_WRITTEN_TOTAL
        .set(register_int_counter!(
            "ticketchain_storage_bytes_written_total",
            "Total bytes written to the storage backend for new nodes."
        )?)
        .expect("static already initialized");
    ERRORS_TOTAL
        .set(register_int_counter_vec!(
            "ticketchain_errors_total",
            "Total number of errors, categorized by type and variant.",
            &["kind", "variant"]
        )?)
        .expect("static already initialized");
    BLOCK_APPLY_DURATION_SECONDS
        .set(register_histogram!(
            "ticketchain_block_apply_duration_seconds",
            "Latency of applying one committed block.",
            exponential_buckets(0.0005, 2.0, 16)?
        )?)
        .expect("static already initialized");
    TX_EXEC_DURATION_SECONDS
        .set(register_histogram_vec!(
            "ticketchain_tx_exec_duration_seconds",
            "Latency of executing a single transaction, by kind.",
            &["tx_kind"],
            exponential_buckets(0.0001, 2.0, 16)?
        )?)
        .expect("static already initialized");
    TX_EXEC_ERRORS_TOTAL
        .set(register_int_counter_vec!(
            "ticketchain_tx_exec_errors_total",
            "Total executor errors, by tx kind and reason.",
            &["tx_kind", "reason"]
        )?)
        .expect("static already initialized");

    static SINK: PrometheusSink = PrometheusSink;
    Ok(&SINK)
}
