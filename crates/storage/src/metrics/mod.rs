// Path: crates/storage/src/metrics/mod.rs
use once_cell::sync::OnceCell;
use ticketchain_telemetry::sinks::{NopSink, StorageMetricsSink};

static NOP_SINK: NopSink = NopSink;
pub static SINK: OnceCell<&'static dyn StorageMetricsSink> = OnceCell::new();

pub fn metrics() -> &'static dyn StorageMetricsSink {
    SINK.get().copied().unwrap_or(&NOP_SINK)
}
