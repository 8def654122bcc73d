use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};

use fsv_runtime::RuntimeMode;
use serde::Serialize;

use crate::transform::WorkerPolicy;

/// Engine entrypoints that leave a trace record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesOperation {
    Sample,
    Transform,
}

/// One completed call into the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesTrace {
    pub operation_id: String,
    pub operation: SeriesOperation,
    pub input_len: usize,
    pub output_len: usize,
    /// `B` for transforms; 0 for sampling.
    pub harmonic_bound: usize,
    pub mode: RuntimeMode,
    pub workers: WorkerPolicy,
    pub timing_ns: u128,
}

impl SeriesTrace {
    #[must_use]
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

/// Most traces retained between drains; older ones are dropped first.
pub const TRACE_LOG_CAPACITY: usize = 1024;

static TRACE_LOG: OnceLock<Mutex<VecDeque<SeriesTrace>>> = OnceLock::new();
static OPERATION_COUNTER: AtomicU64 = AtomicU64::new(1);

fn trace_log() -> &'static Mutex<VecDeque<SeriesTrace>> {
    TRACE_LOG.get_or_init(|| Mutex::new(VecDeque::with_capacity(TRACE_LOG_CAPACITY)))
}

pub(crate) fn next_operation_id() -> String {
    let next = OPERATION_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("fsv-op-{next:016x}")
}

pub(crate) fn record_trace(trace: SeriesTrace) {
    if let Ok(mut log) = trace_log().lock() {
        if log.len() >= TRACE_LOG_CAPACITY {
            log.pop_front();
        }
        log.push_back(trace);
    }
}

/// Number of traces currently held, never above [`TRACE_LOG_CAPACITY`].
#[must_use]
pub fn retained_trace_count() -> usize {
    trace_log().lock().map_or(0, |log| log.len())
}

/// Drains every retained trace, oldest first.
#[must_use]
pub fn take_series_traces() -> Vec<SeriesTrace> {
    if let Ok(mut log) = trace_log().lock() {
        return log.drain(..).collect();
    }
    Vec::new()
}
