//! Basic metrics instrumentation for tool calls.
//!
//! Provides counters and duration tracking for every service operation
//! invoked through the server.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for tracking tool call performance.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of tool calls handled
    calls_total: Arc<AtomicU64>,

    /// Total number of tool calls that returned an error
    failures_total: Arc<AtomicU64>,

    /// Total duration of all tool calls in microseconds
    duration_total_us: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            calls_total: Arc::new(AtomicU64::new(0)),
            failures_total: Arc::new(AtomicU64::new(0)),
            duration_total_us: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a completed tool call with its duration.
    pub fn record_call(&self, duration: Duration) {
        self.calls_total.fetch_add(1, Ordering::Relaxed);
        self.duration_total_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    /// Record a failed tool call.
    pub fn record_failure(&self) {
        self.failures_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn calls_total(&self) -> u64 {
        self.calls_total.load(Ordering::Relaxed)
    }

    pub fn failures_total(&self) -> u64 {
        self.failures_total.load(Ordering::Relaxed)
    }

    pub fn duration_total_us(&self) -> u64 {
        self.duration_total_us.load(Ordering::Relaxed)
    }

    /// Average call duration in microseconds.
    pub fn duration_avg_us(&self) -> f64 {
        let total = self.duration_total_us.load(Ordering::Relaxed);
        let count = self.calls_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            calls_total: self.calls_total(),
            failures_total: self.failures_total(),
            duration_total_us: self.duration_total_us(),
            duration_avg_us: self.duration_avg_us(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MetricsSummary {
    pub calls_total: u64,
    pub failures_total: u64,
    pub duration_total_us: u64,
    pub duration_avg_us: f64,
}

/// Times one tool call and records it when completed.
pub struct ToolTimer {
    tool: &'static str,
    start: Instant,
    metrics: Metrics,
}

impl ToolTimer {
    /// Start timing a tool call.
    pub fn new(metrics: Metrics, tool: &'static str) -> Self {
        Self {
            tool,
            start: Instant::now(),
            metrics,
        }
    }

    /// Record the call as successful.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_call(duration);
        tracing::debug!(
            tool = self.tool,
            duration_us = duration.as_micros() as u64,
            "Tool call completed"
        );
    }

    /// Record the call as failed.
    pub fn complete_with_error(self) {
        let duration = self.start.elapsed();
        self.metrics.record_call(duration);
        self.metrics.record_failure();
        tracing::debug!(
            tool = self.tool,
            duration_us = duration.as_micros() as u64,
            "Tool call failed"
        );
    }

    /// Record success or failure depending on `result`.
    pub fn finish<T, E>(self, result: &Result<T, E>) {
        match result {
            Ok(_) => self.complete(),
            Err(_) => self.complete_with_error(),
        }
    }
}
