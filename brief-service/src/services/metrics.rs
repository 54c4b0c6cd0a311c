//! Prometheus metrics for brief-service.

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::OnceLock;

// Global registry
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub static BRIEF_REQUESTS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static UPSTREAM_LATENCY_SECONDS: OnceLock<HistogramVec> = OnceLock::new();
pub static UPSTREAM_ERRORS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize all metrics. Safe to call more than once; only the first call
/// registers collectors.
pub fn init_metrics() {
    if REGISTRY.get().is_some() {
        return;
    }

    let registry = Registry::new();

    let requests = IntCounterVec::new(
        Opts::new(
            "brief_requests_total",
            "Generation requests by variant and outcome status",
        ),
        &["variant", "status"],
    )
    .expect("Failed to create brief_requests_total metric");

    let upstream_latency = HistogramVec::new(
        HistogramOpts::new(
            "brief_upstream_latency_seconds",
            "Completion API latency in seconds",
        )
        .buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0, 120.0]),
        &["variant", "model"],
    )
    .expect("Failed to create brief_upstream_latency_seconds metric");

    let upstream_errors = IntCounterVec::new(
        Opts::new("brief_upstream_errors_total", "Completion API failures"),
        &["variant", "error_type"],
    )
    .expect("Failed to create brief_upstream_errors_total metric");

    registry
        .register(Box::new(requests.clone()))
        .expect("Failed to register brief_requests_total");
    registry
        .register(Box::new(upstream_latency.clone()))
        .expect("Failed to register brief_upstream_latency_seconds");
    registry
        .register(Box::new(upstream_errors.clone()))
        .expect("Failed to register brief_upstream_errors_total");

    if REGISTRY.set(registry).is_err() {
        // Lost a race with a concurrent initializer; its collectors win.
        return;
    }
    let _ = BRIEF_REQUESTS_TOTAL.set(requests);
    let _ = UPSTREAM_LATENCY_SECONDS.set(upstream_latency);
    let _ = UPSTREAM_ERRORS_TOTAL.set(upstream_errors);

    tracing::info!("Prometheus metrics initialized");
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();

    let registry = match REGISTRY.get() {
        Some(r) => r,
        None => {
            tracing::error!("Metrics registry not initialized");
            return "# Metrics registry not initialized\n".to_string();
        }
    };

    let metric_families = registry.gather();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return format!("# Failed to encode metrics: {}\n", e);
    }

    match String::from_utf8(buffer) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to convert metrics to UTF-8");
            format!("# Failed to convert metrics to UTF-8: {}\n", e)
        }
    }
}

/// Record the final status of a generation request.
pub fn record_request(variant: &str, status: u16) {
    if let Some(counter) = BRIEF_REQUESTS_TOTAL.get() {
        counter
            .with_label_values(&[variant, &status.to_string()])
            .inc();
    }
}

/// Record completion API latency.
pub fn record_upstream_latency(variant: &str, model: &str, duration_secs: f64) {
    if let Some(histogram) = UPSTREAM_LATENCY_SECONDS.get() {
        histogram
            .with_label_values(&[variant, model])
            .observe(duration_secs);
    }
}

/// Record a completion API failure.
pub fn record_upstream_error(variant: &str, error_type: &str) {
    if let Some(counter) = UPSTREAM_ERRORS_TOTAL.get() {
        counter.with_label_values(&[variant, error_type]).inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_requests_appear_in_exposition() {
        init_metrics();
        init_metrics();

        record_request("clarifying-question", 200);
        record_upstream_error("generic-report", "api_error");

        let text = get_metrics();
        assert!(text.contains("brief_requests_total"));
        assert!(text.contains("variant=\"clarifying-question\""));
        assert!(text.contains("brief_upstream_errors_total"));
    }
}
