//! # Metrics
//!
//! Prometheus metrics for monitoring the controller.
//!
//! ## Metrics Exposed
//!
//! - `pulsar_resources_reconciliations_total` - Total number of connection reconciliations
//! - `pulsar_resources_reconciliation_errors_total` - Total number of reconciliation errors
//! - `pulsar_resources_reconciliation_duration_seconds` - Duration of reconciliation operations
//! - `pulsar_resources_connection_requests_mapped_total` - Connection requests produced by the
//!   event mapper, labeled by the dependent kind that triggered them
//! - `pulsar_resources_unmapped_events_total` - Dependent-resource events that carried no
//!   connection reference, labeled by kind

use anyhow::Result;
use prometheus::{Histogram, IntCounter, IntCounterVec, Opts, Registry};
use std::sync::LazyLock;

pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

static RECONCILIATIONS_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "pulsar_resources_reconciliations_total",
        "Total number of connection reconciliations",
    )
    .expect("Failed to create RECONCILIATIONS_TOTAL metric - this should never happen")
});

static RECONCILIATION_ERRORS_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "pulsar_resources_reconciliation_errors_total",
        "Total number of reconciliation errors",
    )
    .expect("Failed to create RECONCILIATION_ERRORS_TOTAL metric - this should never happen")
});

static RECONCILIATION_DURATION: LazyLock<Histogram> = LazyLock::new(|| {
    Histogram::with_opts(
        prometheus::HistogramOpts::new(
            "pulsar_resources_reconciliation_duration_seconds",
            "Duration of reconciliation in seconds",
        )
        .buckets(vec![0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0]),
    )
    .expect("Failed to create RECONCILIATION_DURATION metric - this should never happen")
});

static CONNECTION_REQUESTS_MAPPED_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        Opts::new(
            "pulsar_resources_connection_requests_mapped_total",
            "Connection reconcile requests produced by the event mapper",
        ),
        &["kind"],
    )
    .expect("Failed to create CONNECTION_REQUESTS_MAPPED_TOTAL metric - this should never happen")
});

static UNMAPPED_EVENTS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        Opts::new(
            "pulsar_resources_unmapped_events_total",
            "Dependent-resource events that carried no connection reference",
        ),
        &["kind"],
    )
    .expect("Failed to create UNMAPPED_EVENTS_TOTAL metric - this should never happen")
});

/// Register all metrics with the registry. Call once at startup.
pub fn register_metrics() -> Result<()> {
    REGISTRY.register(Box::new(RECONCILIATIONS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(RECONCILIATION_ERRORS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(RECONCILIATION_DURATION.clone()))?;
    REGISTRY.register(Box::new(CONNECTION_REQUESTS_MAPPED_TOTAL.clone()))?;
    REGISTRY.register(Box::new(UNMAPPED_EVENTS_TOTAL.clone()))?;
    Ok(())
}

pub fn increment_reconciliations() {
    RECONCILIATIONS_TOTAL.inc();
}

pub fn increment_reconciliation_errors() {
    RECONCILIATION_ERRORS_TOTAL.inc();
}

pub fn observe_reconciliation_duration(seconds: f64) {
    RECONCILIATION_DURATION.observe(seconds);
}

/// Record the outcome of mapping one dependent-resource event.
pub fn observe_mapped_requests(kind: &str, mapped: usize) {
    if mapped == 0 {
        UNMAPPED_EVENTS_TOTAL.with_label_values(&[kind]).inc();
    } else {
        CONNECTION_REQUESTS_MAPPED_TOTAL
            .with_label_values(&[kind])
            .inc_by(mapped as u64);
    }
}
