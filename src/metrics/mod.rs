//! Prometheus metrics for monitoring
//!
//! Exposes metrics for:
//! - Transaction submissions by request type
//! - Submission failures and latency
//! - Faucet requests

use crate::types::ExecuteTransactionRequestType;

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, Encoder, HistogramVec,
    TextEncoder,
};

lazy_static! {
    pub static ref TX_SUBMITTED: CounterVec = register_counter_vec!(
        "sui_submitter_transactions_submitted_total",
        "Total transactions submitted",
        &["request_type"]
    ).unwrap();

    pub static ref TX_FAILED: CounterVec = register_counter_vec!(
        "sui_submitter_transactions_failed_total",
        "Total transaction submissions that failed",
        &["request_type"]
    ).unwrap();

    pub static ref TX_LATENCY: HistogramVec = register_histogram_vec!(
        "sui_submitter_transaction_latency_seconds",
        "Time from submission to node response",
        &["request_type"],
        vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]
    ).unwrap();

    pub static ref FAUCET_REQUESTS: CounterVec = register_counter_vec!(
        "sui_submitter_faucet_requests_total",
        "Total faucet requests by outcome",
        &["outcome"]
    ).unwrap();
}

pub fn record_tx_submitted(request_type: ExecuteTransactionRequestType) {
    TX_SUBMITTED
        .with_label_values(&[request_type.as_str()])
        .inc();
}

pub fn record_tx_failed(request_type: ExecuteTransactionRequestType) {
    TX_FAILED
        .with_label_values(&[request_type.as_str()])
        .inc();
}

pub fn record_tx_latency(request_type: ExecuteTransactionRequestType, latency_secs: f64) {
    TX_LATENCY
        .with_label_values(&[request_type.as_str()])
        .observe(latency_secs);
}

pub fn record_faucet_request(success: bool) {
    FAUCET_REQUESTS
        .with_label_values(&[if success { "success" } else { "failure" }])
        .inc();
}

/// Render all registered metrics in the Prometheus text format
pub fn gather() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::warn!("Failed to encode metrics: {}", e);
    }
    String::from_utf8(buffer).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_includes_recorded_submission() {
        record_tx_submitted(ExecuteTransactionRequestType::WaitForEffectsCert);
        record_tx_latency(ExecuteTransactionRequestType::WaitForEffectsCert, 0.3);

        let text = gather();
        assert!(text.contains("sui_submitter_transactions_submitted_total"));
        assert!(text.contains("WaitForEffectsCert"));
    }
}
