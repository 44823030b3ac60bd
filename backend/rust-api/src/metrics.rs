use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};

use crate::models::{CalculationResult, Problem};
use crate::services::formula_dispatcher::ContractViolation;

lazy_static! {
    // HTTP Metrics
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .unwrap();

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .unwrap();

    // Engine Metrics
    pub static ref CALCULATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "calculations_total",
        "Total number of traced calculations",
        &["formula", "outcome"]
    )
    .unwrap();

    pub static ref CALCULATION_STEPS: HistogramVec = register_histogram_vec!(
        "calculation_steps",
        "Number of steps in a calculation trace",
        &["formula"],
        vec![1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0]
    )
    .unwrap();

    pub static ref CONTRACT_VIOLATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "contract_violations_total",
        "Total number of rejected calculations by violated contract",
        &["formula", "kind"]
    )
    .unwrap();

    pub static ref PROBLEMS_GENERATED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "problems_generated_total",
        "Total number of generated practice problems",
        &["formula", "difficulty"]
    )
    .unwrap();
}

/// Renders all metrics in Prometheus text format
pub fn render_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| prometheus::Error::Msg(format!("Failed to convert metrics to UTF-8: {}", e)))
}

pub fn record_calculation(result: &CalculationResult) {
    let formula = result.formula.as_str();
    CALCULATIONS_TOTAL.with_label_values(&[formula, "ok"]).inc();
    CALCULATION_STEPS
        .with_label_values(&[formula])
        .observe(result.steps.len() as f64);
}

pub fn record_contract_violation(violation: &ContractViolation) {
    let formula = violation.formula().as_str();
    CALCULATIONS_TOTAL
        .with_label_values(&[formula, "rejected"])
        .inc();
    CONTRACT_VIOLATIONS_TOTAL
        .with_label_values(&[formula, violation.kind()])
        .inc();
}

pub fn record_problems(problems: &[Problem]) {
    for problem in problems {
        PROBLEMS_GENERATED_TOTAL
            .with_label_values(&[problem.formula.as_str(), problem.difficulty.as_str()])
            .inc();
    }
}
