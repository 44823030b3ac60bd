mod common;

use axum::http::StatusCode;
use common::{body_text, create_test_app, expect_json, get, get_with_basic_auth};

#[tokio::test]
async fn health_reports_catalog_size() {
    let response = get(create_test_app(), "/health").await;
    assert!(response.headers().contains_key("x-trace-id"));

    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "mentalmath-api");
    assert_eq!(body["formulas"], 22);
    assert_eq!(body["max_problems_per_request"], 100);
}

#[tokio::test]
async fn metrics_requires_basic_auth() {
    let response = get(create_test_app(), "/metrics").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_with_basic_auth(create_test_app(), "/metrics", "admin:changeme").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn metrics_exposes_http_and_engine_counters() {
    get(create_test_app(), "/health").await;
    common::post_json(
        create_test_app(),
        "/api/v1/calculations",
        serde_json::json!({"formula": "multiply-11", "operand1": 42}),
    )
    .await;

    let response = get_with_basic_auth(create_test_app(), "/metrics", "metrics:secret").await;
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_text(response).await;
    assert!(text.contains("http_requests_total"));
    assert!(text.contains("calculations_total"));
    assert!(text.contains("multiply-11"));
}

#[tokio::test]
async fn caller_trace_id_is_echoed() {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    let response = create_test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-trace-id", "trace-abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-trace-id"], "trace-abc-123");
}
