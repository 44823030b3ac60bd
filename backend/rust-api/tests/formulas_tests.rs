mod common;

use axum::http::StatusCode;
use common::{create_test_app, expect_json, get};

#[tokio::test]
async fn lists_whole_catalog() {
    let body = expect_json(get(create_test_app(), "/api/v1/formulas").await, StatusCode::OK).await;
    assert_eq!(body["total"], 22);

    let formulas = body["formulas"].as_array().unwrap();
    assert_eq!(formulas[0]["id"], "add-simple");
    assert!(formulas.iter().any(|f| f["id"] == "add-6-to-9"));
}

#[tokio::test]
async fn filters_by_difficulty_and_category() {
    let body = expect_json(
        get(create_test_app(), "/api/v1/formulas?difficulty=expert").await,
        StatusCode::OK,
    )
    .await;
    let ids: Vec<&str> = body["formulas"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["multiply-125", "divide-8"]);

    let body = expect_json(
        get(create_test_app(), "/api/v1/formulas?category=div&difficulty=beginner").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["total"], 2);
    assert!(body["formulas"]
        .as_array()
        .unwrap()
        .iter()
        .all(|f| f["category"] == "div" && f["difficulty"] == "beginner"));
}

#[tokio::test]
async fn rejects_unknown_filter_values() {
    let response = get(create_test_app(), "/api/v1/formulas?difficulty=legendary").await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn gets_single_formula() {
    let body = expect_json(
        get(create_test_app(), "/api/v1/formulas/subtract-6-to-9").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["id"], "subtract-6-to-9");
    assert_eq!(body["category"], "sub");
    assert_eq!(body["operand2"]["kind"], "range");
    assert_eq!(body["operand2"]["min"], 6);
    assert_eq!(body["operand2"]["max"], 9);

    // Constant-style names resolve to the same entry
    let body = expect_json(
        get(create_test_app(), "/api/v1/formulas/MULTIPLY_9").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["id"], "multiply-9");
    assert_eq!(body["operand2"]["kind"], "none");
}

#[tokio::test]
async fn unknown_formula_is_404() {
    let response = get(create_test_app(), "/api/v1/formulas/multiply-7").await;
    expect_json(response, StatusCode::NOT_FOUND).await;
}
