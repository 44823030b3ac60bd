mod common;

use axum::http::StatusCode;
use common::{create_test_app, expect_json, post_json};
use serde_json::json;

#[tokio::test]
async fn generates_problems_for_one_formula() {
    let body = expect_json(
        post_json(
            create_test_app(),
            "/api/v1/problems",
            json!({"formula": "divide-2", "count": 20, "difficulty": "intermediate"}),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    assert_eq!(body["total"], 20);
    assert_eq!(body["difficulty"], "intermediate");
    for problem in body["problems"].as_array().unwrap() {
        let operand1 = problem["operand1"].as_u64().unwrap();
        assert_eq!(operand1 % 2, 0);
        assert_eq!(problem["expected_result"].as_u64().unwrap(), operand1 / 2);
        assert_eq!(problem["formula"], "divide-2");
        assert_eq!(problem["operator"], "÷");
        assert!(problem["id"].as_str().unwrap().len() == 36);
        assert!(problem.get("operand2").is_none());
    }
}

#[tokio::test]
async fn generated_problems_trace_back_to_their_answer() {
    let app = create_test_app();
    let body = expect_json(
        post_json(
            app.clone(),
            "/api/v1/problems",
            json!({"formula": "subtract-complement", "count": 5, "difficulty": "advanced"}),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    for problem in body["problems"].as_array().unwrap() {
        let traced = expect_json(
            post_json(
                app.clone(),
                "/api/v1/calculations",
                json!({
                    "formula": problem["formula"],
                    "operand1": problem["operand1"],
                    "operand2": problem["operand2"],
                }),
            )
            .await,
            StatusCode::OK,
        )
        .await;
        assert_eq!(traced["result"], problem["expected_result"]);
    }
}

#[tokio::test]
async fn difficulty_defaults_to_beginner() {
    let body = expect_json(
        post_json(
            create_test_app(),
            "/api/v1/problems",
            json!({"formula": "add-5", "count": 3}),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["difficulty"], "beginner");
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn rejects_bad_generation_requests() {
    let cases = [
        json!({"formula": "add-5", "count": 0}),
        json!({"formula": "add-5", "count": 501}),
        // Above the configured per-request limit of 100
        json!({"formula": "add-5", "count": 150}),
        json!({"formula": "add-55", "count": 3}),
        json!({"formula": "add-5", "count": 3, "difficulty": "impossible"}),
    ];

    for request in cases {
        let response = post_json(create_test_app(), "/api/v1/problems", request.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", request);
    }
}

#[tokio::test]
async fn by_level_draws_only_eligible_formulas() {
    let body = expect_json(
        post_json(
            create_test_app(),
            "/api/v1/problems/by-level",
            json!({"difficulty": "beginner", "per_formula": 5}),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    let problems = body["problems"].as_array().unwrap();
    assert_eq!(body["total"], problems.len());
    assert_eq!(problems.len(), 50);

    let beginner = [
        "add-simple",
        "add-5",
        "add-10",
        "subtract-simple",
        "subtract-5",
        "subtract-10",
        "multiply-2",
        "multiply-10",
        "divide-2",
        "divide-10",
    ];
    assert!(problems
        .iter()
        .all(|p| beginner.contains(&p["formula"].as_str().unwrap())));
}

#[tokio::test]
async fn by_level_respects_request_limit() {
    // 22 formulas at expert, 22 * 5 = 110 > 100
    let response = post_json(
        create_test_app(),
        "/api/v1/problems/by-level",
        json!({"difficulty": "expert", "per_formula": 5}),
    )
    .await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert!(body["message"].as_str().unwrap().contains("110"));
}
