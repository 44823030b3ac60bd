use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use super::ApiError;
use crate::extractors::ValidJson;
use crate::models::problem::{GenerateByLevelRequest, GenerateProblemsRequest, ProblemBatchResponse};
use crate::services::AppState;

/// POST /api/v1/problems
pub async fn generate_problems(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<GenerateProblemsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let problems = state
        .practice
        .generate(&req.formula, req.count as usize, req.difficulty)?;

    tracing::info!(
        formula = %req.formula,
        difficulty = %req.difficulty,
        generated = problems.len(),
        "Generated problems"
    );

    Ok(Json(ProblemBatchResponse {
        difficulty: req.difficulty,
        total: problems.len(),
        problems,
    }))
}

/// POST /api/v1/problems/by-level
pub async fn generate_problems_by_level(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<GenerateByLevelRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let problems = state
        .practice
        .generate_by_level(req.difficulty, req.per_formula as usize)?;

    Ok(Json(ProblemBatchResponse {
        difficulty: req.difficulty,
        total: problems.len(),
        problems,
    }))
}
