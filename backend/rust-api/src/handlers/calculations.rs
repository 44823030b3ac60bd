use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use super::ApiError;
use crate::extractors::ValidJson;
use crate::models::calculation::CalculateRequest;
use crate::services::AppState;

/// POST /api/v1/calculations
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CalculateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .practice
        .calculate(&req.formula, req.operand1, req.operand2)?;
    Ok(Json(result))
}
