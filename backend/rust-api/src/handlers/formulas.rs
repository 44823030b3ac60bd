use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use super::ApiError;
use crate::models::{Category, Difficulty, FormulaId, FormulaInfo};
use crate::services::formula_catalog::{all_formulas, formula_info};

#[derive(Debug, Default, Deserialize)]
pub struct FormulaListQuery {
    pub difficulty: Option<String>,
    pub category: Option<String>,
}

/// GET /api/v1/formulas
pub async fn list_formulas(
    Query(query): Query<FormulaListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let difficulty = query
        .difficulty
        .as_deref()
        .map(str::parse::<Difficulty>)
        .transpose()
        .map_err(ApiError::bad_request)?;
    let category = query
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()
        .map_err(ApiError::bad_request)?;

    let formulas: Vec<&FormulaInfo> = all_formulas()
        .iter()
        .filter(|info| difficulty.is_none_or(|d| info.difficulty == d))
        .filter(|info| category.is_none_or(|c| info.category == c))
        .collect();

    Ok(Json(json!({
        "total": formulas.len(),
        "formulas": formulas
    })))
}

/// GET /api/v1/formulas/{id}
pub async fn get_formula(Path(id): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let formula: FormulaId = id
        .parse()
        .map_err(|_| ApiError::not_found(format!("Formula not found: {}", id)))?;
    Ok(Json(formula_info(formula)))
}
