use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::formula::{Difficulty, FormulaId};

/// One generated exercise, ready to be shown to a student and scored elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub formula: FormulaId,
    pub operand1: u64,
    /// Only binary formulas carry an explicit second operand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operand2: Option<u64>,
    pub operator: String,
    pub expected_result: u64,
    pub difficulty: Difficulty,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateProblemsRequest {
    pub formula: String,
    #[validate(range(min = 1, max = 500, message = "count must be between 1 and 500"))]
    pub count: u32,
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateByLevelRequest {
    pub difficulty: Difficulty,
    #[validate(range(min = 1, max = 50, message = "per_formula must be between 1 and 50"))]
    pub per_formula: u32,
}

#[derive(Debug, Serialize)]
pub struct ProblemBatchResponse {
    pub difficulty: Difficulty,
    pub total: usize,
    pub problems: Vec<Problem>,
}

fn default_difficulty() -> Difficulty {
    Difficulty::Beginner
}
