use thiserror::Error;

use crate::config::Config;
use crate::metrics::{record_calculation, record_contract_violation, record_problems};
use crate::models::{CalculationResult, Difficulty, FormulaId, Problem};
use crate::services::formula_catalog::formulas_up_to;
use crate::services::formula_dispatcher::{calculate_by_formula, ContractViolation};
use crate::services::problem_generator::{generate_problems, generate_problems_by_level};

#[derive(Error, Debug)]
pub enum PracticeError {
    #[error("{0}")]
    UnknownFormula(String),

    #[error(transparent)]
    Contract(#[from] ContractViolation),

    #[error("Requested {requested} problems, at most {max} allowed per request")]
    TooManyProblems { requested: usize, max: usize },
}

/// Request-facing wrapper around the engine: parses ids, enforces the
/// per-request limits from config and records metrics.
pub struct PracticeService {
    max_problems: usize,
}

impl PracticeService {
    pub fn new(config: &Config) -> Self {
        Self {
            max_problems: config.max_problems_per_request,
        }
    }

    pub fn calculate(
        &self,
        formula: &str,
        operand1: u64,
        operand2: Option<u64>,
    ) -> Result<CalculationResult, PracticeError> {
        let formula: FormulaId = formula.parse().map_err(PracticeError::UnknownFormula)?;

        match calculate_by_formula(formula, operand1, operand2) {
            Ok(result) => {
                record_calculation(&result);
                Ok(result)
            }
            Err(violation) => {
                tracing::info!(
                    formula = %formula,
                    operand1,
                    operand2 = ?operand2,
                    kind = violation.kind(),
                    "Calculation rejected: {}",
                    violation
                );
                record_contract_violation(&violation);
                Err(violation.into())
            }
        }
    }

    pub fn generate(
        &self,
        formula: &str,
        count: usize,
        difficulty: Difficulty,
    ) -> Result<Vec<Problem>, PracticeError> {
        let formula: FormulaId = formula.parse().map_err(PracticeError::UnknownFormula)?;
        self.check_limit(count)?;

        let problems = generate_problems(formula, count, difficulty);
        record_problems(&problems);
        Ok(problems)
    }

    pub fn generate_by_level(
        &self,
        difficulty: Difficulty,
        per_formula: usize,
    ) -> Result<Vec<Problem>, PracticeError> {
        let eligible = formulas_up_to(difficulty).count();
        self.check_limit(eligible * per_formula)?;

        let problems = generate_problems_by_level(difficulty, per_formula);
        record_problems(&problems);
        Ok(problems)
    }

    fn check_limit(&self, requested: usize) -> Result<(), PracticeError> {
        if requested > self.max_problems {
            return Err(PracticeError::TooManyProblems {
                requested,
                max: self.max_problems,
            });
        }
        Ok(())
    }
}
