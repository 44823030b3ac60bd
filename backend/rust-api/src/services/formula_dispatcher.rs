//! Single entry point for traced calculations.
//!
//! Every call is checked against the catalog contract before any algorithm
//! runs, so a failed call never yields a partial trace.

use thiserror::Error;

use crate::models::{CalculationResult, FormulaId, FormulaInfo, Operand2Contract};
use crate::services::calculator::{addition, division, multiplication, subtraction};
use crate::services::formula_catalog::formula_info;
use crate::utils::digits::get_digit_count;

/// A call that breaks the formula's declared contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("{formula} requires a second operand")]
    MissingOperand { formula: FormulaId },

    #[error("{formula} takes no second operand, got {operand}")]
    UnexpectedOperand { formula: FormulaId, operand: u64 },

    #[error("{formula} requires the second operand in [{min}, {max}], got {operand}")]
    OperandOutOfRange {
        formula: FormulaId,
        operand: u64,
        min: u64,
        max: u64,
    },

    #[error(
        "{formula} accepts operands with {min_digits} to {max_digits} digits, got {operand} ({digits} digits)"
    )]
    DigitCountOutOfRange {
        formula: FormulaId,
        operand: u64,
        digits: u32,
        min_digits: u32,
        max_digits: u32,
    },

    #[error("{formula} would produce a negative result for {operand1} - {operand2}")]
    NegativeResult {
        formula: FormulaId,
        operand1: u64,
        operand2: u64,
    },
}

impl ContractViolation {
    pub fn formula(&self) -> FormulaId {
        match self {
            ContractViolation::MissingOperand { formula }
            | ContractViolation::UnexpectedOperand { formula, .. }
            | ContractViolation::OperandOutOfRange { formula, .. }
            | ContractViolation::DigitCountOutOfRange { formula, .. }
            | ContractViolation::NegativeResult { formula, .. } => *formula,
        }
    }

    /// Stable label for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ContractViolation::MissingOperand { .. } => "missing_operand",
            ContractViolation::UnexpectedOperand { .. } => "unexpected_operand",
            ContractViolation::OperandOutOfRange { .. } => "operand_out_of_range",
            ContractViolation::DigitCountOutOfRange { .. } => "digit_count_out_of_range",
            ContractViolation::NegativeResult { .. } => "negative_result",
        }
    }
}

/// Validates `operand1`/`operand2` against the catalog and runs the formula.
pub fn calculate_by_formula(
    formula: FormulaId,
    operand1: u64,
    operand2: Option<u64>,
) -> Result<CalculationResult, ContractViolation> {
    let info = formula_info(formula);
    check_contract(info, operand1, operand2)?;

    tracing::debug!(
        formula = %formula,
        operand1,
        operand2 = ?operand2,
        "Running traced calculation"
    );

    let result = route(formula, operand1, operand2);

    tracing::debug!(
        formula = %formula,
        result = result.result,
        steps = result.steps.len(),
        "Traced calculation finished"
    );

    Ok(result)
}

/// Checks presence and range of both operands, and that subtractions stay
/// non-negative.
pub fn check_contract(
    info: &FormulaInfo,
    operand1: u64,
    operand2: Option<u64>,
) -> Result<(), ContractViolation> {
    check_digits(info, operand1)?;

    let rhs = match (info.operand2, operand2) {
        (Operand2Contract::None, None) => None,
        (Operand2Contract::None, Some(operand)) => {
            return Err(ContractViolation::UnexpectedOperand {
                formula: info.id,
                operand,
            })
        }
        (_, None) => return Err(ContractViolation::MissingOperand { formula: info.id }),
        (Operand2Contract::Range { min, max }, Some(operand)) => {
            if operand < min || operand > max {
                return Err(ContractViolation::OperandOutOfRange {
                    formula: info.id,
                    operand,
                    min,
                    max,
                });
            }
            Some(operand)
        }
        (Operand2Contract::Digits, Some(operand)) => {
            check_digits(info, operand)?;
            Some(operand)
        }
    };

    if let Some(subtrahend) = subtrahend(info.id, rhs) {
        if operand1 < subtrahend {
            return Err(ContractViolation::NegativeResult {
                formula: info.id,
                operand1,
                operand2: subtrahend,
            });
        }
    }

    Ok(())
}

fn check_digits(info: &FormulaInfo, operand: u64) -> Result<(), ContractViolation> {
    let digits = get_digit_count(operand);
    if digits < info.min_digits || digits > info.max_digits {
        return Err(ContractViolation::DigitCountOutOfRange {
            formula: info.id,
            operand,
            digits,
            min_digits: info.min_digits,
            max_digits: info.max_digits,
        });
    }
    Ok(())
}

/// Amount a subtraction formula takes away, if `formula` subtracts.
fn subtrahend(formula: FormulaId, operand2: Option<u64>) -> Option<u64> {
    match formula {
        FormulaId::SubtractSimple | FormulaId::Subtract6To9 | FormulaId::SubtractComplement => {
            operand2
        }
        FormulaId::Subtract5 => Some(5),
        FormulaId::Subtract10 => Some(10),
        _ => None,
    }
}

fn route(formula: FormulaId, a: u64, operand2: Option<u64>) -> CalculationResult {
    // Binary formulas are only reached after check_contract saw operand2.
    let b = operand2.unwrap_or_default();
    match formula {
        FormulaId::AddSimple => addition::add_simple(a, b),
        FormulaId::Add5 => addition::add_5(a),
        FormulaId::Add6To9 => addition::add_6_to_9(a, b),
        FormulaId::Add10 => addition::add_10(a),
        FormulaId::AddComplement => addition::add_complement(a, b),
        FormulaId::SubtractSimple => subtraction::subtract_simple(a, b),
        FormulaId::Subtract5 => subtraction::subtract_5(a),
        FormulaId::Subtract6To9 => subtraction::subtract_6_to_9(a, b),
        FormulaId::Subtract10 => subtraction::subtract_10(a),
        FormulaId::SubtractComplement => subtraction::subtract_complement(a, b),
        FormulaId::Multiply2 => multiplication::multiply_2(a),
        FormulaId::Multiply5 => multiplication::multiply_5(a),
        FormulaId::Multiply9 => multiplication::multiply_9(a),
        FormulaId::Multiply10 => multiplication::multiply_10(a),
        FormulaId::Multiply11 => multiplication::multiply_11(a),
        FormulaId::Multiply25 => multiplication::multiply_25(a),
        FormulaId::Multiply125 => multiplication::multiply_125(a),
        FormulaId::Divide2 => division::divide_2(a),
        FormulaId::Divide4 => division::divide_4(a),
        FormulaId::Divide5 => division::divide_5(a),
        FormulaId::Divide8 => division::divide_8(a),
        FormulaId::Divide10 => division::divide_10(a),
    }
}
