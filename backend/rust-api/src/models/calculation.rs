use serde::{Deserialize, Serialize};
use validator::Validate;

use super::formula::FormulaId;

/// One narrated move in a calculation trace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalculationStep {
    pub step_number: u32,
    pub operation: String,
    pub explanation: String,
    /// Value shown on the abacus right after this move.
    pub current_value: u64,
    /// Column touched by the move, counted from the right (0 = units).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digit_position: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carry: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrow: Option<u64>,
}

impl CalculationStep {
    pub fn new(
        operation: impl Into<String>,
        explanation: impl Into<String>,
        current_value: u64,
    ) -> Self {
        Self {
            step_number: 0,
            operation: operation.into(),
            explanation: explanation.into(),
            current_value,
            digit_position: None,
            carry: None,
            borrow: None,
        }
    }

    pub fn at_position(mut self, position: usize) -> Self {
        self.digit_position = Some(position);
        self
    }

    pub fn with_carry(mut self, carry: u64) -> Self {
        self.carry = Some(carry);
        self
    }

    pub fn with_borrow(mut self, borrow: u64) -> Self {
        self.borrow = Some(borrow);
        self
    }
}

/// Outcome of one traced calculation. Owns its steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalculationResult {
    pub formula: FormulaId,
    pub operand1: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operand2: Option<u64>,
    pub result: u64,
    /// Set by division formulas when the operand does not divide exactly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remainder: Option<u64>,
    pub steps: Vec<CalculationStep>,
    pub summary: String,
}

impl CalculationResult {
    pub fn is_exact(&self) -> bool {
        self.remainder.is_none()
    }

    pub fn final_value(&self) -> Option<u64> {
        self.steps.last().map(|step| step.current_value)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CalculateRequest {
    pub formula: String,
    #[validate(range(max = 999_999_999, message = "operand1 must have at most 9 digits"))]
    pub operand1: u64,
    #[validate(range(max = 999_999_999, message = "operand2 must have at most 9 digits"))]
    pub operand2: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_builders_set_optional_fields() {
        let step = CalculationStep::new("7 + 5", "carry into tens", 12)
            .at_position(0)
            .with_carry(1);
        assert_eq!(step.digit_position, Some(0));
        assert_eq!(step.carry, Some(1));
        assert_eq!(step.borrow, None);
        assert_eq!(step.step_number, 0);
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let step = CalculationStep::new("append 0", "shift left", 120);
        let json = serde_json::to_value(&step).unwrap();
        assert!(json.get("carry").is_none());
        assert!(json.get("digit_position").is_none());
        assert_eq!(json["current_value"], 120);
    }

    #[test]
    fn calculate_request_rejects_oversized_operands() {
        let req = CalculateRequest {
            formula: "multiply-2".to_string(),
            operand1: 1_000_000_000,
            operand2: None,
        };
        assert!(req.validate().is_err());

        let ok = CalculateRequest {
            formula: "multiply-2".to_string(),
            operand1: 42,
            operand2: None,
        };
        assert!(ok.validate().is_ok());
    }
}
