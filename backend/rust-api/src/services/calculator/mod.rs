//! Step-trace algorithms, one per formula.
//!
//! Algorithms here trust their inputs and are private to the crate: range and
//! sign checks live in [`crate::services::formula_dispatcher`], the only way
//! in. Every algorithm returns an owned [`CalculationResult`]; composed
//! formulas fold their children's steps into a parent [`Trace`], which
//! renumbers them so the narrative reads 1..N.

pub mod addition;
pub mod division;
pub mod multiplication;
pub mod subtraction;

use crate::models::{CalculationResult, CalculationStep, FormulaId};
use crate::services::formula_catalog::formula_info;
use crate::utils::digits::{digits_to_number, place_name, trim_leading_zeros};

/// Assigns consecutive step numbers starting at `start`.
pub fn renumber_steps(steps: &mut [CalculationStep], start: u32) {
    for (offset, step) in steps.iter_mut().enumerate() {
        step.step_number = start + offset as u32;
    }
}

/// Ordered steps of one calculation under construction.
#[derive(Debug, Default)]
pub struct Trace {
    steps: Vec<CalculationStep>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut step: CalculationStep) {
        step.step_number = self.steps.len() as u32 + 1;
        self.steps.push(step);
    }

    /// Appends a finished sub-calculation and returns its result so the caller
    /// can keep composing.
    pub fn absorb(&mut self, child: CalculationResult) -> u64 {
        let mut steps = child.steps;
        renumber_steps(&mut steps, self.steps.len() as u32 + 1);
        self.steps.extend(steps);
        child.result
    }

    pub fn finish(
        self,
        formula: FormulaId,
        operand1: u64,
        operand2: Option<u64>,
        result: u64,
        remainder: Option<u64>,
    ) -> CalculationResult {
        debug_assert!(!self.steps.is_empty(), "{} produced no steps", formula);
        debug_assert_eq!(
            self.steps.last().map(|step| step.current_value),
            Some(result),
            "{} trace does not end on its result",
            formula
        );

        let mut steps = self.steps;
        renumber_steps(&mut steps, 1);

        CalculationResult {
            formula,
            operand1,
            operand2,
            result,
            remainder,
            summary: summary_label(formula, operand1, operand2, result, remainder),
            steps,
        }
    }
}

fn summary_label(
    formula: FormulaId,
    operand1: u64,
    operand2: Option<u64>,
    result: u64,
    remainder: Option<u64>,
) -> String {
    let symbol = formula_info(formula).category.symbol();
    let rhs = operand2.or_else(|| formula.implicit_operand()).unwrap_or(0);
    match remainder {
        Some(rest) => format!(
            "{} {} {} = {} remainder {}",
            operand1, symbol, rhs, result, rest
        ),
        None => format!("{} {} {} = {}", operand1, symbol, rhs, result),
    }
}

/// Digit `position` columns from the right, or 0 past the leftmost digit.
pub(crate) fn column(digits: &[u8], position: usize) -> u8 {
    if position < digits.len() {
        digits[digits.len() - 1 - position]
    } else {
        0
    }
}

fn set_column(digits: &mut [u8], position: usize, value: u8) {
    let index = digits.len() - 1 - position;
    digits[index] = value;
}

/// Pushes `carry` into column `position` and lets it ripple left through any
/// run of 9s, opening a new leftmost column when it survives past the end.
pub(crate) fn propagate_carry(
    digits: &mut Vec<u8>,
    mut position: usize,
    mut carry: u8,
    trace: &mut Trace,
) {
    while carry > 0 {
        if position >= digits.len() {
            digits.insert(0, carry);
            trace.push(
                CalculationStep::new(
                    format!("new {} digit {}", place_name(position), carry),
                    format!(
                        "The carry passes the leftmost column and opens the {} column",
                        place_name(position)
                    ),
                    digits_to_number(digits),
                )
                .at_position(position),
            );
            return;
        }

        let before = column(digits, position);
        let sum = before + carry;
        set_column(digits, position, sum % 10);
        let next = sum / 10;

        let step = if next > 0 {
            CalculationStep::new(
                format!("{} + {} = {}", before, carry, sum),
                format!(
                    "The {} column overflows: write {} and carry {} left",
                    place_name(position),
                    sum % 10,
                    next
                ),
                digits_to_number(digits),
            )
            .with_carry(u64::from(next))
        } else {
            CalculationStep::new(
                format!("{} + {} = {}", before, carry, sum),
                format!("The carry lands in the {} column", place_name(position)),
                digits_to_number(digits),
            )
        };
        trace.push(step.at_position(position));

        carry = next;
        position += 1;
    }
}

/// Takes a borrowed 1 from column `position` or the first nonzero column
/// left of it, turning each empty column on the way into 9. Leading zeros are
/// trimmed afterwards.
pub(crate) fn propagate_borrow(digits: &mut Vec<u8>, mut position: usize, trace: &mut Trace) {
    while position < digits.len() {
        let before = column(digits, position);
        if before == 0 {
            set_column(digits, position, 9);
            trace.push(
                CalculationStep::new(
                    "0 - 1 → 9".to_string(),
                    format!(
                        "The {} column is empty: borrow from further left and leave 9",
                        place_name(position)
                    ),
                    digits_to_number(digits),
                )
                .at_position(position)
                .with_borrow(1),
            );
            position += 1;
            continue;
        }

        set_column(digits, position, before - 1);
        trace.push(
            CalculationStep::new(
                format!("{} - 1 = {}", before, before - 1),
                format!("Take the borrowed 1 from the {} column", place_name(position)),
                digits_to_number(digits),
            )
            .at_position(position)
            .with_borrow(1),
        );
        break;
    }

    trim_leading_zeros(digits);
}
