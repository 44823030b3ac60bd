use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::models::{Category, Difficulty, FormulaId, FormulaInfo, Operand2Contract, Problem};
use crate::services::formula_catalog::{formula_info, formulas_up_to};
use crate::services::formula_dispatcher::check_contract;

/// Rejection-sampling budget for a single problem slot.
const MAX_ATTEMPTS_PER_PROBLEM: usize = 1_000;

/// `count` problems for one formula at `difficulty`, drawn from the thread RNG.
pub fn generate_problems(formula: FormulaId, count: usize, difficulty: Difficulty) -> Vec<Problem> {
    generate_problems_with_rng(formula, count, difficulty, &mut rand::rng())
}

pub fn generate_problems_with_rng<R: Rng + ?Sized>(
    formula: FormulaId,
    count: usize,
    difficulty: Difficulty,
    rng: &mut R,
) -> Vec<Problem> {
    let info = formula_info(formula);
    let problems = generate_in_range(
        info,
        operand_range(info, difficulty),
        count,
        difficulty,
        rng,
    );

    tracing::debug!(
        formula = %formula,
        difficulty = %difficulty,
        requested = count,
        generated = problems.len(),
        "Generated problems"
    );
    problems
}

/// Fills up to `count` slots from `range`. A missing range yields an empty
/// batch; a slot whose sampling budget runs out is skipped.
fn generate_in_range<R: Rng + ?Sized>(
    info: &FormulaInfo,
    range: Option<(u64, u64)>,
    count: usize,
    difficulty: Difficulty,
    rng: &mut R,
) -> Vec<Problem> {
    let Some((low, high)) = range else {
        tracing::warn!(
            formula = %info.id,
            difficulty = %difficulty,
            "No operand range satisfies both the tier and the formula digit range"
        );
        return Vec::new();
    };

    let mut problems = Vec::with_capacity(count);
    for _ in 0..count {
        match sample_operands(info, low, high, rng) {
            Some((operand1, operand2)) => {
                problems.push(build_problem(info, operand1, operand2, difficulty))
            }
            None => tracing::warn!(
                formula = %info.id,
                difficulty = %difficulty,
                attempts = MAX_ATTEMPTS_PER_PROBLEM,
                "Gave up sampling a problem"
            ),
        }
    }
    problems
}

/// `per_formula` problems for every formula at or below `tier`, shuffled
/// together.
pub fn generate_problems_by_level(tier: Difficulty, per_formula: usize) -> Vec<Problem> {
    generate_problems_by_level_with_rng(tier, per_formula, &mut rand::rng())
}

pub fn generate_problems_by_level_with_rng<R: Rng + ?Sized>(
    tier: Difficulty,
    per_formula: usize,
    rng: &mut R,
) -> Vec<Problem> {
    let mut problems: Vec<Problem> = Vec::new();
    for info in formulas_up_to(tier) {
        problems.extend(generate_problems_with_rng(info.id, per_formula, tier, rng));
    }
    problems.shuffle(rng);

    tracing::info!(
        tier = %tier,
        per_formula,
        total = problems.len(),
        "Generated problem set for tier"
    );
    problems
}

/// Tier magnitude intersected with the formula's digit range.
fn operand_range(info: &FormulaInfo, difficulty: Difficulty) -> Option<(u64, u64)> {
    let (tier_low, tier_high) = difficulty.operand_range();
    let (formula_low, formula_high) = info.operand_bounds();
    let low = tier_low.max(formula_low);
    let high = tier_high.min(formula_high);
    (low <= high).then_some((low, high))
}

fn sample_operands<R: Rng + ?Sized>(
    info: &FormulaInfo,
    low: u64,
    high: u64,
    rng: &mut R,
) -> Option<(u64, Option<u64>)> {
    for _ in 0..MAX_ATTEMPTS_PER_PROBLEM {
        let candidate = match (info.category, info.operand2) {
            (Category::Div, _) => sample_dividend(info, low, high, rng),
            (_, Operand2Contract::None) => (rng.random_range(low..=high), None),
            (_, Operand2Contract::Range { min, max }) => (
                rng.random_range(low..=high),
                Some(rng.random_range(min..=max)),
            ),
            (_, Operand2Contract::Digits) => (
                rng.random_range(low..=high),
                Some(rng.random_range(low..=high)),
            ),
        };

        if is_teachable(info.id, candidate.0, candidate.1)
            && check_contract(info, candidate.0, candidate.1).is_ok()
        {
            return Some(candidate);
        }
    }
    None
}

/// Picks the quotient first so the dividend always divides exactly.
fn sample_dividend<R: Rng + ?Sized>(
    info: &FormulaInfo,
    low: u64,
    high: u64,
    rng: &mut R,
) -> (u64, Option<u64>) {
    let divisor = info.id.implicit_operand().unwrap_or(1);
    let quotient = rng.random_range(low..=high);
    (quotient * divisor, None)
}

/// Pedagogical filters on top of the dispatcher contract: complement
/// formulas only make sense when a carry or borrow actually happens.
fn is_teachable(formula: FormulaId, operand1: u64, operand2: Option<u64>) -> bool {
    match (formula, operand2) {
        (FormulaId::AddComplement, Some(b)) => produces_carry(operand1, b),
        (FormulaId::SubtractComplement, Some(b)) => operand1 >= b && needs_borrow(operand1, b),
        _ => true,
    }
}

pub(crate) fn produces_carry(a: u64, b: u64) -> bool {
    let (mut a, mut b) = (a, b);
    while a > 0 || b > 0 {
        if a % 10 + b % 10 >= 10 {
            return true;
        }
        a /= 10;
        b /= 10;
    }
    false
}

/// Assumes `a >= b`. Without an earlier borrow, the first column whose top
/// digit is smaller than the bottom one is where borrowing starts.
pub(crate) fn needs_borrow(a: u64, b: u64) -> bool {
    let (mut a, mut b) = (a, b);
    while b > 0 {
        if a % 10 < b % 10 {
            return true;
        }
        a /= 10;
        b /= 10;
    }
    false
}

/// Direct evaluation, independent of the step-trace algorithms.
pub fn evaluate(formula: FormulaId, operand1: u64, operand2: Option<u64>) -> u64 {
    let info = formula_info(formula);
    let rhs = operand2
        .or_else(|| formula.implicit_operand())
        .unwrap_or(0);
    match info.category {
        Category::Add => operand1 + rhs,
        Category::Sub => operand1.saturating_sub(rhs),
        Category::Mul => operand1 * rhs,
        Category::Div => operand1 / rhs.max(1),
    }
}

fn build_problem(
    info: &FormulaInfo,
    operand1: u64,
    operand2: Option<u64>,
    difficulty: Difficulty,
) -> Problem {
    let operator = info.category.symbol();
    let rhs = operand2
        .or_else(|| info.id.implicit_operand())
        .unwrap_or(0);

    Problem {
        id: Uuid::new_v4().to_string(),
        formula: info.id,
        operand1,
        operand2,
        operator: operator.to_string(),
        expected_result: evaluate(info.id, operand1, operand2),
        difficulty,
        question: format!("{} {} {} = ?", operand1, operator, rhs),
        hint: Some(info.hint.to_string()),
        created_at: Utc::now(),
    }
}
