use super::{column, propagate_borrow, Trace};
use crate::models::{CalculationResult, CalculationStep, FormulaId};
use crate::utils::digits::{
    digit_at, digits_to_number, get_digit_count, place_name, split_into_digits,
};

/// Subtracts a small amount (1..=4) on the units rod.
pub fn subtract_simple(a: u64, b: u64) -> CalculationResult {
    let mut trace = Trace::new();
    let result = subtract_from_units(a, b as u8, &mut trace);
    trace.finish(FormulaId::SubtractSimple, a, Some(b), result, None)
}

/// Borrow chain on the units digit. Accepts amounts up to 10: with 10 the
/// units digit is left as it was and the whole move is the borrow from the
/// tens.
fn subtract_from_units(a: u64, amount: u8, trace: &mut Trace) -> u64 {
    let mut digits = split_into_digits(a);
    let units = column(&digits, 0);
    let last = digits.len() - 1;

    if units >= amount {
        let difference = units - amount;
        digits[last] = difference;
        let explanation = if units >= 5 && difference < 5 {
            format!(
                "Raise the upper bead (-5) and add back {} lower bead(s)",
                5 - amount
            )
        } else {
            format!("Move {} lower bead(s) down on the units rod", amount)
        };
        trace.push(
            CalculationStep::new(
                format!("{} - {} = {}", units, amount, difference),
                explanation,
                digits_to_number(&digits),
            )
            .at_position(0),
        );
        return digits_to_number(&digits);
    }

    let borrowed = units + 10 - amount;
    digits[last] = borrowed;
    let explanation = if amount == 10 {
        format!(
            "Taking 10 leaves the units at {}: borrow 1 from the tens",
            units
        )
    } else {
        format!(
            "Not enough on the units rod: borrow 10 from the tens and give back {}",
            10 - amount
        )
    };
    trace.push(
        CalculationStep::new(
            format!("{} + 10 - {} = {}", units, amount, borrowed),
            explanation,
            digits_to_number(&digits),
        )
        .at_position(0)
        .with_borrow(1),
    );
    propagate_borrow(&mut digits, 1, trace);
    digits_to_number(&digits)
}

/// Subtracts 5 by raising the upper bead, or by −10 +5 when it is up.
pub fn subtract_5(a: u64) -> CalculationResult {
    let mut trace = Trace::new();
    let mut digits = split_into_digits(a);
    let units = column(&digits, 0);
    let last = digits.len() - 1;

    if units >= 5 {
        digits[last] = units - 5;
        trace.push(
            CalculationStep::new(
                format!("{} - 5 = {}", units, units - 5),
                "Raise the upper bead on the units rod",
                digits_to_number(&digits),
            )
            .at_position(0),
        );
    } else {
        digits[last] = units + 5;
        trace.push(
            CalculationStep::new(
                format!("{} + 10 - 5 = {}", units, units + 5),
                "The upper bead is up: borrow 10 from the tens and lower it (+5)",
                digits_to_number(&digits),
            )
            .at_position(0)
            .with_borrow(1),
        );
        propagate_borrow(&mut digits, 1, &mut trace);
    }

    let result = digits_to_number(&digits);
    trace.finish(FormulaId::Subtract5, a, None, result, None)
}

/// `a - b` for `b` in 6..=9, done as `-5` followed by `-(b-5)`.
pub fn subtract_6_to_9(a: u64, b: u64) -> CalculationResult {
    let mut trace = Trace::new();
    trace.push(CalculationStep::new(
        format!("{} = 5 + {}", b, b - 5),
        format!("Split {} into 5 and {}", b, b - 5),
        a,
    ));

    let after_five = trace.absorb(subtract_5(a));
    let result = trace.absorb(subtract_simple(after_five, b - 5));
    trace.finish(FormulaId::Subtract6To9, a, Some(b), result, None)
}

/// Reuses the units borrow chain with an amount of 10.
pub fn subtract_10(a: u64) -> CalculationResult {
    let mut trace = Trace::new();
    let result = subtract_from_units(a, 10, &mut trace);
    trace.finish(FormulaId::Subtract10, a, None, result, None)
}

/// Column subtraction right to left, borrowing from the next column.
pub fn subtract_complement(a: u64, b: u64) -> CalculationResult {
    let mut trace = Trace::new();
    let result = subtract_columns(a, b, &mut trace);
    trace.finish(FormulaId::SubtractComplement, a, Some(b), result, None)
}

fn subtract_columns(a: u64, b: u64, trace: &mut Trace) -> u64 {
    let width = get_digit_count(a) as usize;
    let mut written = 0u64;
    let mut place = 1u64;
    let mut borrow = 0u8;

    for position in 0..width {
        let da = digit_at(a, position);
        let db = digit_at(b, position);
        let taken = db + borrow;

        let operation = if borrow > 0 {
            format!("{} - {} - {}", da, db, borrow)
        } else {
            format!("{} - {}", da, db)
        };

        let step = if da >= taken {
            let digit = da - taken;
            written += u64::from(digit) * place;
            borrow = 0;
            CalculationStep::new(
                format!("{} = {}", operation, digit),
                format!("Write {} in the {} column", digit, place_name(position)),
                written,
            )
        } else {
            let digit = da + 10 - taken;
            written += u64::from(digit) * place;
            borrow = 1;
            CalculationStep::new(
                format!("{} + 10 = {}", operation, digit),
                format!(
                    "{} is too small: borrow 10 from the {} column and write {}",
                    da,
                    place_name(position + 1),
                    digit
                ),
                written,
            )
            .with_borrow(1)
        };
        trace.push(step.at_position(position));
        place *= 10;
    }

    written
}
