use super::{column, propagate_carry, Trace};
use crate::models::{CalculationResult, CalculationStep, FormulaId};
use crate::utils::digits::{
    digit_at, digits_to_number, get_digit_count, place_name, split_into_digits,
};

/// Adds a small amount (1..=4) on the units rod.
pub fn add_simple(a: u64, b: u64) -> CalculationResult {
    let mut trace = Trace::new();
    let result = add_to_units(a, b as u8, &mut trace);
    trace.finish(FormulaId::AddSimple, a, Some(b), result, None)
}

fn add_to_units(a: u64, amount: u8, trace: &mut Trace) -> u64 {
    let mut digits = split_into_digits(a);
    let units = column(&digits, 0);
    let sum = units + amount;

    if sum < 10 {
        let last = digits.len() - 1;
        digits[last] = sum;
        let explanation = if units < 5 && sum >= 5 {
            format!(
                "Lower the upper bead (+5) and remove {} lower bead(s)",
                5 - amount
            )
        } else {
            format!("Move {} lower bead(s) up on the units rod", amount)
        };
        trace.push(
            CalculationStep::new(
                format!("{} + {} = {}", units, amount, sum),
                explanation,
                digits_to_number(&digits),
            )
            .at_position(0),
        );
        return digits_to_number(&digits);
    }

    let last = digits.len() - 1;
    digits[last] = sum - 10;
    trace.push(
        CalculationStep::new(
            format!("{} + {} = {}", units, amount, sum),
            format!(
                "Not enough room on the units rod: take away {} and carry 1 to the tens",
                10 - amount
            ),
            digits_to_number(&digits),
        )
        .at_position(0)
        .with_carry(1),
    );
    propagate_carry(&mut digits, 1, 1, trace);
    digits_to_number(&digits)
}

/// Adds 5 by lowering the upper bead, or by +10 −5 when it is already down.
pub fn add_5(a: u64) -> CalculationResult {
    let mut trace = Trace::new();
    let result = add_five(a, &mut trace);
    trace.finish(FormulaId::Add5, a, None, result, None)
}

fn add_five(a: u64, trace: &mut Trace) -> u64 {
    let mut digits = split_into_digits(a);
    let units = column(&digits, 0);
    let last = digits.len() - 1;

    if units < 5 {
        digits[last] = units + 5;
        trace.push(
            CalculationStep::new(
                format!("{} + 5 = {}", units, units + 5),
                "Lower the upper bead on the units rod",
                digits_to_number(&digits),
            )
            .at_position(0),
        );
        return digits_to_number(&digits);
    }

    digits[last] = units - 5;
    trace.push(
        CalculationStep::new(
            format!("{} + 5 = {}", units, units + 5),
            "The upper bead is already down: raise it (-5) and carry 10 to the tens",
            digits_to_number(&digits),
        )
        .at_position(0)
        .with_carry(1),
    );
    propagate_carry(&mut digits, 1, 1, trace);
    digits_to_number(&digits)
}

/// `a + b` for `b` in 6..=9, done as `+5` followed by `+(b-5)`.
pub fn add_6_to_9(a: u64, b: u64) -> CalculationResult {
    let mut trace = Trace::new();
    trace.push(CalculationStep::new(
        format!("{} = 5 + {}", b, b - 5),
        format!("Split {} into 5 and {}", b, b - 5),
        a,
    ));

    let after_five = trace.absorb(add_5(a));
    let result = trace.absorb(add_simple(after_five, b - 5));
    trace.finish(FormulaId::Add6To9, a, Some(b), result, None)
}

pub fn add_10(a: u64) -> CalculationResult {
    let mut trace = Trace::new();
    let result = a + 10;
    trace.push(
        CalculationStep::new(
            format!("{} + 10 = {}", a, result),
            format!(
                "Move one bead up on the tens rod; the units stay at {}",
                digit_at(a, 0)
            ),
            result,
        )
        .at_position(1),
    );
    trace.finish(FormulaId::Add10, a, None, result, None)
}

/// Column addition right to left with a carry across both operands.
pub fn add_complement(a: u64, b: u64) -> CalculationResult {
    let mut trace = Trace::new();
    let result = add_columns(a, b, &mut trace);
    trace.finish(FormulaId::AddComplement, a, Some(b), result, None)
}

fn add_columns(a: u64, b: u64, trace: &mut Trace) -> u64 {
    let width = get_digit_count(a).max(get_digit_count(b)) as usize;
    let mut written = 0u64;
    let mut place = 1u64;
    let mut carry = 0u8;

    for position in 0..width {
        let da = digit_at(a, position);
        let db = digit_at(b, position);
        let sum = da + db + carry;
        let digit = sum % 10;
        written += u64::from(digit) * place;

        let operation = if carry > 0 {
            format!("{} + {} + {} = {}", da, db, carry, sum)
        } else {
            format!("{} + {} = {}", da, db, sum)
        };
        carry = sum / 10;

        let step = if carry > 0 {
            CalculationStep::new(
                operation,
                format!(
                    "Write {} in the {} column and carry {}",
                    digit,
                    place_name(position),
                    carry
                ),
                written,
            )
            .with_carry(u64::from(carry))
        } else {
            CalculationStep::new(
                operation,
                format!("Write {} in the {} column", digit, place_name(position)),
                written,
            )
        };
        trace.push(step.at_position(position));
        place *= 10;
    }

    if carry > 0 {
        written += u64::from(carry) * place;
        trace.push(
            CalculationStep::new(
                format!("carry {}", carry),
                format!("The final carry opens the {} column", place_name(width)),
                written,
            )
            .at_position(width),
        );
    }

    written
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_trace(result: &CalculationResult) {
        assert!(!result.steps.is_empty());
        for (index, step) in result.steps.iter().enumerate() {
            assert_eq!(step.step_number as usize, index + 1);
        }
        assert_eq!(result.final_value(), Some(result.result));
    }

    #[test]
    fn add_simple_without_carry() {
        let result = add_simple(23, 3);
        assert_eq!(result.result, 26);
        assert_eq!(result.steps.len(), 1);
        assert!(result.steps[0].explanation.contains("upper bead"));
        assert_trace(&result);
    }

    #[test]
    fn add_simple_carries_through_nines() {
        let result = add_simple(999, 3);
        assert_eq!(result.result, 1002);
        assert_eq!(result.steps[0].carry, Some(1));
        assert_trace(&result);
    }

    #[test]
    fn add_5_uses_upper_bead_or_carry() {
        assert_eq!(add_5(12).result, 17);
        assert_eq!(add_5(12).steps.len(), 1);

        let carried = add_5(47);
        assert_eq!(carried.result, 52);
        assert_eq!(carried.steps.len(), 2);
        assert_trace(&carried);

        assert_eq!(add_5(0).result, 5);
        assert_eq!(add_5(95).result, 100);
    }

    #[test]
    fn add_6_to_9_composes_children() {
        let result = add_6_to_9(34, 7);
        assert_eq!(result.result, 41);
        assert_eq!(result.operand2, Some(7));
        assert_eq!(result.summary, "34 + 7 = 41");
        assert_trace(&result);

        for a in [0, 5, 9, 48, 99, 995] {
            for b in 6..=9 {
                let r = add_6_to_9(a, b);
                assert_eq!(r.result, a + b, "{} + {}", a, b);
                assert_trace(&r);
            }
        }
    }

    #[test]
    fn add_10_is_a_single_step() {
        let result = add_10(95);
        assert_eq!(result.result, 105);
        assert_eq!(result.steps.len(), 1);
        assert_trace(&result);
    }

    #[test]
    fn add_complement_pads_shorter_operand() {
        let result = add_complement(987, 45);
        assert_eq!(result.result, 1032);
        assert_eq!(result.steps.len(), 4);
        assert_eq!(result.steps[3].digit_position, Some(3));
        assert_trace(&result);
    }

    #[test]
    fn add_complement_handles_zero() {
        let result = add_complement(0, 0);
        assert_eq!(result.result, 0);
        assert_eq!(result.steps.len(), 1);
        assert_trace(&result);
    }

    #[test]
    fn add_simple_full_grid() {
        for a in 0..200 {
            for b in 1..=4 {
                let r = add_simple(a, b);
                assert_eq!(r.result, a + b);
                assert_trace(&r);
            }
        }
    }
}
