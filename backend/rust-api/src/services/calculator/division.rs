use super::multiplication::multiply_2;
use super::Trace;
use crate::models::{CalculationResult, CalculationStep, FormulaId};
use crate::utils::digits::{digit_at, digits_to_number, split_into_digits, trim_leading_zeros};

/// Long division by 2, one digit at a time from the left.
pub fn divide_2(a: u64) -> CalculationResult {
    let mut trace = Trace::new();
    let digits = split_into_digits(a);
    let width = digits.len();
    let mut quotient: Vec<u8> = Vec::with_capacity(width);
    let mut remainder = 0u8;

    for (index, &digit) in digits.iter().enumerate() {
        let position = width - 1 - index;
        let current = remainder * 10 + digit;
        let q = current / 2;
        remainder = current % 2;
        quotient.push(q);

        let explanation = if index == 0 && q == 0 && width > 1 {
            format!("{} is smaller than 2: write nothing and carry it on", digit)
        } else if remainder > 0 && position > 0 {
            format!("Write {} and carry the remainder 1 as 10 into the next digit", q)
        } else if remainder > 0 {
            format!("Write {}; 1 is left over", q)
        } else {
            format!("Write {}", q)
        };

        trace.push(
            CalculationStep::new(
                format!("{} ÷ 2 = {} r {}", current, q, remainder),
                explanation,
                digits_to_number(&quotient),
            )
            .at_position(position),
        );
    }

    trim_leading_zeros(&mut quotient);
    let result = digits_to_number(&quotient);
    let remainder = (remainder > 0).then_some(u64::from(remainder));
    trace.finish(FormulaId::Divide2, a, None, result, remainder)
}

/// Drops the units digit; a nonzero units digit becomes the remainder.
pub fn divide_10(a: u64) -> CalculationResult {
    let mut trace = Trace::new();
    let result = a / 10;
    let units = digit_at(a, 0);

    let remainder = if units == 0 {
        trace.push(
            CalculationStep::new(
                format!("{} ÷ 10 = {}", a, result),
                "The units digit is 0: drop it and shift every digit one column right",
                result,
            )
            .at_position(0),
        );
        None
    } else {
        trace.push(
            CalculationStep::new(
                format!("{} ÷ 10 = {} r {}", a, result, units),
                format!(
                    "Drop the units digit; {} does not divide by 10 and is the remainder",
                    units
                ),
                result,
            )
            .at_position(0),
        );
        Some(u64::from(units))
    };

    trace.finish(FormulaId::Divide10, a, None, result, remainder)
}

/// `a ÷ 4` as two halvings.
pub fn divide_4(a: u64) -> CalculationResult {
    let mut trace = Trace::new();
    let (result, remainder) = halve_repeatedly(a, 2, &mut trace);
    trace.finish(FormulaId::Divide4, a, None, result, remainder)
}

/// `a ÷ 8` as three halvings.
pub fn divide_8(a: u64) -> CalculationResult {
    let mut trace = Trace::new();
    let (result, remainder) = halve_repeatedly(a, 3, &mut trace);
    trace.finish(FormulaId::Divide8, a, None, result, remainder)
}

/// Halves `times` times. The leftovers of each halving recombine into the
/// remainder of the whole division: `r1 + 2·r2 + 4·r3`.
fn halve_repeatedly(a: u64, times: u32, trace: &mut Trace) -> (u64, Option<u64>) {
    let mut value = a;
    let mut remainder = 0u64;
    for round in 0..times {
        let half = divide_2(value);
        remainder += half.remainder.unwrap_or(0) << round;
        value = trace.absorb(half);
    }
    (value, (remainder > 0).then_some(remainder))
}

/// `a ÷ 5` as doubling followed by dropping the units digit.
pub fn divide_5(a: u64) -> CalculationResult {
    let mut trace = Trace::new();
    trace.push(CalculationStep::new(
        format!("{} ÷ 5 = {} × 2 ÷ 10", a, a),
        "Dividing by 5 is the same as doubling and then dividing by 10",
        a,
    ));

    let doubled = trace.absorb(multiply_2(a));
    let tenth = divide_10(doubled);
    // 2a mod 10 is twice a mod 5
    let remainder = tenth.remainder.map(|rest| rest / 2);
    let result = trace.absorb(tenth);
    trace.finish(FormulaId::Divide5, a, None, result, remainder)
}
