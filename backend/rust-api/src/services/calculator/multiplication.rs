use super::addition::add_complement;
use super::division::divide_2;
use super::subtraction::subtract_complement;
use super::Trace;
use crate::models::{CalculationResult, CalculationStep, FormulaId};

/// Appends a zero digit. Never decomposed further.
pub fn multiply_10(a: u64) -> CalculationResult {
    let mut trace = Trace::new();
    let result = a * 10;
    trace.push(
        CalculationStep::new(
            format!("{} × 10 = {}", a, result),
            "Shift every digit one column left and write 0 in the units",
            result,
        )
        .at_position(0),
    );
    trace.finish(FormulaId::Multiply10, a, None, result, None)
}

pub fn multiply_2(a: u64) -> CalculationResult {
    let mut trace = Trace::new();
    trace.push(CalculationStep::new(
        format!("{} × 2 = {} + {}", a, a, a),
        "Doubling is adding the number to itself",
        a,
    ));
    let result = trace.absorb(add_complement(a, a));
    trace.finish(FormulaId::Multiply2, a, None, result, None)
}

/// `a × 5 = a × 10 ÷ 2`
pub fn multiply_5(a: u64) -> CalculationResult {
    let mut trace = Trace::new();
    let tenfold = trace.absorb(multiply_10(a));
    let result = trace.absorb(divide_2(tenfold));
    trace.finish(FormulaId::Multiply5, a, None, result, None)
}

/// `a × 9 = a × 10 − a`, subtracted column by column.
pub fn multiply_9(a: u64) -> CalculationResult {
    let mut trace = Trace::new();
    let tenfold = trace.absorb(multiply_10(a));
    let result = trace.absorb(subtract_complement(tenfold, a));
    trace.finish(FormulaId::Multiply9, a, None, result, None)
}

/// `a × 11 = a × 10 + a`
pub fn multiply_11(a: u64) -> CalculationResult {
    let mut trace = Trace::new();
    let tenfold = trace.absorb(multiply_10(a));
    let result = trace.absorb(add_complement(tenfold, a));
    trace.finish(FormulaId::Multiply11, a, None, result, None)
}

/// `a × 25 = a × 100 ÷ 4`
pub fn multiply_25(a: u64) -> CalculationResult {
    let mut trace = Trace::new();
    let result = scale_then_halve(a, 2, &mut trace);
    trace.finish(FormulaId::Multiply25, a, None, result, None)
}

/// `a × 125 = a × 1000 ÷ 8`
pub fn multiply_125(a: u64) -> CalculationResult {
    let mut trace = Trace::new();
    let result = scale_then_halve(a, 3, &mut trace);
    trace.finish(FormulaId::Multiply125, a, None, result, None)
}

/// Multiplies by 10 `times` times, then halves `times` times.
fn scale_then_halve(a: u64, times: usize, trace: &mut Trace) -> u64 {
    let mut value = a;
    for _ in 0..times {
        value = trace.absorb(multiply_10(value));
    }
    for _ in 0..times {
        value = trace.absorb(divide_2(value));
    }
    value
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
    fn multiply_10_single_step() {
        let result = multiply_10(123);
        assert_eq!(result.result, 1230);
        assert_eq!(result.steps.len(), 1);
        assert_eq!(multiply_10(0).result, 0);
    }

    #[test]
    fn multiply_2_doubles_with_carries() {
        let result = multiply_2(57);
        assert_eq!(result.result, 114);
        assert_trace(&result);
    }

    #[test]
    fn multiply_9_from_ten_minus_one() {
        let result = multiply_9(12);
        assert_eq!(result.result, 108);
        assert_eq!(result.summary, "12 × 9 = 108");
        assert_trace(&result);

        for a in [0, 1, 9, 10, 99, 1234, 999_999_999] {
            assert_eq!(multiply_9(a).result, a * 9, "{} × 9", a);
        }
    }

    #[test]
    fn multiply_5_and_11() {
        assert_eq!(multiply_5(37).result, 185);
        assert_eq!(multiply_11(58).result, 638);
        assert_trace(&multiply_5(37));
        assert_trace(&multiply_11(58));
    }

    #[test]
    fn multiply_25_and_125_match_direct_product() {
        for a in [0, 1, 3, 7, 16, 99, 123, 4567, 999_999] {
            let r25 = multiply_25(a);
            assert_eq!(r25.result, a * 25, "{} × 25", a);
            assert_trace(&r25);

            let r125 = multiply_125(a);
            assert_eq!(r125.result, a * 125, "{} × 125", a);
            assert_trace(&r125);
        }
    }

    #[test]
    fn composed_trace_has_no_numbering_resets() {
        let result = multiply_125(7);
        let numbers: Vec<u32> = result.steps.iter().map(|s| s.step_number).collect();
        let expected: Vec<u32> = (1..=result.steps.len() as u32).collect();
        assert_eq!(numbers, expected);
        assert!(result.steps.len() > 3);
    }
}
