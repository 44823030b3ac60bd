use mentalmath_api::models::{CalculationResult, FormulaId};
use mentalmath_api::services::formula_dispatcher::calculate_by_formula;
use mentalmath_api::utils::digits::{digits_to_number, get_digit_count, split_into_digits};
use proptest::prelude::*;

fn assert_well_formed(result: &CalculationResult) {
    for (i, step) in result.steps.iter().enumerate() {
        assert_eq!(step.step_number as usize, i + 1, "{}", result.summary);
    }
    assert_eq!(result.final_value(), Some(result.result), "{}", result.summary);
}

proptest! {
    #[test]
    fn digits_round_trip(n in 0u64..1_000_000_000) {
        let digits = split_into_digits(n);
        prop_assert_eq!(digits.len() as u32, get_digit_count(n));
        prop_assert!(digits.iter().all(|d| *d <= 9));
        prop_assert_eq!(digits_to_number(&digits), n);
    }

    #[test]
    fn small_amount_formulas_match_arithmetic(
        a in 10u64..1_000_000,
        small in 1u64..=4,
        big in 6u64..=9,
    ) {
        let cases = [
            (FormulaId::AddSimple, Some(small), a + small),
            (FormulaId::Add5, None, a + 5),
            (FormulaId::Add6To9, Some(big), a + big),
            (FormulaId::Add10, None, a + 10),
            (FormulaId::SubtractSimple, Some(small), a - small),
            (FormulaId::Subtract5, None, a - 5),
            (FormulaId::Subtract6To9, Some(big), a - big),
            (FormulaId::Subtract10, None, a - 10),
        ];
        for (formula, operand2, expected) in cases {
            let result = calculate_by_formula(formula, a, operand2).unwrap();
            prop_assert_eq!(result.result, expected, "{}", formula);
            assert_well_formed(&result);
        }
    }

    #[test]
    fn column_formulas_match_arithmetic(a in 0u64..1_000_000_000, b in 0u64..1_000_000_000) {
        let sum = calculate_by_formula(FormulaId::AddComplement, a, Some(b)).unwrap();
        prop_assert_eq!(sum.result, a + b);
        assert_well_formed(&sum);

        let (high, low) = if a >= b { (a, b) } else { (b, a) };
        let difference =
            calculate_by_formula(FormulaId::SubtractComplement, high, Some(low)).unwrap();
        prop_assert_eq!(difference.result, high - low);
        assert_well_formed(&difference);
    }

    #[test]
    fn multiplication_matches_arithmetic(a in 0u64..1_000_000_000) {
        for (formula, factor) in [
            (FormulaId::Multiply2, 2),
            (FormulaId::Multiply5, 5),
            (FormulaId::Multiply9, 9),
            (FormulaId::Multiply10, 10),
            (FormulaId::Multiply11, 11),
            (FormulaId::Multiply25, 25),
            (FormulaId::Multiply125, 125),
        ] {
            let result = calculate_by_formula(formula, a, None).unwrap();
            prop_assert_eq!(result.result, a * factor, "{}", formula);
            assert_well_formed(&result);
        }
    }

    #[test]
    fn division_matches_arithmetic(a in 0u64..1_000_000_000) {
        for (formula, divisor) in [
            (FormulaId::Divide2, 2),
            (FormulaId::Divide4, 4),
            (FormulaId::Divide5, 5),
            (FormulaId::Divide8, 8),
            (FormulaId::Divide10, 10),
        ] {
            let result = calculate_by_formula(formula, a, None).unwrap();
            prop_assert_eq!(result.result, a / divisor, "{}", formula);
            let remainder = result.remainder.unwrap_or(0);
            prop_assert_eq!(remainder, a % divisor, "{}", formula);
            prop_assert_eq!(result.is_exact(), a % divisor == 0);
            assert_well_formed(&result);
        }
    }
}
