//! Base-10 digit helpers shared by the step-trace algorithms.
//!
//! Digit sequences are most-significant-first, so `1203` becomes `[1, 2, 0, 3]`.

/// Splits `n` into its decimal digits, most significant first. Zero is `[0]`.
pub fn split_into_digits(n: u64) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }

    let mut digits = Vec::with_capacity(get_digit_count(n) as usize);
    let mut rest = n;
    while rest > 0 {
        digits.push((rest % 10) as u8);
        rest /= 10;
    }
    digits.reverse();
    digits
}

/// Folds a most-significant-first digit sequence back into a number.
pub fn digits_to_number(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0u64, |acc, &digit| acc * 10 + u64::from(digit))
}

/// Number of decimal digits in `n`; zero counts as one digit.
pub fn get_digit_count(n: u64) -> u32 {
    if n == 0 {
        1
    } else {
        n.ilog10() + 1
    }
}

/// Digit at `position` counted from the right (0 = units). Positions beyond
/// the most significant digit read as zero.
pub fn digit_at(n: u64, position: usize) -> u8 {
    let mut rest = n;
    for _ in 0..position {
        rest /= 10;
        if rest == 0 {
            return 0;
        }
    }
    (rest % 10) as u8
}

/// Drops leading zeros but always keeps at least one digit.
pub fn trim_leading_zeros(digits: &mut Vec<u8>) {
    let first_nonzero = digits
        .iter()
        .position(|&d| d != 0)
        .unwrap_or(digits.len().saturating_sub(1));
    digits.drain(..first_nonzero);
    if digits.is_empty() {
        digits.push(0);
    }
}

/// Human-readable name of a column counted from the right.
pub fn place_name(position: usize) -> String {
    match position {
        0 => "units".to_string(),
        1 => "tens".to_string(),
        2 => "hundreds".to_string(),
        3 => "thousands".to_string(),
        4 => "ten-thousands".to_string(),
        5 => "hundred-thousands".to_string(),
        6 => "millions".to_string(),
        n => format!("10^{}", n),
    }
}
