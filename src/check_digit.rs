use crate::error::InvalidInputError;
use crate::identifier::{digit_values, validate_digits};

/// Computes the GS1 check digit of `base`.
///
/// Digits are weighted from the right: the rightmost digit has weight 3, the next
/// one weight 1, then 3 again, and so on. The check digit is whatever brings the
/// weighted sum up to the next multiple of 10.
///
/// ```
/// assert_eq!(gs1_case_code::compute_check_digit("04210000526"), Ok('4'));
/// ```
pub fn compute_check_digit(base: &str) -> Result<char, InvalidInputError> {
    validate_digits(base)?;
    Ok(weighted_check_digit(digit_values(base)))
}

pub(crate) fn weighted_check_digit(digits: impl DoubleEndedIterator<Item = u32>) -> char {
    // Both sums only matter modulo 10, so reduce as we go to stay length-agnostic.
    let mut evens = 0;
    let mut odds = 0;
    for (position, digit) in digits.rev().enumerate() {
        if position % 2 == 0 {
            evens = (evens + digit) % 10;
        } else {
            odds = (odds + digit) % 10;
        }
    }

    let remainder = (odds + 3 * evens) % 10;
    let check = if remainder == 0 { 0 } else { 10 - remainder };
    // check is always in 0..=9
    char::from(b'0' + check as u8)
}
