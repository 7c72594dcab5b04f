use crate::check_digit::weighted_check_digit;
use crate::error::InvalidInputError;
use crate::identifier::{digit_values, validate_digits};

/// Prepended to a GTIN before its case-level check digit is computed.
///
/// Both characters are kept: an 11-digit GTIN becomes a 14-digit master case code.
pub const CASE_CODE_PREFIX: &str = "10";

/// Derives the master case code (GTIN-14) of `gtin`.
///
/// The result is `CASE_CODE_PREFIX + gtin` followed by a check digit computed over
/// that whole string, so it is always three characters longer than `gtin`.
/// Error positions refer to `gtin` itself.
pub fn compute_master_case_code(gtin: &str) -> Result<String, InvalidInputError> {
    validate_digits(gtin)?;
    Ok(derive_master_case_code(gtin))
}

pub(crate) fn derive_master_case_code(gtin: &str) -> String {
    let mut case_code = String::with_capacity(CASE_CODE_PREFIX.len() + gtin.len() + 1);
    case_code.push_str(CASE_CODE_PREFIX);
    case_code.push_str(gtin);
    let check = weighted_check_digit(digit_values(&case_code));
    case_code.push(check);
    case_code
}
