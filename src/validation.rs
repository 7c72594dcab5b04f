use crate::check_digit::weighted_check_digit;
use crate::identifier::digit_values;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

/// Accepts complete GS1 codes (GTIN, master case code, SSCC) whose last digit is
/// the check digit of the digits before it.
pub struct Gs1Checksum;

impl Validator for Gs1Checksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        if candidate.len() < 2 || !candidate.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        let (base, check) = candidate.split_at(candidate.len() - 1);
        check.starts_with(weighted_check_digit(digit_values(base)))
    }
}
