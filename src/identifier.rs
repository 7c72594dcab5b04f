use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::case_code::derive_master_case_code;
use crate::check_digit::weighted_check_digit;
use crate::error::InvalidInputError;

/// A GS1 identifier: a non-empty run of ASCII decimal digits.
///
/// No length is imposed here. GTIN-8 through GTIN-14 and SSCC all share the same
/// check digit algorithm, so any length is accepted. Length limits belong to
/// whatever stores the identifier (see [`StoreConfig`](crate::StoreConfig)).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidInputError> {
        let value = value.into();
        validate_digits(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The GS1 check digit computed over this identifier.
    pub fn check_digit(&self) -> char {
        weighted_check_digit(digit_values(&self.0))
    }

    /// The GTIN-14 master case code derived from this identifier.
    pub fn master_case_code(&self) -> String {
        derive_master_case_code(&self.0)
    }
}

/// Returns an error for the first character that keeps `input` from being an identifier.
pub(crate) fn validate_digits(input: &str) -> Result<(), InvalidInputError> {
    if input.is_empty() {
        return Err(InvalidInputError::Empty);
    }
    match input.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        Some((index, character)) => Err(InvalidInputError::NonDigit { index, character }),
        None => Ok(()),
    }
}

/// Numeric values of a string that already passed [`validate_digits`].
pub(crate) fn digit_values(digits: &str) -> impl DoubleEndedIterator<Item = u32> + '_ {
    digits.bytes().map(|b| u32::from(b - b'0'))
}

impl FromStr for Identifier {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::new(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = InvalidInputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Identifier::new(value)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by `Identifier` be queried with a plain `&str`.
impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
