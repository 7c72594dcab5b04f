use thiserror::Error;

/// Rejection of a string that cannot be used as a GS1 identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("Identifiers must contain at least one digit")]
    Empty,

    #[error("Identifiers may only contain ASCII digits, found {character:?} at index {index}")]
    NonDigit { index: usize, character: char },
}
