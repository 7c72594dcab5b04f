// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod case_code;
mod check_digit;
mod error;
mod identifier;
mod observability;
mod record;
mod repository;
mod store;
mod validation;

// This is the public API of the GS1 case code library
pub use case_code::{compute_master_case_code, CASE_CODE_PREFIX};
pub use check_digit::compute_check_digit;
pub use error::InvalidInputError;
pub use identifier::Identifier;
pub use observability::labels::{Labels, NO_LABEL};
pub use record::ItemRecord;
pub use repository::metrics::{RejectReason, WriteOperation};
pub use repository::ItemRepository;
pub use store::config::{StoreConfig, StoreConfigBuilder};
pub use store::memory::InMemoryItemStore;
pub use store::{ItemStore, StoreError};
pub use validation::{Gs1Checksum, Validator};
