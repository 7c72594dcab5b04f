pub mod config;
pub mod memory;

use thiserror::Error;

use crate::error::InvalidInputError;
use crate::identifier::Identifier;
use crate::record::ItemRecord;
use crate::store::config::StoreConfig;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The item code is not a valid identifier
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    /// The item code does not fit the configured column width
    #[error("Item code has {length} digits but at most {max} are allowed")]
    ItemCodeTooLong { length: usize, max: usize },

    #[error("An item with code {0} already exists")]
    DuplicateItemCode(String),

    #[error("Master case code {0} is already used by another item")]
    DuplicateMasterCaseCode(String),

    #[error("No item with code {0}")]
    NotFound(String),
}

/// Persistence for [`ItemRecord`]s.
///
/// Implementations own the primary key (item code) and the unique master case code.
/// A failed write must leave the store unchanged.
pub trait ItemStore {
    fn config(&self) -> &StoreConfig;

    fn get(&self, item_code: &Identifier) -> Option<&ItemRecord>;

    fn insert(&mut self, record: ItemRecord) -> Result<(), StoreError>;

    /// Replaces the row stored under `current` with `record`, which may carry a new item code.
    fn replace(&mut self, current: &Identifier, record: ItemRecord) -> Result<(), StoreError>;

    fn remove(&mut self, item_code: &Identifier) -> Result<ItemRecord, StoreError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rejects item codes that are wider than the configured column.
pub(crate) fn check_item_code_length(
    config: &StoreConfig,
    item_code: &Identifier,
) -> Result<(), StoreError> {
    match config.max_item_code_length {
        Some(max) if item_code.as_str().len() > max => Err(StoreError::ItemCodeTooLong {
            length: item_code.as_str().len(),
            max,
        }),
        _ => Ok(()),
    }
}
