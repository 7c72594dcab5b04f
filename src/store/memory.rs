use std::collections::{BTreeMap, HashMap};

use crate::identifier::Identifier;
use crate::record::ItemRecord;
use crate::store::config::StoreConfig;
use crate::store::{check_item_code_length, ItemStore, StoreError};

/// An [`ItemStore`] kept in memory, with the same key constraints as the item table.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    config: StoreConfig,
    rows: BTreeMap<Identifier, ItemRecord>,
    // master case code -> item code
    case_codes: HashMap<String, Identifier>,
}

impl InMemoryItemStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            rows: BTreeMap::new(),
            case_codes: HashMap::new(),
        }
    }

    /// Stored records, ordered by item code.
    pub fn records(&self) -> impl Iterator<Item = &ItemRecord> {
        self.rows.values()
    }

    fn check_case_code_free(
        &self,
        record: &ItemRecord,
        owner: Option<&Identifier>,
    ) -> Result<(), StoreError> {
        match self.case_codes.get(record.master_case_code()) {
            Some(existing) if Some(existing) != owner => Err(StoreError::DuplicateMasterCaseCode(
                record.master_case_code().to_string(),
            )),
            _ => Ok(()),
        }
    }
}

impl ItemStore for InMemoryItemStore {
    fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn get(&self, item_code: &Identifier) -> Option<&ItemRecord> {
        self.rows.get(item_code)
    }

    fn insert(&mut self, record: ItemRecord) -> Result<(), StoreError> {
        check_item_code_length(&self.config, record.item_code())?;
        if self.rows.contains_key(record.item_code()) {
            return Err(StoreError::DuplicateItemCode(
                record.item_code().to_string(),
            ));
        }
        self.check_case_code_free(&record, None)?;

        self.case_codes.insert(
            record.master_case_code().to_string(),
            record.item_code().clone(),
        );
        self.rows.insert(record.item_code().clone(), record);
        Ok(())
    }

    fn replace(&mut self, current: &Identifier, record: ItemRecord) -> Result<(), StoreError> {
        check_item_code_length(&self.config, record.item_code())?;
        if !self.rows.contains_key(current) {
            return Err(StoreError::NotFound(current.to_string()));
        }
        if record.item_code() != current && self.rows.contains_key(record.item_code()) {
            return Err(StoreError::DuplicateItemCode(
                record.item_code().to_string(),
            ));
        }
        self.check_case_code_free(&record, Some(current))?;

        // All checks passed, nothing below can fail.
        if let Some(previous) = self.rows.remove(current) {
            self.case_codes.remove(previous.master_case_code());
        }
        self.case_codes.insert(
            record.master_case_code().to_string(),
            record.item_code().clone(),
        );
        self.rows.insert(record.item_code().clone(), record);
        Ok(())
    }

    fn remove(&mut self, item_code: &Identifier) -> Result<ItemRecord, StoreError> {
        let record = self
            .rows
            .remove(item_code)
            .ok_or_else(|| StoreError::NotFound(item_code.to_string()))?;
        self.case_codes.remove(record.master_case_code());
        Ok(record)
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}
