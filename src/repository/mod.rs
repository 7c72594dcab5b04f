pub mod metrics;

use crate::identifier::Identifier;
use crate::observability::labels::{Labels, NO_LABEL};
use crate::record::ItemRecord;
use crate::repository::metrics::{Metrics, WriteOperation};
use crate::store::{ItemStore, StoreError};

/// The write path for trade items.
///
/// Every insert and update derives the check digit and master case code from the
/// item code before anything reaches the store, so stored derived fields always
/// match their item code. Any error blocks the write and leaves the store as it was.
pub struct ItemRepository<S: ItemStore> {
    store: S,
    metrics: Metrics,
}

impl<S: ItemStore> ItemRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_labels(store, &NO_LABEL)
    }

    pub fn with_labels(store: S, labels: &Labels) -> Self {
        Self {
            store,
            metrics: Metrics::new(labels),
        }
    }

    pub fn insert(
        &mut self,
        item_code: &str,
        description: impl Into<String>,
    ) -> Result<ItemRecord, StoreError> {
        let result = self.try_insert(item_code, description.into());
        self.metrics.observe(WriteOperation::Insert, result)
    }

    /// Moves an item to a new item code. Both derived fields are recomputed from the new code.
    pub fn update_item_code(
        &mut self,
        current: &str,
        new_code: &str,
    ) -> Result<ItemRecord, StoreError> {
        let result = self.try_update_item_code(current, new_code);
        self.metrics.observe(WriteOperation::Update, result)
    }

    pub fn update_description(
        &mut self,
        item_code: &str,
        description: impl Into<String>,
    ) -> Result<ItemRecord, StoreError> {
        let result = self.try_update_description(item_code, description.into());
        self.metrics.observe(WriteOperation::Update, result)
    }

    pub fn remove(&mut self, item_code: &str) -> Result<ItemRecord, StoreError> {
        let result = Identifier::new(item_code)
            .map_err(StoreError::from)
            .and_then(|item_code| self.store.remove(&item_code));
        self.metrics.observe(WriteOperation::Remove, result)
    }

    pub fn get(&self, item_code: &str) -> Result<Option<&ItemRecord>, StoreError> {
        let item_code = Identifier::new(item_code)?;
        Ok(self.store.get(&item_code))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn try_insert(&mut self, item_code: &str, description: String) -> Result<ItemRecord, StoreError> {
        let record = ItemRecord::new(Identifier::new(item_code)?, description);
        self.store.insert(record.clone())?;
        Ok(record)
    }

    fn try_update_item_code(
        &mut self,
        current: &str,
        new_code: &str,
    ) -> Result<ItemRecord, StoreError> {
        let current = Identifier::new(current)?;
        let new_code = Identifier::new(new_code)?;
        let record = self.existing(&current)?.with_item_code(new_code);
        self.store.replace(&current, record.clone())?;
        Ok(record)
    }

    fn try_update_description(
        &mut self,
        item_code: &str,
        description: String,
    ) -> Result<ItemRecord, StoreError> {
        let item_code = Identifier::new(item_code)?;
        let record = self.existing(&item_code)?.with_description(description);
        self.store.replace(&item_code, record.clone())?;
        Ok(record)
    }

    fn existing(&self, item_code: &Identifier) -> Result<&ItemRecord, StoreError> {
        self.store
            .get(item_code)
            .ok_or_else(|| StoreError::NotFound(item_code.to_string()))
    }
}
