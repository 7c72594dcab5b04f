use metrics::{counter, Counter};
use strum::IntoStaticStr;

use crate::observability::labels::Labels;
use crate::store::StoreError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum WriteOperation {
    Insert,
    Update,
    Remove,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RejectReason {
    InvalidInput,
    Constraint,
    NotFound,
}

impl From<&StoreError> for RejectReason {
    fn from(err: &StoreError) -> Self {
        match err {
            StoreError::InvalidInput(_) => RejectReason::InvalidInput,
            StoreError::ItemCodeTooLong { .. }
            | StoreError::DuplicateItemCode(_)
            | StoreError::DuplicateMasterCaseCode(_) => RejectReason::Constraint,
            StoreError::NotFound(_) => RejectReason::NotFound,
        }
    }
}

const OPERATION: &str = "operation";
const REASON: &str = "reason";

pub struct Metrics {
    pub inserts: Counter,
    pub updates: Counter,
    pub removals: Counter,

    pub rejected_invalid_input: Counter,
    pub rejected_constraint: Counter,
    pub rejected_not_found: Counter,
}

impl Metrics {
    pub fn new(labels: &Labels) -> Self {
        let write = |operation: WriteOperation| {
            let operation: &'static str = operation.into();
            counter!("item_store.writes", labels.with(OPERATION, operation))
        };
        let rejected = |reason: RejectReason| {
            let reason: &'static str = reason.into();
            counter!("item_store.rejected_writes", labels.with(REASON, reason))
        };

        Metrics {
            inserts: write(WriteOperation::Insert),
            updates: write(WriteOperation::Update),
            removals: write(WriteOperation::Remove),
            rejected_invalid_input: rejected(RejectReason::InvalidInput),
            rejected_constraint: rejected(RejectReason::Constraint),
            rejected_not_found: rejected(RejectReason::NotFound),
        }
    }

    /// Counts the outcome of a write and passes it through.
    pub fn observe<T>(
        &self,
        operation: WriteOperation,
        result: Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        match &result {
            Ok(_) => match operation {
                WriteOperation::Insert => self.inserts.increment(1),
                WriteOperation::Update => self.updates.increment(1),
                WriteOperation::Remove => self.removals.increment(1),
            },
            Err(err) => match RejectReason::from(err) {
                RejectReason::InvalidInput => self.rejected_invalid_input.increment(1),
                RejectReason::Constraint => self.rejected_constraint.increment(1),
                RejectReason::NotFound => self.rejected_not_found.increment(1),
            },
        }
        result
    }
}
