use serde::Serialize;

use crate::identifier::Identifier;

/// A stored trade item.
///
/// The check digit and master case code are derived from the item code when the
/// record is built and cannot be set any other way.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ItemRecord {
    item_code: Identifier,
    check_digit: char,
    master_case_code: String,
    description: String,
}

impl ItemRecord {
    pub fn new(item_code: Identifier, description: impl Into<String>) -> Self {
        Self {
            check_digit: item_code.check_digit(),
            master_case_code: item_code.master_case_code(),
            item_code,
            description: description.into(),
        }
    }

    pub fn item_code(&self) -> &Identifier {
        &self.item_code
    }

    pub fn check_digit(&self) -> char {
        self.check_digit
    }

    pub fn master_case_code(&self) -> &str {
        &self.master_case_code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// A copy of this record with a new item code; derived fields are recomputed.
    pub fn with_item_code(&self, item_code: Identifier) -> Self {
        Self::new(item_code, self.description.clone())
    }

    /// A copy of this record with a new description; derived fields are recomputed.
    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self::new(self.item_code.clone(), description)
    }
}

#[cfg(test)]
mod test {
    use crate::identifier::Identifier;
    use crate::record::ItemRecord;
    use serde_json::json;

    fn item(code: &str) -> Identifier {
        Identifier::new(code).unwrap()
    }

    #[test]
    fn derives_both_fields() {
        let record = ItemRecord::new(item("04210000526"), "Spring water 12x500ml");
        assert_eq!(record.item_code().as_str(), "04210000526");
        assert_eq!(record.check_digit(), '4');
        assert_eq!(record.master_case_code(), "10042100005261");
        assert_eq!(record.description(), "Spring water 12x500ml");
    }

    #[test]
    fn changing_the_description_keeps_derived_fields() {
        let record = ItemRecord::new(item("19147056187"), "before");
        let updated = record.with_description("after");
        assert_eq!(updated.check_digit(), record.check_digit());
        assert_eq!(updated.master_case_code(), record.master_case_code());
        assert_eq!(updated.description(), "after");
    }

    #[test]
    fn changing_the_item_code_recomputes_derived_fields() {
        let record = ItemRecord::new(item("04210000526"), "case");
        let updated = record.with_item_code(item("03600029145"));
        assert_eq!(updated.check_digit(), '2');
        assert_eq!(updated.master_case_code(), "10036000291459");
        assert_eq!(updated.description(), "case");
    }

    #[test]
    fn serializes_all_columns() {
        let record = ItemRecord::new(item("62910415002"), "tin");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "item_code": "62910415002",
                "check_digit": "4",
                "master_case_code": "10629104150021",
                "description": "tin",
            })
        );
    }
}
