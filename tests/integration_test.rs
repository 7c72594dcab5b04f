use gs1_case_code::{
    compute_check_digit, compute_master_case_code, Gs1Checksum, Identifier, InMemoryItemStore,
    InvalidInputError, ItemRepository, ItemStore, StoreConfig, StoreError, Validator,
};

#[test]
fn known_vectors_through_the_public_api() {
    let vectors = vec![
        ("04210000526", '4'),
        ("03600029145", '2'),
        ("05042829526", '7'),
        ("19147000000", '0'),
        ("19147056187", '7'),
        ("19147099999", '1'),
        ("62910415002", '4'),
    ];
    for (gtin, check) in vectors {
        assert_eq!(compute_check_digit(gtin), Ok(check));

        let identifier: Identifier = gtin.parse().unwrap();
        assert_eq!(identifier.check_digit(), check);

        let case_code = compute_master_case_code(gtin).unwrap();
        assert_eq!(case_code.len(), gtin.len() + 3);
        assert_eq!(case_code, identifier.master_case_code());
        assert!(Gs1Checksum.is_valid_match(&case_code));
        assert!(Gs1Checksum.is_valid_match(&format!("{}{}", gtin, check)));
    }

    assert_eq!(
        compute_master_case_code("04210000526").unwrap(),
        "10042100005261"
    );
}

#[test]
fn invalid_input_is_reported_by_both_functions() {
    for input in ["", "12a45"] {
        assert!(compute_check_digit(input).is_err());
        assert!(compute_master_case_code(input).is_err());
    }
    assert_eq!(compute_check_digit(""), Err(InvalidInputError::Empty));
}

#[test]
fn write_path_keeps_derived_columns_in_sync() {
    let config = StoreConfig::from_json(
        r#"{"time_zone": "+00:00", "charset": "utf8mb4", "max_item_code_length": 11}"#,
    )
    .unwrap();
    let mut repository = ItemRepository::new(InMemoryItemStore::new(config));

    repository.insert("04210000526", "Sparkling water").unwrap();
    repository.insert("19147056187", "Crackers").unwrap();

    // an unrelated update never changes what was derived
    let before = repository.get("19147056187").unwrap().unwrap().clone();
    let after = repository
        .update_description("19147056187", "Crackers, family size")
        .unwrap();
    assert_eq!(before.check_digit(), after.check_digit());
    assert_eq!(before.master_case_code(), after.master_case_code());

    // changing the key recomputes everything
    let moved = repository
        .update_item_code("04210000526", "62910415002")
        .unwrap();
    assert_eq!(moved.check_digit(), '4');
    assert_eq!(moved.master_case_code(), "10629104150021");

    let store = repository.into_store();
    assert_eq!(store.len(), 2);
    for record in store.records() {
        assert_eq!(
            compute_check_digit(record.item_code().as_str()),
            Ok(record.check_digit())
        );
        assert_eq!(
            compute_master_case_code(record.item_code().as_str()).unwrap(),
            record.master_case_code()
        );
        assert!(Gs1Checksum.is_valid_match(record.master_case_code()));
    }
}

#[test]
fn rejected_writes_leave_the_store_untouched() {
    let mut repository = ItemRepository::new(InMemoryItemStore::default());
    repository.insert("03600029145", "Soup").unwrap();

    assert!(matches!(
        repository.insert("0360002914a", "Typo"),
        Err(StoreError::InvalidInput(_))
    ));
    assert_eq!(
        repository.insert("106141412345678", "Too wide"),
        Err(StoreError::ItemCodeTooLong {
            length: 15,
            max: 11
        })
    );
    assert_eq!(
        repository.update_item_code("03600029145", "not digits"),
        Err(StoreError::InvalidInput(InvalidInputError::NonDigit {
            index: 0,
            character: 'n'
        }))
    );

    assert_eq!(repository.store().len(), 1);
    let stored = repository.get("03600029145").unwrap().unwrap();
    assert_eq!(stored.description(), "Soup");
    assert_eq!(stored.master_case_code(), "10036000291459");
}
