//! Property-based tests using proptest
//!
//! These tests check the client-side list filtering against randomized
//! record sets.

use botman::{filter_records, Record};
use proptest::prelude::*;
use serde_json::json;

const KEY: &str = "categoryName";

/// Generate one list record with a name drawn from a small pool, so that
/// filters hit duplicates often.
fn arb_record() -> impl Strategy<Value = Record> {
    (
        prop_oneof!["Test Name 1", "Test Name 2", "Test Name 3", "Impersonators", ""],
        "[0-9a-f]{8}",
        any::<u32>(),
    )
        .prop_map(|(name, id, n)| {
            let mut record = Record::new();
            record.insert(KEY.to_string(), json!(name));
            record.insert("categoryId".to_string(), json!(id));
            record.insert("n".to_string(), json!(n));
            record
        })
}

/// Generate a list of records
fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(arb_record(), 0..50)
}

fn arb_filter() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("Test Name 3".to_string()),
        Just("Impersonators".to_string()),
        "[A-Za-z ]{1,12}",
    ]
}

proptest! {
    /// An empty filter returns the input unchanged
    #[test]
    fn empty_filter_is_identity(records in arb_records()) {
        let filtered = filter_records(records.clone(), KEY, "").unwrap();
        prop_assert_eq!(filtered, records);
    }

    /// Every returned record carries the wanted value
    #[test]
    fn results_all_match(records in arb_records(), wanted in arb_filter()) {
        prop_assume!(!wanted.is_empty());
        let filtered = filter_records(records, KEY, &wanted).unwrap();
        for record in &filtered {
            prop_assert_eq!(record[KEY].as_str(), Some(wanted.as_str()));
        }
    }

    /// Exactly the matching records survive, in their original order
    #[test]
    fn keeps_matches_in_order(records in arb_records(), wanted in arb_filter()) {
        prop_assume!(!wanted.is_empty());
        let expected: Vec<Record> = records
            .iter()
            .filter(|r| r[KEY].as_str() == Some(wanted.as_str()))
            .cloned()
            .collect();
        let filtered = filter_records(records, KEY, &wanted).unwrap();
        prop_assert_eq!(filtered, expected);
    }

    /// Filtering twice gives the same result as filtering once
    #[test]
    fn filter_is_idempotent(records in arb_records(), wanted in arb_filter()) {
        let once = filter_records(records, KEY, &wanted).unwrap();
        let twice = filter_records(once.clone(), KEY, &wanted).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Filtering never adds records
    #[test]
    fn filter_never_grows(records in arb_records(), wanted in arb_filter()) {
        let len = records.len();
        let filtered = filter_records(records, KEY, &wanted).unwrap();
        prop_assert!(filtered.len() <= len);
    }

    /// A record lacking the key fails any non-empty filter
    #[test]
    fn missing_key_is_reported(mut records in arb_records(), wanted in "[A-Za-z]{1,8}") {
        let mut broken = Record::new();
        broken.insert("categoryId".to_string(), json!("broken"));
        records.push(broken);
        let index = records.len() - 1;

        let err = filter_records(records, KEY, &wanted).unwrap_err();
        let matched = matches!(err, botman::Error::MalformedRecord { key: KEY, index: i } if i == index);
        prop_assert!(matched);
    }
}
