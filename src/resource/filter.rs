//! Client-side filtering of list responses

use crate::error::{Error, Result};
use crate::Record;

/// Keep the records whose `key` equals `wanted`, preserving order.
///
/// An empty `wanted` returns `records` untouched. A record without a string
/// `key` is reported as [`Error::MalformedRecord`].
pub fn filter_records(records: Vec<Record>, key: &'static str, wanted: &str) -> Result<Vec<Record>> {
    if wanted.is_empty() {
        return Ok(records);
    }

    let mut matched = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        let Some(value) = record.get(key).and_then(|v| v.as_str()) else {
            return Err(Error::MalformedRecord { key, index });
        };
        if value == wanted {
            matched.push(record);
        }
    }
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn records(value: Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    fn categories() -> Vec<Record> {
        records(json!([
            {"categoryId": "b85e3eaa-d334-466d-857e-33308ce416be", "categoryName": "Test Name 1"},
            {"categoryId": "69acad64-7459-4c1d-9bad-672600150127", "categoryName": "Test Name 2"},
            {"categoryId": "cc9c3f89-e179-4892-89cf-d5e623ba9dc7", "categoryName": "Test Name 3"},
            {"categoryId": "10c54ea3-e3cb-4fc0-b0e0-fa3658aebd7b", "categoryName": "Test Name 4"},
            {"categoryId": "4d64d85a-a07f-485a-bbac-24c60658a1b8", "categoryName": "Test Name 5"}
        ]))
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let all = categories();
        assert_eq!(filter_records(all.clone(), "categoryName", "").unwrap(), all);
    }

    #[test]
    fn test_exact_match_only() {
        let filtered = filter_records(categories(), "categoryName", "Test Name 3").unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(
            filtered[0].get("categoryId"),
            Some(&json!("cc9c3f89-e179-4892-89cf-d5e623ba9dc7"))
        );

        assert!(filter_records(categories(), "categoryName", "Test Name").unwrap().is_empty());
        assert!(filter_records(categories(), "categoryName", "test name 3").unwrap().is_empty());
    }

    #[test]
    fn test_duplicates_keep_order() {
        let input = records(json!([
            {"actionId": "a", "n": 1},
            {"actionId": "b", "n": 2},
            {"actionId": "a", "n": 3}
        ]));
        let filtered = filter_records(input, "actionId", "a").unwrap();
        let order: Vec<_> = filtered.iter().map(|r| r["n"].clone()).collect();
        assert_eq!(order, vec![json!(1), json!(3)]);
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let input = records(json!([
            {"actionId": "a"},
            {"otherKey": "b"}
        ]));
        let err = filter_records(input, "actionId", "a").unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { key: "actionId", index: 1 }));
    }

    #[test]
    fn test_non_string_key_is_an_error() {
        let input = records(json!([{"actionId": 42}]));
        assert!(filter_records(input, "actionId", "42").is_err());
    }

    #[test]
    fn test_malformed_records_ignored_without_filter() {
        let input = records(json!([{"otherKey": 1}]));
        assert_eq!(filter_records(input, "actionId", "").unwrap().len(), 1);
    }
}
