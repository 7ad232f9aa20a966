use chrono::NaiveDate;
use serde_json::{Value, json};

use crate::{error::LendingError, member::MemberId, record::BookRecord};

/// Build a calendar date for tests
#[allow(clippy::expect_used)]
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Borrowed record with every field set
fn borrowed_record() -> BookRecord {
    BookRecord {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        isbn: "111".to_string(),
        year: Some(1965),
        available: false,
        borrowed_by: Some(MemberId::new("m1")),
        due_date: Some(date(2024, 3, 15)),
        date_added: Some(date(2024, 1, 2)),
    }
}

/// Parse a `json!` value through the JSON entry point
fn parse(value: &Value) -> Result<BookRecord, LendingError> {
    BookRecord::from_json(&value.to_string())
}

#[test]
fn test_json_uses_flat_keys_and_iso_dates() {
    let json = borrowed_record().to_json();
    assert!(json.is_ok());

    let value: Result<Value, _> = serde_json::from_str(&json.unwrap_or_default());
    assert!(matches!(value, Ok(ref v) if *v == json!({
        "title": "Dune",
        "author": "Herbert",
        "isbn": "111",
        "year": 1965,
        "available": false,
        "borrowed_by": "m1",
        "due_date": "2024-03-15",
        "date_added": "2024-01-02",
    })));
}

#[test]
fn test_json_keeps_key_order() {
    let json = borrowed_record().to_json().unwrap_or_default();

    let positions: Vec<Option<usize>> = [
        "\"title\"",
        "\"author\"",
        "\"isbn\"",
        "\"year\"",
        "\"available\"",
        "\"borrowed_by\"",
        "\"due_date\"",
        "\"date_added\"",
    ]
    .iter()
    .map(|key| json.find(key))
    .collect();

    assert!(positions.iter().all(Option::is_some));
    assert!(positions.windows(2).all(|pair| matches!(pair, [a, b] if a < b)));
}

#[test]
fn test_round_trip_through_json() {
    let record = borrowed_record();

    let parsed = record.to_json().and_then(|json| BookRecord::from_json(&json));

    assert!(matches!(parsed, Ok(ref r) if *r == record));
}

#[test]
fn test_optional_fields_default_to_none() {
    let parsed = parse(&json!({
        "title": "Dune",
        "author": "Herbert",
        "isbn": "111",
        "available": true,
    }));

    assert!(matches!(
        parsed,
        Ok(BookRecord { year: None, borrowed_by: None, due_date: None, date_added: None, .. })
    ));
}

#[test]
fn test_explicit_nulls_are_accepted() {
    let parsed = parse(&json!({
        "title": "Dune",
        "author": "Herbert",
        "isbn": "111",
        "year": null,
        "available": true,
        "borrowed_by": null,
        "due_date": null,
        "date_added": null,
    }));

    assert!(matches!(parsed, Ok(BookRecord { available: true, year: None, .. })));
}

#[test]
fn test_missing_required_fields_are_named() {
    for field in ["title", "author", "isbn", "available"] {
        let mut value = json!({
            "title": "Dune",
            "author": "Herbert",
            "isbn": "111",
            "available": true,
        });
        if let Some(map) = value.as_object_mut() {
            map.remove(field);
        }

        let parsed = parse(&value);

        assert!(
            matches!(parsed, Err(LendingError::MissingField(missing)) if missing == field),
            "expected missing `{field}`"
        );
    }
}

#[test]
fn test_null_required_field_counts_as_missing() {
    let parsed = parse(&json!({
        "title": "Dune",
        "author": null,
        "isbn": "111",
        "available": true,
    }));

    assert!(matches!(parsed, Err(LendingError::MissingField("author"))));
}

#[test]
fn test_malformed_date_is_reported() {
    let parsed = parse(&json!({
        "title": "Dune",
        "author": "Herbert",
        "isbn": "111",
        "available": false,
        "borrowed_by": "m1",
        "due_date": "15/03/2024",
    }));

    assert!(matches!(
        parsed,
        Err(LendingError::InvalidDate { field: "due_date", ref value }) if value == "15/03/2024"
    ));
}

#[test]
fn test_wrong_type_is_a_json_error() {
    let parsed = parse(&json!({
        "title": "Dune",
        "author": "Herbert",
        "isbn": "111",
        "available": "yes",
    }));

    assert!(matches!(parsed, Err(LendingError::Json(_))));
}

#[test]
fn test_non_object_is_rejected() {
    assert!(matches!(BookRecord::from_json("[1, 2, 3]"), Err(LendingError::NotAnObject)));
    assert!(matches!(BookRecord::from_json("not json"), Err(LendingError::Json(_))));
}

#[test]
fn test_inconsistent_record_parses_as_is() {
    let parsed = parse(&json!({
        "title": "Dune",
        "author": "Herbert",
        "isbn": "111",
        "available": true,
        "due_date": "2024-03-15",
    }));

    assert!(matches!(parsed, Ok(BookRecord { available: true, due_date: Some(_), .. })));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        LendingError::MissingField("isbn").to_string(),
        "missing required field `isbn`"
    );
}
