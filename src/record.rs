//! Flat record shape used to store a [`Book`](crate::Book).
//!
//! The key set is `title, author, isbn, year, available, borrowed_by,
//! due_date, date_added`, with dates written as `YYYY-MM-DD`. JSON output
//! keeps the keys in that order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::LendingError, member::MemberId};

/// Date encoding used by every date field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Keys that must be present and non-null
const REQUIRED_FIELDS: [&str; 4] = ["title", "author", "isbn", "available"];

/// Keys holding `YYYY-MM-DD` dates
const DATE_FIELDS: [&str; 2] = ["due_date", "date_added"];

/// Serializable representation of a book
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct BookRecord {
    /// Book title
    pub title: String,
    /// Book author
    pub author: String,
    /// ISBN as printed
    pub isbn: String,
    /// Publication year, if known
    pub year: Option<i32>,
    /// Whether the book is on the shelf
    pub available: bool,
    /// Current borrower
    pub borrowed_by: Option<MemberId>,
    /// Return deadline of the current loan
    pub due_date: Option<NaiveDate>,
    /// When the book joined the collection; filled from the clock when absent
    pub date_added: Option<NaiveDate>,
}

impl BookRecord {
    /// Build a record from a key-value mapping
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `LendingError::MissingField` if `title`, `author`, `isbn` or
    ///   `available` is absent or `null`
    /// - `LendingError::InvalidDate` if a date field is a string that is not
    ///   `YYYY-MM-DD`
    /// - `LendingError::Json` if any value has the wrong type
    pub fn from_map(map: Map<String, Value>) -> Result<Self, LendingError> {
        if let Some(field) =
            REQUIRED_FIELDS.into_iter().find(|field| map.get(*field).is_none_or(Value::is_null))
        {
            return Err(LendingError::MissingField(field));
        }

        for field in DATE_FIELDS {
            if let Some(Value::String(raw)) = map.get(field) {
                NaiveDate::parse_from_str(raw, DATE_FORMAT)
                    .map_err(|_| LendingError::InvalidDate { field, value: raw.clone() })?;
            }
        }

        Ok(serde_json::from_value(Value::Object(map))?)
    }

    /// Parse a record from a JSON object
    ///
    /// # Errors
    ///
    /// Returns `LendingError::Json` for invalid JSON, `LendingError::NotAnObject`
    /// when the document is not an object, and otherwise the errors of
    /// [`BookRecord::from_map`]
    pub fn from_json(json: &str) -> Result<Self, LendingError> {
        match serde_json::from_str(json)? {
            Value::Object(map) => Self::from_map(map),
            _ => Err(LendingError::NotAnObject),
        }
    }

    /// Render the record as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `LendingError::Json` if serialization fails
    pub fn to_json(&self) -> Result<String, LendingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests;
