use thiserror::Error;

/// Failures at the crate boundary: reading stored records and configuration
///
/// Refused checkouts and returns are not errors; see
/// [`LoanOutcome`](crate::LoanOutcome).
#[derive(Debug, Error)]
pub enum LendingError {
    /// A required key is absent or `null`
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// The stored value is not a key-value mapping
    #[error("book record must be a JSON object")]
    NotAnObject,

    /// A date field does not hold a `YYYY-MM-DD` string
    #[error("invalid date in `{field}`: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// Name of the offending field
        field: &'static str,
        /// The value as stored
        value: String,
    },

    /// The lending fields contradict each other
    #[error("inconsistent lending state: {0}")]
    Inconsistent(&'static str),

    /// Anything else `serde_json` rejects
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
