use serde::{Deserialize, Serialize};

use crate::error::LendingError;

/// Loan length used when no period is given
pub const DEFAULT_LOAN_PERIOD_DAYS: u32 = 14;

/// Lending configuration
///
/// Every field has a default, so a partial JSON document such as `{}` is a
/// valid policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct LoanPolicy {
    /// Days a member may keep a book
    pub loan_period_days: u32,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self { loan_period_days: DEFAULT_LOAN_PERIOD_DAYS }
    }
}

impl LoanPolicy {
    /// Parse a policy from JSON, filling unspecified fields with defaults
    ///
    /// # Errors
    ///
    /// Returns `LendingError::Json` if the document is not valid JSON or a
    /// field has the wrong type
    pub fn from_json(json: &str) -> Result<Self, LendingError> {
        Ok(serde_json::from_str(json)?)
    }
}
