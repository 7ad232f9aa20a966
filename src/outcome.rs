use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of a lending transition
///
/// Business-rule violations such as a double checkout are not errors: they
/// come back as an unsuccessful outcome carrying the reason, and the book is
/// left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[must_use]
pub struct LoanOutcome {
    /// Whether the transition was applied
    success: bool,
    /// Human-readable explanation
    message: String,
}

impl LoanOutcome {
    /// The transition was applied
    pub fn success(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    /// The transition was refused and nothing changed
    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }

    /// Whether the transition was applied
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Explanation of what happened
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LoanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<LoanOutcome> for (bool, String) {
    fn from(outcome: LoanOutcome) -> Self {
        (outcome.success, outcome.message)
    }
}
