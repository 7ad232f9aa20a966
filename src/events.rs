use serde::{Deserialize, Serialize};

use crate::{member::MemberId, policy::DEFAULT_LOAN_PERIOD_DAYS};

/// Events that drive a book's lending transitions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum LoanEvent {
    /// Lend the book to a member for a number of days
    CheckOut {
        /// Borrowing member
        member_id: MemberId,
        /// Length of the loan in days
        loan_period_days: u32,
    },
    /// Bring the book back to the shelf
    Return,
}

impl LoanEvent {
    /// Checkout event using the standard loan period
    #[must_use]
    pub fn check_out(member_id: impl Into<MemberId>) -> Self {
        Self::CheckOut { member_id: member_id.into(), loan_period_days: DEFAULT_LOAN_PERIOD_DAYS }
    }
}
