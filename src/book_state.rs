use std::fmt;

use serde::{Deserialize, Serialize};

/// Lending state of a book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum BookState {
    /// Book is on the shelf and can be checked out
    #[default]
    Available,
    /// Book is lent out to a member
    Borrowed,
}

impl BookState {
    /// Get a human-readable description of the state
    #[must_use]
    pub const fn get_description(self) -> &'static str {
        match self {
            Self::Available => "Book is available for checkout",
            Self::Borrowed => "Book is checked out by a member",
        }
    }
}

impl fmt::Display for BookState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => f.write_str("Available"),
            Self::Borrowed => f.write_str("Borrowed"),
        }
    }
}
