//! Lending lifecycle for a single library book.
//!
//! This crate provides the `Book` entity with its two-state lending machine
//! (available on the shelf, or borrowed by a member), overdue tracking against
//! an injected clock, and a flat record shape for storing books.

pub mod book;
pub mod book_state;
pub mod clock;
pub mod error;
pub mod events;
pub mod member;
pub mod outcome;
pub mod policy;
pub mod record;

pub use book::Book;
pub use book_state::BookState;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::LendingError;
pub use events::LoanEvent;
pub use member::MemberId;
pub use outcome::LoanOutcome;
pub use policy::{DEFAULT_LOAN_PERIOD_DAYS, LoanPolicy};
pub use record::BookRecord;
