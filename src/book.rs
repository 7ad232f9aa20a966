use std::fmt;

use chrono::{Days, NaiveDate};
use tracing::{debug, info, warn};

use crate::{
    book_state::BookState,
    clock::Clock,
    error::LendingError,
    events::LoanEvent,
    member::MemberId,
    outcome::LoanOutcome,
    policy::{DEFAULT_LOAN_PERIOD_DAYS, LoanPolicy},
    record::BookRecord,
};

/// Refusal message for checking out a lent book
const ALREADY_CHECKED_OUT: &str = "Book is already checked out";
/// Refusal message for returning a book that is on the shelf
const ALREADY_AVAILABLE: &str = "Book is already available";
/// Refusal message when the due date falls outside the calendar
const LOAN_PERIOD_OUT_OF_RANGE: &str = "Loan period exceeds the supported date range";

/// A library book and its lending status
///
/// The book is either available, with no borrower and no due date, or lent
/// out, with both set. Only [`Book::check_out`] and [`Book::return_book`]
/// move it between the two.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    /// Book title
    title: String,
    /// Book author
    author: String,
    /// ISBN as printed
    isbn: String,
    /// Publication year, if known
    year: Option<i32>,
    /// Whether the book is on the shelf
    available: bool,
    /// Current borrower
    borrowed_by: Option<MemberId>,
    /// Return deadline of the current loan
    due_date: Option<NaiveDate>,
    /// When the book joined the collection
    date_added: NaiveDate,
}

impl Book {
    /// Create an available book added to the collection today
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        year: Option<i32>,
        clock: &(impl Clock + ?Sized),
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            year,
            available: true,
            borrowed_by: None,
            due_date: None,
            date_added: clock.today(),
        }
    }

    /// Book title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Book author
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// ISBN as printed
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Publication year, if known
    #[must_use]
    pub const fn year(&self) -> Option<i32> {
        self.year
    }

    /// Whether the book is on the shelf
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// Member currently holding the book
    #[must_use]
    pub const fn borrowed_by(&self) -> Option<&MemberId> {
        self.borrowed_by.as_ref()
    }

    /// Return deadline of the current loan
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// When the book joined the collection
    #[must_use]
    pub const fn date_added(&self) -> NaiveDate {
        self.date_added
    }

    /// Current lending state
    #[must_use]
    pub const fn state(&self) -> BookState {
        if self.available { BookState::Available } else { BookState::Borrowed }
    }

    /// Whether the lending fields agree with each other
    ///
    /// Always true for books driven through the transitions; only a record
    /// loaded with [`Book::from_record`] can break it.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.inconsistency().is_none()
    }

    /// Describe the first contradiction between the lending fields
    const fn inconsistency(&self) -> Option<&'static str> {
        match (self.available, self.borrowed_by.is_some(), self.due_date.is_some()) {
            (true, true, _) => Some("available book has a borrower"),
            (true, _, true) => Some("available book has a due date"),
            (false, false, _) => Some("borrowed book has no borrower"),
            (false, _, false) => Some("borrowed book has no due date"),
            _ => None,
        }
    }

    /// Lend the book to `member_id` for `loan_period_days` days
    ///
    /// The due date is today plus the loan period. A book that is already
    /// lent out is left unchanged and the outcome reports the refusal.
    pub fn check_out(
        &mut self,
        member_id: impl Into<MemberId>,
        loan_period_days: u32,
        clock: &(impl Clock + ?Sized),
    ) -> LoanOutcome {
        if !self.available {
            return LoanOutcome::failure(ALREADY_CHECKED_OUT);
        }

        let Some(due_date) =
            clock.today().checked_add_days(Days::new(u64::from(loan_period_days)))
        else {
            return LoanOutcome::failure(LOAN_PERIOD_OUT_OF_RANGE);
        };

        let member_id = member_id.into();
        debug!(isbn = %self.isbn, %member_id, %due_date, "book checked out");

        self.available = false;
        self.borrowed_by = Some(member_id);
        self.due_date = Some(due_date);

        LoanOutcome::success(format!("Book checked out successfully. Due date: {due_date}"))
    }

    /// Lend the book for the standard loan period
    pub fn check_out_default(
        &mut self,
        member_id: impl Into<MemberId>,
        clock: &(impl Clock + ?Sized),
    ) -> LoanOutcome {
        self.check_out(member_id, DEFAULT_LOAN_PERIOD_DAYS, clock)
    }

    /// Lend the book for the period configured in `policy`
    pub fn check_out_with_policy(
        &mut self,
        member_id: impl Into<MemberId>,
        policy: &LoanPolicy,
        clock: &(impl Clock + ?Sized),
    ) -> LoanOutcome {
        self.check_out(member_id, policy.loan_period_days, clock)
    }

    /// Bring the book back to the shelf
    ///
    /// The outcome says whether the book came back late. Returning a book
    /// that is already available changes nothing.
    pub fn return_book(&mut self, clock: &(impl Clock + ?Sized)) -> LoanOutcome {
        if self.available {
            return LoanOutcome::failure(ALREADY_AVAILABLE);
        }

        let was_overdue = self.is_overdue(clock);
        let days_late = self.days_overdue(clock);

        self.available = true;
        let member_id = self.borrowed_by.take();
        self.due_date = None;

        if was_overdue {
            info!(isbn = %self.isbn, ?member_id, days_late, "overdue book returned");
            LoanOutcome::success("Book returned (was overdue)")
        } else {
            debug!(isbn = %self.isbn, ?member_id, "book returned");
            LoanOutcome::success("Book returned successfully")
        }
    }

    /// Whether the loan has passed its due date
    ///
    /// Only the date is compared: a book due today becomes overdue tomorrow.
    #[must_use]
    pub fn is_overdue(&self, clock: &(impl Clock + ?Sized)) -> bool {
        match self.due_date {
            Some(due_date) if !self.available => clock.today() > due_date,
            _ => false,
        }
    }

    /// Whole days since the due date, or 0 when not overdue
    #[must_use]
    pub fn days_overdue(&self, clock: &(impl Clock + ?Sized)) -> i64 {
        match self.due_date {
            Some(due_date) if self.is_overdue(clock) => {
                clock.today().signed_duration_since(due_date).num_days()
            }
            _ => 0,
        }
    }

    /// Apply a lending event
    pub fn process_event(
        &mut self,
        event: LoanEvent,
        clock: &(impl Clock + ?Sized),
    ) -> LoanOutcome {
        match event {
            LoanEvent::CheckOut { member_id, loan_period_days } => {
                self.check_out(member_id, loan_period_days, clock)
            }
            LoanEvent::Return => self.return_book(clock),
        }
    }

    /// Flatten the book into its storable record
    #[must_use]
    pub fn to_record(&self) -> BookRecord {
        BookRecord {
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            year: self.year,
            available: self.available,
            borrowed_by: self.borrowed_by.clone(),
            due_date: self.due_date,
            date_added: Some(self.date_added),
        }
    }

    /// Rebuild a book from a stored record
    ///
    /// Fields are copied as stored. A record whose lending fields contradict
    /// each other is still accepted and logged at `warn`; use
    /// [`Book::try_from_record_strict`] to reject it instead.
    #[must_use]
    pub fn from_record(record: BookRecord, clock: &(impl Clock + ?Sized)) -> Self {
        let book = Self::from_record_unchecked(record, clock);
        if let Some(problem) = book.inconsistency() {
            warn!(isbn = %book.isbn, problem, "accepted inconsistent book record");
        }
        book
    }

    /// Rebuild a book from a stored record, rejecting contradictory lending
    /// fields
    ///
    /// # Errors
    ///
    /// Returns `LendingError::Inconsistent` if `available` disagrees with
    /// `borrowed_by` or `due_date`
    pub fn try_from_record_strict(
        record: BookRecord,
        clock: &(impl Clock + ?Sized),
    ) -> Result<Self, LendingError> {
        let book = Self::from_record_unchecked(record, clock);
        match book.inconsistency() {
            Some(problem) => Err(LendingError::Inconsistent(problem)),
            None => Ok(book),
        }
    }

    /// Copy a record into a book without looking at the lending fields
    fn from_record_unchecked(record: BookRecord, clock: &(impl Clock + ?Sized)) -> Self {
        Self {
            title: record.title,
            author: record.author,
            isbn: record.isbn,
            year: record.year,
            available: record.available,
            borrowed_by: record.borrowed_by,
            due_date: record.due_date,
            date_added: record.date_added.unwrap_or_else(|| clock.today()),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({}) - ", self.title, self.author, self.isbn)?;
        match (self.available, &self.borrowed_by) {
            (true, _) => f.write_str("Available"),
            (false, Some(member_id)) => write!(f, "Borrowed by {member_id}"),
            (false, None) => f.write_str("Borrowed by unknown"),
        }
    }
}
