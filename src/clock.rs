//! Sources of "today" for lending calculations.
//!
//! Checkout, overdue and days-overdue all depend on the current date. The
//! [`Book`](crate::Book) operations take a [`Clock`] instead of reading the
//! system time so they stay deterministic under test.

use chrono::{Days, Local, NaiveDate};

/// Provides the current calendar date
pub trait Clock {
    /// Today's date as seen by this clock
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Create a clock that always reports `today`
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self(today)
    }

    /// A clock `days` later than this one, or `None` past the calendar range
    #[must_use]
    pub fn advanced_by(self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }

    /// A clock `days` earlier than this one, or `None` past the calendar range
    #[must_use]
    pub fn rewound_by(self, days: u64) -> Option<Self> {
        self.0.checked_sub_days(Days::new(days)).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
