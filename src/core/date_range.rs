use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{HeaderError, HeaderResult};

/// Inclusive, day-granular date range.
///
/// `start <= end` always holds. `NaiveDate` carries no time of day, so
/// every range is normalized to midnight by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting reversed inputs.
    ///
    /// A reversed range is a caller bug; it is never swapped or clamped.
    pub fn new(start: NaiveDate, end: NaiveDate) -> HeaderResult<Self> {
        if end < start {
            return Err(HeaderError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Single-day range.
    #[must_use]
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Internal constructor for ranges whose ordering is already established.
    pub(crate) fn from_ordered(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "from_ordered requires start <= end");
        Self { start, end }
    }

    #[must_use]
    pub fn start(self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(self) -> NaiveDate {
        self.end
    }

    /// Inclusive day count; a single-day range counts 1.
    #[must_use]
    pub fn day_count(self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Smallest range covering both inputs: min of starts, max of ends.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Iterates every date in the range, in order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.day_count()).map(move |offset| start + Duration::days(offset))
    }
}
