use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::DateRange;

/// Calendar granularity used to align header cell boundaries.
///
/// A pure classification tag: every date has exactly one complete period
/// per unit, and every boundary computation is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalUnit {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl LogicalUnit {
    /// Start and end of the complete unit period containing `date`.
    ///
    /// Weeks run Monday through Sunday (fixed ISO convention, not
    /// configurable). Month, quarter and year boundaries account for
    /// variable month lengths and leap years.
    #[must_use]
    pub fn boundaries_of(self, date: NaiveDate) -> DateRange {
        match self {
            Self::Day => DateRange::single(date),
            Self::Week => {
                let rewind = i64::from(date.weekday().num_days_from_monday());
                let start = date - Duration::days(rewind);
                DateRange::from_ordered(start, start + Duration::days(6))
            }
            Self::Month => DateRange::from_ordered(
                first_of_month(date.year(), date.month()),
                last_of_month(date.year(), date.month()),
            ),
            Self::Quarter => {
                let first_month = quarter_first_month(date.month());
                DateRange::from_ordered(
                    first_of_month(date.year(), first_month),
                    last_of_month(date.year(), first_month + 2),
                )
            }
            Self::Year => DateRange::from_ordered(
                first_of_month(date.year(), 1),
                last_of_month(date.year(), 12),
            ),
        }
    }

    /// First day of the period following the one that starts at `period_start`.
    #[must_use]
    pub fn advance_from(self, period_start: NaiveDate) -> NaiveDate {
        self.boundaries_of(period_start).end() + Duration::days(1)
    }

    /// Whether `self` spans strictly longer periods than `other`.
    ///
    /// Weeks and months interleave on the calendar, but the span ordering
    /// `Day < Week < Month < Quarter < Year` is what the zoom config
    /// table cares about.
    #[must_use]
    pub fn is_coarser_than(self, other: Self) -> bool {
        self.span_rank() > other.span_rank()
    }

    fn span_rank(self) -> u8 {
        match self {
            Self::Day => 0,
            Self::Week => 1,
            Self::Month => 2,
            Self::Quarter => 3,
            Self::Year => 4,
        }
    }
}

/// First month (1-based) of the quarter containing `month`: 1, 4, 7 or 10.
#[must_use]
pub fn quarter_first_month(month: u32) -> u32 {
    ((month - 1) / 3) * 3 + 1
}

/// 1-based quarter index for `month`.
#[must_use]
pub fn quarter_index(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is a valid calendar date")
}

fn last_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    first_of_month(next_year, next_month)
        .pred_opt()
        .expect("first of month has a preceding day")
}
