use chrono::NaiveDate;

use super::DateRange;
use crate::error::{HeaderError, HeaderResult};

/// Maps dates to horizontal pixel positions.
///
/// The origin is the leftmost date of the entire timeline (not just the
/// visible window), supplied by the host so that `x()` stays stable across
/// scroll position changes. The day width is integral: the header and the
/// task body share this mapper, and fractional per-day widths accumulate
/// rounding drift that breaks their pixel alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMapper {
    origin: NaiveDate,
    day_width_px: u32,
}

impl CoordinateMapper {
    /// Creates a mapper, rejecting a zero day width.
    pub fn new(origin: NaiveDate, day_width_px: u32) -> HeaderResult<Self> {
        if day_width_px == 0 {
            return Err(HeaderError::InvalidDayWidth { value: 0.0 });
        }
        Ok(Self {
            origin,
            day_width_px,
        })
    }

    /// Left edge of `date`'s day column. Negative left of the origin.
    #[must_use]
    pub fn x(self, date: NaiveDate) -> f64 {
        let days = (date - self.origin).num_days();
        days as f64 * f64::from(self.day_width_px)
    }

    /// Pixel width of an inclusive range: one column per day.
    #[must_use]
    pub fn width(self, range: DateRange) -> f64 {
        range.day_count() as f64 * f64::from(self.day_width_px)
    }

    #[must_use]
    pub fn origin(self) -> NaiveDate {
        self.origin
    }

    #[must_use]
    pub fn day_width_px(self) -> u32 {
        self.day_width_px
    }
}
