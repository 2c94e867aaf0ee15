use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

use super::{CoordinateMapper, DateRange, LogicalUnit};

/// Which of the two stacked header rows a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderRow {
    Primary,
    Secondary,
}

/// One rendered header cell.
///
/// Coordinates are derived from the mapper, never assigned independently.
/// Cells of one row are contiguous and gapless: each cell ends the day
/// before the next one starts, the first cell starts at the generated
/// range's start and the last cell ends at its end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderPeriod {
    pub range: DateRange,
    pub x_px: f64,
    pub width_px: f64,
    pub label: String,
    pub row: HeaderRow,
}

impl HeaderPeriod {
    /// True for a single-day cell falling on a Saturday or Sunday.
    ///
    /// Drawing hint for day rows; hosts commonly dim weekend columns.
    /// Always false for multi-day cells.
    #[must_use]
    pub fn is_weekend_day(&self) -> bool {
        self.range.day_count() == 1
            && matches!(
                self.range.start().weekday(),
                Weekday::Sat | Weekday::Sun
            )
    }
}

/// Walks `range` emitting one cell per `unit` period the range touches.
///
/// The cursor starts at `range.start()` and advances to the day after
/// each period's end. Cells clip to the range edges: when the caller
/// expanded the range for this unit the clips never fire and every cell
/// is a complete period; for a unit whose boundaries interleave with the
/// expansion unit (months over a week-aligned range) the first and last
/// cells clip at the expanded bounds. A single-day range emits exactly
/// one cell. Calendar irregularities (leap years, month lengths) live
/// entirely in the boundary calculator; this walk is unit-agnostic.
///
/// `label_fn` receives each cell's range and pixel width so label density
/// can adapt to the room available.
pub fn generate_periods<F>(
    range: DateRange,
    unit: LogicalUnit,
    row: HeaderRow,
    mapper: CoordinateMapper,
    mut label_fn: F,
) -> Vec<HeaderPeriod>
where
    F: FnMut(DateRange, f64) -> String,
{
    let mut periods = Vec::new();
    let mut cursor = range.start();

    loop {
        let bounds = unit.boundaries_of(cursor);
        let clipped_end = bounds.end().min(range.end());
        let cell_range = DateRange::from_ordered(cursor, clipped_end);

        let x_px = mapper.x(cursor);
        let width_px = mapper.width(cell_range);
        let label = label_fn(cell_range, width_px);

        periods.push(HeaderPeriod {
            range: cell_range,
            x_px,
            width_px,
            label,
            row,
        });

        if bounds.end() >= range.end() {
            break;
        }
        cursor = unit.advance_from(bounds.start());
    }

    periods
}
