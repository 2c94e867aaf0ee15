use super::{DateRange, LogicalUnit};

/// Boundary-aligns `range` to complete `unit` periods.
///
/// Union of the unit period containing the range start and the unit period
/// containing the range end: min of the two starts, max of the two ends.
/// Covers every period the range touches when it spans more than one, and
/// always contains `range`.
#[must_use]
pub fn unit_aligned_bounds(range: DateRange, unit: LogicalUnit) -> DateRange {
    unit.boundaries_of(range.start())
        .union(unit.boundaries_of(range.end()))
}

/// Expands `visible` so that neither header row shows a truncated period
/// at the viewport edges.
///
/// Aligns to the primary unit first, then aligns that result to the
/// secondary unit, and returns the union of both aligned ranges. The
/// secondary alignment runs over the primary-aligned endpoints, so the
/// result starts and ends on secondary boundaries and contains every
/// primary period the visible range touches.
///
/// When primary periods are exact unions of secondary periods (week over
/// days, quarter over months, year over quarters) the two alignments
/// coincide: the result is aligned to both units and is a fixed point of
/// this function. Week and month boundaries interleave, so for that pair
/// the result is week-aligned and the month row's edge cells clip at the
/// expanded bounds.
#[must_use]
pub fn expand(
    visible: DateRange,
    primary_unit: LogicalUnit,
    secondary_unit: LogicalUnit,
) -> DateRange {
    let primary_bounds = unit_aligned_bounds(visible, primary_unit);
    let secondary_bounds = unit_aligned_bounds(primary_bounds, secondary_unit);
    primary_bounds.union(secondary_bounds)
}
