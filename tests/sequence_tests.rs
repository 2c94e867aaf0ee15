use chrono::{Duration, NaiveDate};
use gantt_header_rs::core::{
    CoordinateMapper, DateRange, HeaderRow, LogicalUnit, generate_periods,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

fn mapper(origin: NaiveDate, day_width_px: u32) -> CoordinateMapper {
    CoordinateMapper::new(origin, day_width_px).expect("valid mapper")
}

fn plain_label(range: DateRange, _width_px: f64) -> String {
    range.start().to_string()
}

#[test]
fn week_sequence_covers_the_reference_range_in_ten_cells() {
    let range = DateRange::new(date(2025, 7, 28), date(2025, 10, 5)).expect("aligned range");
    let mapper = mapper(date(2025, 1, 1), 7);

    let periods = generate_periods(
        range,
        LogicalUnit::Week,
        HeaderRow::Secondary,
        mapper,
        plain_label,
    );

    assert_eq!(periods.len(), 10);
    assert_eq!(periods[0].range.start(), date(2025, 7, 28));
    assert_eq!(periods[0].range.end(), date(2025, 8, 3));
    assert_eq!(periods[9].range.start(), date(2025, 9, 29));
    assert_eq!(periods[9].range.end(), date(2025, 10, 5));
    for cell in &periods {
        assert_eq!(cell.range.day_count(), 7);
        assert_eq!(cell.width_px, 49.0);
        assert_eq!(cell.row, HeaderRow::Secondary);
    }
}

#[test]
fn sequences_are_contiguous_and_gapless() {
    let range = DateRange::new(date(2025, 7, 28), date(2025, 10, 5)).expect("aligned range");
    let mapper = mapper(date(2025, 1, 1), 7);

    for unit in [LogicalUnit::Day, LogicalUnit::Week, LogicalUnit::Month] {
        let periods = generate_periods(range, unit, HeaderRow::Primary, mapper, plain_label);
        assert_eq!(periods[0].range.start(), range.start(), "{unit:?} first");
        assert_eq!(
            periods.last().expect("non-empty").range.end(),
            range.end(),
            "{unit:?} last"
        );
        for pair in periods.windows(2) {
            assert_eq!(
                pair[0].range.end() + Duration::days(1),
                pair[1].range.start(),
                "{unit:?} gap between cells"
            );
        }
    }
}

#[test]
fn month_sequence_clips_edge_cells_on_a_week_aligned_range() {
    // Week-aligned Jul 28..Oct 5: the month walk clips July to 4 days and
    // October to 5.
    let range = DateRange::new(date(2025, 7, 28), date(2025, 10, 5)).expect("aligned range");
    let mapper = mapper(date(2025, 1, 1), 7);

    let periods = generate_periods(
        range,
        LogicalUnit::Month,
        HeaderRow::Primary,
        mapper,
        plain_label,
    );

    assert_eq!(periods.len(), 4);
    assert_eq!(periods[0].range.start(), date(2025, 7, 28));
    assert_eq!(periods[0].range.end(), date(2025, 7, 31));
    assert_eq!(periods[1].range.start(), date(2025, 8, 1));
    assert_eq!(periods[1].range.end(), date(2025, 8, 31));
    assert_eq!(periods[3].range.start(), date(2025, 10, 1));
    assert_eq!(periods[3].range.end(), date(2025, 10, 5));
}

#[test]
fn single_day_range_emits_exactly_one_cell_per_unit() {
    let range = DateRange::single(date(2025, 2, 15));
    let mapper = mapper(date(2025, 1, 1), 50);

    for unit in [
        LogicalUnit::Day,
        LogicalUnit::Week,
        LogicalUnit::Month,
        LogicalUnit::Quarter,
        LogicalUnit::Year,
    ] {
        let periods = generate_periods(range, unit, HeaderRow::Primary, mapper, plain_label);
        assert_eq!(periods.len(), 1, "{unit:?} must emit one cell");
        assert_eq!(periods[0].range, range, "{unit:?} cell clips to the range");
    }
}

#[test]
fn month_sequence_handles_leap_february() {
    let range = DateRange::new(date(2024, 1, 1), date(2024, 3, 31)).expect("aligned range");
    let mapper = mapper(date(2024, 1, 1), 2);

    let periods = generate_periods(
        range,
        LogicalUnit::Month,
        HeaderRow::Secondary,
        mapper,
        plain_label,
    );

    assert_eq!(periods.len(), 3);
    assert_eq!(periods[1].range.start(), date(2024, 2, 1));
    assert_eq!(periods[1].range.end(), date(2024, 2, 29));
    assert_eq!(periods[1].width_px, 58.0);
}

#[test]
fn cell_coordinates_come_from_the_mapper() {
    let origin = date(2025, 1, 1);
    let range = DateRange::new(date(2025, 7, 28), date(2025, 10, 5)).expect("aligned range");
    let mapper = mapper(origin, 7);

    let periods = generate_periods(
        range,
        LogicalUnit::Week,
        HeaderRow::Secondary,
        mapper,
        plain_label,
    );

    for cell in &periods {
        assert_eq!(cell.x_px, mapper.x(cell.range.start()));
        assert_eq!(cell.width_px, mapper.width(cell.range));
    }
    // 2025-07-28 is day-of-year 209, 208 days past the origin.
    assert_eq!(periods[0].x_px, 208.0 * 7.0);
}

#[test]
fn label_fn_sees_the_clipped_range_and_width() {
    let range = DateRange::new(date(2025, 7, 28), date(2025, 8, 31)).expect("aligned range");
    let mapper = mapper(date(2025, 1, 1), 7);

    let mut seen = Vec::new();
    let periods = generate_periods(
        range,
        LogicalUnit::Month,
        HeaderRow::Primary,
        mapper,
        |cell_range, width_px| {
            seen.push((cell_range, width_px));
            String::new()
        },
    );

    assert_eq!(periods.len(), 2);
    assert_eq!(seen[0].0.day_count(), 4);
    assert_eq!(seen[0].1, 28.0);
    assert_eq!(seen[1].0.day_count(), 31);
    assert_eq!(seen[1].1, 217.0);
}
