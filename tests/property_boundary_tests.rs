use chrono::{Datelike, Duration, NaiveDate, Weekday};
use gantt_header_rs::core::LogicalUnit;
use proptest::prelude::*;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // ~55 years starting 2000-01-01, covering 14 leap years.
    (0i64..20_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).expect("base date") + Duration::days(offset)
    })
}

fn arb_unit() -> impl Strategy<Value = LogicalUnit> {
    prop_oneof![
        Just(LogicalUnit::Day),
        Just(LogicalUnit::Week),
        Just(LogicalUnit::Month),
        Just(LogicalUnit::Quarter),
        Just(LogicalUnit::Year),
    ]
}

proptest! {
    #[test]
    fn boundaries_contain_their_date(date in arb_date(), unit in arb_unit()) {
        let bounds = unit.boundaries_of(date);
        prop_assert!(bounds.start() <= date);
        prop_assert!(bounds.end() >= date);
        prop_assert!(bounds.contains(date));
    }

    #[test]
    fn boundaries_are_idempotent(date in arb_date(), unit in arb_unit()) {
        let bounds = unit.boundaries_of(date);
        prop_assert_eq!(unit.boundaries_of(bounds.start()), bounds);
        prop_assert_eq!(unit.boundaries_of(bounds.end()), bounds);
    }

    #[test]
    fn period_lengths_match_the_calendar(date in arb_date(), unit in arb_unit()) {
        let days = unit.boundaries_of(date).day_count();
        match unit {
            LogicalUnit::Day => prop_assert_eq!(days, 1),
            LogicalUnit::Week => prop_assert_eq!(days, 7),
            LogicalUnit::Month => prop_assert!((28..=31).contains(&days)),
            LogicalUnit::Quarter => prop_assert!((90..=92).contains(&days)),
            LogicalUnit::Year => prop_assert!(days == 365 || days == 366),
        }
    }

    #[test]
    fn weeks_start_on_monday_and_end_on_sunday(date in arb_date()) {
        let bounds = LogicalUnit::Week.boundaries_of(date);
        prop_assert_eq!(bounds.start().weekday(), Weekday::Mon);
        prop_assert_eq!(bounds.end().weekday(), Weekday::Sun);
    }

    #[test]
    fn consecutive_periods_tile_the_calendar(date in arb_date(), unit in arb_unit()) {
        let bounds = unit.boundaries_of(date);
        let next_start = unit.advance_from(bounds.start());
        prop_assert_eq!(next_start, bounds.end() + Duration::days(1));

        let next_bounds = unit.boundaries_of(next_start);
        prop_assert_eq!(next_bounds.start(), next_start);
    }
}
