use chrono::Datelike;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::logical_unit::quarter_index;
use crate::core::{DateRange, LogicalUnit};

/// Locale string lookup collaborator.
///
/// The core emits semantic keys (`month.long.2`, `month.short.2`,
/// `weekday.short.0`, `quarter.1`) and composes the returned strings with
/// numeric date parts; storage and shape of the localized strings belong
/// to the host. Returning `None` falls back to the built-in en-US table so
/// formatting stays total.
pub trait LabelTranslator {
    fn translate(&self, key: &str) -> Option<String>;
}

/// Built-in translator locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderLocale {
    EnUs,
    EsEs,
}

impl LabelTranslator for HeaderLocale {
    fn translate(&self, key: &str) -> Option<String> {
        let table = match self {
            Self::EnUs => EN_US_TABLE,
            Self::EsEs => ES_ES_TABLE,
        };
        table
            .iter()
            .find(|(entry_key, _)| *entry_key == key)
            .map(|(_, value)| (*value).to_owned())
    }
}

type LocaleTable = &'static [(&'static str, &'static str)];

const EN_US_TABLE: LocaleTable = &[
    ("month.long.1", "January"),
    ("month.long.2", "February"),
    ("month.long.3", "March"),
    ("month.long.4", "April"),
    ("month.long.5", "May"),
    ("month.long.6", "June"),
    ("month.long.7", "July"),
    ("month.long.8", "August"),
    ("month.long.9", "September"),
    ("month.long.10", "October"),
    ("month.long.11", "November"),
    ("month.long.12", "December"),
    ("month.short.1", "Jan"),
    ("month.short.2", "Feb"),
    ("month.short.3", "Mar"),
    ("month.short.4", "Apr"),
    ("month.short.5", "May"),
    ("month.short.6", "Jun"),
    ("month.short.7", "Jul"),
    ("month.short.8", "Aug"),
    ("month.short.9", "Sep"),
    ("month.short.10", "Oct"),
    ("month.short.11", "Nov"),
    ("month.short.12", "Dec"),
    ("weekday.short.0", "Mon"),
    ("weekday.short.1", "Tue"),
    ("weekday.short.2", "Wed"),
    ("weekday.short.3", "Thu"),
    ("weekday.short.4", "Fri"),
    ("weekday.short.5", "Sat"),
    ("weekday.short.6", "Sun"),
    ("quarter.1", "Q1"),
    ("quarter.2", "Q2"),
    ("quarter.3", "Q3"),
    ("quarter.4", "Q4"),
];

const ES_ES_TABLE: LocaleTable = &[
    ("month.long.1", "enero"),
    ("month.long.2", "febrero"),
    ("month.long.3", "marzo"),
    ("month.long.4", "abril"),
    ("month.long.5", "mayo"),
    ("month.long.6", "junio"),
    ("month.long.7", "julio"),
    ("month.long.8", "agosto"),
    ("month.long.9", "septiembre"),
    ("month.long.10", "octubre"),
    ("month.long.11", "noviembre"),
    ("month.long.12", "diciembre"),
    ("month.short.1", "ene"),
    ("month.short.2", "feb"),
    ("month.short.3", "mar"),
    ("month.short.4", "abr"),
    ("month.short.5", "may"),
    ("month.short.6", "jun"),
    ("month.short.7", "jul"),
    ("month.short.8", "ago"),
    ("month.short.9", "sep"),
    ("month.short.10", "oct"),
    ("month.short.11", "nov"),
    ("month.short.12", "dic"),
    ("weekday.short.0", "lun"),
    ("weekday.short.1", "mar"),
    ("weekday.short.2", "mié"),
    ("weekday.short.3", "jue"),
    ("weekday.short.4", "vie"),
    ("weekday.short.5", "sáb"),
    ("weekday.short.6", "dom"),
    ("quarter.1", "T1"),
    ("quarter.2", "T2"),
    ("quarter.3", "T3"),
    ("quarter.4", "T4"),
];

/// Concrete label shapes, one family per logical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelFormat {
    /// "Mon 17"
    DayWithWeekday,
    /// "17"
    DayOfMonth,
    /// "17 Feb - 23 Feb"
    WeekSpan,
    /// "2/17" (month/day of the week's Monday)
    WeekStartMonthDay,
    /// "W08" (ISO week number)
    WeekIso,
    /// "February 2025"
    MonthFullWithYear,
    /// "Feb 2025"
    MonthAbbrevWithYear,
    /// "Feb"
    MonthAbbrev,
    /// "2"
    MonthNumeric,
    /// "Q1 2025"
    QuarterWithYear,
    /// "Q1"
    QuarterShort,
    /// "2025"
    YearFull,
}

/// One width-threshold entry: `format` applies to cells at least
/// `min_width_px` wide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelRule {
    pub min_width_px: f64,
    pub format: LabelFormat,
}

pub type LabelRules = SmallVec<[LabelRule; 4]>;

/// Default rule ladder for a unit, widest format first. The last rule has
/// a zero threshold so selection is total.
#[must_use]
pub fn default_rules_for(unit: LogicalUnit) -> LabelRules {
    match unit {
        LogicalUnit::Day => smallvec![
            LabelRule {
                min_width_px: 40.0,
                format: LabelFormat::DayWithWeekday,
            },
            LabelRule {
                min_width_px: 0.0,
                format: LabelFormat::DayOfMonth,
            },
        ],
        LogicalUnit::Week => smallvec![
            LabelRule {
                min_width_px: 110.0,
                format: LabelFormat::WeekSpan,
            },
            LabelRule {
                min_width_px: 45.0,
                format: LabelFormat::WeekStartMonthDay,
            },
            LabelRule {
                min_width_px: 0.0,
                format: LabelFormat::WeekIso,
            },
        ],
        LogicalUnit::Month => smallvec![
            LabelRule {
                min_width_px: 90.0,
                format: LabelFormat::MonthFullWithYear,
            },
            LabelRule {
                min_width_px: 45.0,
                format: LabelFormat::MonthAbbrevWithYear,
            },
            LabelRule {
                min_width_px: 30.0,
                format: LabelFormat::MonthAbbrev,
            },
            LabelRule {
                min_width_px: 0.0,
                format: LabelFormat::MonthNumeric,
            },
        ],
        LogicalUnit::Quarter => smallvec![
            LabelRule {
                min_width_px: 70.0,
                format: LabelFormat::QuarterWithYear,
            },
            LabelRule {
                min_width_px: 0.0,
                format: LabelFormat::QuarterShort,
            },
        ],
        LogicalUnit::Year => smallvec![LabelRule {
            min_width_px: 0.0,
            format: LabelFormat::YearFull,
        }],
    }
}

/// Picks the first rule whose threshold fits the cell width.
///
/// Rules are ordered widest-first; the trailing zero-threshold rule makes
/// the selection total. An empty rule list falls back to the year format,
/// which never consults the translator.
#[must_use]
pub fn select_label_format(rules: &[LabelRule], cell_width_px: f64) -> LabelFormat {
    rules
        .iter()
        .find(|rule| cell_width_px >= rule.min_width_px)
        .or_else(|| rules.last())
        .map(|rule| rule.format)
        .unwrap_or(LabelFormat::YearFull)
}

/// Renders one cell label.
///
/// Month, quarter and year shapes read the cell's start date; the cell is
/// boundary-aligned, so the start date identifies the period even when the
/// sequencer clipped the cell's end defensively.
#[must_use]
pub fn format_period_label(
    range: DateRange,
    format: LabelFormat,
    translator: &dyn LabelTranslator,
) -> String {
    let start = range.start();
    match format {
        LabelFormat::DayWithWeekday => {
            let weekday = lookup(
                translator,
                &weekday_short_key(start.weekday().num_days_from_monday()),
            );
            format!("{weekday} {}", start.day())
        }
        LabelFormat::DayOfMonth => start.day().to_string(),
        LabelFormat::WeekSpan => {
            let end = range.end();
            let start_month = lookup(translator, &month_short_key(start.month()));
            let end_month = lookup(translator, &month_short_key(end.month()));
            format!(
                "{} {start_month} - {} {end_month}",
                start.day(),
                end.day()
            )
        }
        LabelFormat::WeekStartMonthDay => format!("{}/{}", start.month(), start.day()),
        LabelFormat::WeekIso => format!("W{:02}", start.iso_week().week()),
        LabelFormat::MonthFullWithYear => {
            let month = lookup(translator, &month_long_key(start.month()));
            format!("{month} {}", start.year())
        }
        LabelFormat::MonthAbbrevWithYear => {
            let month = lookup(translator, &month_short_key(start.month()));
            format!("{month} {}", start.year())
        }
        LabelFormat::MonthAbbrev => lookup(translator, &month_short_key(start.month())),
        LabelFormat::MonthNumeric => start.month().to_string(),
        LabelFormat::QuarterWithYear => {
            let quarter = lookup(translator, &quarter_key(quarter_index(start.month())));
            format!("{quarter} {}", start.year())
        }
        LabelFormat::QuarterShort => lookup(translator, &quarter_key(quarter_index(start.month()))),
        LabelFormat::YearFull => start.year().to_string(),
    }
}

fn lookup(translator: &dyn LabelTranslator, key: &str) -> String {
    translator
        .translate(key)
        .or_else(|| HeaderLocale::EnUs.translate(key))
        .unwrap_or_else(|| key.to_owned())
}

fn month_long_key(month: u32) -> String {
    format!("month.long.{month}")
}

fn month_short_key(month: u32) -> String {
    format!("month.short.{month}")
}

fn weekday_short_key(days_from_monday: u32) -> String {
    format!("weekday.short.{days_from_monday}")
}

fn quarter_key(quarter: u32) -> String {
    format!("quarter.{quarter}")
}
