use chrono::NaiveDate;
use thiserror::Error;

use crate::api::ZoomLevel;

pub type HeaderResult<T> = Result<T, HeaderError>;

#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("invalid visible range: end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("invalid day width {value}: day widths must be positive integers")]
    InvalidDayWidth { value: f64 },

    #[error("no renderer config provisioned for zoom level {level:?}")]
    MissingZoomConfig { level: ZoomLevel },

    #[error("invalid header config: {0}")]
    InvalidConfig(String),
}
