use chrono::NaiveDate;
use thiserror::Error;

use crate::core::Axis;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("series has no present values on the {axis} axis")]
    EmptySeries { axis: Axis },

    #[error("no data available for the requested range")]
    NoData,

    #[error("invalid date range: {from} must be before {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: i32, height: i32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Opaque failure reported by a record source; shown to the user as-is.
    #[error("{0}")]
    Ingestion(String),
}
