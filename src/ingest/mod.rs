//! Ingestion collaborator interface: query validation, CSV rows, sources.

mod csv_records;
mod query;
mod source;

pub use csv_records::parse_daily_csv;
pub use query::{DEFAULT_HISTORICAL_URL_TEMPLATE, HistoricalQuery};
pub use source::{CsvFileSource, DailyRecordSource};
