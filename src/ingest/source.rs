use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::api::DailyRecord;
use crate::error::{ChartError, ChartResult};

use super::{HistoricalQuery, parse_daily_csv};

/// Supplier of daily records for a query, typically a network fetch.
///
/// Implementations report their own failures as `ChartError::Ingestion`
/// (or `NoData`); callers never retry.
pub trait DailyRecordSource {
    fn fetch(&mut self, query: &HistoricalQuery) -> ChartResult<Vec<DailyRecord>>;
}

impl<F> DailyRecordSource for F
where
    F: FnMut(&HistoricalQuery) -> ChartResult<Vec<DailyRecord>>,
{
    fn fetch(&mut self, query: &HistoricalQuery) -> ChartResult<Vec<DailyRecord>> {
        self(query)
    }
}

/// Reads a previously downloaded CSV export from disk.
///
/// Only rows inside the query's date range are returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DailyRecordSource for CsvFileSource {
    fn fetch(&mut self, query: &HistoricalQuery) -> ChartResult<Vec<DailyRecord>> {
        let file = File::open(&self.path).map_err(|err| {
            ChartError::Ingestion(format!("failed to open {}: {err}", self.path.display()))
        })?;
        let mut records = parse_daily_csv(BufReader::new(file))?;
        records.retain(|record| query.contains(record.date));
        debug!(
            path = %self.path.display(),
            ticker = query.ticker(),
            rows = records.len(),
            "loaded csv records"
        );
        if records.is_empty() {
            return Err(ChartError::NoData);
        }
        Ok(records)
    }
}
