use tracing::{info, warn};

use crate::error::ChartResult;
use crate::ingest::{DailyRecordSource, HistoricalQuery};

use super::{ChartSet, ChartStyle};

/// Holds the chart set currently on screen and replaces it on refresh.
///
/// Replacement is all-or-nothing: if validation, fetching or building fails,
/// the previous chart set stays in place and the error message is kept for
/// display.
#[derive(Debug, Default)]
pub struct ChartSession {
    style: ChartStyle,
    current: Option<ChartSet>,
    last_error: Option<String>,
}

impl ChartSession {
    #[must_use]
    pub fn new(style: ChartStyle) -> Self {
        Self {
            style,
            current: None,
            last_error: None,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&ChartSet> {
        self.current.as_ref()
    }

    /// Message of the most recent failed refresh, cleared on success.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Fetches records for `query` and swaps in a freshly built chart set.
    pub fn refresh<S: DailyRecordSource + ?Sized>(
        &mut self,
        source: &mut S,
        query: &HistoricalQuery,
    ) -> ChartResult<&ChartSet> {
        let built = query
            .validate()
            .and_then(|()| source.fetch(query))
            .and_then(|records| ChartSet::from_records(records, self.style.clone()));

        match built {
            Ok(chart_set) => {
                info!(
                    ticker = query.ticker(),
                    days = chart_set.len(),
                    "replaced chart set"
                );
                self.last_error = None;
                Ok(&*self.current.insert(chart_set))
            }
            Err(err) => {
                warn!(
                    ticker = query.ticker(),
                    error = %err,
                    kept_previous = self.current.is_some(),
                    "chart refresh failed"
                );
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Drops the current chart set.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
