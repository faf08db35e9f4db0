use std::fmt::Write as _;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Rejects strftime patterns chrono cannot render.
pub fn validate_date_pattern(pattern: &str) -> ChartResult<()> {
    if pattern.is_empty() {
        return Err(ChartError::InvalidData(
            "date label pattern must not be empty".to_owned(),
        ));
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ChartError::InvalidData(format!(
            "invalid date label pattern `{pattern}`"
        )));
    }
    Ok(())
}

/// Mapping from dense sample index to the trading day it represents.
///
/// Only used to label the x axis; valid for the lifetime of one chart set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateIndex {
    dates: Vec<NaiveDate>,
}

impl DateIndex {
    /// Wraps dates that are already in ascending index order.
    #[must_use]
    pub fn new(dates: Vec<NaiveDate>) -> Self {
        Self { dates }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    #[must_use]
    pub fn date_at(&self, index: usize) -> Option<NaiveDate> {
        self.dates.get(index).copied()
    }

    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Formats the date at `index` with a `chrono` strftime pattern.
    ///
    /// `Ok(None)` past the end of the index.
    pub fn label_at(&self, index: usize, pattern: &str) -> ChartResult<Option<String>> {
        let Some(date) = self.date_at(index) else {
            return Ok(None);
        };
        let mut label = String::new();
        write!(label, "{}", date.format(pattern)).map_err(|_| {
            ChartError::InvalidData(format!("invalid date label pattern `{pattern}`"))
        })?;
        Ok(Some(label))
    }
}
