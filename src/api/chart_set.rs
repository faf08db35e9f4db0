use indexmap::IndexMap;
use tracing::debug;

use crate::core::{DateIndex, Series};
use crate::error::{ChartError, ChartResult};

use super::{ChartRenderer, ChartStyle, DailyRecord, Metric};

/// The five metric series built from one fetch, plus their shared dates.
///
/// A chart set is immutable; a new fetch builds a new set and the old one
/// is dropped wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    dates: DateIndex,
    opening: Series,
    closing: Series,
    low: Series,
    high: Series,
    volume: Series,
    style: ChartStyle,
}

/// Builds a chart set with the default style.
pub fn build_chart_set(records: Vec<DailyRecord>) -> ChartResult<ChartSet> {
    ChartSet::from_records(records, ChartStyle::default())
}

impl ChartSet {
    /// Sorts `records` by date and builds one series per metric.
    ///
    /// Sorting is stable and compares dates only; ingestion order is never
    /// trusted.
    pub fn from_records(mut records: Vec<DailyRecord>, style: ChartStyle) -> ChartResult<Self> {
        if records.is_empty() {
            return Err(ChartError::NoData);
        }
        style.validate()?;

        let was_sorted = records.is_sorted_by_key(|record| record.date);
        if !was_sorted {
            records.sort_by_key(|record| record.date);
        }
        debug!(records = records.len(), was_sorted, "build chart set");

        let series_for = |metric: Metric| {
            Series::from_values(records.iter().map(|record| record.value(metric)))
        };
        Ok(Self {
            opening: series_for(Metric::Opening),
            closing: series_for(Metric::Closing),
            low: series_for(Metric::Low),
            high: series_for(Metric::High),
            volume: series_for(Metric::Volume),
            dates: DateIndex::new(records.iter().map(|record| record.date).collect()),
            style,
        })
    }

    #[must_use]
    pub fn series(&self, metric: Metric) -> &Series {
        match metric {
            Metric::Opening => &self.opening,
            Metric::Closing => &self.closing,
            Metric::Low => &self.low,
            Metric::High => &self.high,
            Metric::Volume => &self.volume,
        }
    }

    #[must_use]
    pub fn dates(&self) -> &DateIndex {
        &self.dates
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Number of trading days in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    #[must_use]
    pub fn renderer(&self, metric: Metric) -> ChartRenderer<'_> {
        ChartRenderer {
            series: self.series(metric),
            dates: &self.dates,
            style: &self.style,
        }
    }

    /// Renderers keyed by metric name, in tab order.
    #[must_use]
    pub fn renderers(&self) -> IndexMap<&'static str, ChartRenderer<'_>> {
        Metric::ALL
            .into_iter()
            .map(|metric| (metric.name(), self.renderer(metric)))
            .collect()
    }
}
