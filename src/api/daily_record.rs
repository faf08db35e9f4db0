use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One trading day as delivered by the ingestion layer.
///
/// Any market value may be missing for a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub opening: Option<f64>,
    pub closing: Option<f64>,
    pub low: Option<f64>,
    pub high: Option<f64>,
    pub volume: Option<u64>,
}

impl DailyRecord {
    #[must_use]
    pub fn new(
        date: NaiveDate,
        opening: Option<f64>,
        closing: Option<f64>,
        low: Option<f64>,
        high: Option<f64>,
        volume: Option<u64>,
    ) -> Self {
        Self {
            date,
            opening,
            closing,
            low,
            high,
            volume,
        }
    }

    /// Record with every market value absent.
    #[must_use]
    pub fn empty(date: NaiveDate) -> Self {
        Self::new(date, None, None, None, None, None)
    }

    /// Returns the metric value as a finite number, or `None` when absent.
    #[must_use]
    pub fn value(&self, metric: Metric) -> Option<f64> {
        let value = match metric {
            Metric::Opening => self.opening,
            Metric::Closing => self.closing,
            Metric::Low => self.low,
            Metric::High => self.high,
            Metric::Volume => self.volume.map(|volume| volume as f64),
        };
        value.filter(|value| value.is_finite())
    }
}

/// The five charted market metrics, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Opening,
    Closing,
    Low,
    High,
    Volume,
}

impl Metric {
    pub const ALL: [Self; 5] = [
        Self::Opening,
        Self::Closing,
        Self::Low,
        Self::High,
        Self::Volume,
    ];

    /// Stable key used by hosts to look up a renderer.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Opening => "opening",
            Self::Closing => "closing",
            Self::Low => "low",
            Self::High => "high",
            Self::Volume => "volume",
        }
    }

    /// Human-facing tab title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Opening => "Opening",
            Self::Closing => "Closing",
            Self::Low => "Lowest",
            Self::High => "Highest",
            Self::Volume => "Volumes",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.name() == input)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown metric `{input}`")))
    }
}
