use serde::{Deserialize, Serialize};

/// Closed value range observed on one axis of a series.
///
/// Unlike a plain linear scale this range may be degenerate (`min == max`):
/// flat or single-point series are centered instead of rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.max == self.min
    }

    /// Maps `value` into unit space, `0.5` when the range is degenerate.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.5;
        }
        (value - self.min) / self.span()
    }

    /// Inverse of [`AxisRange::normalize`] for non-degenerate ranges.
    #[must_use]
    pub fn value_at(self, ratio: f64) -> f64 {
        self.min + self.span() * ratio
    }

    /// Folds present values into a range; `None` when the iterator is empty.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |range, value| {
            Some(match range {
                None => Self::new(value, value),
                Some(range) => Self::new(range.min.min(value), range.max.max(value)),
            })
        })
    }
}
