use serde::{Deserialize, Serialize};

use crate::core::date_index::validate_date_pattern;
use crate::core::{AxisRange, DateIndex};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_X_TARGET_TICKS: usize = 12;
pub const DEFAULT_Y_TICK_COUNT: usize = 10;
pub const DEFAULT_DATE_LABEL_PATTERN: &str = "%b %-d";
pub const DEFAULT_VALUE_LABEL_DECIMALS: usize = 2;
/// Upper bound for both tick counts and the label precision.
pub const MAX_TICK_COUNT: usize = 1_000;

/// One labeled mark on an axis.
///
/// `pixel_position` is a surface coordinate: screen x for the time axis and
/// screen y for the value axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    pub pixel_position: f64,
    pub value: f64,
    pub label: String,
}

/// Tick placement policies for the two chart axes.
///
/// The x axis is a dense sample index, so ticks snap to real samples; the
/// y axis is continuous and gets a fixed number of evenly spaced ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisTickPlanner {
    pub x_target_ticks: usize,
    pub y_tick_count: usize,
    pub date_label_pattern: String,
    pub value_label_decimals: usize,
}

impl Default for AxisTickPlanner {
    fn default() -> Self {
        Self {
            x_target_ticks: DEFAULT_X_TARGET_TICKS,
            y_tick_count: DEFAULT_Y_TICK_COUNT,
            date_label_pattern: DEFAULT_DATE_LABEL_PATTERN.to_owned(),
            value_label_decimals: DEFAULT_VALUE_LABEL_DECIMALS,
        }
    }
}

impl AxisTickPlanner {
    /// Rejects counts above [`MAX_TICK_COUNT`] and unusable date patterns.
    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("x_target_ticks", self.x_target_ticks),
            ("y_tick_count", self.y_tick_count),
            ("value_label_decimals", self.value_label_decimals),
        ] {
            if value > MAX_TICK_COUNT {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be <= {MAX_TICK_COUNT}"
                )));
            }
        }
        validate_date_pattern(&self.date_label_pattern)
    }

    /// Chooses the sample indexes that carry an x tick, with their screen x.
    ///
    /// A running hatch target starts at the origin and advances by the ideal
    /// gap each time a tick is placed. A sample takes the tick when it is at
    /// least as close to the target as its successor would be.
    #[must_use]
    pub fn discrete_positions(
        &self,
        sample_count: usize,
        origin_x: f64,
        width: f64,
    ) -> Vec<(usize, f64)> {
        if sample_count < 2 || self.x_target_ticks < 2 || !width.is_finite() || width <= 0.0 {
            return Vec::new();
        }

        let ideal_gap = width / (self.x_target_ticks - 1) as f64;
        let sample_gap = width / (sample_count - 1) as f64;

        let mut hatch_target = origin_x;
        let mut positions = Vec::with_capacity(self.x_target_ticks.min(sample_count));
        for index in 0..sample_count {
            let current = origin_x + index as f64 * sample_gap;
            let next = current + sample_gap;
            if (hatch_target - current).abs() <= (hatch_target - next).abs() {
                positions.push((index, current));
                hatch_target += ideal_gap;
            }
        }
        positions
    }

    /// Builds x ticks labeled with the trading day of each chosen sample.
    ///
    /// Fails only when the date label pattern cannot be rendered.
    pub fn discrete_ticks(
        &self,
        dates: &DateIndex,
        origin_x: f64,
        width: f64,
    ) -> ChartResult<Vec<TickMark>> {
        let mut ticks = Vec::new();
        for (index, pixel_position) in self.discrete_positions(dates.len(), origin_x, width) {
            if let Some(label) = dates.label_at(index, &self.date_label_pattern)? {
                ticks.push(TickMark {
                    pixel_position,
                    value: index as f64,
                    label,
                });
            }
        }
        Ok(ticks)
    }

    /// Builds y ticks from the origin upward, `y_tick_count - 1` equal gaps.
    ///
    /// Ticks are ordered bottom to top: `value` ascends while
    /// `pixel_position` (a screen y, growing downward) strictly decreases.
    /// A degenerate range still yields distinct pixel positions; every tick
    /// then carries the same value.
    #[must_use]
    pub fn continuous_ticks(&self, range: AxisRange, origin_y: f64, height: f64) -> Vec<TickMark> {
        match self.y_tick_count {
            0 => Vec::new(),
            1 => vec![self.value_tick(origin_y, range.min)],
            count => {
                let denominator = (count - 1) as f64;
                let pixel_gap = height / denominator;
                (0..count)
                    .map(|index| {
                        let ratio = index as f64 / denominator;
                        let pixel_position = origin_y - index as f64 * pixel_gap;
                        self.value_tick(pixel_position, range.value_at(ratio))
                    })
                    .collect()
            }
        }
    }

    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        format!("{value:.*}", self.value_label_decimals)
    }

    fn value_tick(&self, pixel_position: f64, value: f64) -> TickMark {
        TickMark {
            pixel_position,
            value,
            label: self.format_value(value),
        }
    }
}
