use serde::{Deserialize, Serialize};

use crate::core::{Axis, AxisRange, PlotArea, Sample};
use crate::error::{ChartError, ChartResult};

/// Pixel-space samples in source order; `y` is absent iff the source `y` was.
pub type ScaledSeries = Vec<Sample>;

/// Extremes of a series on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesExtents {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl SeriesExtents {
    /// Maps a sample into `[0, 1] x [0, 1]`, propagating an absent `y`.
    #[must_use]
    pub fn to_unit(self, sample: Sample) -> Sample {
        Sample::new(
            self.x.normalize(sample.x),
            sample.y.map(|y| self.y.normalize(y)),
        )
    }

    /// Maps a sample into screen pixels; screen `y` grows downward.
    #[must_use]
    pub fn to_screen(self, sample: Sample, area: PlotArea) -> Sample {
        let unit = self.to_unit(sample);
        Sample::new(
            area.origin_x + unit.x * area.width,
            unit.y.map(|uy| area.origin_y - uy * area.height),
        )
    }
}

/// Ordered samples of one metric, indexed `0..n` by trading day.
///
/// Extremes are recomputed on every call: a series is scaled once per draw
/// and resizes must never observe stale bounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Builds a series whose `x` is the position of each value.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = Option<f64>>) -> Self {
        let samples = values
            .into_iter()
            .enumerate()
            .map(|(index, y)| Sample::new(index as f64, y))
            .collect();
        Self { samples }
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Sample> {
        self.samples.get(index).copied()
    }

    pub fn x_range(&self) -> ChartResult<AxisRange> {
        AxisRange::from_values(self.samples.iter().map(|sample| sample.x))
            .ok_or(ChartError::EmptySeries { axis: Axis::X })
    }

    pub fn y_range(&self) -> ChartResult<AxisRange> {
        AxisRange::from_values(self.samples.iter().filter_map(|sample| sample.y))
            .ok_or(ChartError::EmptySeries { axis: Axis::Y })
    }

    pub fn extents(&self) -> ChartResult<SeriesExtents> {
        Ok(SeriesExtents {
            x: self.x_range()?,
            y: self.y_range()?,
        })
    }

    pub fn min_x(&self) -> ChartResult<f64> {
        self.x_range().map(|range| range.min)
    }

    pub fn max_x(&self) -> ChartResult<f64> {
        self.x_range().map(|range| range.max)
    }

    pub fn min_y(&self) -> ChartResult<f64> {
        self.y_range().map(|range| range.min)
    }

    pub fn max_y(&self) -> ChartResult<f64> {
        self.y_range().map(|range| range.max)
    }

    /// Maps one sample into unit space using this series' current extremes.
    pub fn scale_to_unit(&self, sample: Sample) -> ChartResult<Sample> {
        Ok(self.extents()?.to_unit(sample))
    }

    /// Maps one sample into pixel space below/right of `(origin_x, origin_y)`.
    pub fn scale_to_screen(
        &self,
        sample: Sample,
        origin_x: f64,
        origin_y: f64,
        width: f64,
        height: f64,
    ) -> ChartResult<Sample> {
        let area = PlotArea::new(origin_x, origin_y, width, height);
        Ok(self.extents()?.to_screen(sample, area))
    }

    /// Scales the whole series, preserving order and absent values.
    pub fn scaled_to_screen(&self, area: PlotArea) -> ChartResult<ScaledSeries> {
        let extents = self.extents()?;
        Ok(self
            .samples
            .iter()
            .map(|sample| extents.to_screen(*sample, area))
            .collect())
    }
}
