use serde::{Deserialize, Serialize};

use crate::core::{AxisTickPlanner, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Space reserved around the plot for axis labels, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotMargins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        // Left side is wide enough for two-decimal volume labels.
        Self {
            left: 120.0,
            top: 50.0,
            right: 50.0,
            bottom: 50.0,
        }
    }
}

impl PlotMargins {
    /// Inner plot rectangle for a surface; may be collapsed on tiny surfaces.
    #[must_use]
    pub fn plot_area(self, viewport: Viewport) -> PlotArea {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        PlotArea::new(
            self.left,
            height - self.bottom,
            width - self.left - self.right,
            height - self.top - self.bottom,
        )
    }

    fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Visual configuration shared by every chart of a set.
///
/// Serializable so host applications can persist a chart look without
/// inventing their own format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    #[serde(default)]
    pub margins: PlotMargins,
    #[serde(default)]
    pub ticks: AxisTickPlanner,
    #[serde(default = "default_tick_mark_length_px")]
    pub tick_mark_length_px: f64,
    #[serde(default = "default_label_gap_px")]
    pub label_gap_px: f64,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_axis_stroke_width")]
    pub axis_stroke_width: f64,
    #[serde(default = "default_series_color")]
    pub series_color: Color,
    #[serde(default = "default_series_stroke_width")]
    pub series_stroke_width: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            margins: PlotMargins::default(),
            ticks: AxisTickPlanner::default(),
            tick_mark_length_px: default_tick_mark_length_px(),
            label_gap_px: default_label_gap_px(),
            font_size_px: default_font_size_px(),
            background_color: default_background_color(),
            axis_color: default_axis_color(),
            axis_stroke_width: default_axis_stroke_width(),
            series_color: default_series_color(),
            series_stroke_width: default_series_stroke_width(),
        }
    }
}

impl ChartStyle {
    /// Sets plot margins.
    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets tick planning policy.
    #[must_use]
    pub fn with_ticks(mut self, ticks: AxisTickPlanner) -> Self {
        self.ticks = ticks;
        self
    }

    /// Sets series line color.
    #[must_use]
    pub fn with_series_color(mut self, color: Color) -> Self {
        self.series_color = color;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.margins.validate()?;
        for (name, value) in [
            ("tick_mark_length_px", self.tick_mark_length_px),
            ("label_gap_px", self.label_gap_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("font_size_px", self.font_size_px),
            ("axis_stroke_width", self.axis_stroke_width),
            ("series_stroke_width", self.series_stroke_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        self.ticks.validate()?;
        self.background_color.validate()?;
        self.axis_color.validate()?;
        self.series_color.validate()
    }

    /// Serializes style to pretty JSON for config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize style: {e}")))
    }

    /// Deserializes and validates style from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let style: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse style: {e}")))?;
        style.validate()?;
        Ok(style)
    }
}

fn default_tick_mark_length_px() -> f64 {
    12.0
}

fn default_label_gap_px() -> f64 {
    5.0
}

fn default_font_size_px() -> f64 {
    11.0
}

fn default_background_color() -> Color {
    Color::rgb(1.0, 1.0, 1.0)
}

fn default_axis_color() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

fn default_axis_stroke_width() -> f64 {
    1.0
}

fn default_series_color() -> Color {
    Color::rgb8(58, 255, 134)
}

fn default_series_stroke_width() -> f64 {
    3.0
}

#[cfg(test)]
mod tests {
    use super::{ChartStyle, PlotMargins};
    use crate::core::{AxisTickPlanner, Viewport};

    #[test]
    fn default_margins_carve_plot_area_from_surface() {
        let area = PlotMargins::default().plot_area(Viewport::new(800, 650));
        assert_eq!(area.origin_x, 120.0);
        assert_eq!(area.origin_y, 600.0);
        assert_eq!(area.width, 630.0);
        assert_eq!(area.height, 550.0);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let style = ChartStyle::from_json_str(r#"{ "font_size_px": 14.0 }"#).expect("parse");
        assert_eq!(style.font_size_px, 14.0);
        assert_eq!(style.margins, PlotMargins::default());
        assert_eq!(style.ticks.x_target_ticks, 12);
    }

    #[test]
    fn negative_margin_is_rejected() {
        let style = ChartStyle::default().with_margins(PlotMargins {
            left: -1.0,
            ..PlotMargins::default()
        });
        assert!(style.validate().is_err());
    }

    #[test]
    fn unknown_date_specifier_in_json_is_rejected() {
        let parsed = ChartStyle::from_json_str(r#"{ "ticks": { "date_label_pattern": "%Q" } }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn unbounded_tick_counts_are_rejected() {
        let style = ChartStyle::default().with_ticks(AxisTickPlanner {
            x_target_ticks: usize::MAX,
            ..AxisTickPlanner::default()
        });
        assert!(style.validate().is_err());

        let parsed = ChartStyle::from_json_str(r#"{ "ticks": { "y_tick_count": 1000000000000 } }"#);
        assert!(parsed.is_err());
    }
}
