use std::fmt;

use serde::{Deserialize, Serialize};

/// Size of the drawing surface in pixels.
///
/// Widths and heights come straight from the host toolkit, which may report
/// zero or negative sizes while a widget is being laid out or torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Chart axis selector used by extremes lookups and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// One data point: `x` is always present, `y` may be missing.
///
/// The same shape is reused for unit-space and pixel-space output, so an
/// absent source `y` stays absent through every scaling step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: Option<f64>,
}

impl Sample {
    #[must_use]
    pub const fn new(x: f64, y: Option<f64>) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn present(x: f64, y: f64) -> Self {
        Self { x, y: Some(y) }
    }

    #[must_use]
    pub const fn absent(x: f64) -> Self {
        Self { x, y: None }
    }

    #[must_use]
    pub fn has_y(self) -> bool {
        self.y.is_some()
    }
}

/// Inner plotting rectangle in surface pixels.
///
/// `origin_x`/`origin_y` is the bottom-left corner; the plot grows right and up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub const fn new(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.origin_y - self.height
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.origin_x + self.width
    }

    /// Returns `false` for collapsed or non-finite areas, which are never drawn.
    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}
