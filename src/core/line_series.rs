use serde::{Deserialize, Serialize};

use crate::core::Sample;

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Connects consecutive scaled samples into line segments.
///
/// A pair is linked only when both ends have a `y`. A missing sample
/// therefore opens a gap on both of its sides and is never bridged.
#[must_use]
pub fn project_line_segments(scaled: &[Sample]) -> Vec<LineSegment> {
    scaled
        .windows(2)
        .filter_map(|pair| match (pair[0].y, pair[1].y) {
            (Some(y1), Some(y2)) => Some(LineSegment {
                x1: pair[0].x,
                y1,
                x2: pair[1].x,
                y2,
            }),
            _ => None,
        })
        .collect()
}
