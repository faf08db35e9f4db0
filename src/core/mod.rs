pub mod axis_ticks;
pub mod date_index;
pub mod line_series;
pub mod scale;
pub mod series;
pub mod types;

pub use axis_ticks::{AxisTickPlanner, TickMark};
pub use date_index::DateIndex;
pub use line_series::{LineSegment, project_line_segments};
pub use scale::AxisRange;
pub use series::{ScaledSeries, Series, SeriesExtents};
pub use types::{Axis, PlotArea, Sample, Viewport};
