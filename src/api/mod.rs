//! Chart assembly: records in, per-metric renderers out.

mod chart_renderer;
mod chart_session;
mod chart_set;
mod chart_style;
mod daily_record;

pub use chart_renderer::ChartRenderer;
pub use chart_session::ChartSession;
pub use chart_set::{ChartSet, build_chart_set};
pub use chart_style::{ChartStyle, PlotMargins};
pub use daily_record::{DailyRecord, Metric};
