//! market-chart-rs: daily stock price charts for desktop viewers.
//!
//! The crate turns a list of daily market records into five line charts
//! (opening, closing, low, high, volume). Its core scales samples with
//! missing values into a resizable plot and plans labeled axis ticks; the
//! resulting frames are drawn by any `render::Renderer` backend.

pub mod api;
pub mod core;
pub mod error;
pub mod ingest;
pub mod render;
pub mod telemetry;

pub use api::{
    ChartRenderer, ChartSession, ChartSet, ChartStyle, DailyRecord, Metric, build_chart_set,
};
pub use error::{ChartError, ChartResult};
