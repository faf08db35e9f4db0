use tracing::{debug, trace};

use crate::core::{
    DateIndex, LineSegment, PlotArea, SeriesExtents, Series, TickMark, Viewport,
    project_line_segments,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    FrameLayer, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    TextVAlign,
};

use super::ChartStyle;

/// Draws one series as a labeled line chart.
///
/// The renderer only borrows its inputs and keeps no state between calls:
/// every draw re-derives extremes, ticks and pixel positions from the
/// requested surface size.
#[derive(Debug, Clone, Copy)]
pub struct ChartRenderer<'a> {
    pub(super) series: &'a Series,
    pub(super) dates: &'a DateIndex,
    pub(super) style: &'a ChartStyle,
}

impl<'a> ChartRenderer<'a> {
    /// Fails when the lengths disagree or `style` does not validate.
    pub fn new(
        series: &'a Series,
        dates: &'a DateIndex,
        style: &'a ChartStyle,
    ) -> ChartResult<Self> {
        style.validate()?;
        if series.len() != dates.len() {
            return Err(ChartError::InvalidData(format!(
                "series has {} samples but date index has {} entries",
                series.len(),
                dates.len()
            )));
        }
        Ok(Self {
            series,
            dates,
            style,
        })
    }

    #[must_use]
    pub fn series(&self) -> &'a Series {
        self.series
    }

    /// Builds the frame for a surface of `width` x `height` pixels.
    ///
    /// Collapsed surfaces (or surfaces smaller than the margins) yield an
    /// empty frame. A series without any present value fails with
    /// `EmptySeries`.
    pub fn render(&self, width: i32, height: i32) -> ChartResult<RenderFrame> {
        let viewport = Viewport::new(width, height);
        let mut frame = RenderFrame::new(viewport);
        let Some(area) = self.plot_area(viewport) else {
            debug!(width, height, "deferring chart frame for collapsed surface");
            return Ok(frame);
        };

        let extents = self.series.extents()?;

        self.push_background(&mut frame, area);
        self.push_axes(&mut frame, area);
        let x_ticks = self.push_x_ticks(&mut frame, area)?;
        let y_ticks = self.push_y_ticks(&mut frame, area, extents);
        let segments = self.push_series(&mut frame, area, extents);

        trace!(
            width,
            height,
            x_ticks,
            y_ticks,
            segments,
            "built chart frame"
        );
        Ok(frame)
    }

    /// Renders and hands the frame to `renderer`; deferred frames are skipped.
    pub fn draw<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        width: i32,
        height: i32,
    ) -> ChartResult<()> {
        let frame = self.render(width, height)?;
        if frame.is_empty() {
            return Ok(());
        }
        renderer.render(&frame)
    }

    /// Visible line segments of the series for a surface size.
    pub fn series_segments(&self, width: i32, height: i32) -> ChartResult<Vec<LineSegment>> {
        let Some(area) = self.plot_area(Viewport::new(width, height)) else {
            return Ok(Vec::new());
        };
        let scaled = self.series.scaled_to_screen(area)?;
        Ok(project_line_segments(&scaled))
    }

    /// X-axis ticks for a surface size.
    pub fn x_ticks(&self, width: i32, height: i32) -> ChartResult<Vec<TickMark>> {
        let Some(area) = self.plot_area(Viewport::new(width, height)) else {
            return Ok(Vec::new());
        };
        self.style
            .ticks
            .discrete_ticks(self.dates, area.origin_x, area.width)
    }

    /// Y-axis ticks for a surface size.
    pub fn y_ticks(&self, width: i32, height: i32) -> ChartResult<Vec<TickMark>> {
        let Some(area) = self.plot_area(Viewport::new(width, height)) else {
            return Ok(Vec::new());
        };
        let range = self.series.y_range()?;
        Ok(self
            .style
            .ticks
            .continuous_ticks(range, area.origin_y, area.height))
    }

    fn plot_area(&self, viewport: Viewport) -> Option<PlotArea> {
        if !viewport.is_valid() {
            return None;
        }
        let area = self.style.margins.plot_area(viewport);
        area.is_drawable().then_some(area)
    }

    fn push_background(&self, frame: &mut RenderFrame, area: PlotArea) {
        frame.push_rect(
            FrameLayer::Background,
            RectPrimitive::new(
                area.origin_x,
                area.top(),
                area.width,
                area.height,
                self.style.background_color,
            ),
        );
    }

    fn push_axes(&self, frame: &mut RenderFrame, area: PlotArea) {
        // Value axis from the origin up, then time axis from the origin right.
        frame.push_line(
            FrameLayer::Axis,
            self.axis_line(area.origin_x, area.origin_y, area.origin_x, area.top()),
        );
        frame.push_line(
            FrameLayer::Axis,
            self.axis_line(area.origin_x, area.origin_y, area.right(), area.origin_y),
        );
    }

    fn push_x_ticks(&self, frame: &mut RenderFrame, area: PlotArea) -> ChartResult<usize> {
        let ticks = self
            .style
            .ticks
            .discrete_ticks(self.dates, area.origin_x, area.width)?;
        for tick in &ticks {
            let x = tick.pixel_position;
            frame.push_line(
                FrameLayer::Ticks,
                self.axis_line(x, area.origin_y, x, area.origin_y - self.style.tick_mark_length_px),
            );
            frame.push_text(
                FrameLayer::Ticks,
                self.label(
                    &tick.label,
                    x,
                    area.origin_y + self.style.label_gap_px,
                    TextHAlign::Center,
                    TextVAlign::Top,
                ),
            );
        }
        Ok(ticks.len())
    }

    fn push_y_ticks(&self, frame: &mut RenderFrame, area: PlotArea, extents: SeriesExtents) -> usize {
        let ticks = self
            .style
            .ticks
            .continuous_ticks(extents.y, area.origin_y, area.height);
        for tick in &ticks {
            let y = tick.pixel_position;
            frame.push_line(
                FrameLayer::Ticks,
                self.axis_line(area.origin_x, y, area.origin_x + self.style.tick_mark_length_px, y),
            );
            frame.push_text(
                FrameLayer::Ticks,
                self.label(
                    &tick.label,
                    area.origin_x - self.style.label_gap_px,
                    y,
                    TextHAlign::Right,
                    TextVAlign::Middle,
                ),
            );
        }
        ticks.len()
    }

    fn push_series(&self, frame: &mut RenderFrame, area: PlotArea, extents: SeriesExtents) -> usize {
        let scaled: Vec<_> = self
            .series
            .samples()
            .iter()
            .map(|sample| extents.to_screen(*sample, area))
            .collect();
        let segments = project_line_segments(&scaled);
        for segment in &segments {
            frame.push_line(
                FrameLayer::Series,
                LinePrimitive::new(
                    segment.x1,
                    segment.y1,
                    segment.x2,
                    segment.y2,
                    self.style.series_stroke_width,
                    self.style.series_color,
                ),
            );
        }
        segments.len()
    }

    fn axis_line(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> LinePrimitive {
        LinePrimitive::new(
            x1,
            y1,
            x2,
            y2,
            self.style.axis_stroke_width,
            self.style.axis_color,
        )
    }

    fn label(
        &self,
        text: &str,
        x: f64,
        y: f64,
        h_align: TextHAlign,
        v_align: TextVAlign,
    ) -> TextPrimitive {
        TextPrimitive::new(
            text,
            x,
            y,
            self.style.font_size_px,
            self.style.axis_color,
            h_align,
        )
        .with_v_align(v_align)
    }
}
