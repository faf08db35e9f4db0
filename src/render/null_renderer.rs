use crate::error::ChartResult;
use crate::render::{FrameLayer, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// without a real drawing surface.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_rect_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_series_segment_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_rect_count = frame.rects().count();
        self.last_line_count = frame.lines().count();
        self.last_text_count = frame.texts().count();
        self.last_series_segment_count = frame.lines_in(FrameLayer::Series).count();
        Ok(())
    }
}
