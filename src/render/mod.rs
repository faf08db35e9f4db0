mod frame;
mod null_renderer;
mod primitives;

pub use frame::{DrawCommand, FrameEntry, FrameLayer, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};

use crate::error::ChartResult;

/// Drawing surface contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, ordered `RenderFrame`, so drawing
/// code stays isolated from scaling and tick planning.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
