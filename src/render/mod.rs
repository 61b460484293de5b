mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, TextHAlign, TextPrimitive};

use crate::error::TimelineResult;

/// Contract implemented by any drawing surface.
///
/// Backends receive a fully materialized `RenderFrame`: clear to the frame
/// background, draw every line and text, present.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderer};
