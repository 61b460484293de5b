use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{TimelineError, TimelineResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

/// Renderers that can draw into an external Cairo context, such as a GTK
/// `DrawingArea` draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> TimelineResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Two modes:
/// - offscreen image-surface rendering through `Renderer::render`, resized
///   to the frame geometry on demand
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> TimelineResult<Self> {
        Ok(Self {
            surface: create_surface(width, height)?,
        })
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, path: &Path) -> TimelineResult<()> {
        let mut file = File::create(path).map_err(|source| TimelineError::Io {
            context: format!("failed to create `{}`", path.display()),
            source,
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| TimelineError::Platform(format!("failed to encode png: {err}")))
    }

    fn ensure_surface_size(&mut self, frame: &RenderFrame) -> TimelineResult<()> {
        let width = i32::try_from(frame.geometry.width).unwrap_or(i32::MAX);
        let height = i32::try_from(frame.geometry.height).unwrap_or(i32::MAX);
        if self.surface.width() != width || self.surface.height() != height {
            self.surface = create_surface(width, height)?;
        }
        Ok(())
    }

    fn render_with_context(&self, context: &Context, frame: &RenderFrame) -> TimelineResult<()> {
        frame.validate()?;

        apply_color(context, frame.background);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, _text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };

            apply_color(context, text.color);
            context.move_to(x, text.y);
            pangocairo::functions::show_layout(context, &layout);
        }

        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()> {
        frame.validate()?;
        self.ensure_surface_size(frame)?;
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)?;
        self.surface.flush();
        Ok(())
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> TimelineResult<()> {
        self.render_with_context(context, frame)
    }
}

fn create_surface(width: i32, height: i32) -> TimelineResult<ImageSurface> {
    if width <= 0 || height <= 0 {
        return Err(TimelineError::InvalidData(
            "cairo surface size must be > 0".to_owned(),
        ));
    }

    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> TimelineError {
    TimelineError::Platform(format!("{prefix}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{TimelineStyle, build_timeline_frame};
    use crate::core::{Catalog, Geometry, TimelineEntry, Viewport};

    #[test]
    fn minimal_surface_grows_to_frame_geometry() {
        let catalog = Catalog::from_entries(vec![
            TimelineEntry::new("a.jpg", 10),
            TimelineEntry::new("b.jpg", 70),
        ]);
        let viewport = Viewport::initialize(&catalog).expect("viewport");
        let frame = build_timeline_frame(
            &catalog,
            viewport,
            Geometry::new(320, 240, 20.0),
            TimelineStyle::default(),
        )
        .expect("frame");

        let mut renderer = CairoRenderer::new(1, 1).expect("renderer");
        renderer.render(&frame).expect("render");

        assert_eq!(renderer.surface.width(), 320);
        assert_eq!(renderer.surface.height(), 240);
    }

    #[test]
    fn non_positive_surface_size_is_rejected() {
        assert!(matches!(
            CairoRenderer::new(0, 10),
            Err(TimelineError::InvalidData(_))
        ));
    }
}
