use crate::core::Geometry;
use crate::error::{TimelineError, TimelineResult};
use crate::render::{Color, LinePrimitive, TextPrimitive};

/// Backend-agnostic scene for one timeline draw pass.
///
/// `lines[0]` is the axis; after it, tick lines follow catalog order, as do
/// the entry labels after the two range labels in `texts`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub geometry: Geometry,
    pub background: Color,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(geometry: Geometry, background: Color) -> Self {
        Self {
            geometry,
            background,
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.geometry.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.geometry.width,
                height: self.geometry.height,
            });
        }

        self.background.validate()?;
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.texts.is_empty()
    }
}
