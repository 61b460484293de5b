use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};
use crate::render::Color;

use super::TimeLabelPolicy;

/// Layout and colors of the timeline frame.
///
/// The axis is a vertical line at `axis_x_px` spanning the margin band.
/// Range labels sit left of it, entry labels right of each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineStyle {
    pub margin_px: f64,
    pub axis_x_px: f64,
    pub axis_stroke_width: f64,
    pub tick_half_length_px: f64,
    pub tick_stroke_width: f64,
    pub label_gap_px: f64,
    pub font_size_px: f64,
    pub background_color: Color,
    pub axis_color: Color,
    pub tick_color: Color,
    pub range_label_color: Color,
    pub entry_label_color: Color,
    pub time_label_policy: TimeLabelPolicy,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self {
            margin_px: 20.0,
            axis_x_px: 150.0,
            axis_stroke_width: 1.5,
            tick_half_length_px: 6.0,
            tick_stroke_width: 1.0,
            label_gap_px: 6.0,
            font_size_px: 11.0,
            background_color: Color::rgb(0.09, 0.10, 0.12),
            axis_color: Color::rgb(0.75, 0.77, 0.80),
            tick_color: Color::rgb(0.35, 0.70, 0.95),
            range_label_color: Color::rgb(0.95, 0.80, 0.40),
            entry_label_color: Color::rgb(0.88, 0.90, 0.92),
            time_label_policy: TimeLabelPolicy::UtcDateTime,
        }
    }
}

impl TimelineStyle {
    pub fn validate(self) -> TimelineResult<Self> {
        for (name, value) in [
            ("margin_px", self.margin_px),
            ("axis_x_px", self.axis_x_px),
            ("tick_half_length_px", self.tick_half_length_px),
            ("label_gap_px", self.label_gap_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }

        for (name, value) in [
            ("axis_stroke_width", self.axis_stroke_width),
            ("tick_stroke_width", self.tick_stroke_width),
            ("font_size_px", self.font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }

        self.background_color.validate()?;
        self.axis_color.validate()?;
        self.tick_color.validate()?;
        self.range_label_color.validate()?;
        self.entry_label_color.validate()?;
        Ok(self)
    }
}
