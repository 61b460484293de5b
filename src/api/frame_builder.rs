use crate::core::{Catalog, Geometry, Viewport};
use crate::error::{TimelineError, TimelineResult};
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::TimelineStyle;
use super::label_format::{format_entry_label, format_time_label};

/// Largest |y| handed to backends; Cairo fixed-point coordinates overflow past ~8e6.
const MAX_ABS_PIXEL: f64 = 1_000_000.0;

/// Builds the draw list for one frame.
///
/// Emits the axis, the `time_min`/`time_max` range labels, then one tick and
/// one label per catalog entry in catalog order. Entries outside the visible
/// window are still emitted, just positioned off the axis band.
pub fn build_timeline_frame(
    catalog: &Catalog,
    viewport: Viewport,
    geometry: Geometry,
    style: TimelineStyle,
) -> TimelineResult<RenderFrame> {
    if !geometry.is_valid() {
        return Err(TimelineError::InvalidViewport {
            width: geometry.width,
            height: geometry.height,
        });
    }

    let (axis_top, axis_bottom) = geometry.pixel_range();
    let axis_x = style.axis_x_px;
    let text_lift = style.font_size_px / 2.0;
    let policy = style.time_label_policy;

    let mut frame = RenderFrame::new(geometry, style.background_color).with_line(
        LinePrimitive::new(
            axis_x,
            axis_top,
            axis_x,
            axis_bottom,
            style.axis_stroke_width,
            style.axis_color,
        ),
    );

    let range_label_x = axis_x - style.tick_half_length_px - style.label_gap_px;
    for bound in [viewport.time_min(), viewport.time_max()] {
        let y = clamp_pixel(viewport.map_to_pixel(bound, geometry));
        frame = frame.with_text(TextPrimitive::new(
            format_time_label(bound, policy),
            range_label_x,
            y - text_lift,
            style.font_size_px,
            style.range_label_color,
            TextHAlign::Right,
        ));
    }

    let tick_left = axis_x - style.tick_half_length_px;
    let tick_right = axis_x + style.tick_half_length_px;
    let entry_label_x = tick_right + style.label_gap_px;
    frame.lines.reserve(catalog.len());
    frame.texts.reserve(catalog.len());
    for entry in catalog.iter() {
        let y = clamp_pixel(viewport.map_to_pixel(entry.time(), geometry));
        frame.lines.push(LinePrimitive::new(
            tick_left,
            y,
            tick_right,
            y,
            style.tick_stroke_width,
            style.tick_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_entry_label(entry, policy),
            entry_label_x,
            y - text_lift,
            style.font_size_px,
            style.entry_label_color,
            TextHAlign::Left,
        ));
    }

    Ok(frame)
}

fn clamp_pixel(pixel: f64) -> f64 {
    pixel.clamp(-MAX_ABS_PIXEL, MAX_ABS_PIXEL)
}
