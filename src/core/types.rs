use serde::{Deserialize, Serialize};

/// Capture time in whole seconds since the Unix epoch (UTC).
pub type Timestamp = i64;

/// One file placed on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// File base name, used as the tick label.
    pub name: String,
    pub timestamp: Timestamp,
}

impl TimelineEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            name: name.into(),
            timestamp,
        }
    }

    #[must_use]
    pub fn time(&self) -> f64 {
        self.timestamp as f64
    }
}

/// Pixel geometry of the drawable area for one frame.
///
/// Built fresh from the host window size every frame; nothing keeps it
/// between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub margin: f64,
}

impl Geometry {
    #[must_use]
    pub fn new(width: u32, height: u32, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Converts a host drawable size into frame geometry.
    ///
    /// Negative sizes reported by toolkits during teardown collapse to zero.
    #[must_use]
    pub fn current(drawable_width: i32, drawable_height: i32, margin: f64) -> Self {
        Self::new(
            u32::try_from(drawable_width).unwrap_or(0),
            u32::try_from(drawable_height).unwrap_or(0),
            margin,
        )
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0 && self.margin.is_finite()
    }

    /// Vertical pixel band `[margin, height - margin]` the visible window maps onto.
    #[must_use]
    pub fn pixel_range(self) -> (f64, f64) {
        (self.margin, f64::from(self.height) - self.margin)
    }

    #[must_use]
    pub fn midpoint_y(self) -> f64 {
        f64::from(self.height) / 2.0
    }
}
