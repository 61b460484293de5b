use serde::Serialize;

use crate::core::{Catalog, Geometry, LinearScale};
use crate::error::{TimelineError, TimelineResult};

/// Visible time window `[time_min, time_max]`.
///
/// `time_min <= time_max` always holds. The equal case (a single-entry
/// catalog) is a valid window: every time maps to the vertical midpoint.
/// Pixel geometry is not owned here; it is passed in for every mapping.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Viewport {
    time_min: f64,
    time_max: f64,
}

impl Viewport {
    /// Creates a window from explicit bounds, normalizing their order.
    pub fn new(time_min: f64, time_max: f64) -> TimelineResult<Self> {
        if !time_min.is_finite() || !time_max.is_finite() {
            return Err(TimelineError::InvalidData(
                "viewport bounds must be finite".to_owned(),
            ));
        }

        Ok(Self {
            time_min: time_min.min(time_max),
            time_max: time_min.max(time_max),
        })
    }

    /// Fits the window to the first and last catalog entries.
    pub fn initialize(catalog: &Catalog) -> TimelineResult<Self> {
        match (catalog.first(), catalog.last()) {
            (Some(first), Some(last)) => Self::new(first.time(), last.time()),
            _ => Err(TimelineError::InvalidData(
                "viewport cannot be initialized from an empty catalog".to_owned(),
            )),
        }
    }

    #[must_use]
    pub fn time_min(self) -> f64 {
        self.time_min
    }

    #[must_use]
    pub fn time_max(self) -> f64 {
        self.time_max
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.time_min, self.time_max)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.time_max - self.time_min
    }

    #[must_use]
    pub fn center(self) -> f64 {
        (self.time_min + self.time_max) / 2.0
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.time_min == self.time_max
    }

    /// Maps a time onto `[margin, height - margin]`.
    ///
    /// Never divides by zero: a degenerate window maps every time to the
    /// vertical midpoint of the drawable area.
    #[must_use]
    pub fn map_to_pixel(self, time: f64, geometry: Geometry) -> f64 {
        self.pixel_scale(geometry).domain_to_pixel(time)
    }

    /// Inverse of [`Viewport::map_to_pixel`]; a degenerate window yields `time_min`.
    #[must_use]
    pub fn pixel_to_time(self, pixel_y: f64, geometry: Geometry) -> f64 {
        self.pixel_scale(geometry).pixel_to_domain(pixel_y)
    }

    fn pixel_scale(self, geometry: Geometry) -> LinearScale {
        let (range_start, range_end) = geometry.pixel_range();
        LinearScale::new(self.time_min, self.time_max, range_start, range_end)
    }
}
