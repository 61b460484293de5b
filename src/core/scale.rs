/// Linear mapping between a value domain and a pixel band.
///
/// A zero-width (or non-finite) domain is tolerated: every value maps to the
/// middle of the pixel band instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub const fn new(domain_start: f64, domain_end: f64, range_start: f64, range_end: f64) -> Self {
        Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        let span = self.domain_end - self.domain_start;
        !(span.is_finite() && span > 0.0)
    }

    #[must_use]
    pub fn range_midpoint(self) -> f64 {
        (self.range_start + self.range_end) / 2.0
    }

    pub fn domain_to_pixel(self, value: f64) -> f64 {
        if self.is_degenerate() || !value.is_finite() {
            return self.range_midpoint();
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        let pixel = self.range_start + normalized * (self.range_end - self.range_start);
        if pixel.is_nan() {
            self.range_midpoint()
        } else {
            // Overflow on extremely narrow windows saturates instead of going infinite.
            pixel.clamp(f64::MIN, f64::MAX)
        }
    }

    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let band = self.range_end - self.range_start;
        if self.is_degenerate() || !pixel.is_finite() || band == 0.0 || !band.is_finite() {
            return self.domain_start;
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (pixel - self.range_start) / band;
        self.domain_start + normalized * span
    }
}
