use crate::core::data::viewport::Viewport;
use rand::Rng;

/// A small random perturbation: pan by up to `pan` of the current extent on
/// each axis and scale by a factor in `[1 - zoom, 1 + zoom)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jitter {
    pub pan: f64,
    pub zoom: f64,
}

impl Jitter {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.pan.is_finite() && self.pan >= 0.0 && (0.0..1.0).contains(&self.zoom)
    }

    pub fn apply<R: Rng + ?Sized>(&self, viewport: &mut Viewport, rng: &mut R) {
        let delta_re = symmetric(rng, self.pan) * viewport.width();
        let delta_im = symmetric(rng, self.pan) * viewport.height();
        let factor = 1.0 + symmetric(rng, self.zoom);

        viewport.pan(delta_re, delta_im);
        viewport.zoom(factor);
    }
}

/// A large move used when small jitter is not enough: pan by up to `pan` of
/// the extent, then zoom out by `zoom_out`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Escalation {
    pub pan: f64,
    pub zoom_out: f64,
}

impl Escalation {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.pan.is_finite() && self.pan >= 0.0 && self.zoom_out.is_finite() && self.zoom_out >= 1.0
    }

    pub fn apply<R: Rng + ?Sized>(&self, viewport: &mut Viewport, rng: &mut R) {
        let delta_re = symmetric(rng, self.pan) * viewport.width();
        let delta_im = symmetric(rng, self.pan) * viewport.height();

        viewport.pan(delta_re, delta_im);
        viewport.zoom(self.zoom_out);
    }
}

/// Uniform sample from `[-magnitude, magnitude)`; zero when the range is empty.
pub(crate) fn symmetric<R: Rng + ?Sized>(rng: &mut R, magnitude: f64) -> f64 {
    if magnitude > 0.0 {
        rng.random_range(-magnitude..magnitude)
    } else {
        0.0
    }
}
