use crate::core::data::complex::ComplexPoint;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_family::FractalFamily;

/// The numerically meaningful region the exploration may visit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorationLimits {
    pub min_center_re: f64,
    pub max_center_re: f64,
    pub min_center_im: f64,
    pub max_center_im: f64,
    pub min_extent: f64,
    pub max_extent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClampReport {
    pub center_clamped: bool,
    pub extent_clamped: bool,
}

impl ClampReport {
    #[must_use]
    pub fn clamped(&self) -> bool {
        self.center_clamped || self.extent_clamped
    }
}

impl ExplorationLimits {
    #[must_use]
    pub fn for_family(family: FractalFamily) -> Self {
        match family {
            FractalFamily::Mandelbrot => Self {
                min_center_re: -2.0,
                max_center_re: 0.5,
                min_center_im: -1.2,
                max_center_im: 1.2,
                min_extent: 1e-10,
                max_extent: 4.0,
            },
            FractalFamily::Julia(_) => Self {
                min_center_re: -1.6,
                max_center_re: 1.6,
                min_center_im: -1.2,
                max_center_im: 1.2,
                min_extent: 1e-10,
                max_extent: 4.0,
            },
        }
    }

    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let all_finite = [
            self.min_center_re,
            self.max_center_re,
            self.min_center_im,
            self.max_center_im,
            self.min_extent,
            self.max_extent,
        ]
        .iter()
        .all(|value| value.is_finite());

        all_finite
            && self.min_center_re <= self.max_center_re
            && self.min_center_im <= self.max_center_im
            && self.min_extent > 0.0
            && self.min_extent <= self.max_extent
    }

    #[must_use]
    pub fn contains_center(&self, center: ComplexPoint) -> bool {
        (self.min_center_re..=self.max_center_re).contains(&center.re)
            && (self.min_center_im..=self.max_center_im).contains(&center.im)
    }

    /// Pulls `center` back into range; non-finite coordinates snap to the
    /// middle of their range.
    #[must_use]
    pub fn clamp_center(&self, center: ComplexPoint) -> ComplexPoint {
        ComplexPoint {
            re: clamp_or_midpoint(center.re, self.min_center_re, self.max_center_re),
            im: clamp_or_midpoint(center.im, self.min_center_im, self.max_center_im),
        }
    }

    /// Clamps the viewport center and extent and re-derives the height from
    /// the width so that `width / height == aspect_ratio` afterwards.
    ///
    /// Both width and height must land in `[min_extent, max_extent]`; when the
    /// aspect ratio makes that impossible only the width is bounded.
    pub fn clamp_viewport(&self, viewport: &mut Viewport, aspect_ratio: f64) -> ClampReport {
        let center = viewport.center();
        let clamped_center = self.clamp_center(center);

        let mut min_width = self.min_extent.max(self.min_extent * aspect_ratio);
        let mut max_width = self.max_extent.min(self.max_extent * aspect_ratio);
        if !(min_width <= max_width) {
            min_width = self.min_extent;
            max_width = self.max_extent;
        }

        let width = viewport.width();
        let clamped_width = if width.is_finite() {
            width.clamp(min_width, max_width)
        } else {
            max_width
        };
        let clamped_height = clamped_width / aspect_ratio;

        viewport.set_center(clamped_center);
        viewport.set_extent(clamped_width, clamped_height);

        ClampReport {
            center_clamped: clamped_center != center,
            extent_clamped: clamped_width != width,
        }
    }
}

fn clamp_or_midpoint(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        (min + max) / 2.0
    } else {
        value.clamp(min, max)
    }
}
