use crate::core::actions::rasterize::ports::pixel_classifier::PixelClassifier;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::convention::ForegroundConvention;
use crate::core::fractals::escape_time::classify;
use crate::core::fractals::fractal_family::FractalFamily;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use std::num::NonZeroU32;

/// Escape-time classification of every pixel of a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    viewport: Viewport,
    resolution: Resolution,
    family: FractalFamily,
    max_iterations: NonZeroU32,
    convention: ForegroundConvention,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(
        viewport: Viewport,
        resolution: Resolution,
        family: FractalFamily,
        max_iterations: NonZeroU32,
        convention: ForegroundConvention,
    ) -> Self {
        Self {
            viewport,
            resolution,
            family,
            max_iterations,
            convention,
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> NonZeroU32 {
        self.max_iterations
    }
}

impl PixelClassifier for EscapeTimeAlgorithm {
    fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn is_foreground(&self, x: u32, y: u32) -> bool {
        let point = pixel_to_complex_coords(x, y, self.resolution, &self.viewport);
        let interior = classify(point, self.family, self.max_iterations.get());

        self.convention.is_foreground(interior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::ComplexPoint;

    fn algorithm(convention: ForegroundConvention) -> EscapeTimeAlgorithm {
        EscapeTimeAlgorithm::new(
            Viewport::new(ComplexPoint::new(-1.0, 0.0), 4.0, 2.0).unwrap(),
            Resolution::new(8, 4).unwrap(),
            FractalFamily::Mandelbrot,
            NonZeroU32::new(100).unwrap(),
            convention,
        )
    }

    #[test]
    fn pixel_over_origin_is_interior() {
        // pixel (4, 2) maps to (-1 + 0, 0); pixel (6, 2) maps to (0, 0)
        let interior_is_foreground = algorithm(ForegroundConvention::Interior);

        assert!(interior_is_foreground.is_foreground(6, 2));
        assert!(interior_is_foreground.is_foreground(4, 2));
    }

    #[test]
    fn corner_pixel_is_exterior() {
        // pixel (0, 0) maps to (-3, 1), outside the escape radius
        assert!(!algorithm(ForegroundConvention::Interior).is_foreground(0, 0));
        assert!(algorithm(ForegroundConvention::Exterior).is_foreground(0, 0));
    }
}
