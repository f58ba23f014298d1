use crate::core::data::complex::ComplexPoint;
use crate::core::fractals::iteration_policy::IterationPolicy;
use std::num::NonZeroU32;

/// The constant used when a Julia family is requested without one.
pub const DEFAULT_JULIA_CONSTANT: ComplexPoint = ComplexPoint::new(-0.123, 0.745);

const MANDELBROT_BASE_ITERATIONS: NonZeroU32 = NonZeroU32::new(50).unwrap();
const JULIA_BASE_ITERATIONS: NonZeroU32 = NonZeroU32::new(100).unwrap();

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalFamily {
    #[default]
    Mandelbrot,
    Julia(ComplexPoint),
}

impl FractalFamily {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia(_) => "Julia",
        }
    }

    /// The `c` of `z <- z^2 + c` for an orbit starting at `point`.
    #[must_use]
    pub fn additive_constant(self, point: ComplexPoint) -> ComplexPoint {
        match self {
            Self::Mandelbrot => point,
            Self::Julia(constant) => constant,
        }
    }

    #[must_use]
    pub fn default_iteration_policy(self) -> IterationPolicy {
        match self {
            Self::Mandelbrot => IterationPolicy {
                base: MANDELBROT_BASE_ITERATIONS,
                per_decade: 100.0,
                jitter: 50,
            },
            Self::Julia(_) => IterationPolicy {
                base: JULIA_BASE_ITERATIONS,
                per_decade: 200.0,
                jitter: 50,
            },
        }
    }
}
