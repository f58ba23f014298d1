use crate::core::data::complex::ComplexPoint;
use crate::core::fractals::fractal_family::FractalFamily;
use std::ops::ControlFlow;

const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// Returns `true` when the orbit of `point` stays within the escape radius for
/// `max_iterations` steps of `z <- z^2 + c`, the last iterate included.
///
/// The orbit starts at `z = point`; `c` comes from the family (the point itself
/// for Mandelbrot, the fixed constant for Julia). A point already outside the
/// escape radius is exterior before any iteration.
#[must_use]
pub fn classify(point: ComplexPoint, family: FractalFamily, max_iterations: u32) -> bool {
    let c = family.additive_constant(point);

    let orbit = (0..max_iterations).try_fold(point, |z, _| {
        if z.norm_sqr() > ESCAPE_RADIUS_SQR {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(z.square() + c)
        }
    });

    match orbit {
        ControlFlow::Continue(last) => last.norm_sqr() <= ESCAPE_RADIUS_SQR,
        ControlFlow::Break(()) => false,
    }
}
