use crate::core::data::complex::ComplexPoint;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;

/// Maps pixel `(x, y)` of a `resolution`-sized image onto `viewport`.
///
/// Column `x` lands at `left + x / width * extent`. Rows are inverted so that
/// row 0 is the top edge of the viewport: row `y` lands at
/// `bottom + (height - y) / height * extent`.
#[must_use]
pub fn pixel_to_complex_coords(
    x: u32,
    y: u32,
    resolution: Resolution,
    viewport: &Viewport,
) -> ComplexPoint {
    debug_assert!(x < resolution.width() && y < resolution.height());

    let re = viewport.left() + f64::from(x) / f64::from(resolution.width()) * viewport.width();
    let rows_from_bottom = f64::from(resolution.height() - y);
    let im = viewport.bottom() + rows_from_bottom / f64::from(resolution.height()) * viewport.height();

    ComplexPoint { re, im }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(ComplexPoint::new(-1.0, 0.0), 4.0, 2.0).unwrap()
    }

    #[test]
    fn test_top_left_pixel_maps_to_top_left_corner() {
        let resolution = Resolution::new(100, 50).unwrap();
        let point = pixel_to_complex_coords(0, 0, resolution, &viewport());

        assert_eq!(point, ComplexPoint::new(-3.0, 1.0));
    }

    #[test]
    fn test_bottom_row_stops_one_pixel_above_bottom_edge() {
        let resolution = Resolution::new(100, 50).unwrap();
        let point = pixel_to_complex_coords(99, 49, resolution, &viewport());

        assert!((point.re - (-3.0 + 99.0 / 100.0 * 4.0)).abs() < 1e-12);
        assert!((point.im - (-1.0 + 1.0 / 50.0 * 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_center_pixel_maps_to_viewport_center() {
        let resolution = Resolution::new(4, 4).unwrap();
        let point = pixel_to_complex_coords(2, 2, resolution, &viewport());

        assert_eq!(point, ComplexPoint::new(-1.0, 0.0));
    }

    #[test]
    fn test_rows_descend_in_the_plane() {
        let resolution = Resolution::new(8, 8).unwrap();
        let upper = pixel_to_complex_coords(3, 1, resolution, &viewport());
        let lower = pixel_to_complex_coords(3, 6, resolution, &viewport());

        assert!(upper.im > lower.im);
        assert_eq!(upper.re, lower.re);
    }
}
