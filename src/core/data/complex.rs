use std::ops::{Add, Mul};

/// A point of the complex plane in double precision.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ComplexPoint {
    pub re: f64,
    pub im: f64,
}

impl ComplexPoint {
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// `|z|²`, compared against the squared escape radius to avoid a square root.
    #[must_use]
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    #[must_use]
    pub fn square(self) -> Self {
        Self {
            re: self.re * self.re - self.im * self.im,
            im: 2.0 * self.re * self.im,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl Add for ComplexPoint {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl Mul for ComplexPoint {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_sqr_ignores_sign() {
        assert_eq!(ComplexPoint::new(3.0, 4.0).norm_sqr(), 25.0);
        assert_eq!(ComplexPoint::new(-3.0, -4.0).norm_sqr(), 25.0);
        assert_eq!(ComplexPoint::default().norm_sqr(), 0.0);
    }

    #[test]
    fn test_square_matches_self_multiplication() {
        let z = ComplexPoint::new(1.5, -0.25);

        assert_eq!(z.square(), z * z);
    }

    #[test]
    fn test_square_of_i_is_minus_one() {
        let i = ComplexPoint::new(0.0, 1.0);

        assert_eq!(i.square(), ComplexPoint::new(-1.0, 0.0));
    }

    #[test]
    fn test_add() {
        let sum = ComplexPoint::new(1.0, 2.0) + ComplexPoint::new(-0.5, 0.25);

        assert_eq!(sum, ComplexPoint::new(0.5, 2.25));
    }

    #[test]
    fn test_is_finite() {
        assert!(ComplexPoint::new(1.0, -1.0).is_finite());
        assert!(!ComplexPoint::new(f64::NAN, 0.0).is_finite());
        assert!(!ComplexPoint::new(0.0, f64::INFINITY).is_finite());
    }
}
