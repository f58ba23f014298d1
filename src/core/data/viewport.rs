use crate::core::data::complex::ComplexPoint;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidExtent { width: f64, height: f64 },
    NonFiniteCenter { center: ComplexPoint },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent { width, height } => {
                write!(
                    f,
                    "viewport extent must be positive and finite: {}x{}",
                    width, height
                )
            }
            Self::NonFiniteCenter { center } => {
                write!(
                    f,
                    "viewport center must be finite: ({}, {})",
                    center.re, center.im
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangle of the complex plane mapped onto the output resolution,
/// stored as a center and an extent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: ComplexPoint,
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(center: ComplexPoint, width: f64, height: f64) -> Result<Self, ViewportError> {
        if !center.is_finite() {
            return Err(ViewportError::NonFiniteCenter { center });
        }

        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::InvalidExtent { width, height });
        }

        Ok(Self {
            center,
            width,
            height,
        })
    }

    /// For literal extents already known to be positive and finite.
    pub(crate) const fn from_parts(center: ComplexPoint, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    #[must_use]
    pub fn center(&self) -> ComplexPoint {
        self.center
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Real coordinate of the left edge.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.center.re - self.width / 2.0
    }

    /// Imaginary coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.center.im - self.height / 2.0
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    #[must_use]
    pub fn contains_point(&self, point: ComplexPoint) -> bool {
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;

        (self.center.re - half_width) <= point.re
            && point.re <= (self.center.re + half_width)
            && (self.center.im - half_height) <= point.im
            && point.im <= (self.center.im + half_height)
    }

    pub(crate) fn set_center(&mut self, center: ComplexPoint) {
        self.center = center;
    }

    pub(crate) fn set_extent(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub(crate) fn pan(&mut self, delta_re: f64, delta_im: f64) {
        self.center = self.center + ComplexPoint::new(delta_re, delta_im);
    }

    /// Multiplies both extents by `factor`, keeping the center fixed.
    pub(crate) fn zoom(&mut self, factor: f64) {
        self.width *= factor;
        self.height *= factor;
    }

    /// Derives the height from the width so that `width / height == aspect_ratio`.
    pub(crate) fn correct_aspect(&mut self, aspect_ratio: f64) {
        self.height = self.width / aspect_ratio;
    }
}
