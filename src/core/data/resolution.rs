use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    ZeroSize { width: u32, height: u32 },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize { width, height } => {
                write!(f, "resolution must be at least 1x1: {}x{}", width, height)
            }
        }
    }
}

impl Error for ResolutionError {}

/// Pixel dimensions of a render target.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self, ResolutionError> {
        if width == 0 || height == 0 {
            return Err(ResolutionError::ZeroSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_new_valid() {
        let resolution = Resolution::new(640, 384).unwrap();

        assert_eq!(resolution.width(), 640);
        assert_eq!(resolution.height(), 384);
        assert_eq!(resolution.pixel_count(), 245_760);
    }

    #[test]
    fn test_resolution_rejects_zero_dimensions() {
        assert_eq!(
            Resolution::new(0, 10),
            Err(ResolutionError::ZeroSize { width: 0, height: 10 })
        );
        assert_eq!(
            Resolution::new(10, 0),
            Err(ResolutionError::ZeroSize { width: 10, height: 0 })
        );
    }

    #[test]
    fn test_aspect_ratio() {
        let resolution = Resolution::new(640, 384).unwrap();

        assert!((resolution.aspect_ratio() - 5.0 / 3.0).abs() < 1e-12);
    }
}
