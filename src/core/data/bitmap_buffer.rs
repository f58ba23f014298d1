use crate::core::data::colour::Colour;
use crate::core::data::resolution::Resolution;
use crate::core::ports::framebuffer::Framebuffer;
use std::error::Error;
use std::fmt;

fn bytes_per_row(width: u32) -> usize {
    width.div_ceil(8) as usize
}

fn resolution_to_buffer_size(resolution: Resolution) -> usize {
    bytes_per_row(resolution.width()) * resolution.height() as usize
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitmapBufferError {
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    BoundsMismatch {
        resolution_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for BitmapBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} bitmap",
                    x, y, width, height
                )
            }
            Self::BoundsMismatch {
                resolution_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "bitmap needs {} bytes but buffer holds {}",
                    resolution_size, buffer_size
                )
            }
        }
    }
}

impl Error for BitmapBufferError {}

/// Packed one-bit-per-pixel framebuffer. Rows are padded to whole bytes,
/// the most significant bit is the leftmost pixel and a set bit is foreground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapBuffer {
    resolution: Resolution,
    data: Vec<u8>,
}

impl BitmapBuffer {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            data: vec![0; resolution_to_buffer_size(resolution)],
        }
    }

    pub fn from_data(resolution: Resolution, data: Vec<u8>) -> Result<Self, BitmapBufferError> {
        let resolution_size = resolution_to_buffer_size(resolution);

        if resolution_size != data.len() {
            return Err(BitmapBufferError::BoundsMismatch {
                resolution_size,
                buffer_size: data.len(),
            });
        }

        Ok(Self { resolution, data })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn bytes_per_row(&self) -> usize {
        bytes_per_row(self.resolution.width())
    }

    pub fn fill(&mut self, colour: Colour) {
        let byte = if colour.is_foreground() { 0xFF } else { 0x00 };
        self.data.fill(byte);
    }

    fn locate(&self, x: u32, y: u32) -> Result<(usize, u8), BitmapBufferError> {
        if x >= self.resolution.width() || y >= self.resolution.height() {
            return Err(BitmapBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.resolution.width(),
                height: self.resolution.height(),
            });
        }

        let index = y as usize * self.bytes_per_row() + (x / 8) as usize;
        let mask = 0x80 >> (x % 8);

        Ok((index, mask))
    }
}

impl Framebuffer for BitmapBuffer {
    type Failure = BitmapBufferError;

    fn width(&self) -> u32 {
        self.resolution.width()
    }

    fn height(&self) -> u32 {
        self.resolution.height()
    }

    fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), Self::Failure> {
        let (index, mask) = self.locate(x, y)?;

        if colour.is_foreground() {
            self.data[index] |= mask;
        } else {
            self.data[index] &= !mask;
        }

        Ok(())
    }

    fn pixel(&self, x: u32, y: u32) -> Result<Colour, Self::Failure> {
        let (index, mask) = self.locate(x, y)?;

        Ok(Colour::from_foreground(self.data[index] & mask != 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_buffer(width: u32, height: u32) -> BitmapBuffer {
        BitmapBuffer::new(Resolution::new(width, height).unwrap())
    }

    #[test]
    fn test_new_creates_background_buffer() {
        let buffer = create_buffer(10, 3);

        assert_eq!(buffer.bytes_per_row(), 2);
        assert_eq!(buffer.data().len(), 6);
        assert!(buffer.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let result = BitmapBuffer::from_data(Resolution::new(16, 2).unwrap(), vec![0; 3]);

        assert_eq!(
            result,
            Err(BitmapBufferError::BoundsMismatch {
                resolution_size: 4,
                buffer_size: 3
            })
        );
    }

    #[test]
    fn test_set_pixel_packs_msb_first() {
        let mut buffer = create_buffer(10, 2);

        buffer.set_pixel(0, 0, Colour::Foreground).unwrap();
        buffer.set_pixel(9, 1, Colour::Foreground).unwrap();

        assert_eq!(buffer.data(), &[0b1000_0000, 0, 0, 0b0100_0000]);
    }

    #[test]
    fn test_set_pixel_background_clears_bit() {
        let mut buffer = create_buffer(8, 1);
        buffer.fill(Colour::Foreground);

        buffer.set_pixel(7, 0, Colour::Background).unwrap();

        assert_eq!(buffer.data(), &[0b1111_1110]);
        assert_eq!(buffer.pixel(7, 0), Ok(Colour::Background));
        assert_eq!(buffer.pixel(6, 0), Ok(Colour::Foreground));
    }

    #[test]
    fn test_pixel_outside_bounds() {
        let mut buffer = create_buffer(4, 4);

        assert_eq!(
            buffer.set_pixel(4, 0, Colour::Foreground),
            Err(BitmapBufferError::PixelOutsideBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 4
            })
        );
        assert!(buffer.pixel(0, 4).is_err());
    }
}
