use crate::core::data::bitmap_buffer::BitmapBuffer;
use std::error::Error;

/// Shows a finished framebuffer somewhere, such as a window or a file.
pub trait DisplayPort {
    type Failure: Error + 'static;

    fn present(&mut self, buffer: &BitmapBuffer) -> Result<(), Self::Failure>;
}
