use crate::core::data::colour::Colour;
use crate::core::data::frame::Frame;
use crate::core::ports::framebuffer::Framebuffer;

/// Paints `frame` into the top-left corner of `framebuffer`, clipping
/// whatever does not fit.
pub fn blit_frame<F: Framebuffer>(frame: &Frame, framebuffer: &mut F) -> Result<(), F::Failure> {
    let width = frame.width().min(framebuffer.width());
    let height = frame.height().min(framebuffer.height());

    for (y, row) in frame.rows().take(height as usize).enumerate() {
        for (x, &cell) in row.iter().take(width as usize).enumerate() {
            framebuffer.set_pixel(x as u32, y as u32, Colour::from_foreground(cell))?;
        }
    }

    Ok(())
}
