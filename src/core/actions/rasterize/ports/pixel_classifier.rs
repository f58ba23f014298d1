use crate::core::data::resolution::Resolution;

/// Decides the colour of each pixel of a render target independently of
/// every other pixel.
pub trait PixelClassifier: Sync {
    fn resolution(&self) -> Resolution;
    fn is_foreground(&self, x: u32, y: u32) -> bool;
}
