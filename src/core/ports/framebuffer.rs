use crate::core::data::colour::Colour;
use std::error::Error;

/// Two-colour pixel storage the engine paints accepted frames into.
/// Dimensions are fixed at construction.
pub trait Framebuffer {
    type Failure: Error;

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), Self::Failure>;
    fn pixel(&self, x: u32, y: u32) -> Result<Colour, Self::Failure>;
}
