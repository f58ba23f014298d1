pub mod blit_frame;
pub mod rasterize;
