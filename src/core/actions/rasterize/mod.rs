mod band;
pub mod ports;
pub mod rasterize_rayon;
pub mod rasterize_scoped_threads;
pub mod rasterizer;
