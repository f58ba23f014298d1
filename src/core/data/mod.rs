pub mod bitmap_buffer;
pub mod colour;
pub mod complex;
pub mod frame;
pub mod render_stats;
pub mod resolution;
pub mod viewport;
