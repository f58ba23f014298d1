pub mod actions;
pub mod data;
pub mod exploration;
pub mod fractals;
pub mod ports;
pub mod util;
