pub mod cli;
pub mod exploration;
pub mod ports;
