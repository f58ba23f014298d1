pub mod algorithm;
pub mod convention;
pub mod escape_time;
pub mod fractal_family;
pub mod iteration_policy;
