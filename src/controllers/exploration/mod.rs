//! Application layer for autonomous fractal exploration.
//!
//! The engine owns the framebuffer and the session state, and composes the
//! core pieces:
//! - **Quality control**: `ViewportQualityController` renders until a frame
//!   falls inside the acceptance band
//! - **Navigation**: `RegionExplorer` picks the quadrant to zoom into next
//! - **Output**: accepted frames are blitted into any `Framebuffer`

mod engine;
pub mod errors;

pub use engine::ExplorationEngine;
pub use errors::EngineError;
