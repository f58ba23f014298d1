mod controllers;
mod core;
mod presenters;

pub use controllers::cli::ExploreCliController;
pub use controllers::exploration::{EngineError, ExplorationEngine};
pub use controllers::ports::DisplayPort;
pub use presenters::file::pbm::PbmFilePresenter;

pub use crate::core::actions::blit_frame::blit_frame;
pub use crate::core::actions::rasterize::ports::pixel_classifier::PixelClassifier;
pub use crate::core::actions::rasterize::rasterizer::{ConcurrentRasterizer, RasterBackend};
pub use crate::core::data::bitmap_buffer::{BitmapBuffer, BitmapBufferError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::ComplexPoint;
pub use crate::core::data::frame::{Frame, FrameError};
pub use crate::core::data::render_stats::RenderStats;
pub use crate::core::data::resolution::{Resolution, ResolutionError};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::exploration::{
    AcceptanceBand, AcceptedFrame, ClampReport, Escalation, ExplorationConfig,
    ExplorationConfigError, ExplorationLimits, ExplorerPhase, Jitter, MutationPolicy, Quadrant,
    RegionCandidate, RegionExplorer, RegionSelection, RegionThresholds, Rejection, RetryPolicy,
    SelectionTier, ViewportQualityController,
};
pub use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
pub use crate::core::fractals::convention::ForegroundConvention;
pub use crate::core::fractals::escape_time::classify;
pub use crate::core::fractals::fractal_family::{DEFAULT_JULIA_CONSTANT, FractalFamily};
pub use crate::core::fractals::iteration_policy::IterationPolicy;
pub use crate::core::ports::framebuffer::Framebuffer;
