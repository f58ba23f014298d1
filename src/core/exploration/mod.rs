pub mod acceptance;
pub mod exploration_config;
pub mod jitter;
pub mod limits;
pub mod phase;
pub mod quality_controller;
pub mod region_explorer;

pub use acceptance::{AcceptanceBand, Rejection};
pub use exploration_config::{ExplorationConfig, ExplorationConfigError, MutationPolicy, RetryPolicy};
pub use jitter::{Escalation, Jitter};
pub use limits::{ClampReport, ExplorationLimits};
pub use phase::ExplorerPhase;
pub use quality_controller::{AcceptedFrame, ViewportQualityController};
pub use region_explorer::{
    Quadrant, RegionCandidate, RegionExplorer, RegionSelection, RegionThresholds, SelectionTier,
};
