use crate::core::actions::rasterize::rasterizer::{ConcurrentRasterizer, RasterBackend};
use crate::core::data::complex::ComplexPoint;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::exploration::acceptance::AcceptanceBand;
use crate::core::exploration::jitter::{Escalation, Jitter};
use crate::core::exploration::limits::ExplorationLimits;
use crate::core::exploration::region_explorer::RegionThresholds;
use crate::core::fractals::convention::ForegroundConvention;
use crate::core::fractals::fractal_family::FractalFamily;
use crate::core::fractals::iteration_policy::IterationPolicy;
use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;

const DEFAULT_WORKERS: NonZeroU32 = NonZeroU32::new(4).unwrap();
const DEFAULT_MAX_RETRIES: NonZeroU32 = NonZeroU32::new(200).unwrap();
const DEFAULT_CORRECTION_INTERVAL: NonZeroU32 = NonZeroU32::new(30).unwrap();
const DEFAULT_SESSION_RESET: NonZeroU32 = NonZeroU32::new(50).unwrap();

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExplorationConfigError {
    InconsistentLimits,
    NonFiniteJuliaConstant { constant: ComplexPoint },
    DefaultViewportOutOfLimits { viewport: Viewport },
    InvalidAcceptanceBand { min_fraction: f64, max_fraction: f64 },
    InvalidRegionThresholds { low: f64, preferred_high: f64, high: f64 },
    InvalidIterationPolicy { per_decade: f64 },
    InvalidMutation { name: &'static str },
    UnreachableAcceptance {
        fraction: f64,
        max_iterations: u32,
        min_fraction: f64,
        max_fraction: f64,
    },
}

impl fmt::Display for ExplorationConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentLimits => {
                write!(f, "exploration limits are inverted, non-finite or have a non-positive extent")
            }
            Self::NonFiniteJuliaConstant { constant } => {
                write!(f, "julia constant must be finite: ({}, {})", constant.re, constant.im)
            }
            Self::DefaultViewportOutOfLimits { viewport } => {
                write!(
                    f,
                    "default viewport centered at ({}, {}) with width {} lies outside the exploration limits",
                    viewport.center().re,
                    viewport.center().im,
                    viewport.width()
                )
            }
            Self::InvalidAcceptanceBand {
                min_fraction,
                max_fraction,
            } => {
                write!(
                    f,
                    "acceptance band must satisfy 0 <= min <= max <= 1, got [{}, {}]",
                    min_fraction, max_fraction
                )
            }
            Self::InvalidRegionThresholds {
                low,
                preferred_high,
                high,
            } => {
                write!(
                    f,
                    "region thresholds must satisfy 0.5 <= low < preferred_high <= high <= 1, got {} / {} / {}",
                    low, preferred_high, high
                )
            }
            Self::InvalidIterationPolicy { per_decade } => {
                write!(f, "iterations per decade must be finite and non-negative, got {}", per_decade)
            }
            Self::InvalidMutation { name } => {
                write!(f, "{} mutation has a negative or non-finite setting", name)
            }
            Self::UnreachableAcceptance {
                fraction,
                max_iterations,
                min_fraction,
                max_fraction,
            } => {
                write!(
                    f,
                    "default viewport renders {:.3} foreground at {} iterations, outside the acceptance band [{}, {}]",
                    fraction, max_iterations, min_fraction, max_fraction
                )
            }
        }
    }
}

impl Error for ExplorationConfigError {}

/// How long the controller keeps retrying before it escalates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Rejections in a row before the viewport is hard-reset to the default.
    pub max_retries: NonZeroU32,
    /// Every n-th sparse rejection gets a large corrective move.
    pub correction_interval: NonZeroU32,
    /// Attempts after (re)initialization that use coarse jitter.
    pub coarse_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            correction_interval: DEFAULT_CORRECTION_INTERVAL,
            coarse_attempts: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationPolicy {
    pub coarse: Jitter,
    pub fine: Jitter,
    pub correction: Escalation,
    pub reacquire: Escalation,
}

impl Default for MutationPolicy {
    fn default() -> Self {
        Self {
            coarse: Jitter {
                pan: 0.10,
                zoom: 0.20,
            },
            fine: Jitter {
                pan: 0.025,
                zoom: 0.10,
            },
            correction: Escalation {
                pan: 0.25,
                zoom_out: 1.5,
            },
            reacquire: Escalation {
                pan: 0.50,
                zoom_out: 2.0,
            },
        }
    }
}

/// Everything a session needs to know up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorationConfig {
    pub family: FractalFamily,
    pub convention: ForegroundConvention,
    pub default_viewport: Viewport,
    pub limits: ExplorationLimits,
    pub iteration_policy: IterationPolicy,
    pub acceptance: AcceptanceBand,
    pub retry: RetryPolicy,
    pub mutation: MutationPolicy,
    pub regions: RegionThresholds,
    pub backend: RasterBackend,
    pub workers: NonZeroU32,
    /// Zooms after which the session starts over from the default viewport.
    pub session_reset_interval: Option<NonZeroU32>,
    /// Fixed seed for reproducible sessions; drawn from the OS when absent.
    pub seed: Option<u64>,
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self::for_family(FractalFamily::Mandelbrot)
    }
}

impl ExplorationConfig {
    #[must_use]
    pub fn for_family(family: FractalFamily) -> Self {
        Self {
            family,
            convention: ForegroundConvention::default(),
            default_viewport: default_viewport(family),
            limits: ExplorationLimits::for_family(family),
            iteration_policy: family.default_iteration_policy(),
            acceptance: AcceptanceBand::default(),
            retry: RetryPolicy::default(),
            mutation: MutationPolicy::default(),
            regions: RegionThresholds::default(),
            backend: RasterBackend::default(),
            workers: DEFAULT_WORKERS,
            session_reset_interval: Some(DEFAULT_SESSION_RESET),
            seed: None,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn rasterizer(&self) -> ConcurrentRasterizer {
        ConcurrentRasterizer::new(self.backend, self.workers, self.convention)
    }

    /// Checks the settings that do not depend on the output resolution.
    pub fn validate(&self) -> Result<(), ExplorationConfigError> {
        if !self.limits.is_consistent() {
            return Err(ExplorationConfigError::InconsistentLimits);
        }

        if let FractalFamily::Julia(constant) = self.family {
            if !constant.is_finite() {
                return Err(ExplorationConfigError::NonFiniteJuliaConstant { constant });
            }
        }

        let viewport = self.default_viewport;
        if !self.limits.contains_center(viewport.center())
            || viewport.width() < self.limits.min_extent
            || viewport.width() > self.limits.max_extent
        {
            return Err(ExplorationConfigError::DefaultViewportOutOfLimits { viewport });
        }

        if !self.acceptance.is_valid() {
            return Err(ExplorationConfigError::InvalidAcceptanceBand {
                min_fraction: self.acceptance.min_fraction,
                max_fraction: self.acceptance.max_fraction,
            });
        }

        if !self.regions.is_valid() {
            return Err(ExplorationConfigError::InvalidRegionThresholds {
                low: self.regions.low,
                preferred_high: self.regions.preferred_high,
                high: self.regions.high,
            });
        }

        let per_decade = self.iteration_policy.per_decade;
        if !per_decade.is_finite() || per_decade < 0.0 {
            return Err(ExplorationConfigError::InvalidIterationPolicy { per_decade });
        }

        let mutations = [
            ("coarse", self.mutation.coarse.is_valid()),
            ("fine", self.mutation.fine.is_valid()),
            ("correction", self.mutation.correction.is_valid()),
            ("reacquire", self.mutation.reacquire.is_valid()),
        ];
        if let Some(&(name, _)) = mutations.iter().find(|(_, valid)| !valid) {
            return Err(ExplorationConfigError::InvalidMutation { name });
        }

        Ok(())
    }

    /// Renders the default viewport at both ends of its iteration range and
    /// fails if either frame falls outside the acceptance band.
    ///
    /// Without this a session could retry forever, resetting to a viewport
    /// that can never be accepted.
    pub fn probe_acceptance(&self, resolution: Resolution) -> Result<(), ExplorationConfigError> {
        let mut viewport = self.default_viewport;
        self.limits
            .clamp_viewport(&mut viewport, resolution.aspect_ratio());

        let rasterizer = self.rasterizer();
        let width = viewport.width();
        let budgets = [
            self.iteration_policy.min_budget(width),
            self.iteration_policy.max_budget(width),
        ];

        for max_iterations in budgets {
            let (_, stats) = rasterizer.render(&viewport, resolution, self.family, max_iterations);
            let fraction = stats.foreground_fraction();

            if !self.acceptance.contains(fraction) {
                return Err(ExplorationConfigError::UnreachableAcceptance {
                    fraction,
                    max_iterations: max_iterations.get(),
                    min_fraction: self.acceptance.min_fraction,
                    max_fraction: self.acceptance.max_fraction,
                });
            }
        }

        Ok(())
    }

    /// [`Self::validate`] followed by [`Self::probe_acceptance`].
    pub fn validate_for(&self, resolution: Resolution) -> Result<(), ExplorationConfigError> {
        self.validate()?;
        self.probe_acceptance(resolution)
    }
}

fn default_viewport(family: FractalFamily) -> Viewport {
    let (center, width, height) = match family {
        FractalFamily::Mandelbrot => (ComplexPoint::new(-1.0, 0.0), 4.0, 2.0),
        FractalFamily::Julia(_) => (ComplexPoint::new(0.0, 0.0), 3.2, 2.0),
    };

    Viewport::from_parts(center, width, height)
}
