use crate::core::actions::rasterize::rasterizer::ConcurrentRasterizer;
use crate::core::data::frame::Frame;
use crate::core::data::render_stats::RenderStats;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::exploration::acceptance::{AcceptanceBand, Rejection};
use crate::core::exploration::exploration_config::{ExplorationConfig, MutationPolicy, RetryPolicy};
use crate::core::exploration::jitter::Jitter;
use crate::core::exploration::limits::ExplorationLimits;
use crate::core::exploration::phase::ExplorerPhase;
use crate::core::fractals::fractal_family::FractalFamily;
use crate::core::fractals::iteration_policy::IterationPolicy;
use log::{debug, info, warn};
use rand::Rng;
use std::num::NonZeroU32;

/// A frame that passed the acceptance band, with what it took to get it.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedFrame {
    pub frame: Frame,
    pub stats: RenderStats,
    pub max_iterations: NonZeroU32,
    /// Renders performed by the call that produced this frame.
    pub attempts: u32,
}

/// Renders, judges and perturbs the viewport until a frame is worth showing.
#[derive(Debug, Clone)]
pub struct ViewportQualityController {
    rasterizer: ConcurrentRasterizer,
    acceptance: AcceptanceBand,
    retry: RetryPolicy,
    mutation: MutationPolicy,
    limits: ExplorationLimits,
    iteration_policy: IterationPolicy,
    default_viewport: Viewport,
    phase: ExplorerPhase,
    attempts_since_init: u64,
    hard_resets: u64,
}

impl ViewportQualityController {
    #[must_use]
    pub fn new(config: &ExplorationConfig) -> Self {
        Self {
            rasterizer: config.rasterizer(),
            acceptance: config.acceptance,
            retry: config.retry,
            mutation: config.mutation,
            limits: config.limits,
            iteration_policy: config.iteration_policy,
            default_viewport: config.default_viewport,
            phase: ExplorerPhase::Initializing,
            attempts_since_init: 0,
            hard_resets: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> ExplorerPhase {
        self.phase
    }

    #[must_use]
    pub fn hard_resets(&self) -> u64 {
        self.hard_resets
    }

    #[must_use]
    pub fn default_viewport(&self) -> Viewport {
        self.default_viewport
    }

    /// Marks the start of a zoom step; the next render uses the viewport as given.
    pub fn begin_exploring(&mut self) {
        self.phase = ExplorerPhase::Exploring;
    }

    /// Starts over as if the session were new.
    pub fn reinitialize(&mut self) {
        self.phase = ExplorerPhase::Initializing;
        self.attempts_since_init = 0;
    }

    /// Loops render, evaluate, mutate until a frame lands inside the
    /// acceptance band, then leaves `viewport` at the accepted view.
    ///
    /// Every mutation is followed by aspect correction and clamping, so the
    /// viewport never leaves the exploration limits. After
    /// `max_retries` consecutive rejections the viewport is replaced by the
    /// default one, which the configuration probe guarantees is acceptable.
    pub fn produce_frame<R: Rng + ?Sized>(
        &mut self,
        viewport: &mut Viewport,
        resolution: Resolution,
        family: FractalFamily,
        rng: &mut R,
    ) -> AcceptedFrame {
        let aspect_ratio = resolution.aspect_ratio();

        if self.phase == ExplorerPhase::Initializing {
            debug!("initializing viewport for {}", family.display_name());
        }
        self.settle(viewport, aspect_ratio);

        let mut attempts: u32 = 0;
        let mut rejections: u32 = 0;
        let mut last_rejection: Option<Rejection> = None;

        loop {
            if let Some(rejection) = last_rejection {
                if rejections >= self.retry.max_retries.get() {
                    self.hard_reset(viewport, aspect_ratio, rejections);
                    rejections = 0;
                } else {
                    self.mutate(viewport, rejection, rejections, rng);
                    self.settle(viewport, aspect_ratio);
                }
            }

            self.phase = ExplorerPhase::Rendering;
            let max_iterations = self.iteration_policy.budget(viewport.width(), rng);
            let (frame, stats) = self
                .rasterizer
                .render(viewport, resolution, family, max_iterations);
            attempts = attempts.saturating_add(1);
            self.attempts_since_init = self.attempts_since_init.saturating_add(1);

            match self.acceptance.evaluate(&stats) {
                Ok(()) => {
                    self.phase = ExplorerPhase::Accepted;
                    info!(
                        "accepted frame after {} attempt(s): foreground {:.3}, {} iterations, center ({}, {}), width {:e}",
                        attempts,
                        stats.foreground_fraction(),
                        max_iterations,
                        viewport.center().re,
                        viewport.center().im,
                        viewport.width()
                    );

                    return AcceptedFrame {
                        frame,
                        stats,
                        max_iterations,
                        attempts,
                    };
                }
                Err(rejection) => {
                    rejections += 1;
                    debug!(
                        "rejected frame ({}): foreground {:.3}, retry {}",
                        rejection,
                        stats.foreground_fraction(),
                        rejections
                    );
                    last_rejection = Some(rejection);
                }
            }
        }
    }

    fn settle(&self, viewport: &mut Viewport, aspect_ratio: f64) {
        viewport.correct_aspect(aspect_ratio);
        let report = self.limits.clamp_viewport(viewport, aspect_ratio);

        if report.clamped() {
            debug!(
                "viewport clamped to limits (center: {}, extent: {})",
                report.center_clamped, report.extent_clamped
            );
        }
    }

    fn mutate<R: Rng + ?Sized>(
        &self,
        viewport: &mut Viewport,
        rejection: Rejection,
        rejections: u32,
        rng: &mut R,
    ) {
        match rejection {
            Rejection::Empty => {
                self.mutation.reacquire.apply(viewport, rng);
            }
            Rejection::Sparse if rejections % self.retry.correction_interval.get() == 0 => {
                debug!("applying periodic correction after {} sparse retries", rejections);
                self.mutation.correction.apply(viewport, rng);
            }
            Rejection::Sparse | Rejection::Dense | Rejection::Saturated => {
                self.jitter().apply(viewport, rng);
            }
        }
    }

    fn jitter(&self) -> Jitter {
        if self.attempts_since_init < u64::from(self.retry.coarse_attempts) {
            self.mutation.coarse
        } else {
            self.mutation.fine
        }
    }

    fn hard_reset(&mut self, viewport: &mut Viewport, aspect_ratio: f64, rejections: u32) {
        warn!(
            "no acceptable frame after {} retries, resetting to the default viewport",
            rejections
        );

        *viewport = self.default_viewport;
        self.reinitialize();
        self.hard_resets += 1;
        self.settle(viewport, aspect_ratio);
    }
}
