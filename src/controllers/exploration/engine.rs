use crate::controllers::exploration::errors::EngineError;
use crate::core::actions::blit_frame::blit_frame;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::exploration::exploration_config::ExplorationConfig;
use crate::core::exploration::phase::ExplorerPhase;
use crate::core::exploration::quality_controller::{AcceptedFrame, ViewportQualityController};
use crate::core::exploration::region_explorer::{RegionExplorer, RegionSelection};
use crate::core::ports::framebuffer::Framebuffer;
use log::{debug, info};
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Drives an endless zoom: render an acceptable frame, show it, pick a
/// region, halve the view, repeat.
pub struct ExplorationEngine<F: Framebuffer> {
    config: ExplorationConfig,
    framebuffer: F,
    resolution: Resolution,
    viewport: Viewport,
    controller: ViewportQualityController,
    explorer: RegionExplorer,
    rng: Pcg32,
    seed: u64,
    last_frame: Option<AcceptedFrame>,
    frames_rendered: u64,
    zooms_since_reset: u32,
}

impl<F: Framebuffer> ExplorationEngine<F> {
    /// Validates `config` against the framebuffer size, including a probe
    /// render of the default viewport.
    pub fn new(config: ExplorationConfig, framebuffer: F) -> Result<Self, EngineError<F::Failure>> {
        let resolution = Resolution::new(framebuffer.width(), framebuffer.height())?;
        config.validate_for(resolution)?;

        let seed = config.seed.unwrap_or_else(rand::random);
        info!(
            "exploring {} at {}x{} with {} workers, seed {}",
            config.family.display_name(),
            resolution.width(),
            resolution.height(),
            config.workers,
            seed
        );

        Ok(Self {
            config,
            framebuffer,
            resolution,
            viewport: config.default_viewport,
            controller: ViewportQualityController::new(&config),
            explorer: RegionExplorer::new(config.regions, config.limits),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            last_frame: None,
            frames_rendered: 0,
            zooms_since_reset: 0,
        })
    }

    /// Produces the next acceptable frame and copies it into the framebuffer.
    /// Rejected attempts never reach the framebuffer.
    pub fn render_next_frame(&mut self) -> Result<(), EngineError<F::Failure>> {
        let accepted = self.controller.produce_frame(
            &mut self.viewport,
            self.resolution,
            self.config.family,
            &mut self.rng,
        );

        blit_frame(&accepted.frame, &mut self.framebuffer).map_err(EngineError::Framebuffer)?;

        self.frames_rendered += 1;
        self.last_frame = Some(accepted);

        Ok(())
    }

    /// Zooms into a region of the last accepted frame. Returns `None`, leaving
    /// the viewport alone, unless a frame has been accepted since the last zoom.
    pub fn advance_to_next_region(&mut self) -> Option<RegionSelection> {
        if self.controller.phase() != ExplorerPhase::Accepted {
            debug!("no freshly accepted frame to explore ({})", self.controller.phase());
            return None;
        }

        let Some(accepted) = &self.last_frame else {
            debug!("no accepted frame to explore yet");
            return None;
        };

        self.controller.begin_exploring();
        let selection = self
            .explorer
            .advance(&accepted.frame, &mut self.viewport, &mut self.rng);
        self.zooms_since_reset += 1;

        info!(
            "zoom {} into {:?} ({:?}), width now {:e}",
            self.zooms_since_reset,
            selection.quadrant,
            selection.tier,
            self.viewport.width()
        );

        if let Some(interval) = self.config.session_reset_interval {
            if self.zooms_since_reset >= interval.get() {
                info!(
                    "restarting from the default viewport after {} zooms",
                    self.zooms_since_reset
                );
                self.viewport = self.config.default_viewport;
                self.controller.reinitialize();
                self.zooms_since_reset = 0;
            }
        }

        Some(selection)
    }

    /// One full cycle: render, then advance.
    pub fn step(&mut self) -> Result<Option<RegionSelection>, EngineError<F::Failure>> {
        self.render_next_frame()?;
        Ok(self.advance_to_next_region())
    }

    #[must_use]
    pub fn framebuffer(&self) -> &F {
        &self.framebuffer
    }

    #[must_use]
    pub fn into_framebuffer(self) -> F {
        self.framebuffer
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&AcceptedFrame> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> ExplorerPhase {
        self.controller.phase()
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn config(&self) -> &ExplorationConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    #[must_use]
    pub fn zooms_since_reset(&self) -> u32 {
        self.zooms_since_reset
    }

    #[must_use]
    pub fn hard_resets(&self) -> u64 {
        self.controller.hard_resets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::bitmap_buffer::{BitmapBuffer, BitmapBufferError};
    use crate::core::data::colour::Colour;
    use crate::core::exploration::acceptance::AcceptanceBand;
    use crate::core::exploration::exploration_config::ExplorationConfigError;
    use std::num::NonZeroU32;

    fn buffer() -> BitmapBuffer {
        BitmapBuffer::new(Resolution::new(80, 48).unwrap())
    }

    fn engine(config: ExplorationConfig) -> ExplorationEngine<BitmapBuffer> {
        ExplorationEngine::new(config.with_seed(42), buffer()).unwrap()
    }

    struct EmptyFramebuffer;

    impl Framebuffer for EmptyFramebuffer {
        type Failure = BitmapBufferError;

        fn width(&self) -> u32 {
            0
        }

        fn height(&self) -> u32 {
            10
        }

        fn set_pixel(&mut self, x: u32, y: u32, _colour: Colour) -> Result<(), Self::Failure> {
            Err(BitmapBufferError::PixelOutsideBounds {
                x,
                y,
                width: 0,
                height: 10,
            })
        }

        fn pixel(&self, x: u32, y: u32) -> Result<Colour, Self::Failure> {
            Err(BitmapBufferError::PixelOutsideBounds {
                x,
                y,
                width: 0,
                height: 10,
            })
        }
    }

    #[test]
    fn zero_sized_framebuffer_is_rejected() {
        let result = ExplorationEngine::new(ExplorationConfig::default(), EmptyFramebuffer);

        assert!(matches!(result, Err(EngineError::Resolution(_))));
    }

    #[test]
    fn unreachable_band_is_rejected_at_construction() {
        let config = ExplorationConfig {
            acceptance: AcceptanceBand {
                min_fraction: 0.5,
                max_fraction: 0.6,
            },
            ..ExplorationConfig::default()
        };

        let result = ExplorationEngine::new(config, buffer());

        assert!(matches!(
            result,
            Err(EngineError::Config(ExplorationConfigError::UnreachableAcceptance { .. }))
        ));
    }

    #[test]
    fn accepted_frame_is_blitted() {
        let mut engine = engine(ExplorationConfig::default());

        engine.render_next_frame().unwrap();

        let frame = &engine.last_frame().unwrap().frame;
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                let expected = Colour::from_foreground(frame.is_foreground(x, y).unwrap());
                assert_eq!(engine.framebuffer().pixel(x, y).unwrap(), expected);
            }
        }
        assert_eq!(engine.frames_rendered(), 1);
        assert_eq!(engine.phase(), ExplorerPhase::Accepted);
    }

    #[test]
    fn advance_before_any_frame_does_nothing() {
        let mut engine = engine(ExplorationConfig::default());
        let before = engine.viewport();

        assert_eq!(engine.advance_to_next_region(), None);
        assert_eq!(engine.viewport(), before);
    }

    #[test]
    fn second_advance_without_a_render_does_nothing() {
        let mut engine = engine(ExplorationConfig::default());

        engine.render_next_frame().unwrap();
        assert!(engine.advance_to_next_region().is_some());
        let zoomed = engine.viewport();

        assert_eq!(engine.advance_to_next_region(), None);
        assert_eq!(engine.viewport(), zoomed);
        assert_eq!(engine.zooms_since_reset(), 1);
        assert_eq!(engine.phase(), ExplorerPhase::Exploring);
    }

    #[test]
    fn advance_halves_the_accepted_viewport() {
        let mut engine = engine(ExplorationConfig::default());

        for _ in 0..4 {
            engine.render_next_frame().unwrap();
            let accepted = engine.viewport();

            let selection = engine.advance_to_next_region().unwrap();

            assert_eq!(engine.phase(), ExplorerPhase::Exploring);
            assert_eq!(engine.viewport().center(), selection.center);
            assert_eq!(engine.viewport().width(), accepted.width() / 2.0);
            assert_eq!(engine.viewport().height(), accepted.height() / 2.0);
        }
    }

    #[test]
    fn session_restarts_after_the_reset_interval() {
        let config = ExplorationConfig {
            session_reset_interval: Some(NonZeroU32::new(2).unwrap()),
            ..ExplorationConfig::default()
        };
        let mut engine = engine(config);

        engine.step().unwrap();
        assert_eq!(engine.zooms_since_reset(), 1);

        engine.step().unwrap();
        assert_eq!(engine.zooms_since_reset(), 0);
        assert_eq!(engine.viewport(), config.default_viewport);
        assert_eq!(engine.phase(), ExplorerPhase::Initializing);
    }

    #[test]
    fn fixed_seed_replays_the_same_session() {
        let mut first = engine(ExplorationConfig::default());
        let mut second = engine(ExplorationConfig::default());

        for _ in 0..3 {
            first.step().unwrap();
            second.step().unwrap();

            assert_eq!(first.viewport(), second.viewport());
            assert_eq!(first.framebuffer(), second.framebuffer());
        }
    }
}
