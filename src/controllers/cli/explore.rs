use crate::controllers::exploration::{EngineError, ExplorationEngine};
use crate::controllers::ports::display::DisplayPort;
use crate::core::data::bitmap_buffer::{BitmapBuffer, BitmapBufferError};
use crate::core::data::resolution::Resolution;
use crate::core::exploration::exploration_config::ExplorationConfig;
use log::info;
use std::time::Instant;

/// Runs a fixed number of explore cycles, handing every accepted frame to
/// the presenter.
pub struct ExploreCliController<P: DisplayPort> {
    presenter: P,
    engine: ExplorationEngine<BitmapBuffer>,
}

impl<P: DisplayPort> ExploreCliController<P> {
    pub fn new(
        presenter: P,
        config: ExplorationConfig,
        resolution: Resolution,
    ) -> Result<Self, EngineError<BitmapBufferError>> {
        let engine = ExplorationEngine::new(config, BitmapBuffer::new(resolution))?;

        Ok(Self { presenter, engine })
    }

    pub fn run(&mut self, frames: u32) -> Result<(), Box<dyn std::error::Error>> {
        for index in 0..frames {
            let start = Instant::now();
            self.engine.render_next_frame()?;
            let duration = start.elapsed();

            self.presenter.present(self.engine.framebuffer())?;

            if let Some(accepted) = self.engine.last_frame() {
                info!(
                    "frame {}: {} attempt(s) in {:?}, foreground {:.3}",
                    index,
                    accepted.attempts,
                    duration,
                    accepted.stats.foreground_fraction()
                );
            }

            self.engine.advance_to_next_region();
        }

        Ok(())
    }

    #[must_use]
    pub fn engine(&self) -> &ExplorationEngine<BitmapBuffer> {
        &self.engine
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}
