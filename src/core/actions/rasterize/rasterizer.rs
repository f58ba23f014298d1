use crate::core::actions::rasterize::rasterize_rayon::rasterize_rayon;
use crate::core::actions::rasterize::rasterize_scoped_threads::rasterize_scoped_threads;
use crate::core::data::frame::Frame;
use crate::core::data::render_stats::RenderStats;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::convention::ForegroundConvention;
use crate::core::fractals::fractal_family::FractalFamily;
use std::num::NonZeroU32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterBackend {
    /// One thread per band, spawned and joined inside each render.
    #[default]
    ScopedThreads,
    /// The same bands scheduled on rayon's global pool.
    Rayon,
}

/// Renders a viewport into a two-colour [`Frame`] across a fixed number of bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcurrentRasterizer {
    backend: RasterBackend,
    workers: NonZeroU32,
    convention: ForegroundConvention,
}

impl ConcurrentRasterizer {
    #[must_use]
    pub fn new(backend: RasterBackend, workers: NonZeroU32, convention: ForegroundConvention) -> Self {
        Self {
            backend,
            workers,
            convention,
        }
    }

    #[must_use]
    pub fn workers(&self) -> NonZeroU32 {
        self.workers
    }

    #[must_use]
    pub fn render(
        &self,
        viewport: &Viewport,
        resolution: Resolution,
        family: FractalFamily,
        max_iterations: NonZeroU32,
    ) -> (Frame, RenderStats) {
        let algorithm =
            EscapeTimeAlgorithm::new(*viewport, resolution, family, max_iterations, self.convention);

        match self.backend {
            RasterBackend::ScopedThreads => rasterize_scoped_threads(&algorithm, self.workers),
            RasterBackend::Rayon => rasterize_rayon(&algorithm, self.workers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::ComplexPoint;

    fn render_with(backend: RasterBackend, workers: u32) -> (Frame, RenderStats) {
        let rasterizer = ConcurrentRasterizer::new(
            backend,
            NonZeroU32::new(workers).unwrap(),
            ForegroundConvention::Interior,
        );

        rasterizer.render(
            &Viewport::new(ComplexPoint::new(-0.75, 0.1), 2.5, 1.5).unwrap(),
            Resolution::new(160, 96).unwrap(),
            FractalFamily::Mandelbrot,
            NonZeroU32::new(120).unwrap(),
        )
    }

    #[test]
    fn one_worker_and_four_workers_render_identical_frames() {
        let single = render_with(RasterBackend::ScopedThreads, 1);
        let quad = render_with(RasterBackend::ScopedThreads, 4);

        assert_eq!(single, quad);
    }

    #[test]
    fn backends_render_identical_frames() {
        assert_eq!(
            render_with(RasterBackend::ScopedThreads, 4),
            render_with(RasterBackend::Rayon, 4)
        );
    }

    #[test]
    fn stats_account_for_every_pixel() {
        let (frame, stats) = render_with(RasterBackend::ScopedThreads, 4);

        assert_eq!(stats.foreground_count + stats.background_count(), 160 * 96);
        assert_eq!(stats, frame.stats());
        assert!(stats.foreground_count > 0);
        assert!(stats.background_count() > 0);
    }

    #[test]
    fn julia_renders_through_the_same_bands() {
        let rasterizer = ConcurrentRasterizer::new(
            RasterBackend::ScopedThreads,
            NonZeroU32::new(4).unwrap(),
            ForegroundConvention::Exterior,
        );
        let viewport = Viewport::new(ComplexPoint::default(), 3.0, 3.0).unwrap();
        let resolution = Resolution::new(40, 40).unwrap();
        let family = FractalFamily::Julia(ComplexPoint::default());

        let (_, stats) = rasterizer.render(&viewport, resolution, family, NonZeroU32::new(50).unwrap());

        // c = 0 fills the unit disc; exterior is foreground here
        assert!(stats.foreground_fraction() > 0.5);
        assert!(stats.foreground_fraction() < 0.8);
    }
}
