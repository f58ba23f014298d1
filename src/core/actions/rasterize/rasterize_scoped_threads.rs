use crate::core::actions::rasterize::band::{classify_band, split_into_bands};
use crate::core::actions::rasterize::ports::pixel_classifier::PixelClassifier;
use crate::core::data::frame::Frame;
use crate::core::data::render_stats::RenderStats;
use std::num::NonZeroU32;
use std::panic;
use std::thread;

/// Classifies the frame with one scoped thread per horizontal band.
///
/// Threads are spawned and joined inside this call. Each thread writes only
/// the rows of its own band and hands back its tally when joined, so the frame
/// and the summed stats are complete once this returns.
pub fn rasterize_scoped_threads<C: PixelClassifier>(
    classifier: &C,
    max_bands: NonZeroU32,
) -> (Frame, RenderStats) {
    let resolution = classifier.resolution();
    let mut cells = vec![false; resolution.pixel_count() as usize];

    let stats = thread::scope(|scope| {
        split_into_bands(&mut cells, resolution.width(), max_bands)
            .into_iter()
            .map(|band| scope.spawn(move || classify_band(classifier, band)))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .sum::<RenderStats>()
    });

    (Frame::from_raster(resolution, cells), stats)
}
