use rayon::prelude::*;

use crate::core::actions::rasterize::band::{classify_band, split_into_bands};
use crate::core::actions::rasterize::ports::pixel_classifier::PixelClassifier;
use crate::core::data::frame::Frame;
use crate::core::data::render_stats::RenderStats;
use std::num::NonZeroU32;

/// Classifies the same bands as [`super::rasterize_scoped_threads::rasterize_scoped_threads`]
/// on rayon's global pool instead of freshly spawned threads.
pub fn rasterize_rayon<C: PixelClassifier>(
    classifier: &C,
    max_bands: NonZeroU32,
) -> (Frame, RenderStats) {
    let resolution = classifier.resolution();
    let mut cells = vec![false; resolution.pixel_count() as usize];

    let stats = split_into_bands(&mut cells, resolution.width(), max_bands)
        .into_par_iter()
        .map(|band| classify_band(classifier, band))
        .sum::<RenderStats>();

    (Frame::from_raster(resolution, cells), stats)
}
