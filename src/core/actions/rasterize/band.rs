use crate::core::actions::rasterize::ports::pixel_classifier::PixelClassifier;
use crate::core::data::render_stats::RenderStats;
use crate::core::util::calculate_bands::calculate_band_ranges;
use std::num::NonZeroU32;
use std::ops::Range;

/// A contiguous run of rows and the slice of frame cells that holds them.
#[derive(Debug)]
pub(crate) struct Band<'a> {
    pub rows: Range<u32>,
    pub cells: &'a mut [bool],
}

/// Carves `cells` into disjoint per-band slices so each worker owns its rows.
pub(crate) fn split_into_bands(cells: &mut [bool], width: u32, max_bands: NonZeroU32) -> Vec<Band<'_>> {
    let rows = (cells.len() / width.max(1) as usize) as u32;
    let mut rest = cells;

    calculate_band_ranges(max_bands, rows)
        .into_iter()
        .map(|band_rows| {
            let len = band_rows.len() * width as usize;
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(len);
            rest = tail;

            Band {
                rows: band_rows,
                cells: head,
            }
        })
        .collect()
}

/// Classifies every pixel of `band` and returns the band's tally.
pub(crate) fn classify_band<C: PixelClassifier + ?Sized>(classifier: &C, band: Band<'_>) -> RenderStats {
    let width = classifier.resolution().width();
    let mut foreground_count = 0;

    for (row, row_cells) in band.rows.clone().zip(band.cells.chunks_mut(width as usize)) {
        for (x, cell) in (0..width).zip(row_cells.iter_mut()) {
            *cell = classifier.is_foreground(x, row);
            foreground_count += u64::from(*cell);
        }
    }

    RenderStats {
        foreground_count,
        total_count: band.cells.len() as u64,
    }
}

/// Single-threaded reference used by the backend tests: one band covering every row.
#[cfg(test)]
pub(crate) fn rasterize_serial<C: PixelClassifier>(
    classifier: &C,
) -> (crate::core::data::frame::Frame, RenderStats) {
    let resolution = classifier.resolution();
    let mut cells = vec![false; resolution.pixel_count() as usize];

    let stats = classify_band(
        classifier,
        Band {
            rows: 0..resolution.height(),
            cells: &mut cells,
        },
    );

    (crate::core::data::frame::Frame::from_raster(resolution, cells), stats)
}
