use crate::core::data::render_stats::RenderStats;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    BoundsMismatch { expected_cells: u64, actual_cells: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_cells,
                actual_cells,
            } => {
                write!(
                    f,
                    "frame expects {} cells but {} were supplied",
                    expected_cells, actual_cells
                )
            }
        }
    }
}

impl Error for FrameError {}

/// A row-major classification grid: `true` marks a foreground pixel.
/// Row 0 is the top of the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    resolution: Resolution,
    cells: Vec<bool>,
}

impl Frame {
    pub fn from_cells(resolution: Resolution, cells: Vec<bool>) -> Result<Self, FrameError> {
        if resolution.pixel_count() != cells.len() as u64 {
            return Err(FrameError::BoundsMismatch {
                expected_cells: resolution.pixel_count(),
                actual_cells: cells.len(),
            });
        }

        Ok(Self { resolution, cells })
    }

    /// For rasterizers, which size `cells` from the resolution themselves.
    pub(crate) fn from_raster(resolution: Resolution, cells: Vec<bool>) -> Self {
        debug_assert_eq!(resolution.pixel_count(), cells.len() as u64);

        Self { resolution, cells }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.resolution.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.resolution.height()
    }

    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[must_use]
    pub fn is_foreground(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width() || y >= self.height() {
            return None;
        }

        Some(self.cells[self.index(x, y)])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width() as usize)
    }

    #[must_use]
    pub fn stats(&self) -> RenderStats {
        RenderStats {
            foreground_count: self.cells.iter().filter(|&&cell| cell).count() as u64,
            total_count: self.cells.len() as u64,
        }
    }

    /// Tallies the `width` x `height` block whose top-left pixel is `(x, y)`,
    /// clipped to the frame.
    #[must_use]
    pub fn region_stats(&self, x: u32, y: u32, width: u32, height: u32) -> RenderStats {
        let x_end = x.saturating_add(width).min(self.width());
        let y_end = y.saturating_add(height).min(self.height());

        if x >= x_end || y >= y_end {
            return RenderStats::default();
        }

        let foreground_count = (y..y_end)
            .map(|row| {
                let start = self.index(x, row);
                let end = self.index(x_end, row);
                self.cells[start..end].iter().filter(|&&cell| cell).count() as u64
            })
            .sum();

        RenderStats {
            foreground_count,
            total_count: u64::from(x_end - x) * u64::from(y_end - y),
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width() as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard_quadrants() -> Frame {
        // 4x2, left half foreground, right half background
        let cells = vec![
            true, true, false, false, //
            true, true, false, false,
        ];
        Frame::from_cells(Resolution::new(4, 2).unwrap(), cells).unwrap()
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        let result = Frame::from_cells(Resolution::new(3, 3).unwrap(), vec![false; 8]);

        assert_eq!(
            result,
            Err(FrameError::BoundsMismatch {
                expected_cells: 9,
                actual_cells: 8
            })
        );
    }

    #[test]
    fn test_is_foreground_reads_row_major() {
        let frame = checkerboard_quadrants();

        assert_eq!(frame.is_foreground(0, 0), Some(true));
        assert_eq!(frame.is_foreground(3, 1), Some(false));
        assert_eq!(frame.is_foreground(4, 0), None);
        assert_eq!(frame.is_foreground(0, 2), None);
    }

    #[test]
    fn test_stats_counts_every_cell() {
        let stats = checkerboard_quadrants().stats();

        assert_eq!(stats.foreground_count, 4);
        assert_eq!(stats.total_count, 8);
    }

    #[test]
    fn test_region_stats() {
        let frame = checkerboard_quadrants();

        assert_eq!(
            frame.region_stats(0, 0, 2, 2),
            RenderStats {
                foreground_count: 4,
                total_count: 4
            }
        );
        assert_eq!(
            frame.region_stats(1, 0, 2, 1),
            RenderStats {
                foreground_count: 1,
                total_count: 2
            }
        );
    }

    #[test]
    fn test_region_stats_clips_to_frame() {
        let frame = checkerboard_quadrants();

        assert_eq!(frame.region_stats(3, 1, 10, 10).total_count, 1);
        assert_eq!(frame.region_stats(4, 0, 1, 1), RenderStats::default());
        assert_eq!(frame.region_stats(0, 0, 0, 2), RenderStats::default());
    }

    #[test]
    fn test_rows() {
        let frame = checkerboard_quadrants();
        let rows: Vec<&[bool]> = frame.rows().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[true, true, false, false]);
    }
}
