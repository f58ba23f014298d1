use crate::core::data::render_stats::RenderStats;
use std::fmt;

/// Why a rendered frame was not good enough to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No foreground at all.
    Empty,
    /// Nothing but foreground.
    Saturated,
    /// Some foreground, but below the band.
    Sparse,
    /// Above the band.
    Dense,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Empty => "no foreground",
            Self::Saturated => "all foreground",
            Self::Sparse => "too little foreground",
            Self::Dense => "too much foreground",
        };

        f.write_str(reason)
    }
}

/// Inclusive range of foreground fractions a frame must fall in to be shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcceptanceBand {
    pub min_fraction: f64,
    pub max_fraction: f64,
}

impl Default for AcceptanceBand {
    fn default() -> Self {
        Self {
            min_fraction: 0.05,
            max_fraction: 0.95,
        }
    }
}

impl AcceptanceBand {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        0.0 <= self.min_fraction && self.min_fraction <= self.max_fraction && self.max_fraction <= 1.0
    }

    #[must_use]
    pub fn contains(&self, fraction: f64) -> bool {
        (self.min_fraction..=self.max_fraction).contains(&fraction)
    }

    /// `Ok` when the frame is showable.
    ///
    /// An empty or saturated frame is reported as such even when the band
    /// is wide enough to admit it.
    pub fn evaluate(&self, stats: &RenderStats) -> Result<(), Rejection> {
        let fraction = stats.foreground_fraction();

        if stats.total_count > 0 && stats.foreground_count == 0 && self.min_fraction > 0.0 {
            return Err(Rejection::Empty);
        }

        if stats.total_count > 0
            && stats.foreground_count == stats.total_count
            && self.max_fraction < 1.0
        {
            return Err(Rejection::Saturated);
        }

        if fraction < self.min_fraction {
            Err(Rejection::Sparse)
        } else if fraction > self.max_fraction {
            Err(Rejection::Dense)
        } else {
            Ok(())
        }
    }
}
