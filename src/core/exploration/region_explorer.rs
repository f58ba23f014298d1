use crate::core::data::complex::ComplexPoint;
use crate::core::data::frame::Frame;
use crate::core::data::render_stats::RenderStats;
use crate::core::data::viewport::Viewport;
use crate::core::exploration::jitter::symmetric;
use crate::core::exploration::limits::ExplorationLimits;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Uniformity cut-offs used to rank quadrants, where uniformity is the
/// larger of the foreground and background fractions and so lies in `[0.5, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionThresholds {
    pub low: f64,
    pub preferred_high: f64,
    /// Quadrants at or above this are too uniform to be worth zooming into.
    pub high: f64,
    /// Pan, relative to the extent, used when the frame is too small to split.
    pub degenerate_pan: f64,
}

impl Default for RegionThresholds {
    fn default() -> Self {
        Self {
            low: 0.55,
            preferred_high: 0.85,
            high: 0.95,
            degenerate_pan: 0.05,
        }
    }
}

impl RegionThresholds {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        0.5 <= self.low
            && self.low < self.preferred_high
            && self.preferred_high <= self.high
            && self.high <= 1.0
            && self.degenerate_pan.is_finite()
            && self.degenerate_pan >= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Pixel origin of the quadrant in a frame split into `half_width x half_height` cells.
    fn pixel_origin(self, half_width: u32, half_height: u32) -> (u32, u32) {
        match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (half_width, 0),
            Self::BottomLeft => (0, half_height),
            Self::BottomRight => (half_width, half_height),
        }
    }

    /// Center of the quadrant in the complex plane. Row 0 is the top, so the
    /// top quadrants have the larger imaginary part.
    fn complex_center(self, viewport: &Viewport) -> ComplexPoint {
        let (sign_re, sign_im) = match self {
            Self::TopLeft => (-1.0, 1.0),
            Self::TopRight => (1.0, 1.0),
            Self::BottomLeft => (-1.0, -1.0),
            Self::BottomRight => (1.0, -1.0),
        };

        viewport.center()
            + ComplexPoint::new(
                sign_re * viewport.width() / 4.0,
                sign_im * viewport.height() / 4.0,
            )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionCandidate {
    pub quadrant: Quadrant,
    pub center: ComplexPoint,
    pub stats: RenderStats,
}

impl RegionCandidate {
    #[must_use]
    pub fn uniformity(&self) -> f64 {
        self.stats.uniformity()
    }
}

/// Which rule picked the next center, from most to least selective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTier {
    Preferred,
    Acceptable,
    Any,
    Degenerate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionSelection {
    pub center: ComplexPoint,
    pub tier: SelectionTier,
    pub quadrant: Option<Quadrant>,
}

/// Chooses where to zoom next by scoring the four quadrants of the last
/// accepted frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionExplorer {
    thresholds: RegionThresholds,
    limits: ExplorationLimits,
}

impl RegionExplorer {
    #[must_use]
    pub fn new(thresholds: RegionThresholds, limits: ExplorationLimits) -> Self {
        Self { thresholds, limits }
    }

    /// The four quadrant candidates, or none when the frame is too small to split.
    #[must_use]
    pub fn candidates(&self, frame: &Frame, viewport: &Viewport) -> Vec<RegionCandidate> {
        let half_width = frame.width() / 2;
        let half_height = frame.height() / 2;

        if half_width == 0 || half_height == 0 {
            return Vec::new();
        }

        Quadrant::ALL
            .iter()
            .map(|&quadrant| {
                let (x, y) = quadrant.pixel_origin(half_width, half_height);

                RegionCandidate {
                    quadrant,
                    center: self.limits.clamp_center(quadrant.complex_center(viewport)),
                    stats: frame.region_stats(x, y, half_width, half_height),
                }
            })
            .collect()
    }

    pub fn select_next_center<R: Rng + ?Sized>(
        &self,
        frame: &Frame,
        viewport: &Viewport,
        rng: &mut R,
    ) -> RegionSelection {
        let candidates = self.candidates(frame, viewport);

        if candidates.is_empty() {
            let pan = self.thresholds.degenerate_pan;
            let nudged = viewport.center()
                + ComplexPoint::new(
                    symmetric(rng, pan) * viewport.width(),
                    symmetric(rng, pan) * viewport.height(),
                );

            return RegionSelection {
                center: self.limits.clamp_center(nudged),
                tier: SelectionTier::Degenerate,
                quadrant: None,
            };
        }

        let RegionThresholds {
            low,
            preferred_high,
            high,
            ..
        } = self.thresholds;

        let tiers = [
            (SelectionTier::Preferred, low, preferred_high),
            (SelectionTier::Acceptable, low, high),
        ];

        for (tier, lower, upper) in tiers {
            let eligible: Vec<&RegionCandidate> = candidates
                .iter()
                .filter(|candidate| {
                    let uniformity = candidate.uniformity();
                    lower <= uniformity && uniformity < upper
                })
                .collect();

            if let Some(chosen) = eligible.choose(rng) {
                return RegionSelection {
                    center: chosen.center,
                    tier,
                    quadrant: Some(chosen.quadrant),
                };
            }
        }

        let chosen = candidates[rng.random_range(0..candidates.len())];

        RegionSelection {
            center: chosen.center,
            tier: SelectionTier::Any,
            quadrant: Some(chosen.quadrant),
        }
    }

    /// Recenters `viewport` on the selected region and halves both extents.
    pub fn advance<R: Rng + ?Sized>(
        &self,
        frame: &Frame,
        viewport: &mut Viewport,
        rng: &mut R,
    ) -> RegionSelection {
        let selection = self.select_next_center(frame, viewport, rng);

        viewport.set_center(selection.center);
        viewport.zoom(0.5);

        selection
    }
}
