use std::iter::Sum;
use std::ops::Add;

/// Foreground/background tally of a frame or part of one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct RenderStats {
    pub foreground_count: u64,
    pub total_count: u64,
}

impl RenderStats {
    #[must_use]
    pub fn background_count(&self) -> u64 {
        self.total_count - self.foreground_count
    }

    /// Fraction of foreground pixels, `0.0` for an empty tally.
    #[must_use]
    pub fn foreground_fraction(&self) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            self.foreground_count as f64 / self.total_count as f64
        }
    }

    #[must_use]
    pub fn background_fraction(&self) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            self.background_count() as f64 / self.total_count as f64
        }
    }

    /// Majority colour's share: 1.0 for a single colour, 0.5 for an even split.
    #[must_use]
    pub fn uniformity(&self) -> f64 {
        self.foreground_fraction().max(self.background_fraction())
    }
}

impl Add for RenderStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            foreground_count: self.foreground_count + other.foreground_count,
            total_count: self.total_count + other.total_count,
        }
    }
}

impl Sum for RenderStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
