use rand::Rng;
use std::num::NonZeroU32;

/// Iteration budget for a render attempt:
/// `base + per_decade * max(0, -log10(width)) + U[0, jitter)`.
///
/// Deeper zooms need more iterations to resolve the boundary; the jitter
/// decorrelates banding between consecutive frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationPolicy {
    pub base: NonZeroU32,
    pub per_decade: f64,
    pub jitter: u32,
}

impl IterationPolicy {
    /// Budget without the random offset.
    #[must_use]
    pub fn min_budget(&self, viewport_width: f64) -> NonZeroU32 {
        let decades = (-viewport_width.log10()).max(0.0);
        let extra = (self.per_decade * decades).max(0.0);
        // `as` saturates, so NaN and overflow land on 0 and u32::MAX
        self.base.saturating_add(extra as u32)
    }

    /// Largest budget [`Self::budget`] can return for this width.
    #[must_use]
    pub fn max_budget(&self, viewport_width: f64) -> NonZeroU32 {
        self.min_budget(viewport_width)
            .saturating_add(self.jitter.saturating_sub(1))
    }

    pub fn budget<R: Rng + ?Sized>(&self, viewport_width: f64, rng: &mut R) -> NonZeroU32 {
        let offset = if self.jitter == 0 {
            0
        } else {
            rng.random_range(0..self.jitter)
        };

        self.min_budget(viewport_width).saturating_add(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn policy(jitter: u32) -> IterationPolicy {
        IterationPolicy {
            base: NonZeroU32::new(50).unwrap(),
            per_decade: 100.0,
            jitter,
        }
    }

    #[test]
    fn wide_viewports_use_the_base_budget() {
        assert_eq!(policy(0).min_budget(4.0).get(), 50);
        assert_eq!(policy(0).min_budget(1.0).get(), 50);
    }

    #[test]
    fn budget_grows_per_decade_of_zoom() {
        // -log10(0.05) = 1.30103, -log10(0.0005) = 3.30103
        assert_eq!(policy(0).min_budget(0.05).get(), 180);
        assert_eq!(policy(0).min_budget(0.0005).get(), 380);
    }

    #[test]
    fn jitter_stays_within_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        let policy = policy(50);

        for _ in 0..200 {
            let budget = policy.budget(0.01, &mut rng);

            assert!(budget >= policy.min_budget(0.01));
            assert!(budget <= policy.max_budget(0.01));
        }
    }

    #[test]
    fn zero_jitter_is_deterministic() {
        let mut rng = Pcg32::seed_from_u64(1);

        assert_eq!(policy(0).budget(0.5, &mut rng), policy(0).max_budget(0.5));
    }

    #[test]
    fn degenerate_widths_do_not_panic() {
        assert_eq!(policy(0).min_budget(f64::NAN).get(), 50);
        assert_eq!(policy(0).min_budget(0.0).get(), u32::MAX);
    }
}
