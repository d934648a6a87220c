//! # Status Classifier
//!
//! Maps an achievement value onto one of the four [`Tier`]s.
//!
//! ## Rule
//!
//! Each tier boundary contributes one *defining edge*: its `min` when higher
//! values are better, its `max` when lower values are better. Tiers are tested
//! from best to worst against that single edge, and Poor is the fall-through:
//!
//! | Direction | Excellent | Good | Needs-Improvement | Poor |
//! |-----------|-----------|------|-------------------|------|
//! | higher is better | `a ≥ E.min` | `a ≥ G.min` | `a ≥ N.min` | otherwise |
//! | lower is better | `a ≤ E.max` | `a ≤ G.max` | `a ≤ N.max` | otherwise |
//!
//! A tier therefore owns the half-open interval between its own edge
//! (closed) and the edge of the next better tier (open). Seed ranges such as
//! `"70-84%"` / `"85-94%"` leave no gap: `84.5` is Needs-Improvement.
//!
//! A boundary without a defining edge (malformed, or pointing the wrong way)
//! never matches, and a NaN achievement matches nothing, so both land lower
//! in the ladder. The Poor boundary is never consulted.

use crate::boundary::TierBoundary;
use crate::types::Tier;
use serde::{Deserialize, Serialize};

// =============================================================================
// TIER BOUNDARIES
// =============================================================================

/// The four boundaries of a KPI, worst tier first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierBoundaries {
    pub poor: TierBoundary,
    pub needs_improvement: TierBoundary,
    pub good: TierBoundary,
    pub excellent: TierBoundary,
}

impl TierBoundaries {
    /// Parse four boundary expressions, worst tier first.
    #[must_use]
    pub fn parse(poor: &str, needs_improvement: &str, good: &str, excellent: &str) -> Self {
        Self {
            poor: TierBoundary::new(poor),
            needs_improvement: TierBoundary::new(needs_improvement),
            good: TierBoundary::new(good),
            excellent: TierBoundary::new(excellent),
        }
    }

    /// Boundary of a given tier.
    #[must_use]
    pub fn get(&self, tier: Tier) -> &TierBoundary {
        match tier {
            Tier::Poor => &self.poor,
            Tier::NeedsImprovement => &self.needs_improvement,
            Tier::Good => &self.good,
            Tier::Excellent => &self.excellent,
        }
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Tiers tested in order, best first. Poor is the fall-through.
const LADDER: [Tier; 3] = [Tier::Excellent, Tier::Good, Tier::NeedsImprovement];

/// Classify an achievement value.
#[must_use]
pub fn classify(achievement: f64, boundaries: &TierBoundaries, higher_is_better: bool) -> Tier {
    LADDER
        .into_iter()
        .find(|tier| reaches(achievement, boundaries.get(*tier), higher_is_better))
        .unwrap_or(Tier::Poor)
}

/// Check whether `achievement` reaches the defining edge of `boundary`.
fn reaches(achievement: f64, boundary: &TierBoundary, higher_is_better: bool) -> bool {
    let range = boundary.range();
    if higher_is_better {
        range.min.is_some_and(|min| achievement >= min)
    } else {
        range.max.is_some_and(|max| achievement <= max)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn lecturer_turnaround() -> TierBoundaries {
        TierBoundaries::parse("> 45 hari", "31-45 hari", "21-30 hari", "≤ 20 hari")
    }

    fn matching_accuracy() -> TierBoundaries {
        TierBoundaries::parse("< 70%", "70-84%", "85-94%", "≥ 95%")
    }

    #[test]
    fn lower_is_better_lands_in_span() {
        assert_eq!(classify(28.0, &lecturer_turnaround(), false), Tier::Good);
    }

    #[test]
    fn higher_is_better_lands_in_span() {
        assert_eq!(
            classify(82.0, &matching_accuracy(), true),
            Tier::NeedsImprovement
        );
    }

    #[test]
    fn lower_is_better_edges_are_closed_on_own_max() {
        let b = lecturer_turnaround();
        assert_eq!(classify(20.0, &b, false), Tier::Excellent);
        assert_eq!(classify(20.5, &b, false), Tier::Good);
        assert_eq!(classify(30.0, &b, false), Tier::Good);
        assert_eq!(classify(30.5, &b, false), Tier::NeedsImprovement);
        assert_eq!(classify(45.0, &b, false), Tier::NeedsImprovement);
        assert_eq!(classify(45.1, &b, false), Tier::Poor);
    }

    #[test]
    fn higher_is_better_edges_are_closed_on_own_min() {
        let b = matching_accuracy();
        assert_eq!(classify(95.0, &b, true), Tier::Excellent);
        assert_eq!(classify(94.9, &b, true), Tier::Good);
        assert_eq!(classify(85.0, &b, true), Tier::Good);
        assert_eq!(classify(69.9, &b, true), Tier::Poor);
        assert_eq!(classify(70.0, &b, true), Tier::NeedsImprovement);
    }

    #[test]
    fn gap_between_spans_closes_toward_worse_tier() {
        let b = matching_accuracy();
        assert_eq!(classify(84.0, &b, true), Tier::NeedsImprovement);
        assert_eq!(classify(84.5, &b, true), Tier::NeedsImprovement);
    }

    #[test]
    fn malformed_tier_is_skipped() {
        let b = TierBoundaries::parse("< 70%", "70-84%", "n/a", "≥ 95%");
        assert_eq!(classify(90.0, &b, true), Tier::NeedsImprovement);
        assert_eq!(classify(96.0, &b, true), Tier::Excellent);
    }

    #[test]
    fn nan_achievement_is_poor() {
        assert_eq!(classify(f64::NAN, &matching_accuracy(), true), Tier::Poor);
        assert_eq!(classify(f64::NAN, &lecturer_turnaround(), false), Tier::Poor);
    }

    #[test]
    fn poor_boundary_is_never_consulted() {
        let a = TierBoundaries::parse("< 70%", "70-84%", "85-94%", "≥ 95%");
        let b = TierBoundaries::parse("garbage", "70-84%", "85-94%", "≥ 95%");
        for value in [0.0, 50.0, 69.0, 71.0, 99.0] {
            assert_eq!(classify(value, &a, true), classify(value, &b, true));
        }
    }
}
