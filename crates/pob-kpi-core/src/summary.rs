//! # Tier Summary
//!
//! Counts classified KPIs per tier and expresses each count as a whole
//! percentage of the total. Percentages use integer arithmetic, rounding
//! half up, and an empty collection is all zeros.

use crate::kpi::Kpi;
use crate::types::Tier;
use serde::{Deserialize, Serialize};

/// Per-tier counts and percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TierSummary {
    pub total: usize,
    pub poor: usize,
    pub needs_improvement: usize,
    pub good: usize,
    pub excellent: usize,
    pub poor_percent: u8,
    pub needs_improvement_percent: u8,
    pub good_percent: u8,
    pub excellent_percent: u8,
}

impl TierSummary {
    /// Summarize a collection of KPIs by their current status.
    #[must_use]
    pub fn from_kpis<'a>(kpis: impl IntoIterator<Item = &'a Kpi>) -> Self {
        Self::from_tiers(kpis.into_iter().map(Kpi::status))
    }

    /// Summarize a sequence of tiers.
    #[must_use]
    pub fn from_tiers(tiers: impl IntoIterator<Item = Tier>) -> Self {
        let mut summary = Self::default();
        for tier in tiers {
            summary.total = summary.total.saturating_add(1);
            let slot = match tier {
                Tier::Poor => &mut summary.poor,
                Tier::NeedsImprovement => &mut summary.needs_improvement,
                Tier::Good => &mut summary.good,
                Tier::Excellent => &mut summary.excellent,
            };
            *slot = slot.saturating_add(1);
        }

        summary.poor_percent = percent(summary.poor, summary.total);
        summary.needs_improvement_percent = percent(summary.needs_improvement, summary.total);
        summary.good_percent = percent(summary.good, summary.total);
        summary.excellent_percent = percent(summary.excellent, summary.total);
        summary
    }

    /// Count for one tier.
    #[must_use]
    pub fn count(&self, tier: Tier) -> usize {
        match tier {
            Tier::Poor => self.poor,
            Tier::NeedsImprovement => self.needs_improvement,
            Tier::Good => self.good,
            Tier::Excellent => self.excellent,
        }
    }

    /// Percentage for one tier.
    #[must_use]
    pub fn percent(&self, tier: Tier) -> u8 {
        match tier {
            Tier::Poor => self.poor_percent,
            Tier::NeedsImprovement => self.needs_improvement_percent,
            Tier::Good => self.good_percent,
            Tier::Excellent => self.excellent_percent,
        }
    }
}

/// `round(count / total * 100)`, half up; zero when `total` is zero.
fn percent(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let count = count as u64;
    let total = total as u64;
    let rounded = (count.saturating_mul(200).saturating_add(total)) / total.saturating_mul(2);
    rounded.min(100) as u8
}

// =============================================================================
// TESTS
// =============================================================================
