//! # KPI Records
//!
//! A [`Kpi`] couples static definition data (name, target, boundaries) with
//! the one mutable pair in the system: `achievement` and the `status` derived
//! from it. The pair only changes through [`Kpi::set_achievement`], which
//! validates the input and reclassifies in the same call, so a stale status
//! is never observable.

use crate::boundary::leading_decimal;
use crate::classifier::{TierBoundaries, classify};
use crate::types::{Dimension, KpiId, PobError, Tier};
use serde::Serialize;

// =============================================================================
// SEED DEFINITION
// =============================================================================

/// Static definition of a KPI, as bundled in the catalog.
///
/// Boundaries are listed worst tier first. There is no status field: the
/// status is always computed when the seed is turned into a [`Kpi`].
#[derive(Debug, Clone, Copy)]
pub struct KpiSeed<'a> {
    pub id: u32,
    pub name: &'a str,
    pub description: &'a str,
    pub target: &'a str,
    pub achievement: &'a str,
    pub unit: &'a str,
    pub boundaries: [&'a str; 4],
    pub dimension: Dimension,
    pub measurement_method: &'a str,
    pub higher_is_better: bool,
}

// =============================================================================
// KPI
// =============================================================================

/// A KPI with its current achievement and derived status.
///
/// Only `Serialize` is derived: a deserialized record could carry a status
/// that disagrees with its achievement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub id: KpiId,
    pub name: String,
    pub description: String,
    pub target: String,
    achievement: String,
    pub unit: String,
    pub boundaries: TierBoundaries,
    pub dimension: Dimension,
    pub measurement_method: String,
    pub higher_is_better: bool,
    status: Tier,
}

impl Kpi {
    /// Build a KPI from its seed and classify the seed achievement.
    #[must_use]
    pub fn from_seed(seed: &KpiSeed<'_>) -> Self {
        let [poor, needs_improvement, good, excellent] = seed.boundaries;
        let mut kpi = Self {
            id: KpiId(seed.id),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            target: seed.target.to_string(),
            achievement: seed.achievement.trim().to_string(),
            unit: seed.unit.to_string(),
            boundaries: TierBoundaries::parse(poor, needs_improvement, good, excellent),
            dimension: seed.dimension,
            measurement_method: seed.measurement_method.to_string(),
            higher_is_better: seed.higher_is_better,
            status: Tier::Poor,
        };
        kpi.status = kpi.classify();
        kpi
    }

    /// Current achievement text.
    #[must_use]
    pub fn achievement(&self) -> &str {
        &self.achievement
    }

    /// Current status. Always consistent with [`Kpi::achievement`].
    #[must_use]
    pub fn status(&self) -> Tier {
        self.status
    }

    /// Achievement as a number, NaN when unreadable.
    #[must_use]
    pub fn achievement_value(&self) -> f64 {
        leading_decimal(&self.achievement).unwrap_or(f64::NAN)
    }

    /// Target as a number, if readable.
    #[must_use]
    pub fn target_value(&self) -> Option<f64> {
        leading_decimal(&self.target)
    }

    /// Compute the tier for the current achievement.
    #[must_use]
    pub fn classify(&self) -> Tier {
        classify(
            self.achievement_value(),
            &self.boundaries,
            self.higher_is_better,
        )
    }

    /// Replace the achievement and recompute the status.
    ///
    /// The input is validated first; on error the KPI is left untouched.
    /// Only the numeric part is kept: `"4.5 hari"` is stored as `"4.5"`.
    pub fn set_achievement(&mut self, input: &str) -> Result<Tier, PobError> {
        let value = parse_achievement(input)?;
        self.achievement = value.to_string();
        self.status = self.classify();
        Ok(self.status)
    }

    /// Achievement with its unit, e.g. `"6 hari"` or `"85%"`.
    #[must_use]
    pub fn formatted_achievement(&self) -> String {
        format_with_unit(&self.achievement, &self.unit)
    }

    /// Target with its unit.
    #[must_use]
    pub fn formatted_target(&self) -> String {
        format_with_unit(&self.target, &self.unit)
    }
}

// =============================================================================
// INPUT VALIDATION
// =============================================================================

/// Validate a user-supplied achievement and return its numeric value.
///
/// - empty or whitespace → [`PobError::EmptyAchievement`]
/// - no leading number → [`PobError::InvalidAchievement`]
///
/// Trailing text after the number is tolerated (`"4.5 hari"` is `4.5`).
pub fn parse_achievement(input: &str) -> Result<f64, PobError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PobError::EmptyAchievement);
    }
    leading_decimal(trimmed)
        .filter(|v| v.is_finite())
        .ok_or_else(|| PobError::InvalidAchievement(trimmed.to_string()))
}

fn format_with_unit(value: &str, unit: &str) -> String {
    match unit {
        "" => value.to_string(),
        "%" => format!("{}%", value),
        _ => format!("{} {}", value, unit),
    }
}

// =============================================================================
// TESTS
// =============================================================================
