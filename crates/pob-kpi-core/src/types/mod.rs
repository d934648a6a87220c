//! # Core Type Definitions
//!
//! This module contains the shared vocabulary of the KPI engine:
//! - Identifiers (`KpiId`, `PobId`)
//! - Ordinal performance tiers (`Tier`)
//! - Grouping axes (`Dimension`)
//! - Error types (`PobError`)
//!
//! ## Ordering Guarantees
//!
//! `Tier` derives `Ord` in rank order (`Poor < NeedsImprovement < Good <
//! Excellent`), so comparisons and sorting by status need no lookup tables.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Identifier of a KPI, unique within its POB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KpiId(pub u32);

impl std::fmt::Display for KpiId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slug identifying a POB, e.g. `penjaminan-mutu-akademik`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PobId(pub String);

impl PobId {
    /// Create a new POB id from a slug.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// TIER
// =============================================================================

/// Ordinal performance tier of a KPI.
///
/// Declaration order is rank order: a later variant is always better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Poor,
    NeedsImprovement,
    Good,
    Excellent,
}

impl Tier {
    /// All tiers from worst to best.
    pub const ALL: [Tier; 4] = [
        Tier::Poor,
        Tier::NeedsImprovement,
        Tier::Good,
        Tier::Excellent,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Poor => "Poor",
            Tier::NeedsImprovement => "Needs-Improvement",
            Tier::Good => "Good",
            Tier::Excellent => "Excellent",
        }
    }

    /// Label used in the Indonesian-language seed data and narratives.
    #[must_use]
    pub fn local_label(&self) -> &'static str {
        match self {
            Tier::Poor => "Buruk",
            Tier::NeedsImprovement => "Perlu Perbaikan",
            Tier::Good => "Baik",
            Tier::Excellent => "Sangat Baik",
        }
    }

    /// Rank from 0 (Poor) to 3 (Excellent).
    #[must_use]
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Whether a KPI in this tier gets a remediation narrative.
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        matches!(self, Tier::Poor | Tier::NeedsImprovement)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Tier {
    type Err = PobError;

    /// Accepts the kebab-case wire name, the display label, or the local label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tier::ALL
            .into_iter()
            .find(|tier| {
                let wire = match tier {
                    Tier::Poor => "poor",
                    Tier::NeedsImprovement => "needs-improvement",
                    Tier::Good => "good",
                    Tier::Excellent => "excellent",
                };
                wanted.eq_ignore_ascii_case(wire)
                    || wanted.eq_ignore_ascii_case(tier.label())
                    || wanted.eq_ignore_ascii_case(tier.local_label())
            })
            .ok_or_else(|| PobError::InvalidQuery(format!("Unknown tier: {}", wanted)))
    }
}

// =============================================================================
// DIMENSION
// =============================================================================

/// Grouping axis of a KPI. Each POB uses a subset as its radar chart axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Time,
    Quality,
    Participation,
    Effectiveness,
    Automation,
    Efficiency,
    Satisfaction,
}

impl Dimension {
    /// Every known dimension.
    pub const ALL: [Dimension; 7] = [
        Dimension::Time,
        Dimension::Quality,
        Dimension::Participation,
        Dimension::Effectiveness,
        Dimension::Automation,
        Dimension::Efficiency,
        Dimension::Satisfaction,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Time => "Time",
            Dimension::Quality => "Quality",
            Dimension::Participation => "Participation",
            Dimension::Effectiveness => "Effectiveness",
            Dimension::Automation => "Automation",
            Dimension::Efficiency => "Efficiency",
            Dimension::Satisfaction => "Satisfaction",
        }
    }

    /// Label used in the seed data.
    #[must_use]
    pub fn local_label(&self) -> &'static str {
        match self {
            Dimension::Time => "Waktu",
            Dimension::Quality => "Kualitas",
            Dimension::Participation => "Partisipasi",
            Dimension::Effectiveness => "Efektivitas",
            Dimension::Automation => "Otomatisasi",
            Dimension::Efficiency => "Efisiensi",
            Dimension::Satisfaction => "Kepuasan",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Dimension {
    type Err = PobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Dimension::ALL
            .into_iter()
            .find(|d| {
                wanted.eq_ignore_ascii_case(d.label()) || wanted.eq_ignore_ascii_case(d.local_label())
            })
            .ok_or_else(|| PobError::InvalidQuery(format!("Unknown dimension: {}", wanted)))
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the POB KPI engine.
///
/// Classification itself never fails: malformed boundaries simply never
/// match. Errors come from user input and from the export/I-O edges.
#[derive(Debug, Error)]
pub enum PobError {
    /// The achievement input was empty or whitespace.
    #[error("achievement must not be empty")]
    EmptyAchievement,

    /// The achievement input has no leading number.
    #[error("achievement must be numeric: {0:?}")]
    InvalidAchievement(String),

    /// No KPI with this id exists in the POB.
    #[error("KPI not found: {0}")]
    KpiNotFound(KpiId),

    /// No POB with this slug exists in the dashboard.
    #[error("POB not found: {0}")]
    PobNotFound(String),

    /// A filter, sort or chart selector could not be understood.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// A serialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_ordering_is_rank_order() {
        assert!(Tier::Poor < Tier::NeedsImprovement);
        assert!(Tier::NeedsImprovement < Tier::Good);
        assert!(Tier::Good < Tier::Excellent);
        assert_eq!(Tier::Excellent.rank(), 3);
    }

    #[test]
    fn tier_parses_all_spellings() {
        assert_eq!("needs-improvement".parse::<Tier>().ok(), Some(Tier::NeedsImprovement));
        assert_eq!("Excellent".parse::<Tier>().ok(), Some(Tier::Excellent));
        assert_eq!("perlu perbaikan".parse::<Tier>().ok(), Some(Tier::NeedsImprovement));
        assert!("average".parse::<Tier>().is_err());
    }

    #[test]
    fn tier_serializes_kebab_case() {
        let json = serde_json::to_string(&Tier::NeedsImprovement).expect("serialize");
        assert_eq!(json, "\"needs-improvement\"");
    }

    #[test]
    fn dimension_parses_local_label() {
        assert_eq!("Kepuasan".parse::<Dimension>().ok(), Some(Dimension::Satisfaction));
        assert_eq!("time".parse::<Dimension>().ok(), Some(Dimension::Time));
    }

    #[test]
    fn attention_only_for_lower_tiers() {
        assert!(Tier::Poor.needs_attention());
        assert!(Tier::NeedsImprovement.needs_attention());
        assert!(!Tier::Good.needs_attention());
        assert!(!Tier::Excellent.needs_attention());
    }
}
