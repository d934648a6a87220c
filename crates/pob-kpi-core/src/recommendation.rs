//! # Recommendations
//!
//! Every KPI in a tier that needs attention (Poor or Needs-Improvement) gets a
//! remediation narrative. The POB's template table is searched by KPI id;
//! without a template a generic narrative is written from the KPI name and
//! tier.

use crate::kpi::Kpi;
use crate::types::{KpiId, Tier};
use serde::{Deserialize, Serialize};

/// A hand-written remediation narrative for one KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationTemplate {
    pub kpi_id: u32,
    pub text: &'static str,
}

/// Where a recommendation's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Template,
    Generic,
}

/// Remediation narrative attached to a KPI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kpi_id: KpiId,
    pub kpi_name: String,
    /// The KPI's current tier, not the tier the template was written for.
    pub status: Tier,
    pub recommendation: String,
    pub source: RecommendationSource,
}

/// Build recommendations for every KPI that needs attention, in input order.
#[must_use]
pub fn recommend<'a>(
    kpis: impl IntoIterator<Item = &'a Kpi>,
    templates: &[RecommendationTemplate],
) -> Vec<Recommendation> {
    kpis.into_iter()
        .filter(|kpi| kpi.status().needs_attention())
        .map(|kpi| recommend_one(kpi, templates))
        .collect()
}

fn recommend_one(kpi: &Kpi, templates: &[RecommendationTemplate]) -> Recommendation {
    let template = templates.iter().find(|t| t.kpi_id == kpi.id.0);

    let (recommendation, source) = match template {
        Some(t) => (t.text.to_string(), RecommendationSource::Template),
        None => (
            generic_text(&kpi.name, kpi.status()),
            RecommendationSource::Generic,
        ),
    };

    Recommendation {
        kpi_id: kpi.id,
        kpi_name: kpi.name.clone(),
        status: kpi.status(),
        recommendation,
        source,
    }
}

/// Generic narrative for a KPI without a template.
#[must_use]
pub fn generic_text(kpi_name: &str, tier: Tier) -> String {
    match tier {
        Tier::Poor => format!(
            "Perlu perhatian segera pada KPI \"{}\" yang saat ini berada di tingkat {}. \
             Analisis faktor-faktor yang mempengaruhi pencapaian saat ini dan terapkan \
             langkah perbaikan yang komprehensif.",
            kpi_name,
            tier.local_label()
        ),
        _ => format!(
            "Evaluasi metode yang digunakan untuk mencapai target KPI \"{}\" (tingkat {}). \
             Identifikasi hambatan dan implementasikan strategi untuk mencapai target.",
            kpi_name,
            tier.local_label()
        ),
    }
}

// =============================================================================
// TESTS
// =============================================================================
