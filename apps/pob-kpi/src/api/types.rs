//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.
//!
//! Every response carries `success` and, on failure, `error`. KPI records go
//! out as [`KpiJson`]; the core `Kpi` never comes back in.

use pob_kpi_core::{
    ChartData, ChartKind, KpiFilter, KpiSort, Kpi, PobError, Recommendation, Scorecard, Tier,
    TierBoundaries, TierSummary, parse_achievement,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// POB LIST
// =============================================================================

/// One POB in the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PobInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kpi_count: usize,
    pub dimensions: Vec<String>,
}

impl From<&Scorecard> for PobInfo {
    fn from(card: &Scorecard) -> Self {
        Self {
            id: card.id().to_string(),
            title: card.title().to_string(),
            description: card.description().to_string(),
            kpi_count: card.kpis().len(),
            dimensions: card
                .dimensions()
                .iter()
                .map(|d| d.label().to_string())
                .collect(),
        }
    }
}

/// POB list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PobListResponse {
    pub success: bool,
    pub pobs: Vec<PobInfo>,
}

// =============================================================================
// KPI RECORD
// =============================================================================

/// Boundary text per tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundariesJson {
    pub poor: String,
    pub needs_improvement: String,
    pub good: String,
    pub excellent: String,
}

impl From<&TierBoundaries> for BoundariesJson {
    fn from(b: &TierBoundaries) -> Self {
        Self {
            poor: b.poor.text.clone(),
            needs_improvement: b.needs_improvement.text.clone(),
            good: b.good.text.clone(),
            excellent: b.excellent.text.clone(),
        }
    }
}

/// KPI JSON representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiJson {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub dimension: String,
    pub target: String,
    pub achievement: String,
    pub unit: String,
    pub boundaries: BoundariesJson,
    pub measurement_method: String,
    pub higher_is_better: bool,
    pub status: Tier,
    pub status_label: String,
}

impl From<&Kpi> for KpiJson {
    fn from(kpi: &Kpi) -> Self {
        Self {
            id: kpi.id.0,
            name: kpi.name.clone(),
            description: kpi.description.clone(),
            dimension: kpi.dimension.label().to_string(),
            target: kpi.target.clone(),
            achievement: kpi.achievement().to_string(),
            unit: kpi.unit.clone(),
            boundaries: BoundariesJson::from(&kpi.boundaries),
            measurement_method: kpi.measurement_method.clone(),
            higher_is_better: kpi.higher_is_better,
            status: kpi.status(),
            status_label: kpi.status().label().to_string(),
        }
    }
}

/// Query parameters of the KPI list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KpiQuery {
    pub dimension: Option<String>,
    pub tier: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl KpiQuery {
    /// Parse the selectors into a filter and a sort.
    pub fn to_view(&self) -> Result<(KpiFilter, KpiSort), PobError> {
        let filter = KpiFilter::parse(self.dimension.as_deref(), self.tier.as_deref())?;
        let sort = KpiSort::parse(self.sort.as_deref(), self.direction.as_deref())?;
        Ok((filter, sort))
    }
}

/// KPI list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiListResponse {
    pub success: bool,
    pub pob: Option<String>,
    pub kpis: Vec<KpiJson>,
    pub error: Option<String>,
}

impl KpiListResponse {
    pub fn success(pob: &str, kpis: &[&Kpi]) -> Self {
        Self {
            success: true,
            pob: Some(pob.to_string()),
            kpis: kpis.iter().map(|k| KpiJson::from(*k)).collect(),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            pob: None,
            kpis: vec![],
            error: Some(msg.into()),
        }
    }
}

/// Single KPI response. After an edit it also carries the new summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiResponse {
    pub success: bool,
    pub kpi: Option<KpiJson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<TierSummary>,
    pub error: Option<String>,
}

impl KpiResponse {
    pub fn success(kpi: &Kpi) -> Self {
        Self {
            success: true,
            kpi: Some(KpiJson::from(kpi)),
            summary: None,
            error: None,
        }
    }

    pub fn updated(kpi: &Kpi, summary: TierSummary) -> Self {
        Self {
            summary: Some(summary),
            ..Self::success(kpi)
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            kpi: None,
            summary: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// ACHIEVEMENT EDIT
// =============================================================================

/// Achievement value as sent by a client: text or a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AchievementInput {
    Number(f64),
    Text(String),
    /// `null`, booleans, arrays and objects. Never numeric.
    Other(serde_json::Value),
}

impl AchievementInput {
    /// Text form handed to the core validator. `85.0` becomes `"85"`.
    pub fn to_text(&self) -> Result<String, PobError> {
        match self {
            Self::Number(n) => Ok(n.to_string()),
            Self::Text(s) => Ok(s.clone()),
            Self::Other(value) => Err(PobError::InvalidAchievement(value.to_string())),
        }
    }
}

/// Achievement edit request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAchievementRequest {
    pub achievement: AchievementInput,
}

// =============================================================================
// SUMMARY / RECOMMENDATIONS / CHARTS
// =============================================================================

/// Tier summary response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub success: bool,
    pub pob: Option<String>,
    pub summary: Option<TierSummary>,
    /// Coefficient of variation of lecturer credit loads, when the POB has a workload table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workload_variation: Option<f64>,
    pub error: Option<String>,
}

impl SummaryResponse {
    pub fn success(card: &Scorecard) -> Self {
        Self {
            success: true,
            pob: Some(card.id().to_string()),
            summary: Some(card.summary()),
            workload_variation: card.workload_variation(),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            pob: None,
            summary: None,
            workload_variation: None,
            error: Some(msg.into()),
        }
    }
}

/// Recommendations response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    pub recommendations: Vec<Recommendation>,
    pub error: Option<String>,
}

impl RecommendationsResponse {
    pub fn success(recommendations: Vec<Recommendation>) -> Self {
        Self {
            success: true,
            recommendations,
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            recommendations: vec![],
            error: Some(msg.into()),
        }
    }
}

/// Query parameters of a chart. Both selectors are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartQuery {
    pub dimension: Option<String>,
    pub tier: Option<String>,
}

impl ChartQuery {
    pub fn to_filter(&self) -> Result<KpiFilter, PobError> {
        KpiFilter::parse(self.dimension.as_deref(), self.tier.as_deref())
    }
}

/// Chart series response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResponse {
    pub success: bool,
    pub kind: Option<ChartKind>,
    pub chart: Option<ChartData>,
    pub error: Option<String>,
}

impl ChartResponse {
    pub fn success(kind: ChartKind, chart: ChartData) -> Self {
        Self {
            success: true,
            kind: Some(kind),
            chart: Some(chart),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            kind: None,
            chart: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// EXPORT REQUEST/RESPONSE
// =============================================================================

/// Export request. Both selectors are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub dimension: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
}

impl ExportRequest {
    pub fn to_filter(&self) -> Result<KpiFilter, PobError> {
        KpiFilter::parse(self.dimension.as_deref(), self.tier.as_deref())
    }
}

/// Export response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    pub success: bool,
    pub data: Option<String>, // Base64 encoded CSV
    pub rows: Option<usize>,
    pub error: Option<String>,
}

impl ExportResponse {
    pub fn success(data: Vec<u8>, rows: usize) -> Self {
        Self {
            success: true,
            data: Some(base64::Engine::encode(
                &base64::engine::general_purpose::STANDARD,
                &data,
            )),
            rows: Some(rows),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            rows: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// CLASSIFY REQUEST/RESPONSE
// =============================================================================

fn default_higher_is_better() -> bool {
    true
}

/// Ad-hoc classification request. Boundaries are listed worst tier first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub boundaries: [String; 4],
    pub achievement: AchievementInput,
    #[serde(default = "default_higher_is_better")]
    pub higher_is_better: bool,
}

impl ClassifyRequest {
    /// Validate the achievement and classify it.
    pub fn classify(&self) -> Result<Tier, PobError> {
        let value = parse_achievement(&self.achievement.to_text()?)?;
        let [poor, needs_improvement, good, excellent] = &self.boundaries;
        let boundaries = TierBoundaries::parse(poor, needs_improvement, good, excellent);
        Ok(pob_kpi_core::classify(
            value,
            &boundaries,
            self.higher_is_better,
        ))
    }
}

/// Ad-hoc classification response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub success: bool,
    pub tier: Option<Tier>,
    pub label: Option<String>,
    pub error: Option<String>,
}

impl ClassifyResponse {
    pub fn success(tier: Tier) -> Self {
        Self {
            success: true,
            tier: Some(tier),
            label: Some(tier.label().to_string()),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            tier: None,
            label: None,
            error: Some(msg.into()),
        }
    }
}
