//! # Scorecard Module
//!
//! A [`Scorecard`] owns one POB's KPIs. It is the only place KPI records are
//! mutated, and every mutation goes through [`Kpi::set_achievement`], so the
//! status of each record always matches its achievement.
//!
//! A [`Dashboard`] holds every scorecard keyed by slug.

use crate::catalog::{CATALOG, PobSeed};
use crate::chart::{ChartData, achievement_radar, tier_distribution, workload_bars};
use crate::kpi::Kpi;
use crate::recommendation::{Recommendation, RecommendationTemplate, recommend};
use crate::summary::TierSummary;
use crate::types::{Dimension, KpiId, PobError, PobId};
use crate::view::{KpiFilter, KpiSort, view};
use crate::workload::{LecturerLoad, variation_coefficient};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// CHART KIND
// =============================================================================

/// Which chart to derive from a scorecard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Tier distribution.
    Pie,
    /// Achievement per dimension.
    Radar,
    /// Lecturer credit load.
    Workload,
}

impl std::str::FromStr for ChartKind {
    type Err = PobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pie" => Ok(Self::Pie),
            "radar" => Ok(Self::Radar),
            "workload" => Ok(Self::Workload),
            other => Err(PobError::InvalidQuery(format!(
                "Unknown chart kind: {}. Use: pie, radar, workload",
                other
            ))),
        }
    }
}

// =============================================================================
// SCORECARD
// =============================================================================

/// One POB and its KPIs.
#[derive(Debug, Clone)]
pub struct Scorecard {
    id: PobId,
    title: String,
    description: String,
    dimensions: Vec<Dimension>,
    kpis: Vec<Kpi>,
    templates: Vec<RecommendationTemplate>,
    workload: Vec<LecturerLoad>,
}

impl Scorecard {
    /// Build a scorecard from a catalog seed. Every status is computed here.
    #[must_use]
    pub fn from_seed(seed: &PobSeed) -> Self {
        Self {
            id: PobId::new(seed.slug),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            dimensions: seed.dimensions.to_vec(),
            kpis: seed.kpis.iter().map(Kpi::from_seed).collect(),
            templates: seed.templates.to_vec(),
            workload: seed
                .workload
                .iter()
                .map(|(lecturer, credits, courses)| LecturerLoad::new(*lecturer, *credits, *courses))
                .collect(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &PobId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Radar axes, in display order.
    #[must_use]
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// All KPIs, in id order.
    #[must_use]
    pub fn kpis(&self) -> &[Kpi] {
        &self.kpis
    }

    /// Lecturer workload table. Empty for POBs without one.
    #[must_use]
    pub fn workload(&self) -> &[LecturerLoad] {
        &self.workload
    }

    /// Look up a KPI by id.
    pub fn get(&self, id: KpiId) -> Result<&Kpi, PobError> {
        self.kpis
            .iter()
            .find(|k| k.id == id)
            .ok_or(PobError::KpiNotFound(id))
    }

    /// Replace a KPI's achievement and recompute its status.
    ///
    /// Invalid input leaves the scorecard untouched.
    pub fn update_achievement(&mut self, id: KpiId, input: &str) -> Result<&Kpi, PobError> {
        let kpi = self
            .kpis
            .iter_mut()
            .find(|k| k.id == id)
            .ok_or(PobError::KpiNotFound(id))?;
        kpi.set_achievement(input)?;
        Ok(kpi)
    }

    #[must_use]
    pub fn summary(&self) -> TierSummary {
        TierSummary::from_kpis(&self.kpis)
    }

    /// Remediation narratives for every KPI that needs attention.
    #[must_use]
    pub fn recommendations(&self) -> Vec<Recommendation> {
        recommend(&self.kpis, &self.templates)
    }

    /// Filtered and sorted KPIs.
    #[must_use]
    pub fn view(&self, filter: &KpiFilter, sort: &KpiSort) -> Vec<&Kpi> {
        view(&self.kpis, filter, sort)
    }

    /// Chart series of the given kind, drawn from the KPIs the filter keeps.
    ///
    /// The workload chart does not depend on KPIs and ignores the filter.
    #[must_use]
    pub fn chart(&self, kind: ChartKind, filter: &KpiFilter) -> ChartData {
        let selected = self.kpis.iter().filter(|k| filter.matches(k));
        match kind {
            ChartKind::Pie => tier_distribution(&TierSummary::from_kpis(selected)),
            ChartKind::Radar => achievement_radar(&self.dimensions, selected),
            ChartKind::Workload => workload_bars(&self.workload),
        }
    }

    /// Coefficient of variation of the workload table, if the POB has one.
    #[must_use]
    pub fn workload_variation(&self) -> Option<f64> {
        if self.workload.is_empty() {
            None
        } else {
            Some(variation_coefficient(&self.workload))
        }
    }
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Every POB scorecard, keyed by slug.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    scorecards: BTreeMap<PobId, Scorecard>,
}

impl Dashboard {
    /// Create an empty dashboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dashboard with every bundled POB.
    #[must_use]
    pub fn seeded() -> Self {
        let mut dashboard = Self::new();
        for seed in &CATALOG {
            dashboard.insert(Scorecard::from_seed(seed));
        }
        dashboard
    }

    /// Add or replace a scorecard.
    pub fn insert(&mut self, scorecard: Scorecard) {
        self.scorecards.insert(scorecard.id.clone(), scorecard);
    }

    pub fn get(&self, slug: &str) -> Result<&Scorecard, PobError> {
        self.scorecards
            .get(&PobId::new(slug))
            .ok_or_else(|| PobError::PobNotFound(slug.to_string()))
    }

    pub fn get_mut(&mut self, slug: &str) -> Result<&mut Scorecard, PobError> {
        self.scorecards
            .get_mut(&PobId::new(slug))
            .ok_or_else(|| PobError::PobNotFound(slug.to_string()))
    }

    /// Scorecards in slug order.
    pub fn scorecards(&self) -> impl Iterator<Item = &Scorecard> {
        self.scorecards.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scorecards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scorecards.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LECTURER_ASSIGNMENT, QUALITY_ASSURANCE};
    use crate::types::Tier;

    #[test]
    fn update_recomputes_status() {
        let mut card = Scorecard::from_seed(&LECTURER_ASSIGNMENT);
        let kpi = card.update_achievement(KpiId(1), "50").expect("update");
        assert_eq!(kpi.status(), Tier::Poor);
        assert_eq!(kpi.achievement(), "50");

        let kpi = card.update_achievement(KpiId(1), "20").expect("update");
        assert_eq!(kpi.status(), Tier::Excellent);
    }

    #[test]
    fn invalid_update_leaves_record_untouched() {
        let mut card = Scorecard::from_seed(&LECTURER_ASSIGNMENT);
        let before = card.get(KpiId(3)).expect("kpi").clone();

        assert!(matches!(
            card.update_achievement(KpiId(3), "  "),
            Err(PobError::EmptyAchievement)
        ));
        assert!(matches!(
            card.update_achievement(KpiId(3), "banyak"),
            Err(PobError::InvalidAchievement(_))
        ));
        assert_eq!(card.get(KpiId(3)).expect("kpi"), &before);
    }

    #[test]
    fn unknown_kpi_is_not_found() {
        let mut card = Scorecard::from_seed(&QUALITY_ASSURANCE);
        assert!(matches!(card.get(KpiId(99)), Err(PobError::KpiNotFound(KpiId(99)))));
        assert!(matches!(
            card.update_achievement(KpiId(99), "1"),
            Err(PobError::KpiNotFound(_))
        ));
    }

    #[test]
    fn summary_follows_updates() {
        let mut card = Scorecard::from_seed(&QUALITY_ASSURANCE);
        assert_eq!(card.summary().excellent, 0);
        card.update_achievement(KpiId(3), "95").expect("update");
        assert_eq!(card.summary().excellent, 1);
    }

    #[test]
    fn charts_follow_the_filter() {
        let card = Scorecard::from_seed(&QUALITY_ASSURANCE);

        let all = card.chart(ChartKind::Pie, &KpiFilter::default());
        assert_eq!(all.series[0].data.iter().sum::<u32>(), 15);

        let quality = KpiFilter {
            dimension: Some(Dimension::Quality),
            tier: None,
        };
        let pie = card.chart(ChartKind::Pie, &quality);
        assert_eq!(pie.series[0].data.iter().sum::<u32>(), 4);

        let radar = card.chart(ChartKind::Radar, &quality);
        let time_axis = radar
            .labels
            .iter()
            .position(|l| l == "Time")
            .expect("time axis");
        assert_eq!(radar.series[1].data[time_axis], 0);
        assert_eq!(radar.labels.len(), card.dimensions().len());
    }

    #[test]
    fn workload_variation_only_with_table() {
        assert!(Scorecard::from_seed(&QUALITY_ASSURANCE).workload_variation().is_none());
        let cv = Scorecard::from_seed(&LECTURER_ASSIGNMENT)
            .workload_variation()
            .expect("table");
        assert!((cv - 0.292).abs() < 0.001);
    }

    #[test]
    fn dashboard_lookup() {
        let mut dashboard = Dashboard::seeded();
        assert_eq!(dashboard.len(), 2);
        assert!(dashboard.get("penjaminan-mutu-akademik").is_ok());
        assert!(matches!(
            dashboard.get_mut("nope"),
            Err(PobError::PobNotFound(slug)) if slug == "nope"
        ));
        let slugs: Vec<&str> = dashboard.scorecards().map(|c| c.id().as_str()).collect();
        assert_eq!(slugs, vec!["penentuan-dosen-pengampu", "penjaminan-mutu-akademik"]);
    }

    #[test]
    fn chart_kind_parsing() {
        assert_eq!("Radar".parse::<ChartKind>().ok(), Some(ChartKind::Radar));
        assert!("bar".parse::<ChartKind>().is_err());
    }
}
