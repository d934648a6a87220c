//! # Classification Tier Tests (T0-T3)
//!
//! End-to-end checks over the bundled catalog.
//!
//! ## Tiers
//! - T0: Boundary Parsing
//! - T1: Single-KPI Classification
//! - T2: Seed Catalog Statuses
//! - T3: Edit Round Trips

use pob_kpi_core::{
    Boundary, ChartKind, Dashboard, KpiFilter, KpiId, KpiSort, PobError, RecommendationSource,
    SortDirection, SortField, Tier, TierBoundaries, classify, export_csv,
};

const QUALITY_ASSURANCE: &str = "penjaminan-mutu-akademik";
const LECTURER_ASSIGNMENT: &str = "penentuan-dosen-pengampu";

// =============================================================================
// TIER T0: BOUNDARY PARSING
// =============================================================================

mod t0_boundary_parsing {
    use super::*;

    /// T0.1: Comparators and units.
    #[test]
    fn comparators_with_units() {
        assert_eq!(Boundary::parse("> 45 hari"), Boundary::Above { min: 45.0 });
        assert_eq!(Boundary::parse("≤ 20 hari"), Boundary::Below { max: 20.0 });
        assert_eq!(
            Boundary::parse("31-45 hari"),
            Boundary::Between { min: 31.0, max: 45.0 }
        );
    }

    /// T0.2: Decimal spans.
    #[test]
    fn decimal_spans() {
        assert_eq!(
            Boundary::parse("0.31-0.40"),
            Boundary::Between { min: 0.31, max: 0.40 }
        );
        assert_eq!(
            Boundary::parse("3.0-3.49"),
            Boundary::Between { min: 3.0, max: 3.49 }
        );
    }

    /// T0.3: Unreadable text is malformed, not an error.
    #[test]
    fn unreadable_is_malformed() {
        assert!(Boundary::parse("tidak ada").is_malformed());
        assert!(Boundary::parse("").is_malformed());
    }
}

// =============================================================================
// TIER T1: SINGLE-KPI CLASSIFICATION
// =============================================================================

mod t1_single_kpi {
    use super::*;

    /// T1.1: Lower is better, inside the Good span.
    #[test]
    fn turnaround_days() {
        let b = TierBoundaries::parse("> 45", "31-45", "21-30", "≤ 20");
        assert_eq!(classify(28.0, &b, false), Tier::Good);
    }

    /// T1.2: Higher is better, inside the Needs-Improvement span.
    #[test]
    fn matching_accuracy() {
        let b = TierBoundaries::parse("< 70%", "70-84%", "85-94%", "≥ 95%");
        assert_eq!(classify(82.0, &b, true), Tier::NeedsImprovement);
    }

    /// T1.3: Values between integer spans take the lower span.
    #[test]
    fn gaps_between_spans() {
        let b = TierBoundaries::parse("< 70%", "70-84%", "85-94%", "≥ 95%");
        assert_eq!(classify(84.5, &b, true), Tier::NeedsImprovement);
        assert_eq!(classify(94.5, &b, true), Tier::Good);
    }

    /// T1.4: Malformed boundaries degrade toward Poor.
    #[test]
    fn all_malformed_is_poor() {
        let b = TierBoundaries::parse("?", "?", "?", "?");
        assert_eq!(classify(50.0, &b, true), Tier::Poor);
        assert_eq!(classify(50.0, &b, false), Tier::Poor);
    }
}

// =============================================================================
// TIER T2: SEED CATALOG STATUSES
// =============================================================================

mod t2_seed_catalog {
    use super::*;

    fn statuses(slug: &str) -> Vec<(u32, Tier)> {
        let dashboard = Dashboard::seeded();
        dashboard
            .get(slug)
            .expect("pob")
            .kpis()
            .iter()
            .map(|k| (k.id.0, k.status()))
            .collect()
    }

    /// T2.1: Quality assurance statuses computed at load.
    #[test]
    fn quality_assurance_statuses() {
        use Tier::{Good, NeedsImprovement};
        let expected = vec![
            (1, Good),
            (2, NeedsImprovement),
            (3, Good),
            (4, Good),
            (5, Good),
            (6, Good),
            (7, Good),
            (8, NeedsImprovement),
            (9, Good),
            (10, Good),
            (11, Good),
            (12, Good),
            (13, NeedsImprovement),
            (14, Good),
            (15, Good),
        ];
        assert_eq!(statuses(QUALITY_ASSURANCE), expected);
    }

    /// T2.2: Lecturer assignment statuses computed at load.
    #[test]
    fn lecturer_assignment_statuses() {
        use Tier::{Excellent, Good, NeedsImprovement};
        let expected = vec![
            (1, Good),
            (2, NeedsImprovement),
            (3, NeedsImprovement),
            // 4.5 days sits between the 2-4 and 5-7 spans
            (4, NeedsImprovement),
            (5, Good),
            (6, NeedsImprovement),
            (7, NeedsImprovement),
            (8, NeedsImprovement),
            (9, Good),
            (10, Excellent),
            (11, Good),
            (12, Good),
        ];
        assert_eq!(statuses(LECTURER_ASSIGNMENT), expected);
    }

    /// T2.3: Summary counts and rounded percentages.
    #[test]
    fn lecturer_assignment_summary() {
        let dashboard = Dashboard::seeded();
        let summary = dashboard.get(LECTURER_ASSIGNMENT).expect("pob").summary();
        assert_eq!(summary.total, 12);
        assert_eq!(
            (summary.poor, summary.needs_improvement, summary.good, summary.excellent),
            (0, 6, 5, 1)
        );
        assert_eq!(summary.needs_improvement_percent, 50);
        assert_eq!(summary.good_percent, 42);
        assert_eq!(summary.excellent_percent, 8);
    }

    /// T2.4: Templates where present, generic text otherwise.
    #[test]
    fn lecturer_assignment_recommendations() {
        let dashboard = Dashboard::seeded();
        let recs = dashboard
            .get(LECTURER_ASSIGNMENT)
            .expect("pob")
            .recommendations();
        let sources: Vec<(u32, RecommendationSource)> =
            recs.iter().map(|r| (r.kpi_id.0, r.source)).collect();
        assert_eq!(
            sources,
            vec![
                (2, RecommendationSource::Template),
                (3, RecommendationSource::Template),
                (4, RecommendationSource::Generic),
                (6, RecommendationSource::Template),
                (7, RecommendationSource::Template),
                (8, RecommendationSource::Template),
            ]
        );
    }

    /// T2.5: Radar axes follow the POB's dimensions.
    #[test]
    fn radar_axes() {
        let dashboard = Dashboard::seeded();
        let chart = dashboard
            .get(LECTURER_ASSIGNMENT)
            .expect("pob")
            .chart(ChartKind::Radar, &KpiFilter::default());
        assert_eq!(
            chart.labels,
            vec!["Time", "Quality", "Efficiency", "Satisfaction"]
        );
        assert!(chart.series[1].data.iter().all(|v| *v <= 100));
    }
}

// =============================================================================
// TIER T3: EDIT ROUND TRIPS
// =============================================================================

mod t3_edit_round_trips {
    use super::*;

    /// T3.1: An edit moves the KPI and the summary together.
    #[test]
    fn edit_updates_status_and_summary() {
        let mut dashboard = Dashboard::seeded();
        let card = dashboard.get_mut(LECTURER_ASSIGNMENT).expect("pob");

        let kpi = card.update_achievement(KpiId(4), "1").expect("update");
        assert_eq!(kpi.status(), Tier::Excellent);
        assert_eq!(card.summary().excellent, 2);

        let kpi = card.update_achievement(KpiId(4), "9 hari").expect("update");
        assert_eq!(kpi.status(), Tier::Poor);
        assert_eq!(kpi.achievement(), "9");
        assert_eq!(kpi.formatted_achievement(), "9 hari");
        assert_eq!(card.summary().poor, 1);
    }

    /// T3.2: Rejected edits change nothing.
    #[test]
    fn rejected_edit_is_a_no_op() {
        let mut dashboard = Dashboard::seeded();
        let card = dashboard.get_mut(QUALITY_ASSURANCE).expect("pob");
        let before = card.summary();

        assert!(matches!(
            card.update_achievement(KpiId(1), ""),
            Err(PobError::EmptyAchievement)
        ));
        assert!(matches!(
            card.update_achievement(KpiId(1), "cepat"),
            Err(PobError::InvalidAchievement(_))
        ));
        assert_eq!(card.summary(), before);
    }

    /// T3.3: Leaving the attention tiers drops the recommendation.
    #[test]
    fn fixing_a_kpi_drops_its_recommendation() {
        let mut dashboard = Dashboard::seeded();
        let card = dashboard.get_mut(QUALITY_ASSURANCE).expect("pob");
        assert_eq!(card.recommendations().len(), 3);

        card.update_achievement(KpiId(13), "80").expect("update");
        let ids: Vec<u32> = card.recommendations().iter().map(|r| r.kpi_id.0).collect();
        assert_eq!(ids, vec![2, 8]);
    }

    /// T3.4: Export reflects the filtered view after an edit.
    #[test]
    fn export_after_edit() {
        let mut dashboard = Dashboard::seeded();
        let card = dashboard.get_mut(QUALITY_ASSURANCE).expect("pob");
        card.update_achievement(KpiId(3), "95").expect("update");

        let filter = KpiFilter {
            dimension: None,
            tier: Some(Tier::Excellent),
        };
        let sort = KpiSort {
            field: SortField::Id,
            direction: SortDirection::Asc,
        };
        let rows = card.view(&filter, &sort);
        let csv = String::from_utf8(export_csv(rows).expect("export")).expect("utf8");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("3,Tingkat Kelengkapan Data,"));
        assert!(lines[1].ends_with(",95,%,Excellent"));
    }
}
