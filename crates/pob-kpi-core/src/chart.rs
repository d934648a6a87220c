//! # Chart Series
//!
//! Chart-ready data derived from classified KPIs. Only labels and values are
//! produced; presentation (colours, widths, fills) belongs to whoever draws.

use crate::kpi::Kpi;
use crate::summary::TierSummary;
use crate::types::{Dimension, Tier};
use crate::workload::{LecturerLoad, by_load_desc};
use serde::{Deserialize, Serialize};

/// Upper cap for a single KPI's normalized achievement, in percent.
pub const KPI_PERCENT_CAP: f64 = 150.0;

/// Upper cap for a radar axis value, in percent.
pub const AXIS_PERCENT_CAP: u32 = 100;

/// Target value drawn on every radar axis.
pub const RADAR_TARGET: u32 = 100;

/// One named series of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub data: Vec<u32>,
}

/// Labels plus one or more series aligned with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

/// Distribution of KPIs across tiers, worst first.
#[must_use]
pub fn tier_distribution(summary: &TierSummary) -> ChartData {
    ChartData {
        labels: Tier::ALL.iter().map(|t| t.label().to_string()).collect(),
        series: vec![Series {
            label: "KPIs".to_string(),
            data: Tier::ALL
                .iter()
                .map(|t| summary.count(*t) as u32)
                .collect(),
        }],
    }
}

/// Achievement against target per dimension.
///
/// Each KPI is normalized to a percentage of its target (inverted when lower
/// is better) and capped at [`KPI_PERCENT_CAP`]. An axis is the rounded mean
/// of its KPIs capped at [`AXIS_PERCENT_CAP`]; an axis with no KPIs is 0.
#[must_use]
pub fn achievement_radar<'a>(
    dimensions: &[Dimension],
    kpis: impl IntoIterator<Item = &'a Kpi>,
) -> ChartData {
    let kpis: Vec<&Kpi> = kpis.into_iter().collect();

    let achieved = dimensions
        .iter()
        .map(|dimension| {
            let values: Vec<f64> = kpis
                .iter()
                .filter(|k| k.dimension == *dimension)
                .map(|k| normalized_percent(k))
                .collect();
            if values.is_empty() {
                return 0;
            }
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            (mean.round() as u32).min(AXIS_PERCENT_CAP)
        })
        .collect();

    ChartData {
        labels: dimensions.iter().map(|d| d.label().to_string()).collect(),
        series: vec![
            Series {
                label: "Target".to_string(),
                data: vec![RADAR_TARGET; dimensions.len()],
            },
            Series {
                label: "Achievement".to_string(),
                data: achieved,
            },
        ],
    }
}

/// A KPI's achievement as a percentage of its target, in `[0, KPI_PERCENT_CAP]`.
///
/// Unreadable values and a zero target count as 0; a zero achievement on a
/// lower-is-better KPI counts as the cap.
#[must_use]
pub fn normalized_percent(kpi: &Kpi) -> f64 {
    let achievement = kpi.achievement_value();
    let Some(target) = kpi.target_value() else {
        return 0.0;
    };
    if !achievement.is_finite() || target == 0.0 {
        return 0.0;
    }

    let ratio = if kpi.higher_is_better {
        achievement / target * 100.0
    } else if achievement == 0.0 {
        KPI_PERCENT_CAP
    } else {
        target / achievement * 100.0
    };
    ratio.clamp(0.0, KPI_PERCENT_CAP)
}

/// Credit load and course count per lecturer, heaviest load first.
#[must_use]
pub fn workload_bars(loads: &[LecturerLoad]) -> ChartData {
    let sorted = by_load_desc(loads);
    ChartData {
        labels: sorted.iter().map(|l| l.lecturer.clone()).collect(),
        series: vec![
            Series {
                label: "credits".to_string(),
                data: sorted.iter().map(|l| l.credits).collect(),
            },
            Series {
                label: "courses".to_string(),
                data: sorted.iter().map(|l| l.courses).collect(),
            },
        ],
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kpi::KpiSeed;

    fn kpi(
        dimension: Dimension,
        target: &'static str,
        achievement: &'static str,
        higher_is_better: bool,
    ) -> Kpi {
        Kpi::from_seed(&KpiSeed {
            id: 1,
            name: "k",
            description: "",
            target,
            achievement,
            unit: "",
            boundaries: ["< 1", "1-2", "2-3", "≥ 3"],
            dimension,
            measurement_method: "",
            higher_is_better,
        })
    }

    #[test]
    fn distribution_follows_tier_order() {
        let summary = TierSummary::from_tiers([Tier::Good, Tier::Poor, Tier::Good]);
        let chart = tier_distribution(&summary);
        assert_eq!(
            chart.labels,
            vec!["Poor", "Needs-Improvement", "Good", "Excellent"]
        );
        assert_eq!(chart.series[0].data, vec![1, 0, 2, 0]);
    }

    #[test]
    fn normalization_inverts_lower_is_better() {
        assert_eq!(normalized_percent(&kpi(Dimension::Time, "7", "14", false)), 50.0);
        assert_eq!(normalized_percent(&kpi(Dimension::Time, "80", "40", true)), 50.0);
    }

    #[test]
    fn normalization_caps_and_guards_zero() {
        assert_eq!(
            normalized_percent(&kpi(Dimension::Time, "30", "1", false)),
            KPI_PERCENT_CAP
        );
        assert_eq!(
            normalized_percent(&kpi(Dimension::Time, "3", "0", false)),
            KPI_PERCENT_CAP
        );
        assert_eq!(normalized_percent(&kpi(Dimension::Time, "0", "5", true)), 0.0);
    }

    #[test]
    fn radar_axis_is_capped_mean_and_empty_is_zero() {
        let kpis = vec![
            kpi(Dimension::Quality, "80", "40", true),
            kpi(Dimension::Quality, "80", "80", true),
            kpi(Dimension::Time, "10", "1", false),
        ];
        let chart = achievement_radar(
            &[Dimension::Time, Dimension::Quality, Dimension::Automation],
            &kpis,
        );
        assert_eq!(chart.labels, vec!["Time", "Quality", "Automation"]);
        assert_eq!(chart.series[0].data, vec![100, 100, 100]);
        assert_eq!(chart.series[1].data, vec![100, 75, 0]);
    }

    #[test]
    fn workload_bars_are_sorted() {
        let loads = vec![LecturerLoad::new("A", 6, 2), LecturerLoad::new("B", 18, 5)];
        let chart = workload_bars(&loads);
        assert_eq!(chart.labels, vec!["B", "A"]);
        assert_eq!(chart.series[0].data, vec![18, 6]);
        assert_eq!(chart.series[1].data, vec![5, 2]);
    }
}
