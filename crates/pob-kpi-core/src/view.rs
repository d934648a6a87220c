//! # Filtered and Sorted Views
//!
//! Read-only projections of a KPI list: conjunctive filtering by dimension
//! and tier, then a stable sort on one column.

use crate::kpi::Kpi;
use crate::types::{Dimension, PobError, Tier};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// =============================================================================
// FILTER
// =============================================================================

/// Filter criteria. `None` matches everything; both criteria must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KpiFilter {
    pub dimension: Option<Dimension>,
    pub tier: Option<Tier>,
}

impl KpiFilter {
    /// Build a filter from optional text selectors. Blank text means "any".
    pub fn parse(dimension: Option<&str>, tier: Option<&str>) -> Result<Self, PobError> {
        Ok(Self {
            dimension: non_blank(dimension).map(str::parse::<Dimension>).transpose()?,
            tier: non_blank(tier).map(str::parse::<Tier>).transpose()?,
        })
    }

    /// Check if a KPI passes the filter.
    #[must_use]
    pub fn matches(&self, kpi: &Kpi) -> bool {
        self.dimension.is_none_or(|d| kpi.dimension == d)
            && self.tier.is_none_or(|t| kpi.status() == t)
    }
}

// =============================================================================
// SORT
// =============================================================================

/// Sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Id,
    Name,
    Dimension,
    Target,
    Achievement,
    Status,
}

impl std::str::FromStr for SortField {
    type Err = PobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "dimension" => Ok(Self::Dimension),
            "target" => Ok(Self::Target),
            "achievement" => Ok(Self::Achievement),
            "status" | "tier" => Ok(Self::Status),
            other => Err(PobError::InvalidQuery(format!(
                "Unknown sort field: {}. Use: id, name, dimension, target, achievement, status",
                other
            ))),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl std::str::FromStr for SortDirection {
    type Err = PobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(PobError::InvalidQuery(format!(
                "Unknown sort direction: {}. Use: asc, desc",
                other
            ))),
        }
    }
}

/// Sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KpiSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl KpiSort {
    /// Build a sort from optional text selectors, defaulting to id ascending.
    pub fn parse(field: Option<&str>, direction: Option<&str>) -> Result<Self, PobError> {
        Ok(Self {
            field: non_blank(field).map(str::parse::<SortField>).transpose()?.unwrap_or_default(),
            direction: non_blank(direction)
                .map(str::parse::<SortDirection>)
                .transpose()?
                .unwrap_or_default(),
        })
    }

    /// Compare two KPIs on the chosen column.
    ///
    /// Numeric columns fall back to text comparison when either side does
    /// not parse. Equal keys fall back to id order.
    #[must_use]
    pub fn compare(&self, a: &Kpi, b: &Kpi) -> Ordering {
        let primary = match self.field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => compare_text(&a.name, &b.name),
            SortField::Dimension => compare_text(a.dimension.label(), b.dimension.label()),
            SortField::Target => compare_numeric(a.target_value(), b.target_value())
                .unwrap_or_else(|| compare_text(&a.target, &b.target)),
            SortField::Achievement => {
                compare_numeric(Some(a.achievement_value()), Some(b.achievement_value()))
                    .unwrap_or_else(|| compare_text(a.achievement(), b.achievement()))
            }
            SortField::Status => a.status().cmp(&b.status()),
        };
        let ordered = match self.direction {
            SortDirection::Asc => primary,
            SortDirection::Desc => primary.reverse(),
        };
        ordered.then_with(|| a.id.cmp(&b.id))
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

fn compare_numeric(a: Option<f64>, b: Option<f64>) -> Option<Ordering> {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y),
        _ => None,
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

// =============================================================================
// VIEW
// =============================================================================

/// Filter then sort a KPI list.
#[must_use]
pub fn view<'a>(
    kpis: impl IntoIterator<Item = &'a Kpi>,
    filter: &KpiFilter,
    sort: &KpiSort,
) -> Vec<&'a Kpi> {
    let mut selected: Vec<&Kpi> = kpis.into_iter().filter(|k| filter.matches(k)).collect();
    selected.sort_by(|a, b| sort.compare(a, b));
    selected
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kpi::KpiSeed;

    fn kpi(id: u32, name: &'static str, dimension: Dimension, achievement: &'static str) -> Kpi {
        Kpi::from_seed(&KpiSeed {
            id,
            name,
            description: "",
            target: "90",
            achievement,
            unit: "%",
            boundaries: ["< 70%", "70-79%", "80-89%", "≥ 90%"],
            dimension,
            measurement_method: "",
            higher_is_better: true,
        })
    }

    fn sample() -> Vec<Kpi> {
        vec![
            kpi(1, "beta", Dimension::Time, "95"),
            kpi(2, "Alpha", Dimension::Quality, "75"),
            kpi(3, "gamma", Dimension::Quality, "100"),
            kpi(4, "delta", Dimension::Time, "60"),
        ]
    }

    fn ids(kpis: &[&Kpi]) -> Vec<u32> {
        kpis.iter().map(|k| k.id.0).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let kpis = sample();
        let out = view(&kpis, &KpiFilter::default(), &KpiSort::default());
        assert_eq!(ids(&out), vec![1, 2, 3, 4]);
    }

    #[test]
    fn filters_are_conjunctive() {
        let kpis = sample();
        let filter = KpiFilter {
            dimension: Some(Dimension::Quality),
            tier: Some(Tier::Excellent),
        };
        let out = view(&kpis, &filter, &KpiSort::default());
        assert_eq!(ids(&out), vec![3]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let kpis = sample();
        let sort = KpiSort {
            field: SortField::Name,
            direction: SortDirection::Asc,
        };
        let out = view(&kpis, &KpiFilter::default(), &sort);
        assert_eq!(ids(&out), vec![2, 1, 4, 3]);
    }

    #[test]
    fn achievement_sort_is_numeric() {
        let kpis = sample();
        let sort = KpiSort {
            field: SortField::Achievement,
            direction: SortDirection::Desc,
        };
        let out = view(&kpis, &KpiFilter::default(), &sort);
        // "100" sorts above "95" numerically
        assert_eq!(ids(&out), vec![3, 1, 2, 4]);
    }

    #[test]
    fn status_sort_uses_rank_and_id_ties() {
        let kpis = sample();
        let sort = KpiSort {
            field: SortField::Status,
            direction: SortDirection::Desc,
        };
        let out = view(&kpis, &KpiFilter::default(), &sort);
        assert_eq!(ids(&out), vec![1, 3, 2, 4]);
    }

    #[test]
    fn selectors_parse_from_text() {
        let filter = KpiFilter::parse(Some("kualitas"), Some(" ")).expect("filter");
        assert_eq!(filter.dimension, Some(Dimension::Quality));
        assert_eq!(filter.tier, None);
        assert!(KpiFilter::parse(None, Some("great")).is_err());

        let sort = KpiSort::parse(None, Some("desc")).expect("sort");
        assert_eq!(sort.field, SortField::Id);
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn sort_field_parsing() {
        assert_eq!("Tier".parse::<SortField>().ok(), Some(SortField::Status));
        assert!("colour".parse::<SortField>().is_err());
        assert_eq!("DESC".parse::<SortDirection>().ok(), Some(SortDirection::Desc));
    }
}
