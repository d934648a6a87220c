//! # Lecturer Workload
//!
//! Teaching load per lecturer and the coefficient of variation used by the
//! "workload distribution" KPI of the lecturer assignment POB.

use serde::{Deserialize, Serialize};

/// Teaching load of one lecturer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LecturerLoad {
    pub lecturer: String,
    /// Semester credit units (SKS).
    pub credits: u32,
    pub courses: u32,
}

impl LecturerLoad {
    /// Create a new workload row.
    #[must_use]
    pub fn new(lecturer: impl Into<String>, credits: u32, courses: u32) -> Self {
        Self {
            lecturer: lecturer.into(),
            credits,
            courses,
        }
    }
}

/// Population standard deviation of credit loads divided by their mean.
///
/// Returns 0 for an empty table or a zero mean.
#[must_use]
pub fn variation_coefficient(loads: &[LecturerLoad]) -> f64 {
    if loads.is_empty() {
        return 0.0;
    }
    let n = loads.len() as f64;
    let mean = loads.iter().map(|l| f64::from(l.credits)).sum::<f64>() / n;
    if mean == 0.0 {
        return 0.0;
    }
    let variance = loads
        .iter()
        .map(|l| (f64::from(l.credits) - mean).powi(2))
        .sum::<f64>()
        / n;
    variance.sqrt() / mean
}

/// Rows sorted by credit load, heaviest first. Ties keep input order.
#[must_use]
pub fn by_load_desc(loads: &[LecturerLoad]) -> Vec<&LecturerLoad> {
    let mut sorted: Vec<&LecturerLoad> = loads.iter().collect();
    sorted.sort_by(|a, b| b.credits.cmp(&a.credits));
    sorted
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_load_has_zero_variation() {
        let loads = vec![LecturerLoad::new("A", 12, 3), LecturerLoad::new("B", 12, 4)];
        assert_eq!(variation_coefficient(&loads), 0.0);
    }

    #[test]
    fn empty_and_zero_tables_are_zero() {
        assert_eq!(variation_coefficient(&[]), 0.0);
        assert_eq!(variation_coefficient(&[LecturerLoad::new("A", 0, 0)]), 0.0);
    }

    #[test]
    fn variation_matches_hand_computation() {
        // mean 10, deviations ±2 → std 2 → cv 0.2
        let loads = vec![LecturerLoad::new("A", 8, 2), LecturerLoad::new("B", 12, 3)];
        assert!((variation_coefficient(&loads) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn sorted_heaviest_first() {
        let loads = vec![
            LecturerLoad::new("A", 8, 2),
            LecturerLoad::new("B", 14, 3),
            LecturerLoad::new("C", 8, 1),
        ];
        let names: Vec<&str> = by_load_desc(&loads)
            .iter()
            .map(|l| l.lecturer.as_str())
            .collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }
}
