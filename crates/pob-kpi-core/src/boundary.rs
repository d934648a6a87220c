//! # Boundary Expressions
//!
//! Tier boundaries arrive as short human-readable strings (`"< 70%"`,
//! `"8-14 hari"`, `"≥ 4.0"`). They are parsed exactly once, when a KPI is
//! built, into a [`Boundary`] value. Classification never touches the text.
//!
//! ## Parsing Rules (first match wins)
//!
//! | Text contains | Result |
//! |---------------|--------|
//! | `<` | `Below(N)` |
//! | `>` | `Above(N)` |
//! | `≤` | `Below(N)` |
//! | `≥` | `Above(N)` |
//! | `-` | `Between(A, B)` |
//! | otherwise | `Exact(N)` |
//!
//! Numbers are read after dropping every character that is not an ASCII
//! digit or `.`. A boundary whose number cannot be read is `Malformed`.

use serde::{Deserialize, Serialize};

// =============================================================================
// RANGE
// =============================================================================

/// Numeric bounds of a boundary. `None` means unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Range {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

// =============================================================================
// BOUNDARY
// =============================================================================

/// Parsed tier boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Boundary {
    /// Everything up to `max` (`< N`, `≤ N`).
    Below { max: f64 },
    /// Everything from `min` upward (`> N`, `≥ N`).
    Above { min: f64 },
    /// A closed span (`A-B`).
    Between { min: f64, max: f64 },
    /// A single value used as both ends.
    Exact { value: f64 },
    /// Unreadable text. Never matches any tier.
    Malformed,
}

impl Boundary {
    /// Parse a boundary expression.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if text.contains('<') {
            return extract_number(text).map_or(Self::Malformed, |max| Self::Below { max });
        }
        if text.contains('>') {
            return extract_number(text).map_or(Self::Malformed, |min| Self::Above { min });
        }
        if text.contains('≤') {
            return extract_number(text).map_or(Self::Malformed, |max| Self::Below { max });
        }
        if text.contains('≥') {
            return extract_number(text).map_or(Self::Malformed, |min| Self::Above { min });
        }
        if text.contains('-') {
            let mut pieces = text.split('-');
            let min = pieces.next().and_then(extract_number);
            let max = pieces.next().and_then(extract_number);
            return match (min, max) {
                (Some(min), Some(max)) => Self::Between { min, max },
                _ => Self::Malformed,
            };
        }
        extract_number(text).map_or(Self::Malformed, |value| Self::Exact { value })
    }

    /// Numeric bounds of this boundary.
    #[must_use]
    pub fn range(&self) -> Range {
        match *self {
            Self::Below { max } => Range {
                min: None,
                max: Some(max),
            },
            Self::Above { min } => Range {
                min: Some(min),
                max: None,
            },
            Self::Between { min, max } => Range {
                min: Some(min),
                max: Some(max),
            },
            Self::Exact { value } => Range {
                min: Some(value),
                max: Some(value),
            },
            Self::Malformed => Range::default(),
        }
    }

    /// Check if the expression could not be read.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed)
    }
}

// =============================================================================
// TIER BOUNDARY (text + parsed value)
// =============================================================================

/// A boundary together with the text it was parsed from.
///
/// The text is kept for display and export; comparisons use `parsed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierBoundary {
    pub text: String,
    pub parsed: Boundary,
}

impl TierBoundary {
    /// Parse `text` and keep both forms.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let parsed = Boundary::parse(&text);
        Self { text, parsed }
    }

    /// Numeric bounds of the parsed boundary.
    #[must_use]
    pub fn range(&self) -> Range {
        self.parsed.range()
    }
}

// =============================================================================
// NUMBER EXTRACTION
// =============================================================================

/// Read the number embedded in `text`.
///
/// Keeps only ASCII digits and `.`, then reads the longest leading decimal
/// literal with at most one `.` (`"3.0.1"` reads as `3.0`). Returns `None`
/// when no digit survives.
#[must_use]
pub fn extract_number(text: &str) -> Option<f64> {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    leading_decimal(&kept)
}

/// Read the leading decimal literal of `text` (`"4.5 hari"` → `4.5`).
///
/// Leading whitespace and a single sign are allowed. Returns `None` when the
/// text does not start with a number.
#[must_use]
pub fn leading_decimal(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in text.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    text[..end].trim_end_matches('.').parse::<f64>().ok()
}

// =============================================================================
// TESTS
// =============================================================================
