//! # pob-kpi-core
//!
//! KPI status classification for academic POB (Prosedur Operasional Baku)
//! dashboards - THE LOGIC.
//!
//! Each KPI carries four textual tier boundaries (`"< 70%"`, `"70-84%"`,
//! `"85-94%"`, `"≥ 95%"`) and a direction. This crate parses those
//! boundaries, classifies achievements into tiers, and derives summaries,
//! recommendations, views, chart series and CSV exports from the result.
//!
//! ## Architectural Constraints
//!
//! - Pure and synchronous: no async, no network, no logging
//! - Status is never stored independently of achievement: it is recomputed
//!   on every edit inside [`Kpi::set_achievement`]
//! - Deterministic: same inputs, same tiers, same ordering

// =============================================================================
// MODULES
// =============================================================================

pub mod boundary;
pub mod catalog;
pub mod chart;
pub mod classifier;
pub mod export;
pub mod kpi;
pub mod recommendation;
pub mod scorecard;
pub mod summary;
pub mod types;
pub mod view;
pub mod workload;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{Dimension, KpiId, PobError, PobId, Tier};

// =============================================================================
// RE-EXPORTS: Classification
// =============================================================================

pub use boundary::{Boundary, Range, TierBoundary};
pub use classifier::{TierBoundaries, classify};
pub use kpi::{Kpi, KpiSeed, parse_achievement};

// =============================================================================
// RE-EXPORTS: Derived Views
// =============================================================================

pub use chart::{ChartData, Series};
pub use export::{CSV_HEADERS, export_csv, write_csv};
pub use recommendation::{Recommendation, RecommendationSource, RecommendationTemplate};
pub use scorecard::{ChartKind, Dashboard, Scorecard};
pub use summary::TierSummary;
pub use view::{KpiFilter, KpiSort, SortDirection, SortField};
pub use workload::LecturerLoad;
