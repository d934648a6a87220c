//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//!
//! Every command works on a freshly seeded [`Dashboard`]; nothing is saved.

use crate::api::{self, ClassifyResponse, KpiJson, PobInfo, SummaryResponse};
use crate::config::{FileConfig, ServerConfig};
use pob_kpi_core::{
    ChartKind, Dashboard, KpiFilter, KpiId, KpiSort, Kpi, PobError, Scorecard, Tier,
    TierBoundaries, TierSummary, classify, parse_achievement, write_csv,
};
use std::path::{Path, PathBuf};

/// Validate output path for security.
///
/// The parent directory must exist. Returns the canonical parent joined with
/// the original file name.
fn validate_output_path(path: &Path) -> Result<PathBuf, PobError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        PobError::Io(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(PobError::Io(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| PobError::Io("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), PobError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| PobError::Serialization(format!("JSON output: {}", e)))?;
    println!("{}", text);
    Ok(())
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    host: Option<String>,
    port: Option<u16>,
    file: &FileConfig,
) -> Result<(), PobError> {
    let config = ServerConfig::resolve(host, port, file);
    let dashboard = Dashboard::seeded();

    println!("POB KPI Dashboard Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:       {}", config.host);
    println!("  Port:       {}", config.port);
    println!("  POBs:       {}", dashboard.len());
    if config.rate_limit > 0 {
        println!("  Rate limit: {} req/s", config.rate_limit);
    } else {
        println!("  Rate limit: off");
    }
    println!();
    println!("Endpoints:");
    println!("  GET  /pobs                             - List POBs");
    println!("  GET  /pobs/{{pob}}/kpis                  - KPI list");
    println!("  PUT  /pobs/{{pob}}/kpis/{{id}}/achievement - Edit an achievement");
    println!("  GET  /pobs/{{pob}}/summary               - Tier summary");
    println!("  GET  /pobs/{{pob}}/recommendations       - Recommendations");
    println!("  GET  /pobs/{{pob}}/charts/{{kind}}         - Chart series");
    println!("  POST /pobs/{{pob}}/export                - CSV export");
    println!("  POST /classify                         - Ad-hoc classification");
    println!("  GET  /health                           - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    api::run_server(&config, dashboard).await
}

// =============================================================================
// LIST COMMAND
// =============================================================================

/// List the bundled POBs.
pub fn cmd_list(json_mode: bool) -> Result<(), PobError> {
    let dashboard = Dashboard::seeded();

    if json_mode {
        let pobs: Vec<PobInfo> = dashboard.scorecards().map(PobInfo::from).collect();
        print_json(&serde_json::json!({ "pobs": pobs }))?;
        return Ok(());
    }

    println!("POBs");
    println!("====");
    for card in dashboard.scorecards() {
        let summary = card.summary();
        println!();
        println!("{}", card.id());
        println!("  {}", card.title());
        println!(
            "  {} KPIs: {} excellent, {} good, {} needs improvement, {} poor",
            summary.total, summary.excellent, summary.good, summary.needs_improvement, summary.poor
        );
    }

    Ok(())
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Show a POB's KPIs, filtered and sorted.
pub fn cmd_show(
    json_mode: bool,
    pob: &str,
    dimension: Option<&str>,
    tier: Option<&str>,
    sort: &str,
    desc: bool,
) -> Result<(), PobError> {
    let filter = KpiFilter::parse(dimension, tier)?;
    let order = KpiSort::parse(Some(sort), Some(if desc { "desc" } else { "asc" }))?;

    let dashboard = Dashboard::seeded();
    let card = dashboard.get(pob)?;
    let kpis = card.view(&filter, &order);

    if json_mode {
        let records: Vec<KpiJson> = kpis.iter().map(|k| KpiJson::from(*k)).collect();
        print_json(&serde_json::json!({ "pob": card.id(), "kpis": records }))?;
        return Ok(());
    }

    println!("{}", card.title());
    println!("{}", "=".repeat(card.title().chars().count()));
    if kpis.is_empty() {
        println!("No KPIs match.");
        return Ok(());
    }
    for kpi in kpis {
        print_kpi_row(kpi);
    }

    Ok(())
}

fn print_kpi_row(kpi: &Kpi) {
    println!(
        "{:>3}  {:<18} {:<10} target {:<12} actual {:<12} {}",
        kpi.id,
        kpi.status().label(),
        kpi.dimension.label(),
        kpi.formatted_target(),
        kpi.formatted_achievement(),
        kpi.name
    );
}

// =============================================================================
// SUMMARY COMMAND
// =============================================================================

/// Show tier counts and percentages.
pub fn cmd_summary(json_mode: bool, pob: &str) -> Result<(), PobError> {
    let dashboard = Dashboard::seeded();
    let card = dashboard.get(pob)?;

    if json_mode {
        print_json(&SummaryResponse::success(card))?;
        return Ok(());
    }

    print_summary(card, &card.summary());
    Ok(())
}

fn print_summary(card: &Scorecard, summary: &TierSummary) {
    println!("{} - Summary", card.title());
    println!();
    println!("Total KPIs: {}", summary.total);
    for tier in Tier::ALL.iter().rev() {
        println!(
            "  {:<18} {:>3}  ({}%)",
            tier.label(),
            summary.count(*tier),
            summary.percent(*tier)
        );
    }
    if let Some(cv) = card.workload_variation() {
        println!();
        println!("Workload variation: {:.1}%", cv * 100.0);
    }
}

// =============================================================================
// RECOMMEND COMMAND
// =============================================================================

/// Show remediation narratives.
pub fn cmd_recommend(json_mode: bool, pob: &str) -> Result<(), PobError> {
    let dashboard = Dashboard::seeded();
    let card = dashboard.get(pob)?;
    let recommendations = card.recommendations();

    if json_mode {
        print_json(&serde_json::json!({ "pob": card.id(), "recommendations": recommendations }))?;
        return Ok(());
    }

    if recommendations.is_empty() {
        println!("Every KPI is Good or Excellent. Nothing to recommend.");
        return Ok(());
    }

    println!("{} - Recommendations", card.title());
    for rec in &recommendations {
        println!();
        println!("[{}] KPI {}: {}", rec.status.label(), rec.kpi_id, rec.kpi_name);
        println!("  {}", rec.recommendation);
    }

    Ok(())
}

// =============================================================================
// UPDATE COMMAND
// =============================================================================

/// Edit an achievement and print the reclassified KPI.
pub fn cmd_update(json_mode: bool, pob: &str, kpi: u32, achievement: &str) -> Result<(), PobError> {
    let mut dashboard = Dashboard::seeded();
    let card = dashboard.get_mut(pob)?;

    let before = card.get(KpiId(kpi))?.status();
    let updated = card.update_achievement(KpiId(kpi), achievement)?.clone();
    let summary = card.summary();

    tracing::debug!(pob, kpi, from = %before, to = %updated.status(), "Achievement edited");

    if json_mode {
        print_json(&serde_json::json!({
            "kpi": KpiJson::from(&updated),
            "previous_status": before,
            "summary": summary
        }))?;
        return Ok(());
    }

    print_kpi_row(&updated);
    if before != updated.status() {
        println!("Status changed: {} -> {}", before.label(), updated.status().label());
    }
    println!();
    print_summary(card, &summary);

    Ok(())
}

// =============================================================================
// CLASSIFY COMMAND
// =============================================================================

/// Classify a value against ad-hoc boundaries, worst tier first.
pub fn cmd_classify(
    json_mode: bool,
    boundaries: &[String],
    achievement: &str,
    higher_is_better: bool,
) -> Result<(), PobError> {
    let [poor, needs_improvement, good, excellent] = boundaries else {
        return Err(PobError::InvalidQuery(format!(
            "Expected 4 boundaries, got {}",
            boundaries.len()
        )));
    };

    let value = parse_achievement(achievement)?;
    let parsed = TierBoundaries::parse(poor, needs_improvement, good, excellent);
    let tier = classify(value, &parsed, higher_is_better);

    if json_mode {
        print_json(&ClassifyResponse::success(tier))?;
        return Ok(());
    }

    println!("{} ({})", tier.label(), tier.local_label());
    Ok(())
}

// =============================================================================
// CHART COMMAND
// =============================================================================

/// Print chart series over the KPIs kept by the optional filter.
pub fn cmd_chart(
    json_mode: bool,
    pob: &str,
    kind: &str,
    dimension: Option<&str>,
    tier: Option<&str>,
) -> Result<(), PobError> {
    let kind: ChartKind = kind.parse()?;
    let filter = KpiFilter::parse(dimension, tier)?;
    let dashboard = Dashboard::seeded();
    let card = dashboard.get(pob)?;
    let chart = card.chart(kind, &filter);

    if json_mode {
        print_json(&chart)?;
        return Ok(());
    }

    if chart.labels.is_empty() {
        println!("No data for this chart.");
        return Ok(());
    }

    let width = chart
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    for series in &chart.series {
        println!("{}", series.label);
        for (label, value) in chart.labels.iter().zip(&series.data) {
            println!("  {:<width$} {:>4}", label, value, width = width);
        }
    }

    Ok(())
}

// =============================================================================
// EXPORT COMMAND
// =============================================================================

/// Write a POB's KPIs to a CSV file.
pub fn cmd_export(
    json_mode: bool,
    pob: &str,
    output: &Path,
    dimension: Option<&str>,
    tier: Option<&str>,
) -> Result<(), PobError> {
    let filter = KpiFilter::parse(dimension, tier)?;
    let validated_output = validate_output_path(output)?;

    let dashboard = Dashboard::seeded();
    let card = dashboard.get(pob)?;
    let rows = card.view(&filter, &KpiSort::default());

    let file = std::fs::File::create(&validated_output)
        .map_err(|e| PobError::Io(format!("Cannot create '{}': {}", output.display(), e)))?;
    let written = write_csv(file, rows)?;

    if json_mode {
        return print_json(&serde_json::json!({
            "pob": card.id(),
            "output": validated_output.to_string_lossy(),
            "rows": written
        }));
    }

    println!("Exported {} KPIs to {}", written, validated_output.display());
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
