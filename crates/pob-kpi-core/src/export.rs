//! # CSV Export
//!
//! Writes KPI rows as CSV. Quoting of names and descriptions containing
//! commas, quotes or newlines is left to the `csv` writer.

use crate::kpi::Kpi;
use crate::types::PobError;

/// Column headers, in row order.
pub const CSV_HEADERS: [&str; 8] = [
    "ID",
    "Name",
    "Description",
    "Dimension",
    "Target",
    "Achievement",
    "Unit",
    "Status",
];

/// Write KPIs as CSV into any writer.
pub fn write_csv<'a, W: std::io::Write>(
    writer: W,
    kpis: impl IntoIterator<Item = &'a Kpi>,
) -> Result<usize, PobError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(CSV_HEADERS)
        .map_err(|e| PobError::Serialization(e.to_string()))?;

    let mut rows = 0usize;
    for kpi in kpis {
        let id = kpi.id.to_string();
        csv_writer
            .write_record([
                id.as_str(),
                kpi.name.as_str(),
                kpi.description.as_str(),
                kpi.dimension.label(),
                kpi.target.as_str(),
                kpi.achievement(),
                kpi.unit.as_str(),
                kpi.status().label(),
            ])
            .map_err(|e| PobError::Serialization(e.to_string()))?;
        rows = rows.saturating_add(1);
    }

    csv_writer
        .flush()
        .map_err(|e| PobError::Io(format!("Flush CSV: {}", e)))?;
    Ok(rows)
}

/// Render KPIs as a CSV document in memory.
pub fn export_csv<'a>(kpis: impl IntoIterator<Item = &'a Kpi>) -> Result<Vec<u8>, PobError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, kpis)?;
    Ok(buffer)
}

// =============================================================================
// TESTS
// =============================================================================
