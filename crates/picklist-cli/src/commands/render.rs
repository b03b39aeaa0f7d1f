use log::info;
use picklist_core::model::{PickSummary, DEFAULT_REPORT_FILENAME};
use picklist_core::render::render_report;
use std::path::PathBuf;

use super::layout_from;

/// Render a report from a summary previously saved with `summarize -o json`.
pub fn run(
    json_file: PathBuf,
    report: Option<PathBuf>,
    layout: Option<PathBuf>,
) -> Result<(), picklist_core::error::PicklistError> {
    let layout = layout_from(layout.as_deref())?;

    let json_bytes = std::fs::read(&json_file)?;
    let mut summary: PickSummary = serde_json::from_slice(&json_bytes)?;
    // Hand-edited files may not be in order
    summary.totals.sort_by(|a, b| a.sku.cmp(&b.sku));

    let bytes = render_report(&summary.totals, &layout)?;
    let path = report.unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_FILENAME));
    std::fs::write(&path, &bytes)?;
    info!("wrote {} byte(s) to {}", bytes.len(), path.display());
    eprintln!(
        "Rendered {} row(s) to {}",
        summary.totals.len(),
        path.display()
    );

    Ok(())
}
