pub mod aggregate;
pub mod error;
pub mod extraction;
pub mod model;
pub mod render;

use error::PicklistError;
use extraction::PdfExtractor;
use log::info;
use model::PickSummary;
use render::layout::ReportLayout;

/// Main API entry point: extract a picking list PDF and total its SKUs.
///
/// Any extraction failure aborts the whole document; unmatched text is
/// ignored and an empty summary is a valid result.
pub fn summarize_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<PickSummary, PicklistError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    info!(
        "extracted {} page(s) with the {} backend",
        pages.len(),
        extractor.backend_name()
    );

    let summary = aggregate::aggregate(&pages)?;
    info!(
        "found {} unique SKU(s) across {} match(es)",
        summary.totals.len(),
        summary.matches.len()
    );

    Ok(summary)
}

/// Run the full pipeline: extract, aggregate, then render the report.
///
/// Returns the summary together with the rendered PDF bytes. Nothing is
/// returned if any step fails.
pub fn process_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    layout: &ReportLayout,
) -> Result<(PickSummary, Vec<u8>), PicklistError> {
    let summary = summarize_pdf(pdf_bytes, extractor)?;
    let report = render::render_report(&summary.totals, layout)?;
    Ok((summary, report))
}
