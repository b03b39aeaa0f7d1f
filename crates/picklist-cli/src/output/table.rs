use picklist_core::extraction::PageContent;
use picklist_core::model::PickSummary;
use std::fmt::Write;

const SKU_HEADER: &str = "SKU";
const QTY_HEADER: &str = "Total Qty";

pub fn print(summary: &PickSummary, verbose: bool) {
    print!("{}", format_summary(summary, verbose));
}

/// Format the totals as an aligned two-column table.
pub fn format_summary(summary: &PickSummary, verbose: bool) -> String {
    let mut out = String::new();

    if summary.is_empty() {
        let _ = writeln!(
            out,
            "No SKU quantities found in {} page(s).",
            summary.page_count
        );
        return out;
    }

    let sku_width = summary
        .totals
        .iter()
        .map(|t| t.sku.len())
        .chain(std::iter::once(SKU_HEADER.len()))
        .max()
        .unwrap_or(SKU_HEADER.len());
    let qty_width = summary
        .totals
        .iter()
        .map(|t| t.total.to_string().len())
        .chain(std::iter::once(QTY_HEADER.len()))
        .max()
        .unwrap_or(QTY_HEADER.len());

    let _ = writeln!(
        out,
        "  {:<sw$}  {:>qw$}",
        SKU_HEADER,
        QTY_HEADER,
        sw = sku_width,
        qw = qty_width
    );
    let _ = writeln!(out, "  {}", "-".repeat(sku_width + 2 + qty_width));

    for t in &summary.totals {
        let _ = writeln!(
            out,
            "  {:<sw$}  {:>qw$}",
            t.sku,
            t.total,
            sw = sku_width,
            qw = qty_width
        );
    }

    let _ = writeln!(
        out,
        "\n  {} SKU(s), {} unit(s) across {} page(s)",
        summary.totals.len(),
        summary.grand_total(),
        summary.page_count
    );

    if verbose && !summary.matches.is_empty() {
        let _ = writeln!(out, "\n  Matches:");
        for m in &summary.matches {
            let _ = writeln!(
                out,
                "    page {:<3} {:<sw$}  {}",
                m.page_number,
                m.sku,
                m.quantity,
                sw = sku_width
            );
        }
    }

    out
}

/// Format raw page text for `picklist extract`.
pub fn format_pages(pages: &[PageContent]) -> String {
    let mut out = String::new();
    for page in pages {
        let _ = writeln!(out, "--- Page {} ---", page.page_number);
        if page.is_blank() {
            let _ = writeln!(out, "(no extractable text)");
        } else {
            let _ = writeln!(out, "{}", page.text.trim_end());
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use picklist_core::model::{SkuMatch, SkuTotal};

    fn summary() -> PickSummary {
        PickSummary {
            totals: vec![SkuTotal::new("ABC123-X", 15), SkuTotal::new("XYZ789-A", 3)],
            matches: vec![SkuMatch {
                page_number: 1,
                sku: "ABC123-X".into(),
                quantity: 15,
            }],
            page_count: 1,
        }
    }

    #[test]
    fn test_rows_are_aligned() {
        let out = format_summary(&summary(), false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "  SKU       Total Qty");
        assert_eq!(lines[2], "  ABC123-X         15");
        assert_eq!(lines[3], "  XYZ789-A          3");
        assert!(!out.contains("Matches"));
    }

    #[test]
    fn test_verbose_lists_matches() {
        let out = format_summary(&summary(), true);
        assert!(out.contains("Matches:"));
        assert!(out.contains("page 1"));
    }

    #[test]
    fn test_empty_summary_message() {
        let out = format_summary(
            &PickSummary {
                page_count: 2,
                ..PickSummary::default()
            },
            false,
        );
        assert_eq!(out, "No SKU quantities found in 2 page(s).\n");
    }

    #[test]
    fn test_blank_page_is_labelled() {
        let out = format_pages(&[PageContent::new(1, "")]);
        assert!(out.contains("(no extractable text)"));
    }
}
