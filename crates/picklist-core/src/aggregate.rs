use crate::error::PicklistError;
use crate::extraction::PageContent;
use crate::model::{PickSummary, SkuMatch, SkuTotal};
use log::{debug, warn};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// SKU code (`LLLDDD-L`) as a whole word, whitespace, then a decimal quantity.
static SKU_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z]{3}[0-9]{3}-[A-Z])\b\s+([0-9]+)").expect("valid SKU pattern")
});

/// Find every SKU/quantity pair on one page, left to right, non-overlapping.
///
/// Anything that doesn't match the pattern (words instead of digits,
/// decimals, lowercase codes) is skipped silently.
pub fn scan_page(page: &PageContent) -> Result<Vec<SkuMatch>, PicklistError> {
    SKU_QUANTITY
        .captures_iter(&page.text)
        .map(|caps| {
            let sku = &caps[1];
            let quantity = caps[2]
                .parse::<u64>()
                .map_err(|_| PicklistError::QuantityOverflow { sku: sku.to_string() })?;
            Ok(SkuMatch {
                page_number: page.page_number,
                sku: sku.to_string(),
                quantity,
            })
        })
        .collect()
}

/// Sum quantities per SKU across all pages.
///
/// Returns totals sorted ascending by SKU. A document without any match
/// yields an empty summary, not an error.
pub fn aggregate(pages: &[PageContent]) -> Result<PickSummary, PicklistError> {
    let mut totals: BTreeMap<String, u64> = BTreeMap::new();
    let mut matches = Vec::new();

    for page in pages {
        if page.is_blank() {
            debug!("page {} has no extractable text", page.page_number);
            continue;
        }

        let page_matches = scan_page(page)?;
        debug!(
            "page {}: {} SKU match(es)",
            page.page_number,
            page_matches.len()
        );

        for m in &page_matches {
            let entry = totals.entry(m.sku.clone()).or_insert(0);
            *entry = entry
                .checked_add(m.quantity)
                .ok_or_else(|| PicklistError::QuantityOverflow { sku: m.sku.clone() })?;
        }
        matches.extend(page_matches);
    }

    if totals.is_empty() && !pages.is_empty() {
        warn!("no SKU/quantity pairs found in {} page(s)", pages.len());
    }

    Ok(PickSummary {
        totals: totals
            .into_iter()
            .map(|(sku, total)| SkuTotal { sku, total })
            .collect(),
        matches,
        page_count: pages.len(),
    })
}
