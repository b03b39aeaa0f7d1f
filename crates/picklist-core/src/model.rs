use serde::{Deserialize, Serialize};
use std::fmt;

/// Suggested filename for the downloadable summary report.
pub const DEFAULT_REPORT_FILENAME: &str = "SKU_Summary_Report.pdf";

/// Media type of the rendered summary report.
pub const REPORT_MEDIA_TYPE: &str = "application/pdf";

/// Aggregated quantity for one SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuTotal {
    pub sku: String,
    pub total: u64,
}

impl SkuTotal {
    pub fn new(sku: impl Into<String>, total: u64) -> Self {
        SkuTotal {
            sku: sku.into(),
            total,
        }
    }
}

impl fmt::Display for SkuTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.sku, self.total)
    }
}

/// A single SKU/quantity occurrence found in the extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuMatch {
    pub page_number: usize,
    pub sku: String,
    pub quantity: u64,
}

/// Result of scanning a whole picking list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PickSummary {
    /// Totals sorted ascending by SKU.
    pub totals: Vec<SkuTotal>,
    /// Every contributing match, in page and scan order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<SkuMatch>,
    #[serde(default)]
    pub page_count: usize,
}

impl PickSummary {
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum of all totals.
    pub fn grand_total(&self) -> u64 {
        self.totals
            .iter()
            .fold(0u64, |acc, t| acc.saturating_add(t.total))
    }

    pub fn total_for(&self, sku: &str) -> Option<u64> {
        self.totals
            .binary_search_by(|t| t.sku.as_str().cmp(sku))
            .ok()
            .map(|i| self.totals[i].total)
    }
}
