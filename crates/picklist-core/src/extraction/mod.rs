pub mod native;
pub mod pdftotext;

use crate::error::PicklistError;
use serde::{Deserialize, Serialize};

/// Text extracted from a single page of a PDF.
///
/// Pages without extractable text (scanned images, blank pages) carry an
/// empty `text` rather than being dropped, so `page_number` stays dense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

impl PageContent {
    pub fn new(page_number: usize, text: impl Into<String>) -> Self {
        PageContent {
            page_number,
            text: text.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, PicklistError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
