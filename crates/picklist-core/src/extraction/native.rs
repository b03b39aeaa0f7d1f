use crate::error::PicklistError;
use crate::extraction::{PageContent, PdfExtractor};
use log::debug;
use lopdf::Document;

/// In-process PDF extraction backend built on `lopdf`.
///
/// Needs no external binaries. Text comes out in content-stream order, which
/// for generated picking lists is usually reading order but carries no
/// column alignment.
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        LopdfExtractor
    }
}

impl Default for LopdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for LopdfExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, PicklistError> {
        let doc = Document::load_mem(pdf_bytes)
            .map_err(|e| PicklistError::Extraction(format!("not a readable PDF: {}", e)))?;

        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        debug!("lopdf loaded document with {} page(s)", page_numbers.len());

        // One bad page fails the whole document; no partial results.
        let mut pages = Vec::with_capacity(page_numbers.len());
        for (i, page_number) in page_numbers.iter().enumerate() {
            let text = doc.extract_text(&[*page_number]).map_err(|e| {
                PicklistError::Extraction(format!("page {}: {}", page_number, e))
            })?;
            pages.push(PageContent::new(i + 1, text));
        }

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "lopdf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_pdf_bytes() {
        let err = LopdfExtractor::new()
            .extract_pages(b"this is definitely not a PDF")
            .unwrap_err();
        assert!(matches!(err, PicklistError::Extraction(_)));
    }

    #[test]
    fn test_rejects_empty_input() {
        let err = LopdfExtractor::new().extract_pages(&[]).unwrap_err();
        assert!(err.to_string().starts_with("PDF extraction failed"));
    }
}
