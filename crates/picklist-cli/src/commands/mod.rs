pub mod extract;
pub mod render;
pub mod summarize;

use clap::ValueEnum;
use log::debug;
use picklist_core::error::PicklistError;
use picklist_core::extraction::native::LopdfExtractor;
use picklist_core::extraction::pdftotext::PdftotextExtractor;
use picklist_core::extraction::PdfExtractor;
use picklist_core::render::layout::{load_layout, ReportLayout};
use std::path::Path;

/// Which text extraction backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// pdftotext if installed, otherwise lopdf
    Auto,
    /// poppler's pdftotext -layout (best column alignment)
    Pdftotext,
    /// built-in lopdf parser, no external tools
    Lopdf,
}

pub fn extractor_for(backend: Backend) -> Box<dyn PdfExtractor> {
    let chosen: Box<dyn PdfExtractor> = match backend {
        Backend::Pdftotext => Box::new(PdftotextExtractor::new()),
        Backend::Lopdf => Box::new(LopdfExtractor::new()),
        Backend::Auto if PdftotextExtractor::is_available() => Box::new(PdftotextExtractor::new()),
        Backend::Auto => Box::new(LopdfExtractor::new()),
    };
    debug!("using {} extraction backend", chosen.backend_name());
    chosen
}

pub fn layout_from(path: Option<&Path>) -> Result<ReportLayout, PicklistError> {
    match path {
        Some(p) => load_layout(p),
        None => Ok(ReportLayout::default()),
    }
}
