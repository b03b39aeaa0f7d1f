use std::path::PathBuf;

use super::{extractor_for, Backend};
use crate::output;

pub fn run(
    pdf_file: PathBuf,
    backend: Backend,
) -> Result<(), picklist_core::error::PicklistError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = extractor_for(backend);
    let pages = extractor.extract_pages(&pdf_bytes)?;

    print!("{}", output::table::format_pages(&pages));
    eprintln!(
        "Extracted {} page(s) with {}",
        pages.len(),
        extractor.backend_name()
    );

    Ok(())
}
