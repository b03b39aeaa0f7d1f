use log::info;
use picklist_core::model::DEFAULT_REPORT_FILENAME;
use picklist_core::render::render_report;
use std::path::PathBuf;

use super::{extractor_for, layout_from, Backend};
use crate::output;

pub struct SummarizeArgs {
    pub input_file: PathBuf,
    pub output_format: String,
    pub report: Option<PathBuf>,
    pub no_report: bool,
    pub layout: Option<PathBuf>,
    pub backend: Backend,
    pub verbose: bool,
}

pub fn run(args: SummarizeArgs) -> Result<(), picklist_core::error::PicklistError> {
    // Layout errors surface before extraction
    let layout = layout_from(args.layout.as_deref())?;

    let pdf_bytes = std::fs::read(&args.input_file)?;
    let extractor = extractor_for(args.backend);
    let summary = picklist_core::summarize_pdf(&pdf_bytes, extractor.as_ref())?;

    // Render and write before printing anything: a failed run shows no partial table.
    let report = if args.no_report {
        None
    } else {
        let path = args
            .report
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_FILENAME));
        Some((path, render_report(&summary.totals, &layout)?))
    };

    let verbose = args.verbose;
    write_then_print(report, || match args.output_format.as_str() {
        "json" => output::json::print(&summary, verbose),
        _ => {
            output::table::print(&summary, verbose);
            Ok(())
        }
    })
}

/// Persist the report, then show the totals. Nothing is printed if the
/// write fails.
fn write_then_print<F>(
    report: Option<(PathBuf, Vec<u8>)>,
    print: F,
) -> Result<(), picklist_core::error::PicklistError>
where
    F: FnOnce() -> Result<(), picklist_core::error::PicklistError>,
{
    let written = match report {
        Some((path, bytes)) => {
            std::fs::write(&path, &bytes)?;
            info!("wrote {} byte(s) to {}", bytes.len(), path.display());
            Some(path)
        }
        None => None,
    };

    print()?;

    if let Some(path) = written {
        eprintln!("Report written to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use picklist_core::error::PicklistError;
    use std::cell::Cell;

    #[test]
    fn test_failed_write_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.pdf");
        let printed = Cell::new(false);

        let err = write_then_print(Some((path, b"%PDF-1.5".to_vec())), || {
            printed.set(true);
            Ok(())
        })
        .unwrap_err();

        assert!(matches!(err, PicklistError::Io(_)));
        assert!(!printed.get());
    }

    #[test]
    fn test_report_written_before_printing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");

        write_then_print(Some((path.clone(), b"%PDF-1.5".to_vec())), || {
            assert!(path.exists());
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_no_report_still_prints() {
        let printed = Cell::new(false);
        write_then_print(None, || {
            printed.set(true);
            Ok(())
        })
        .unwrap();
        assert!(printed.get());
    }
}
