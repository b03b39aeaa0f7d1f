use picklist_core::error::PicklistError;
use picklist_core::model::PickSummary;

pub fn print(summary: &PickSummary, verbose: bool) -> Result<(), PicklistError> {
    let json = if verbose {
        serde_json::to_string_pretty(summary)?
    } else {
        // Provenance is only interesting when asked for.
        let trimmed = PickSummary {
            matches: Vec::new(),
            ..summary.clone()
        };
        serde_json::to_string_pretty(&trimmed)?
    };
    println!("{json}");
    Ok(())
}
