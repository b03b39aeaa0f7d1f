use crate::error::PicklistError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geometry and wording of the summary report.
///
/// Lengths are millimetres on an A4 page, matching the classic
/// `cell(w, h)` layout: a 200 mm title cell, then a 100 mm SKU column and a
/// 40 mm quantity column, all 10 mm high.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLayout {
    pub title: String,
    pub title_width_mm: f32,
    pub sku_column_mm: f32,
    pub qty_column_mm: f32,
    pub row_height_mm: f32,
    pub font_size_pt: f32,
    pub sku_header: String,
    pub qty_header: String,
}

impl Default for ReportLayout {
    fn default() -> Self {
        ReportLayout {
            title: "SKU Summary Report".into(),
            title_width_mm: 200.0,
            sku_column_mm: 100.0,
            qty_column_mm: 40.0,
            row_height_mm: 10.0,
            font_size_pt: 12.0,
            sku_header: "SKU".into(),
            qty_header: "Total Qty".into(),
        }
    }
}

/// Load a report layout from a JSON file. Missing fields take defaults.
pub fn load_layout(path: &Path) -> Result<ReportLayout, PicklistError> {
    let content = std::fs::read_to_string(path).map_err(|e| PicklistError::LayoutLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let layout: ReportLayout =
        serde_json::from_str(&content).map_err(|e| PicklistError::LayoutLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_layout(&layout)?;
    Ok(layout)
}

/// Validate that a layout can actually be drawn.
pub fn validate_layout(layout: &ReportLayout) -> Result<(), PicklistError> {
    if layout.title.trim().is_empty() {
        return Err(PicklistError::LayoutInvalid("title must not be empty".into()));
    }

    let lengths = [
        ("title_width_mm", layout.title_width_mm),
        ("sku_column_mm", layout.sku_column_mm),
        ("qty_column_mm", layout.qty_column_mm),
        ("row_height_mm", layout.row_height_mm),
        ("font_size_pt", layout.font_size_pt),
    ];
    for (name, value) in lengths {
        if !value.is_finite() || value <= 0.0 {
            return Err(PicklistError::LayoutInvalid(format!(
                "{} must be a positive number, got {}",
                name, value
            )));
        }
    }

    // Header plus at least one row has to fit below the title.
    let usable = super::PAGE_HEIGHT_MM - super::MARGIN_MM - super::BOTTOM_MARGIN_MM;
    if layout.row_height_mm * 3.0 > usable {
        return Err(PicklistError::LayoutInvalid(format!(
            "row_height_mm {} is too tall for an A4 page",
            layout.row_height_mm
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_layout_is_valid() {
        assert!(validate_layout(&ReportLayout::default()).is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "title": "Wave 12 picks", "sku_column_mm": 80 }}"#).unwrap();

        let layout = load_layout(file.path()).unwrap();
        assert_eq!(layout.title, "Wave 12 picks");
        assert_eq!(layout.sku_column_mm, 80.0);
        assert_eq!(layout.qty_column_mm, 40.0);
        assert_eq!(layout.qty_header, "Total Qty");
    }

    #[test]
    fn test_rejects_non_positive_width() {
        let layout = ReportLayout {
            qty_column_mm: 0.0,
            ..ReportLayout::default()
        };
        let err = validate_layout(&layout).unwrap_err();
        assert!(err.to_string().contains("qty_column_mm"));
    }

    #[test]
    fn test_rejects_blank_title() {
        let layout = ReportLayout {
            title: "   ".into(),
            ..ReportLayout::default()
        };
        assert!(matches!(
            validate_layout(&layout),
            Err(PicklistError::LayoutInvalid(_))
        ));
    }

    #[test]
    fn test_rejects_huge_rows() {
        let layout = ReportLayout {
            row_height_mm: 120.0,
            ..ReportLayout::default()
        };
        assert!(validate_layout(&layout).is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_layout(Path::new("/nonexistent/layout.json")).unwrap_err();
        match err {
            PicklistError::LayoutLoad { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/layout.json"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_json_is_layout_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            load_layout(file.path()),
            Err(PicklistError::LayoutLoad { .. })
        ));
    }
}
