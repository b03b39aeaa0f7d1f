pub mod layout;
pub mod metrics;

use crate::error::PicklistError;
use crate::model::SkuTotal;
use layout::{validate_layout, ReportLayout};
use log::debug;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

pub(crate) const PAGE_WIDTH_MM: f32 = 210.0;
pub(crate) const PAGE_HEIGHT_MM: f32 = 297.0;
pub(crate) const MARGIN_MM: f32 = 10.0;
/// Rows that would cross this distance from the bottom edge start a new page.
pub(crate) const BOTTOM_MARGIN_MM: f32 = 20.0;
/// Horizontal padding between a cell border and its text.
const CELL_PADDING_MM: f32 = 1.0;
const PT_PER_MM: f32 = 72.0 / 25.4;
const FONT_RESOURCE: &str = "F1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
}

/// Render the SKU totals as a two-column PDF report.
///
/// Produces a centered title, a bordered header row, then one bordered row
/// per total. Rows that don't fit on the current page continue on a new
/// one. The document is returned in memory.
pub fn render_report(totals: &[SkuTotal], layout: &ReportLayout) -> Result<Vec<u8>, PicklistError> {
    validate_layout(layout)?;

    let mut canvas = Canvas::new(layout.font_size_pt);
    let h = layout.row_height_mm;

    canvas.cell(layout.title_width_mm, h, &layout.title, false, Align::Center)?;
    canvas.line_break(h);

    canvas.cell(layout.sku_column_mm, h, &layout.sku_header, true, Align::Left)?;
    canvas.cell(layout.qty_column_mm, h, &layout.qty_header, true, Align::Left)?;
    canvas.line_break(h);

    for row in totals {
        canvas.ensure_room(h);
        canvas.cell(layout.sku_column_mm, h, &row.sku, true, Align::Left)?;
        canvas.cell(layout.qty_column_mm, h, &row.total.to_string(), true, Align::Left)?;
        canvas.line_break(h);
    }

    let pages = canvas.finish();
    debug!(
        "rendered {} row(s) onto {} page(s)",
        totals.len(),
        pages.len()
    );
    assemble(pages)
}

/// Cursor-based page writer. Positions are in millimetres from the top-left.
struct Canvas {
    font_size_pt: f32,
    x: f32,
    y: f32,
    current: Vec<Operation>,
    pages: Vec<Vec<Operation>>,
}

impl Canvas {
    fn new(font_size_pt: f32) -> Self {
        Canvas {
            font_size_pt,
            x: MARGIN_MM,
            y: MARGIN_MM,
            current: Vec::new(),
            pages: Vec::new(),
        }
    }

    fn ensure_room(&mut self, height: f32) {
        if self.y + height > PAGE_HEIGHT_MM - BOTTOM_MARGIN_MM {
            let done = std::mem::take(&mut self.current);
            self.pages.push(done);
            self.x = MARGIN_MM;
            self.y = MARGIN_MM;
        }
    }

    fn line_break(&mut self, height: f32) {
        self.x = MARGIN_MM;
        self.y += height;
    }

    fn cell(
        &mut self,
        width: f32,
        height: f32,
        text: &str,
        border: bool,
        align: Align,
    ) -> Result<(), PicklistError> {
        if let Some(bad) = text.chars().find(|c| !metrics::is_printable(*c)) {
            return Err(PicklistError::Render(format!(
                "character {:?} in {:?} cannot be encoded with the report font",
                bad, text
            )));
        }

        if border {
            self.current.push(Operation::new(
                "re",
                vec![
                    num(self.x * PT_PER_MM),
                    num((PAGE_HEIGHT_MM - self.y) * PT_PER_MM),
                    num(width * PT_PER_MM),
                    num(-height * PT_PER_MM),
                ],
            ));
            self.current.push(Operation::new("S", vec![]));
        }

        if !text.is_empty() {
            let font_size_mm = self.font_size_pt / PT_PER_MM;
            let dx = match align {
                Align::Left => CELL_PADDING_MM,
                Align::Center => (width - metrics::text_width(text, font_size_mm)) / 2.0,
            };
            let baseline = self.y + 0.5 * height + 0.3 * font_size_mm;

            self.current.push(Operation::new("BT", vec![]));
            self.current.push(Operation::new(
                "Tf",
                vec![FONT_RESOURCE.into(), num(self.font_size_pt)],
            ));
            self.current.push(Operation::new(
                "Td",
                vec![
                    num((self.x + dx) * PT_PER_MM),
                    num((PAGE_HEIGHT_MM - baseline) * PT_PER_MM),
                ],
            ));
            self.current
                .push(Operation::new("Tj", vec![Object::string_literal(text)]));
            self.current.push(Operation::new("ET", vec![]));
        }

        self.x += width;
        Ok(())
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        self.pages.push(self.current);
        self.pages
    }
}

fn num(value: f32) -> Object {
    Object::Real(value.into())
}

fn assemble(pages: Vec<Vec<Operation>>) -> Result<Vec<u8>, PicklistError> {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_RESOURCE => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let encoded = content
            .encode()
            .map_err(|e| PicklistError::Render(format!("content stream: {}", e)))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            num(PAGE_WIDTH_MM * PT_PER_MM),
            num(PAGE_HEIGHT_MM * PT_PER_MM),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buf = Vec::new();
    doc.save_to(&mut buf)
        .map_err(|e| PicklistError::Render(format!("writing PDF: {}", e)))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_count(bytes: &[u8]) -> usize {
        Document::load_mem(bytes).unwrap().get_pages().len()
    }

    #[test]
    fn test_output_is_a_pdf() {
        let bytes = render_report(&[SkuTotal::new("ABC123-X", 15)], &ReportLayout::default())
            .unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn test_empty_table_still_renders_one_page() {
        let bytes = render_report(&[], &ReportLayout::default()).unwrap();
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn test_long_table_breaks_onto_new_pages() {
        // Rows start at 30 mm and break past 277 mm: 24 rows on page one.
        let totals: Vec<SkuTotal> = (0..60)
            .map(|i| SkuTotal::new(format!("SKU{:03}-A", i), i))
            .collect();
        let bytes = render_report(&totals, &ReportLayout::default()).unwrap();
        assert_eq!(page_count(&bytes), 3);
    }

    #[test]
    fn test_exactly_one_page_worth_of_rows() {
        let totals: Vec<SkuTotal> = (0..24)
            .map(|i| SkuTotal::new(format!("SKU{:03}-A", i), 1))
            .collect();
        let bytes = render_report(&totals, &ReportLayout::default()).unwrap();
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn test_unencodable_text_is_render_error() {
        let err = render_report(&[SkuTotal::new("ÄBC123-X", 1)], &ReportLayout::default())
            .unwrap_err();
        assert!(matches!(err, PicklistError::Render(_)));
    }

    #[test]
    fn test_invalid_layout_is_rejected_before_drawing() {
        let layout = ReportLayout {
            sku_column_mm: -5.0,
            ..ReportLayout::default()
        };
        assert!(matches!(
            render_report(&[], &layout),
            Err(PicklistError::LayoutInvalid(_))
        ));
    }

    #[test]
    fn test_bordered_cells_emit_rectangles() {
        let mut canvas = Canvas::new(12.0);
        canvas.cell(100.0, 10.0, "SKU", true, Align::Left).unwrap();
        canvas.cell(200.0, 10.0, "Title", false, Align::Center).unwrap();
        let ops = canvas.finish().remove(0);
        let rects = ops.iter().filter(|op| op.operator == "re").count();
        assert_eq!(rects, 1);
    }
}
