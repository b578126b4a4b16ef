//! Paginated PDF report encoding.
//!
//! Same content as the text encoding, laid out top-down on US letter with a
//! 1" margin and builtin Helvetica, breaking to a new page when the cursor
//! reaches the bottom margin.

use anyhow::{anyhow, Result};
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::report::ReportInput;

const PAGE_WIDTH: Mm = Mm(215.9);
const PAGE_HEIGHT: Mm = Mm(279.4);
const MARGIN: Mm = Mm(25.4);
const TOP_Y: Mm = Mm(254.0);
const LINE_HEIGHT: Mm = Mm(7.0);

pub fn render(input: &ReportInput) -> Result<Vec<u8>> {
    let (doc, page, layer) =
        PdfDocument::new(super::REPORT_TITLE, PAGE_WIDTH, PAGE_HEIGHT, "content");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| anyhow!("loading builtin font: {e}"))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| anyhow!("loading builtin font: {e}"))?;

    {
        let mut cursor = Cursor {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            y: TOP_Y,
        };

        cursor.title(super::REPORT_TITLE, &bold);
        cursor.line(
            &format!(
                "Generated: {}",
                input.generated_at.format("%Y-%m-%d %H:%M UTC")
            ),
            &regular,
        );
        cursor.line(&format!("Target: {}", input.target), &regular);
        cursor.line(
            &format!("Compatibility Score: {}%", input.score),
            &regular,
        );
        cursor.blank();

        cursor.heading("MISSING SKILLS", &bold);
        if input.missing.is_empty() {
            cursor.line("None - you cover every skill this target asks for.", &regular);
        } else {
            for skill in &input.missing {
                cursor.line(&format!("- {skill}"), &regular);
            }
        }
        cursor.blank();

        cursor.heading("LEARNING ROADMAP", &bold);
        if input.roadmap.is_empty() {
            cursor.line("No roadmap needed - you are fully qualified.", &regular);
        } else {
            for entry in &input.roadmap {
                cursor.line(&format!("{}: {}", entry.label, entry.detail), &regular);
            }
        }
    }

    doc.save_to_bytes()
        .map_err(|e| anyhow!("serializing PDF report: {e}"))
}

/// Top-down text cursor with automatic page breaks.
struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: Mm,
}

impl Cursor<'_> {
    fn title(&mut self, text: &str, font: &IndirectFontRef) {
        self.break_page_if_needed();
        self.layer.use_text(text, 16.0, MARGIN, self.y, font);
        self.advance();
        self.advance();
    }

    fn heading(&mut self, text: &str, font: &IndirectFontRef) {
        self.break_page_if_needed();
        self.layer.use_text(text, 13.0, MARGIN, self.y, font);
        self.advance();
    }

    fn line(&mut self, text: &str, font: &IndirectFontRef) {
        self.break_page_if_needed();
        self.layer.use_text(text, 11.0, MARGIN, self.y, font);
        self.advance();
    }

    fn blank(&mut self) {
        self.advance();
    }

    fn advance(&mut self) {
        self.y = self.y - LINE_HEIGHT;
    }

    fn break_page_if_needed(&mut self) {
        if self.y.0 < MARGIN.0 {
            let (page, layer) = self.doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_Y;
        }
    }
}
