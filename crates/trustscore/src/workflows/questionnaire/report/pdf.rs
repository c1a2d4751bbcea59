use printpdf::{BuiltinFont, Mm, PdfDocument};

use super::layout::{ReportLayout, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, REPORT_TITLE};
use super::{DocumentBackend, ExportError};

/// Renders report layouts to PDF with the built-in Helvetica font.
#[derive(Debug, Clone)]
pub struct PdfBackend {
    title: String,
}

impl Default for PdfBackend {
    fn default() -> Self {
        Self {
            title: REPORT_TITLE.to_string(),
        }
    }
}

impl PdfBackend {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl DocumentBackend for PdfBackend {
    fn render(&self, layout: &ReportLayout) -> Result<Vec<u8>, ExportError> {
        if layout.pages.is_empty() {
            return Err(ExportError::EmptyDocument);
        }

        let (doc, first_page, first_layer) = PdfDocument::new(
            self.title.as_str(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Page 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(backend_error)?;

        for (index, page) in layout.pages.iter().enumerate() {
            let (page_index, layer_index) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(
                    Mm(PAGE_WIDTH_MM),
                    Mm(PAGE_HEIGHT_MM),
                    format!("Page {}", index + 1),
                )
            };
            let layer = doc.get_page(page_index).get_layer(layer_index);
            for line in &page.lines {
                layer.use_text(
                    printable_ascii(&line.text),
                    line.font_size,
                    Mm(line.x_mm),
                    Mm(PAGE_HEIGHT_MM - line.y_mm),
                    &font,
                );
            }
        }

        doc.save_to_bytes().map_err(backend_error)
    }
}

fn backend_error(err: printpdf::Error) -> ExportError {
    ExportError::Backend(err.to_string())
}

/// The built-in PDF fonts carry no Unicode coverage.
pub(crate) fn printable_ascii(text: &str) -> String {
    text.chars()
        .map(|ch| if (' '..='~').contains(&ch) { ch } else { '?' })
        .collect()
}
