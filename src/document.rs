use crate::{
    font::Font,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    PDFError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Pdf, Ref};
use std::io::Write;

/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
    /// Flate-compress page content streams
    pub compress: bool,
}

impl Default for Document {
    fn default() -> Self {
        Document {
            info: None,
            pages: Arena::new(),
            page_order: Vec::new(),
            fonts: Arena::new(),
            compress: true,
        }
    }
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Add a font to the document structure. Fonts are stored "globally" within the
    /// document, such that any page can use it by referring to the returned id.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Write the entire document to the writer. The document is rendered in
    /// memory first, then written out in one go.
    ///
    /// Object ids are only allocated here, so pages and fonts can be edited
    /// freely until `write` is called.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), PDFError> {
        let Document {
            info,
            pages,
            page_order,
            fonts,
            compress,
        } = self;

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.alloc(RefType::Catalog);
        let page_tree_id = refs.alloc(RefType::PageTree);

        let mut writer = Pdf::new();
        writer.catalog(catalog_id).pages(page_tree_id);

        // page refs are keyed by position in the document, not arena index
        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.alloc(RefType::Page(i)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (id, font) in fonts.iter() {
            font.write(&mut refs, id, &mut writer);
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(PDFError::PageMissing(page_index))?;
            page.write(&mut refs, page_index, &fonts, compress, &mut writer)?;
        }

        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::font::StandardFont;
    use crate::layout::Margins;
    use crate::page::{SpanFont, SpanLayout};
    use crate::pagesize::A4;
    use crate::units::Pt;

    fn one_page_document(compress: bool) -> Vec<u8> {
        let mut doc = Document {
            compress,
            ..Document::default()
        };
        let helvetica = doc.add_font(Font::standard(StandardFont::Helvetica));

        let mut page = Page::new(A4, Some(Margins::all(Pt(50.0))));
        page.add_span(SpanLayout {
            text: "Hello".to_string(),
            font: SpanFont {
                id: helvetica,
                size: Pt(11.0),
            },
            colour: colours::BLACK,
            coords: (Pt(50.0), Pt(792.0)),
        });
        doc.add_page(page);
        doc.set_info(Info::new().title("Hello").clone());

        let mut out = Vec::new();
        doc.write(&mut out).unwrap();
        out
    }

    #[test]
    fn writes_a_readable_pdf_skeleton() {
        let bytes = one_page_document(false);
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.starts_with("%PDF-"));
        assert!(text.contains("/Type /Catalog"));
        assert!(text.contains("/Count 1"));
        assert!(text.contains("/BaseFont /Helvetica"));
        assert!(text.contains("/Encoding /WinAnsiEncoding"));
        assert!(text.contains("<48656c6c6f> Tj"));
        assert!(text.trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn compressed_streams_are_flate_encoded() {
        let bytes = one_page_document(true);
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Filter /FlateDecode"));
        assert!(!text.contains("<48656c6c6f> Tj"));
    }

    #[test]
    fn output_is_reproducible() {
        assert_eq!(one_page_document(true), one_page_document(true));
    }
}
