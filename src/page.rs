use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::Font;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use crate::PDFError;
use id_arena::{Arena, Id};
use pdf_writer::{Filter, Finish, Name, Pdf};

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// One run of text placed with its baseline starting at `coords`
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// A straight stroked line, used for section dividers
#[derive(Clone, PartialEq, Debug)]
pub struct RuleLayout {
    pub start: (Pt, Pt),
    pub end: (Pt, Pt),
    pub thickness: Pt,
    pub colour: Colour,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(SpanLayout),
    Rule(RuleLayout),
}

pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// Everything placed on the page, in paint order
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_else(Margins::empty);
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(span));
    }

    pub fn add_rule(&mut self, rule: RuleLayout) {
        self.contents.push(PageContents::Rule(rule));
    }

    /// Every font id used by a span on this page, in first-use order
    fn fonts_used(&self) -> Vec<Id<Font>> {
        let mut used: Vec<Id<Font>> = Vec::new();
        for content in self.contents.iter() {
            if let PageContents::Text(span) = content {
                if !used.contains(&span.font.id) {
                    used.push(span.font.id);
                }
            }
        }
        used
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        compress: bool,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs.require(RefType::Page(page_index))?;
        let content_id = refs.alloc(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(refs.require(RefType::PageTree)?);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for font_id in self.fonts_used() {
            resource_fonts.pair(
                Name(format!("F{}", font_id.index()).as_bytes()),
                refs.require(RefType::Font(font_id.index()))?,
            );
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_contents(&self.contents, fonts)?;
        if compress {
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
                rendered.as_slice(),
                miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
            );
            writer
                .stream(content_id, compressed.as_slice())
                .filter(Filter::FlateDecode);
        } else {
            writer.stream(content_id, rendered.as_slice());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::A4;

    #[test]
    fn content_box_follows_margins() {
        let page = Page::new(A4, Some(Margins::all(Pt(50.0))));
        assert_eq!(page.content_box.x1, Pt(50.0));
        assert_eq!(page.content_box.x2, Pt(545.0));
        assert_eq!(page.content_box.y2, Pt(792.0));
        assert_eq!(page.content_box.width(), Pt(495.0));
        assert_eq!(page.media_box.height(), Pt(842.0));
    }
}
