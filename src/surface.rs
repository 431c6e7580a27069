//! The capabilities the layout engine needs from whatever it draws on.
//!
//! Layout code only ever talks to a [`Surface`]: it measures text, asks for
//! pages and places glyphs and rules. [`Document`] is the PDF implementation;
//! [`Recorder`] keeps a log of every draw operation, which is what previews
//! and tests inspect.

use crate::colour::Colour;
use crate::document::Document;
use crate::font::{Font, StandardFont};
use crate::layout::Margins;
use crate::page::{Page, RuleLayout, SpanFont, SpanLayout};
use crate::pagesize::PageSize;
use crate::units::Pt;
use id_arena::Id;

/// Measures the rendered width of text
pub trait TextMeasurer {
    /// Handle identifying a font (and weight) on this measurer
    type Font: Copy;

    fn width_of_text(&self, text: &str, font: Self::Font, size: Pt) -> Pt;
}

/// Something pages can be allocated on and drawn into
pub trait Surface: TextMeasurer {
    type Page: Copy;

    /// Append a new page of the given size to the end of the output
    fn add_page(&mut self, size: PageSize, margins: &Margins) -> Self::Page;

    /// Place `text` with its baseline starting at `at`
    fn draw_text(
        &mut self,
        page: Self::Page,
        text: &str,
        at: (Pt, Pt),
        font: Self::Font,
        size: Pt,
        colour: Colour,
    );

    fn draw_line(
        &mut self,
        page: Self::Page,
        start: (Pt, Pt),
        end: (Pt, Pt),
        thickness: Pt,
        colour: Colour,
    );
}

impl TextMeasurer for Document {
    type Font = Id<Font>;

    fn width_of_text(&self, text: &str, font: Id<Font>, size: Pt) -> Pt {
        self.fonts[font].width_of_text(text, size)
    }
}

impl Surface for Document {
    type Page = Id<Page>;

    fn add_page(&mut self, size: PageSize, margins: &Margins) -> Id<Page> {
        Document::add_page(self, Page::new(size, Some(margins.clone())))
    }

    fn draw_text(
        &mut self,
        page: Id<Page>,
        text: &str,
        at: (Pt, Pt),
        font: Id<Font>,
        size: Pt,
        colour: Colour,
    ) {
        self.pages[page].add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont { id: font, size },
            colour,
            coords: at,
        });
    }

    fn draw_line(
        &mut self,
        page: Id<Page>,
        start: (Pt, Pt),
        end: (Pt, Pt),
        thickness: Pt,
        colour: Colour,
    ) {
        self.pages[page].add_rule(RuleLayout {
            start,
            end,
            thickness,
            colour,
        });
    }
}

/// Weight of the typeface, used as the font handle by surfaces that do not
/// manage real font objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weight {
    Regular,
    Bold,
}

/// Measures with the Helvetica metrics, without building a document
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaMetrics;

impl TextMeasurer for HelveticaMetrics {
    type Font = Weight;

    fn width_of_text(&self, text: &str, font: Weight, size: Pt) -> Pt {
        match font {
            Weight::Regular => StandardFont::Helvetica.width_of_text(text, size),
            Weight::Bold => StandardFont::HelveticaBold.width_of_text(text, size),
        }
    }
}

/// Every character is `advance` points wide, whatever the font or size.
/// Makes line breaks easy to predict.
#[derive(Debug, Clone, Copy)]
pub struct Monospace {
    pub advance: Pt,
}

impl TextMeasurer for Monospace {
    type Font = Weight;

    fn width_of_text(&self, text: &str, _font: Weight, _size: Pt) -> Pt {
        self.advance * text.chars().count() as f32
    }
}

/// A single operation performed on a [`Recorder`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        page: usize,
        text: String,
        at: (Pt, Pt),
        font: Weight,
        size: Pt,
        colour: Colour,
    },
    Line {
        page: usize,
        start: (Pt, Pt),
        end: (Pt, Pt),
        thickness: Pt,
        colour: Colour,
    },
}

impl DrawOp {
    pub fn page(&self) -> usize {
        match self {
            DrawOp::Text { page, .. } | DrawOp::Line { page, .. } => *page,
        }
    }

    /// The text drawn by this operation, if it drew any
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Line { .. } => None,
        }
    }
}

/// A surface that records what would have been drawn
#[derive(Debug, Clone)]
pub struct Recorder<M> {
    pub measurer: M,
    pub pages: Vec<PageSize>,
    pub ops: Vec<DrawOp>,
}

impl<M: TextMeasurer<Font = Weight>> Recorder<M> {
    pub fn new(measurer: M) -> Recorder<M> {
        Recorder {
            measurer,
            pages: Vec::new(),
            ops: Vec::new(),
        }
    }

    /// Text of every text operation, in drawing order
    pub fn texts(&self) -> Vec<&str> {
        self.ops.iter().filter_map(DrawOp::text).collect()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl<M: TextMeasurer<Font = Weight>> TextMeasurer for Recorder<M> {
    type Font = Weight;

    fn width_of_text(&self, text: &str, font: Weight, size: Pt) -> Pt {
        self.measurer.width_of_text(text, font, size)
    }
}

impl<M: TextMeasurer<Font = Weight>> Surface for Recorder<M> {
    type Page = usize;

    fn add_page(&mut self, size: PageSize, _margins: &Margins) -> usize {
        self.pages.push(size);
        self.pages.len() - 1
    }

    fn draw_text(
        &mut self,
        page: usize,
        text: &str,
        at: (Pt, Pt),
        font: Weight,
        size: Pt,
        colour: Colour,
    ) {
        self.ops.push(DrawOp::Text {
            page,
            text: text.to_string(),
            at,
            font,
            size,
            colour,
        });
    }

    fn draw_line(
        &mut self,
        page: usize,
        start: (Pt, Pt),
        end: (Pt, Pt),
        thickness: Pt,
        colour: Colour,
    ) {
        self.ops.push(DrawOp::Line {
            page,
            start,
            end,
            thickness,
            colour,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::pagesize::A4;

    #[test]
    fn document_surface_places_spans_on_the_right_page() {
        let mut doc = Document::default();
        let font = doc.add_font(Font::standard(StandardFont::Helvetica));
        let margins = Margins::all(Pt(50.0));

        let first = Surface::add_page(&mut doc, A4, &margins);
        let second = Surface::add_page(&mut doc, A4, &margins);
        doc.draw_text(second, "hi", (Pt(50.0), Pt(792.0)), font, Pt(11.0), colours::BLACK);

        assert_eq!(doc.page_count(), 2);
        assert!(doc.pages[first].contents.is_empty());
        assert_eq!(doc.pages[second].contents.len(), 1);
        assert_eq!(
            doc.width_of_text("hi", font, Pt(10.0)),
            StandardFont::Helvetica.width_of_text("hi", Pt(10.0))
        );
    }

    #[test]
    fn monospace_ignores_font_and_size() {
        let mono = Monospace { advance: Pt(6.0) };
        assert_eq!(mono.width_of_text("AAAAAA", Weight::Bold, Pt(30.0)), Pt(36.0));
    }
}
