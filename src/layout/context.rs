use crate::colour::Colour;
use crate::font::FontPair;
use crate::layout::{Margins, Style};
use crate::pagesize::PageSize;
use crate::surface::Surface;
use crate::units::Pt;

/// The mutable state of a single layout pass: where on which page the next
/// unit goes.
///
/// The cursor `y` is the baseline of the next line, measured up from the
/// bottom of the page as PDF does. Units are placed top to bottom, so `y`
/// only ever decreases until a page break resets it to the top margin.
pub struct LayoutContext<'a, S: Surface> {
    pub surface: &'a mut S,
    pub page: S::Page,
    pub page_size: PageSize,
    pub margins: Margins,
    pub y: Pt,
    pub fonts: FontPair<S::Font>,
    pub style: &'a Style,
    has_content: bool,
    page_count: usize,
}

impl<'a, S: Surface> LayoutContext<'a, S> {
    /// Start a layout on a fresh page of the style's paper size.
    ///
    /// # Panics
    ///
    /// If the margins leave no horizontal room for text. Callers that take
    /// geometry from user configuration should check
    /// [`Style::content_width`] first.
    pub fn new(surface: &'a mut S, fonts: FontPair<S::Font>, style: &'a Style) -> Self {
        let page_size = style.page_size();
        let margins = style.margins.clone();
        assert!(
            margins.content_width(page_size.0) > Pt(0.0),
            "margins leave no room for text"
        );

        let page = surface.add_page(page_size, &margins);
        let y = page_size.1 - margins.top;
        LayoutContext {
            surface,
            page,
            page_size,
            margins,
            y,
            fonts,
            style,
            has_content: false,
            page_count: 1,
        }
    }

    /// Width available to a line starting at the left margin
    pub fn max_width(&self) -> Pt {
        self.margins.content_width(self.page_size.0)
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Make sure a unit `height` tall fits above the bottom margin, moving
    /// to a new page if it doesn't. A page that has nothing on it yet is
    /// never abandoned, so a unit taller than the printable area is simply
    /// drawn there and overflows.
    ///
    /// Returns `true` if a new page was started.
    pub fn ensure_space(&mut self, height: Pt) -> bool {
        if self.y - height < self.margins.bottom && self.has_content {
            log::debug!(
                "page {} full at y = {}, starting page {}",
                self.page_count,
                self.y,
                self.page_count + 1
            );
            self.new_page();
            true
        } else {
            false
        }
    }

    /// Move the cursor down by `dy`
    pub fn advance(&mut self, dy: Pt) {
        self.y -= dy;
    }

    /// Allocate a page of the same size and put the cursor at its top margin
    pub fn new_page(&mut self) {
        self.page = self.surface.add_page(self.page_size, &self.margins);
        self.y = self.page_size.1 - self.margins.top;
        self.has_content = false;
        self.page_count += 1;
    }

    /// Draw `text` on the current page with its baseline at the cursor
    pub fn draw_text_at(&mut self, x: Pt, y: Pt, text: &str, font: S::Font, size: Pt, colour: Colour) {
        self.surface.draw_text(self.page, text, (x, y), font, size, colour);
        self.has_content = true;
    }

    pub fn draw_line(&mut self, start: (Pt, Pt), end: (Pt, Pt), thickness: Pt, colour: Colour) {
        self.surface.draw_line(self.page, start, end, thickness, colour);
        self.has_content = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::pagesize::Paper;
    use crate::surface::{Monospace, Recorder, Weight};

    fn small_page() -> Style {
        Style {
            paper: Paper::Custom {
                width: Pt(300.0),
                height: Pt(200.0),
            },
            margins: Margins::trbl(Pt(30.0), Pt(20.0), Pt(10.0), Pt(20.0)),
            line_height: Pt(20.0),
            ..Style::default()
        }
    }

    const FONTS: FontPair<Weight> = FontPair {
        regular: Weight::Regular,
        bold: Weight::Bold,
    };

    #[test]
    fn starts_at_the_top_margin() {
        let style = small_page();
        let mut recorder = Recorder::new(Monospace { advance: Pt(6.0) });
        let ctx = LayoutContext::new(&mut recorder, FONTS, &style);
        assert_eq!(ctx.y, Pt(170.0));
        assert_eq!(ctx.max_width(), Pt(260.0));
        assert_eq!(ctx.page_count(), 1);
    }

    #[test]
    fn empty_pages_are_never_abandoned() {
        let style = small_page();
        let mut recorder = Recorder::new(Monospace { advance: Pt(6.0) });
        let mut ctx = LayoutContext::new(&mut recorder, FONTS, &style);
        assert!(!ctx.ensure_space(Pt(1000.0)));
        ctx.draw_text_at(Pt(20.0), ctx.y, "x", Weight::Regular, Pt(11.0), colours::BLACK);
        assert!(ctx.ensure_space(Pt(1000.0)));
        assert_eq!(ctx.y, Pt(170.0));
        assert_eq!(ctx.page_count(), 2);
    }

    #[test]
    fn breaks_only_when_crossing_the_bottom_margin() {
        let style = small_page();
        let mut recorder = Recorder::new(Monospace { advance: Pt(6.0) });
        let mut ctx = LayoutContext::new(&mut recorder, FONTS, &style);
        ctx.draw_line((Pt(20.0), ctx.y), (Pt(280.0), ctx.y), Pt(0.5), colours::LIGHT_GREY);
        ctx.advance(Pt(140.0));
        // 30 - 20 lands exactly on the margin
        assert!(!ctx.ensure_space(Pt(20.0)));
        assert!(ctx.ensure_space(Pt(20.1)));
    }

    #[test]
    #[should_panic]
    fn refuses_margins_without_room_for_text() {
        let style = Style {
            margins: Margins::symmetric(Pt(50.0), Pt(300.0)),
            ..Style::default()
        };
        let mut recorder = Recorder::new(Monospace { advance: Pt(6.0) });
        let _ = LayoutContext::new(&mut recorder, FONTS, &style);
    }
}
