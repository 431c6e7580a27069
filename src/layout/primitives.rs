//! The building blocks a résumé is drawn from. Each primitive checks that its
//! unit fits on the current page, draws it, and moves the cursor past it.

use crate::colour::Colour;
use crate::layout::{wrap_text, LayoutContext};
use crate::surface::Surface;
use crate::units::Pt;

/// Body text handed to [`draw_body_text`]: either one string or a list of
/// strings, each wrapped as its own block.
#[derive(Debug, Clone, PartialEq)]
pub enum TextBlock {
    Single(String),
    Lines(Vec<String>),
}

impl TextBlock {
    fn items(&self) -> Vec<&str> {
        match self {
            TextBlock::Single(text) => vec![text.as_str()],
            TextBlock::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }
}

impl From<String> for TextBlock {
    fn from(text: String) -> Self {
        TextBlock::Single(text)
    }
}

impl From<&str> for TextBlock {
    fn from(text: &str) -> Self {
        TextBlock::Single(text.to_string())
    }
}

impl From<Vec<String>> for TextBlock {
    fn from(lines: Vec<String>) -> Self {
        TextBlock::Lines(lines)
    }
}

/// A bold line at the left margin, taking `size + title_padding`
pub fn draw_title<S: Surface>(ctx: &mut LayoutContext<'_, S>, text: &str, size: Pt, colour: Colour) {
    let height = size + ctx.style.title_padding;
    draw_heading(ctx, text, size, colour, height);
}

/// Like [`draw_title`], but taking `size + header_padding`
pub fn draw_section_header<S: Surface>(
    ctx: &mut LayoutContext<'_, S>,
    text: &str,
    size: Pt,
    colour: Colour,
) {
    let height = size + ctx.style.header_padding;
    draw_heading(ctx, text, size, colour, height);
}

fn draw_heading<S: Surface>(
    ctx: &mut LayoutContext<'_, S>,
    text: &str,
    size: Pt,
    colour: Colour,
    height: Pt,
) {
    ctx.ensure_space(height);
    let (x, y, bold) = (ctx.margins.left, ctx.y, ctx.fonts.bold);
    ctx.draw_text_at(x, y, text, bold, size, colour);
    ctx.advance(height);
}

/// Wrap and draw every non-blank item of `block` in the regular font,
/// `indent` in from the left margin, one `line_height` per line.
///
/// # Panics
///
/// If `indent` leaves no room for text between it and the right margin.
pub fn draw_body_text<S: Surface>(
    ctx: &mut LayoutContext<'_, S>,
    block: &TextBlock,
    indent: Pt,
    size: Pt,
    colour: Colour,
) {
    let regular = ctx.fonts.regular;
    let max_width = ctx.max_width() - indent;
    assert!(max_width > Pt(0.0), "indent leaves no room for text");
    let line_height = ctx.style.line_height;

    for item in block.items() {
        if item.trim().is_empty() {
            continue;
        }

        let lines = wrap_text(
            &*ctx.surface,
            item,
            max_width,
            regular,
            size,
            ctx.style.line_breaks,
        );
        for line in lines {
            ctx.ensure_space(line_height);
            if !line.is_empty() {
                let (x, y) = (ctx.margins.left + indent, ctx.y);
                ctx.draw_text_at(x, y, &line, regular, size, colour);
            }
            ctx.advance(line_height);
        }
    }
}

/// A `•` at the left margin followed by `text` wrapped at `indent`
pub fn draw_bullet<S: Surface>(ctx: &mut LayoutContext<'_, S>, text: &str, indent: Pt, size: Pt) {
    ctx.ensure_space(ctx.style.line_height);

    let colour = ctx.style.text_colour;
    let (x, y) = (ctx.margins.left, ctx.y + ctx.style.bullet_rise);
    let regular = ctx.fonts.regular;
    ctx.draw_text_at(x, y, "•", regular, size + Pt(2.0), colour);

    draw_body_text(ctx, &TextBlock::from(text), indent, size, colour);
}

/// A thin rule across the content area, or just space when dividers are
/// turned off in the style
pub fn draw_divider<S: Surface>(ctx: &mut LayoutContext<'_, S>) {
    let gap = ctx.style.section_gap;
    if !ctx.style.visible_divider {
        ctx.ensure_space(gap.half());
        ctx.advance(gap.half());
        return;
    }

    ctx.ensure_space(gap);
    let y = ctx.y + gap.half();
    let left = ctx.margins.left;
    let right = ctx.page_size.0 - ctx.margins.right;
    let (thickness, colour) = (ctx.style.divider_thickness, ctx.style.divider_colour);
    ctx.draw_line((left, y), (right, y), thickness, colour);
    ctx.advance(gap);
}
