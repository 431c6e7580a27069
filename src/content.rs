//! Turns the high-level contents of a page into a PDF content stream.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::{PageContents, RuleLayout, SpanFont, SpanLayout};
use id_arena::Arena;
use std::io::Write;

/// Text state (font, size, fill colour) carries over between spans so each
/// operator is only emitted when it changes
#[derive(Default)]
struct TextState {
    font: Option<SpanFont>,
    colour: Option<Colour>,
}

#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, std::io::Error> {
    if contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();
    let mut state = TextState::default();

    write!(&mut content, "q\n")?;
    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(span) => render_span(&mut content, span, fonts, &mut state)?,
            PageContents::Rule(rule) => render_rule(&mut content, rule)?,
        }
    }
    write!(&mut content, "Q\n")?;

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_span(
    content: &mut Vec<u8>,
    span: &SpanLayout,
    fonts: &Arena<Font>,
    state: &mut TextState,
) -> Result<(), std::io::Error> {
    if span.text.is_empty() {
        return Ok(());
    }

    if state.font != Some(span.font) {
        write!(content, "/F{} {} Tf\n", span.font.id.index(), span.font.size)?;
        state.font = Some(span.font);
    }
    if state.colour != Some(span.colour) {
        write!(content, "{}\n", span.colour.fill_operator())?;
        state.colour = Some(span.colour);
    }

    write!(content, "BT\n")?;
    write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
    write!(content, "<")?;
    for byte in fonts[span.font.id].encode(&span.text) {
        write!(content, "{byte:02x}")?;
    }
    write!(content, "> Tj\n")?;
    write!(content, "ET\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_rule(content: &mut Vec<u8>, rule: &RuleLayout) -> Result<(), std::io::Error> {
    // stroke state is isolated so it never leaks into the text that follows
    write!(content, "q\n")?;
    write!(content, "{}\n", rule.colour.stroke_operator())?;
    write!(content, "{} w\n", rule.thickness)?;
    write!(content, "{} {} m\n", rule.start.0, rule.start.1)?;
    write!(content, "{} {} l\n", rule.end.0, rule.end.1)?;
    write!(content, "S\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::font::StandardFont;
    use crate::units::Pt;

    #[test]
    fn font_and_colour_are_only_set_when_they_change() {
        let mut fonts = Arena::new();
        let regular = fonts.alloc(Font::standard(StandardFont::Helvetica));
        let font = SpanFont {
            id: regular,
            size: Pt(11.0),
        };
        let span = |text: &str, y: f32| {
            PageContents::Text(SpanLayout {
                text: text.to_string(),
                font,
                colour: colours::BLACK,
                coords: (Pt(50.0), Pt(y)),
            })
        };

        let rendered = render_contents(&[span("Hi", 700.0), span("ok", 684.0)], &fonts).unwrap();
        let rendered = String::from_utf8(rendered).unwrap();

        assert_eq!(rendered.matches(" Tf\n").count(), 1);
        assert_eq!(rendered.matches("0 g\n").count(), 1);
        assert!(rendered.contains("50 700 Td\n<4869> Tj\n"));
        assert!(rendered.contains("50 684 Td\n<6f6b> Tj\n"));
    }

    #[test]
    fn rules_are_stroked_in_their_own_graphics_state() {
        let fonts = Arena::new();
        let rule = PageContents::Rule(RuleLayout {
            start: (Pt(50.0), Pt(400.0)),
            end: (Pt(545.0), Pt(400.0)),
            thickness: Pt(0.5),
            colour: colours::LIGHT_GREY,
        });
        let rendered = String::from_utf8(render_contents(&[rule], &fonts).unwrap()).unwrap();
        assert_eq!(rendered, "q\nq\n0.8 G\n0.5 w\n50 400 m\n545 400 l\nS\nQ\nQ\n");
    }
}
