use crate::layout::LineBreaks;
use crate::surface::TextMeasurer;
use crate::units::Pt;

const TABSIZE: usize = 4;

/// Break `text` into lines no wider than `max_width`, filling each line
/// greedily word by word.
///
/// Newlines are hard paragraph breaks; what happens to empty paragraphs is
/// decided by `breaks`. Words are separated by single spaces, so runs of
/// spaces survive as empty words. A word is moved to the next line as soon
/// as the candidate line measures `max_width` or more, which means a line
/// exactly as wide as the limit still wraps. A single word wider than the
/// limit is kept whole on its own line.
///
/// Tabs become four spaces before wrapping, so they do not come back out as
/// tabs.
///
/// ```
/// use cv_gen::layout::{wrap_text, LineBreaks};
/// use cv_gen::surface::{Monospace, Weight};
/// use cv_gen::Pt;
///
/// let mono = Monospace { advance: Pt(6.0) };
/// let lines = wrap_text(&mono, "AAAAAA BBBBBB", Pt(36.0), Weight::Regular, Pt(11.0), LineBreaks::Preserve);
/// assert_eq!(lines, vec!["AAAAAA", "BBBBBB"]);
/// ```
pub fn wrap_text<M: TextMeasurer>(
    measurer: &M,
    text: &str,
    max_width: Pt,
    font: M::Font,
    size: Pt,
    breaks: LineBreaks,
) -> Vec<String> {
    // normalize newlines and tabs
    let text = text
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', &" ".repeat(TABSIZE));

    let mut lines: Vec<String> = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            if breaks == LineBreaks::Preserve {
                lines.push(String::new());
            }
            continue;
        }

        let mut words = paragraph.split(' ');
        let mut current: String = words.next().unwrap_or_default().to_string();
        for word in words {
            let candidate = format!("{current} {word}");
            if measurer.width_of_text(&candidate, font, size) < max_width {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }
        lines.push(current);
    }

    lines
}
