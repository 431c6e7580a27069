//! The standard Helvetica faces every PDF reader ships with. Nothing is
//! embedded; text is encoded as WinAnsi bytes and measured with the Adobe
//! font metrics below (units of 1/1000 em).

use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use pdf_writer::{Name, Pdf};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

/// Printable ASCII, 0x20..=0x7E
#[rustfmt::skip]
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Latin-1 supplement, 0xA0..=0xFF
#[rustfmt::skip]
const HELVETICA_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// Map a character onto its WinAnsiEncoding byte, if it has one
pub fn win_ansi(ch: char) -> Option<u8> {
    match ch {
        ' '..='~' | '\u{A0}'..='\u{FF}' => Some(ch as u8),
        '€' => Some(0x80),
        '‚' => Some(0x82),
        'ƒ' => Some(0x83),
        '„' => Some(0x84),
        '…' => Some(0x85),
        '†' => Some(0x86),
        '‡' => Some(0x87),
        'ˆ' => Some(0x88),
        '‰' => Some(0x89),
        'Š' => Some(0x8A),
        '‹' => Some(0x8B),
        'Œ' => Some(0x8C),
        'Ž' => Some(0x8E),
        '\u{2018}' => Some(0x91),
        '\u{2019}' => Some(0x92),
        '\u{201C}' => Some(0x93),
        '\u{201D}' => Some(0x94),
        '•' => Some(0x95),
        '–' => Some(0x96),
        '—' => Some(0x97),
        '˜' => Some(0x98),
        '™' => Some(0x99),
        'š' => Some(0x9A),
        '›' => Some(0x9B),
        'œ' => Some(0x9C),
        'ž' => Some(0x9E),
        'Ÿ' => Some(0x9F),
        _ => None,
    }
}

impl StandardFont {
    /// The PostScript name readers look the face up by
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Encode text for a `Tj` operator. Characters outside WinAnsi become `?`.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        text.chars()
            .map(|ch| {
                win_ansi(ch).unwrap_or_else(|| {
                    log::warn!("{:?} cannot be shown with {}", ch, self.base_font());
                    b'?'
                })
            })
            .collect()
    }

    /// Advance width of an encoded byte, in 1/1000 em
    fn advance(&self, byte: u8) -> u16 {
        let bold = matches!(self, StandardFont::HelveticaBold);
        match byte {
            0x20..=0x7E => {
                let i = (byte - 0x20) as usize;
                if bold {
                    HELVETICA_BOLD_ASCII[i]
                } else {
                    HELVETICA_ASCII[i]
                }
            }
            0xA0..=0xFF => {
                let i = (byte - 0xA0) as usize;
                if bold {
                    HELVETICA_BOLD_LATIN1[i]
                } else {
                    HELVETICA_LATIN1[i]
                }
            }
            0x82 | 0x91 | 0x92 => {
                if bold {
                    278
                } else {
                    222
                }
            }
            0x84 | 0x93 | 0x94 => {
                if bold {
                    500
                } else {
                    333
                }
            }
            0x9A => {
                if bold {
                    556
                } else {
                    500
                }
            }
            0x85 | 0x89 | 0x8C | 0x97 | 0x99 => 1000,
            0x8A | 0x9F => 667,
            0x8E => 611,
            0x88 | 0x8B | 0x98 | 0x9B => 333,
            0x95 => 350,
            0x9C => 944,
            0x9E => 500,
            // euro, florin, daggers, en dash
            _ => 556,
        }
    }

    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text
            .chars()
            .map(|ch| self.advance(win_ansi(ch).unwrap_or(b'?')) as u32)
            .sum();
        Pt(units as f32 * *size / 1000.0)
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let id = refs.alloc(RefType::Font(font_index));
        writer
            .type1_font(id)
            .base_font(Name(self.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_with_afm_widths() {
        // H(722) + i(222) = 944 units
        let width = StandardFont::Helvetica.width_of_text("Hi", Pt(10.0));
        assert!((*width - 9.44).abs() < 1e-4);

        // bold H(722) + i(278) = 1000 units
        let width = StandardFont::HelveticaBold.width_of_text("Hi", Pt(10.0));
        assert!((*width - 10.0).abs() < 1e-4);
    }

    #[test]
    fn accented_latin_characters_are_encoded() {
        let bytes = StandardFont::Helvetica.encode("São • ok");
        assert_eq!(bytes, vec![b'S', 0xE3, b'o', b' ', 0x95, b' ', b'o', b'k']);
    }

    #[test]
    fn unknown_characters_fall_back_to_question_mark() {
        let bytes = StandardFont::Helvetica.encode("日");
        assert_eq!(bytes, vec![b'?']);
        let question = StandardFont::Helvetica.width_of_text("?", Pt(1000.0));
        let unknown = StandardFont::Helvetica.width_of_text("日", Pt(1000.0));
        assert_eq!(question, unknown);
    }
}
