//! Fonts a résumé can be set in: the built-in Helvetica faces, or one
//! TrueType family supplied as a regular and a bold file.

mod standard;
mod truetype;

pub use standard::*;
pub use truetype::*;

use crate::refs::ObjectReferences;
use crate::units::Pt;
use crate::PDFError;
use id_arena::Id;
use pdf_writer::Pdf;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A font registered with a [`Document`](crate::Document). Fonts are stored
/// document-wide and referred to by their [`Id`] from any page.
pub enum Font {
    Standard(StandardFont),
    TrueType(TrueTypeFont),
}

impl Font {
    pub fn standard(font: StandardFont) -> Font {
        Font::Standard(font)
    }

    /// Parse a TrueType / OpenType font from raw bytes
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        Ok(Font::TrueType(TrueTypeFont::load(bytes)?))
    }

    /// Calculate the width of a given string of text given the font size
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        match self {
            Font::Standard(font) => font.width_of_text(text, size),
            Font::TrueType(font) => font.width_of_text(text, size),
        }
    }

    /// Encode text into the string bytes a `Tj` operator expects for this font
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Font::Standard(font) => font.encode(text),
            Font::TrueType(font) => font.encode(text),
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        match self {
            Font::Standard(font) => font.write(refs, id.index(), writer),
            Font::TrueType(font) => font.write(refs, id.index(), writer),
        }
    }
}

/// The regular and bold handles of the one typeface a layout uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontPair<F> {
    pub regular: F,
    pub bold: F,
}

/// Which typeface to set the résumé in
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Typeface {
    /// Helvetica and Helvetica-Bold, which every PDF reader provides
    #[default]
    Helvetica,
    /// A TrueType family loaded from disk and embedded in the document
    TrueType { regular: PathBuf, bold: PathBuf },
}

impl Typeface {
    /// Produce the regular and bold fonts for this typeface, reading font
    /// files from disk where needed
    pub fn load(&self) -> Result<FontPair<Font>, PDFError> {
        match self {
            Typeface::Helvetica => Ok(FontPair {
                regular: Font::standard(StandardFont::Helvetica),
                bold: Font::standard(StandardFont::HelveticaBold),
            }),
            Typeface::TrueType { regular, bold } => {
                log::debug!("loading typeface from {} and {}", regular.display(), bold.display());
                Ok(FontPair {
                    regular: Font::load(std::fs::read(regular)?)?,
                    bold: Font::load(std::fs::read(bold)?)?,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_files_are_io_errors() {
        let typeface = Typeface::TrueType {
            regular: PathBuf::from("/nonexistent/Regular.ttf"),
            bold: PathBuf::from("/nonexistent/Bold.ttf"),
        };
        assert!(matches!(typeface.load(), Err(PDFError::Io(_))));
    }

    #[test]
    fn garbage_bytes_do_not_parse() {
        assert!(matches!(
            Font::load(b"definitely not a font".to_vec()),
            Err(PDFError::FaceParsingError(_))
        ));
    }

    #[test]
    fn helvetica_pair() {
        let pair = Typeface::Helvetica.load().unwrap();
        assert!(matches!(pair.regular, Font::Standard(StandardFont::Helvetica)));
        assert!(matches!(pair.bold, Font::Standard(StandardFont::HelveticaBold)));
    }
}
