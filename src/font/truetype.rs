use crate::{
    refs::{ObjectReferences, RefType},
    PDFError, Pt,
};
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Str,
};
use std::collections::BTreeMap;

/// A TrueType or OpenType face, embedded in its entirety in the generated PDF.
/// Glyphs are addressed directly by glyph id (Identity-H), so anything the
/// face covers can be shown.
pub struct TrueTypeFont {
    pub face: OwnedFace,
}

impl TrueTypeFont {
    /// Parse a font from raw bytes, returning an error if the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<TrueTypeFont, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(TrueTypeFont { face })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    /// Full name of the face, falling back to the family name and then to a
    /// generic name for faces with an empty name table
    pub fn name(&self) -> String {
        self.name_entry(owned_ttf_parser::name_id::FULL_NAME)
            .or_else(|| self.name_entry(owned_ttf_parser::name_id::FAMILY))
            .unwrap_or_else(|| "EmbeddedFont".to_string())
    }

    fn name_entry(&self, name_id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The glyph shown for `ch`: its own glyph, else the replacement
    /// character, else `?`, else `.notdef`
    pub fn glyph_for(&self, ch: char) -> GlyphId {
        let face = self.face();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
            .unwrap_or(GlyphId(0))
    }

    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let face = self.face();
        let scaling = *size / face.units_per_em() as f32;
        let units: u32 = text
            .chars()
            .map(|ch| face.glyph_hor_advance(self.glyph_for(ch)).unwrap_or_default() as u32)
            .sum();
        Pt(units as f32 * scaling)
    }

    /// Encode text as big-endian glyph ids for a `Tj` operator
    pub fn encode(&self, text: &str) -> Vec<u8> {
        text.chars()
            .flat_map(|ch| self.glyph_for(ch).0.to_be_bytes())
            .collect()
    }

    /// glyph id -> the first unicode character mapped onto it by the cmap
    fn unicode_map(&self) -> BTreeMap<u16, char> {
        let mut map: BTreeMap<u16, char> = BTreeMap::new();
        let Some(cmap) = self.face().tables().cmap else {
            return map;
        };
        for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
            subtable.codepoints(|codepoint| {
                if let (Ok(ch), Some(gid)) =
                    (char::try_from(codepoint), subtable.glyph_index(codepoint))
                {
                    if gid.0 > 0 {
                        map.entry(gid.0).or_insert(ch);
                    }
                }
            });
        }
        map
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let font_id = refs.alloc(RefType::Font(font_index));
        let cid_font_id = refs.alloc(RefType::CidFont(font_index));
        let descriptor_id = refs.alloc(RefType::FontDescriptor(font_index));
        let data_id = refs.alloc(RefType::FontData(font_index));
        let to_unicode_id = refs.alloc(RefType::ToUnicode(font_index));
        let base_font = format!("F{font_index}");

        let face = self.face();
        let scaling = 1000.0 / face.units_per_em() as f32;

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(base_font.as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
        font.finish();

        let widths: Vec<f32> = (0..face.number_of_glyphs())
            .map(|gid| face.glyph_hor_advance(GlyphId(gid)).unwrap_or_default() as f32 * scaling)
            .collect();
        let max_width = widths.iter().copied().fold(0.0, f32::max);

        let mut cid_font = writer.cid_font(cid_font_id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(base_font.as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);
        cid_font.default_width(max_width);
        cid_font.widths().consecutive(0, widths);
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        cid_font.finish();

        let name = self.name().replace(' ', "");
        let bbox = face.global_bounding_box();
        let mut flags = FontFlags::NON_SYMBOLIC;
        if face.is_monospaced() {
            flags.insert(FontFlags::FIXED_PITCH);
        }
        if face.is_italic() {
            flags.insert(FontFlags::ITALIC);
        }

        let mut descriptor = writer.font_descriptor(descriptor_id);
        descriptor.name(Name(name.as_bytes()));
        descriptor.flags(flags);
        descriptor.bbox(pdf_writer::Rect::new(
            bbox.x_min as f32 * scaling,
            bbox.y_min as f32 * scaling,
            bbox.x_max as f32 * scaling,
            bbox.y_max as f32 * scaling,
        ));
        descriptor.italic_angle(0.0);
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.cap_height(
            face.capital_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(face.ascender() as f32 * scaling),
        );
        // the stem width is not stored in TrueType tables; 80 is what most producers write
        descriptor.stem_v(80.0);
        descriptor.font_file2(data_id);
        descriptor.finish();

        writer
            .stream(data_id, self.face.as_slice())
            .pair(Name(b"Length1"), self.face.as_slice().len() as i32);

        let cmap = self.to_unicode_cmap();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            cmap.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(to_unicode_id, compressed.as_slice())
            .filter(Filter::FlateDecode);
    }

    fn to_unicode_cmap(&self) -> String {
        let mut cmap = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n<0000> <FFFF>\nendcodespacerange\n",
        );

        // bfchar blocks hold at most 100 entries
        let entries: Vec<(u16, char)> = self.unicode_map().into_iter().collect();
        for block in entries.chunks(100) {
            cmap.push_str(&format!("{} beginbfchar\n", block.len()));
            for &(gid, ch) in block {
                let mut utf16 = [0u16; 2];
                let units: String = ch
                    .encode_utf16(&mut utf16)
                    .iter()
                    .map(|unit| format!("{unit:04x}"))
                    .collect();
                cmap.push_str(&format!("<{gid:04x}> <{units}>\n"));
            }
            cmap.push_str("endbfchar\n");
        }

        cmap.push_str("endcmap\nCMapName currentdict /CMap defineresource pop\nend\nend\n");
        cmap
    }
}
