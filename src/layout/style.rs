use crate::colour::{colours, Colour};
use crate::layout::Margins;
use crate::pagesize::{PageSize, Paper};
use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// How embedded newlines in free text are treated when wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineBreaks {
    /// Every newline starts a new paragraph; empty paragraphs become blank lines
    #[default]
    Preserve,
    /// Newlines still split paragraphs, but empty paragraphs are dropped
    Collapse,
}

/// How the skills section is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillsLayout {
    /// One comma separated paragraph
    #[default]
    Paragraph,
    /// One bullet per skill
    Bullets,
}

/// The optional sections that follow the header, in the order they are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Summary,
    Experience,
    Education,
    Skills,
    Languages,
    Certifications,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Summary,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Languages,
        Section::Certifications,
    ];
}

/// Every constant that shapes a rendered résumé. The defaults reproduce the
/// classic single column layout: A4, 50pt margins, Helvetica at 11pt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub paper: Paper,
    pub margins: Margins,

    /// Distance between consecutive lines of body text
    pub line_height: Pt,
    /// Space taken by a divider between sections
    pub section_gap: Pt,
    /// Space after a block of technologies or activities
    pub paragraph_gap: Pt,
    /// Space between two experience entries
    pub entry_gap: Pt,
    pub bullet_indent: Pt,
    /// How far above the text baseline the bullet glyph sits
    pub bullet_rise: Pt,
    /// Added to the font size to get the height of a title
    pub title_padding: Pt,
    /// Added to the font size to get the height of a section header
    pub header_padding: Pt,

    pub name_size: Pt,
    pub desired_title_size: Pt,
    pub desired_title_gap: Pt,
    pub section_title_size: Pt,
    pub entry_header_size: Pt,
    pub body_size: Pt,
    pub detail_size: Pt,

    pub text_colour: Colour,
    pub subtitle_colour: Colour,
    pub detail_colour: Colour,
    pub divider_colour: Colour,
    pub divider_thickness: Pt,

    /// Draw dividers as a rule; when off they are only half the gap of empty space
    pub visible_divider: bool,
    pub line_breaks: LineBreaks,
    /// Remove a leading `-`, `•` or `*` from activity and result lines
    pub strip_list_markers: bool,
    pub skills: SkillsLayout,
    pub contact_separator: String,
    pub sections: Vec<Section>,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            paper: Paper::A4,
            margins: Margins::all(Pt(50.0)),
            line_height: Pt(16.0),
            section_gap: Pt(20.0),
            paragraph_gap: Pt(8.0),
            entry_gap: Pt(10.0),
            bullet_indent: Pt(15.0),
            bullet_rise: Pt(4.0),
            title_padding: Pt(8.0),
            header_padding: Pt(6.0),
            name_size: Pt(20.0),
            desired_title_size: Pt(14.0),
            desired_title_gap: Pt(4.0),
            section_title_size: Pt(14.0),
            entry_header_size: Pt(12.0),
            body_size: Pt(11.0),
            detail_size: Pt(10.0),
            text_colour: colours::BLACK,
            subtitle_colour: colours::DARK_GREY,
            detail_colour: colours::MEDIUM_GREY,
            divider_colour: colours::LIGHT_GREY,
            divider_thickness: Pt(0.5),
            visible_divider: true,
            line_breaks: LineBreaks::Preserve,
            strip_list_markers: false,
            skills: SkillsLayout::Paragraph,
            contact_separator: " • ".to_string(),
            sections: Section::ALL.to_vec(),
        }
    }
}

impl Style {
    pub fn page_size(&self) -> PageSize {
        self.paper.size()
    }

    /// Width available to text between the left and right margins
    pub fn content_width(&self) -> Pt {
        self.margins.content_width(self.page_size().0)
    }
}
