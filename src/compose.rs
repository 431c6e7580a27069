//! Lays a whole résumé out: the header first, then every section that has
//! something in it, in the order the style asks for.

use crate::config::GeneratorConfig;
use crate::document::Document;
use crate::font::FontPair;
use crate::info::Info;
use crate::labels::{LabelCatalog, LabelKey, Locale};
use crate::layout::{
    draw_body_text, draw_bullet, draw_divider, draw_section_header, draw_title, LayoutContext,
    Section, SkillsLayout, Style, TextBlock,
};
use crate::resume::{
    bullet_lines, contact_line, dedupe_skills, education_line, experience_header, language_line,
    pdf_file_name, ResumeData,
};
use crate::surface::Surface;
use crate::units::Pt;
use crate::PDFError;

/// Draws résumés onto any [`Surface`] with a fixed style, label catalog and
/// locale
pub struct Composer {
    style: Style,
    labels: LabelCatalog,
    locale: Locale,
}

impl Composer {
    pub fn new(style: Style, labels: LabelCatalog, locale: Locale) -> Composer {
        Composer {
            style,
            labels,
            locale,
        }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    fn label(&self, key: LabelKey) -> &str {
        self.labels.get(self.locale, key)
    }

    /// Lay `resume` out on `surface`, starting on a new page, and return how
    /// many pages it took
    pub fn compose<S: Surface>(
        &self,
        resume: &ResumeData,
        surface: &mut S,
        fonts: FontPair<S::Font>,
    ) -> usize {
        let mut ctx = LayoutContext::new(surface, fonts, &self.style);

        self.header(&mut ctx, resume);
        draw_divider(&mut ctx);

        let mut emitted_any = false;
        for section in &self.style.sections {
            if !self.has_content(*section, resume) {
                log::debug!("skipping empty {section:?} section");
                continue;
            }
            if emitted_any {
                draw_divider(&mut ctx);
            }
            log::debug!("{section:?} section starts on page {}", ctx.page_count());
            match section {
                Section::Summary => self.summary(&mut ctx, resume),
                Section::Experience => self.experience(&mut ctx, resume),
                Section::Education => self.education(&mut ctx, resume),
                Section::Skills => self.skills(&mut ctx, resume),
                Section::Languages => self.languages(&mut ctx, resume),
                Section::Certifications => self.certifications(&mut ctx, resume),
            }
            emitted_any = true;
        }

        ctx.page_count()
    }

    fn has_content(&self, section: Section, resume: &ResumeData) -> bool {
        match section {
            Section::Summary => !resume.summary.trim().is_empty(),
            Section::Experience => resume
                .experiences
                .iter()
                .any(|experience| experience_header(experience).is_some()),
            Section::Education => resume
                .education
                .iter()
                .any(|education| education_line(education, "").is_some()),
            Section::Skills => !dedupe_skills(&resume.skills).is_empty(),
            Section::Languages => resume
                .languages
                .iter()
                .any(|language| language_line(language).is_some()),
            Section::Certifications => resume
                .certifications
                .iter()
                .any(|certification| !certification.trim().is_empty()),
        }
    }

    fn header<S: Surface>(&self, ctx: &mut LayoutContext<'_, S>, resume: &ResumeData) {
        let style = &self.style;
        draw_title(ctx, &resume.name.trim().to_uppercase(), style.name_size, style.text_colour);

        let desired_title = resume.desired_title.trim();
        if !desired_title.is_empty() {
            draw_section_header(ctx, desired_title, style.desired_title_size, style.subtitle_colour);
            ctx.advance(style.desired_title_gap);
        }

        let contact = contact_line(resume, &style.contact_separator);
        draw_body_text(ctx, &TextBlock::from(contact), Pt(0.0), style.detail_size, style.detail_colour);
    }

    fn section_title<S: Surface>(&self, ctx: &mut LayoutContext<'_, S>, key: LabelKey) {
        draw_title(ctx, self.label(key), self.style.section_title_size, self.style.text_colour);
    }

    fn bullets<S: Surface>(&self, ctx: &mut LayoutContext<'_, S>, items: &[String]) {
        for item in items {
            draw_bullet(ctx, item, self.style.bullet_indent, self.style.body_size);
        }
    }

    fn summary<S: Surface>(&self, ctx: &mut LayoutContext<'_, S>, resume: &ResumeData) {
        self.section_title(ctx, LabelKey::Summary);
        let style = &self.style;
        draw_body_text(
            ctx,
            &TextBlock::from(resume.summary.trim()),
            Pt(0.0),
            style.body_size,
            style.text_colour,
        );
    }

    fn experience<S: Surface>(&self, ctx: &mut LayoutContext<'_, S>, resume: &ResumeData) {
        self.section_title(ctx, LabelKey::Experience);
        let style = &self.style;

        let entries = resume
            .experiences
            .iter()
            .filter_map(|experience| Some((experience, experience_header(experience)?)));
        for (index, (experience, header)) in entries.enumerate() {
            if index > 0 {
                ctx.advance(style.entry_gap);
            }
            draw_section_header(ctx, &header, style.entry_header_size, style.subtitle_colour);

            let technologies = experience.technologies.trim();
            if !technologies.is_empty() {
                let line = format!("{}: {technologies}", self.label(LabelKey::Technologies));
                draw_body_text(ctx, &TextBlock::from(line), Pt(0.0), style.detail_size, style.detail_colour);
                ctx.advance(style.paragraph_gap);
            }

            let activities = bullet_lines(&experience.activities, style.strip_list_markers);
            if !activities.is_empty() {
                self.bullets(ctx, &activities);
                ctx.advance(style.paragraph_gap);
            }

            let results = bullet_lines(&experience.results, style.strip_list_markers);
            self.bullets(ctx, &results);
        }
    }

    fn education<S: Surface>(&self, ctx: &mut LayoutContext<'_, S>, resume: &ResumeData) {
        self.section_title(ctx, LabelKey::Education);
        let lines: Vec<String> = resume
            .education
            .iter()
            .filter_map(|education| education_line(education, self.label(education.level.label_key())))
            .collect();
        self.bullets(ctx, &lines);
    }

    fn skills<S: Surface>(&self, ctx: &mut LayoutContext<'_, S>, resume: &ResumeData) {
        self.section_title(ctx, LabelKey::Skills);
        let skills = dedupe_skills(&resume.skills);
        let style = &self.style;
        match style.skills {
            SkillsLayout::Paragraph => draw_body_text(
                ctx,
                &TextBlock::from(skills.join(", ")),
                Pt(0.0),
                style.body_size,
                style.text_colour,
            ),
            SkillsLayout::Bullets => self.bullets(ctx, &skills),
        }
    }

    fn languages<S: Surface>(&self, ctx: &mut LayoutContext<'_, S>, resume: &ResumeData) {
        self.section_title(ctx, LabelKey::Languages);
        let lines: Vec<String> = resume.languages.iter().filter_map(language_line).collect();
        self.bullets(ctx, &lines);
    }

    fn certifications<S: Surface>(&self, ctx: &mut LayoutContext<'_, S>, resume: &ResumeData) {
        self.section_title(ctx, LabelKey::Certifications);
        let lines: Vec<String> = resume
            .certifications
            .iter()
            .map(|certification| certification.trim())
            .filter(|certification| !certification.is_empty())
            .map(str::to_string)
            .collect();
        self.bullets(ctx, &lines);
    }
}

/// A rendered résumé, ready to be saved
#[derive(Debug, Clone)]
pub struct GeneratedPdf {
    /// Suggested file name, `CV_<Name>.pdf`
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Render `resume` to a PDF in memory.
///
/// Nothing is returned unless the whole document could be produced; a font
/// that cannot be loaded or margins wider than the page fail the call.
///
/// ```
/// use cv_gen::{generate_pdf, GeneratorConfig, ResumeData};
///
/// let resume = ResumeData {
///     name: "Ana Souza".to_string(),
///     email: "ana@example.com".to_string(),
///     summary: "Backend engineer.".to_string(),
///     ..ResumeData::default()
/// };
/// let pdf = generate_pdf(&resume, &GeneratorConfig::default()).unwrap();
/// assert_eq!(pdf.file_name, "CV_Ana_Souza.pdf");
/// assert_eq!(pdf.page_count, 1);
/// assert!(pdf.bytes.starts_with(b"%PDF-"));
/// ```
pub fn generate_pdf(resume: &ResumeData, config: &GeneratorConfig) -> Result<GeneratedPdf, PDFError> {
    render(resume, config).inspect_err(|err| log::error!("failed to generate résumé PDF: {err}"))
}

fn render(resume: &ResumeData, config: &GeneratorConfig) -> Result<GeneratedPdf, PDFError> {
    // bullets are the most indented text
    let width = config.style.content_width() - config.style.bullet_indent;
    if width <= Pt(0.0) {
        return Err(PDFError::NoContentWidth { width });
    }

    let typeface = config.typeface.load()?;
    let mut doc = Document {
        compress: config.compress,
        ..Document::default()
    };
    let fonts = FontPair {
        regular: doc.add_font(typeface.regular),
        bold: doc.add_font(typeface.bold),
    };

    let labels = LabelCatalog::builtin().merge(&config.labels);
    let composer = Composer::new(config.style.clone(), labels, config.locale);
    let page_count = composer.compose(resume, &mut doc, fonts);

    if config.metadata {
        doc.set_info(document_info(resume, config));
    }

    let file_name = pdf_file_name(&resume.name);
    let mut bytes = Vec::new();
    doc.write(&mut bytes)?;

    log::info!(
        "generated {file_name}: {page_count} page(s), {} bytes",
        bytes.len()
    );
    Ok(GeneratedPdf {
        file_name,
        bytes,
        page_count,
    })
}

fn document_info(resume: &ResumeData, config: &GeneratorConfig) -> Info {
    let mut info = Info::new();
    let name = resume.name.trim();
    if !name.is_empty() {
        info.title(format!("CV - {name}")).author(name);
    }
    if !resume.desired_title.trim().is_empty() {
        info.subject(resume.desired_title.trim());
    }
    let skills = dedupe_skills(&resume.skills);
    if !skills.is_empty() {
        info.keywords(skills.join(", "));
    }
    if let Some(date) = config.creation_date {
        info.creation_date(date);
    }
    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{HelveticaMetrics, Recorder, Weight};

    const FONTS: FontPair<Weight> = FontPair {
        regular: Weight::Regular,
        bold: Weight::Bold,
    };

    fn composer(style: Style) -> Composer {
        Composer::new(style, LabelCatalog::builtin(), Locale::En)
    }

    #[test]
    fn header_only_resume() {
        let resume = ResumeData {
            name: "ana souza".to_string(),
            desired_title: "Engineer".to_string(),
            email: "ana@example.com".to_string(),
            ..ResumeData::default()
        };
        let mut recorder = Recorder::new(HelveticaMetrics);
        let pages = composer(Style::default()).compose(&resume, &mut recorder, FONTS);
        assert_eq!(pages, 1);
        assert_eq!(recorder.texts(), vec!["ANA SOUZA", "Engineer", "ana@example.com"]);
        // one divider below the header and nothing after it
        let rules = recorder.ops.iter().filter(|op| op.text().is_none()).count();
        assert_eq!(rules, 1);
    }

    #[test]
    fn experience_spacing() {
        let resume = ResumeData {
            experiences: vec![
                crate::resume::Experience {
                    role: "Dev".to_string(),
                    technologies: "Rust".to_string(),
                    activities: "Built\nShipped".to_string(),
                    results: "Fast".to_string(),
                    ..Default::default()
                },
                crate::resume::Experience {
                    company: "Acme".to_string(),
                    ..Default::default()
                },
            ],
            ..ResumeData::default()
        };
        let style = Style {
            sections: vec![Section::Experience],
            ..Style::default()
        };
        let mut recorder = Recorder::new(HelveticaMetrics);
        composer(style).compose(&resume, &mut recorder, FONTS);

        let ys: Vec<(String, f32)> = recorder
            .ops
            .iter()
            .filter_map(|op| match op {
                crate::surface::DrawOp::Text { text, at, .. } if text != "•" => {
                    Some((text.clone(), at.1 .0))
                }
                _ => None,
            })
            .collect();
        let y_of = |needle: &str| ys.iter().find(|(text, _)| text == needle).map(|(_, y)| *y).unwrap();

        // name 28, empty contact line 0, divider 20
        assert_eq!(y_of("EXPERIENCE"), 792.0 - 28.0 - 20.0);
        assert_eq!(y_of("Dev"), y_of("EXPERIENCE") - 22.0);
        assert_eq!(y_of("Technologies used: Rust"), y_of("Dev") - 18.0);
        assert_eq!(y_of("Built"), y_of("Technologies used: Rust") - 16.0 - 8.0);
        assert_eq!(y_of("Shipped"), y_of("Built") - 16.0);
        assert_eq!(y_of("Fast"), y_of("Shipped") - 16.0 - 8.0);
        assert_eq!(y_of("Acme"), y_of("Fast") - 16.0 - 10.0);
    }
}
