use cv_gen::layout::{Section, SkillsLayout, Style};
use cv_gen::resume::{Education, EducationLevel, Experience, Language};
use cv_gen::surface::{DrawOp, HelveticaMetrics, Recorder, Weight};
use cv_gen::{Composer, FontPair, LabelCatalog, Locale, ResumeData};

const FONTS: FontPair<Weight> = FontPair {
    regular: Weight::Regular,
    bold: Weight::Bold,
};

fn compose(resume: &ResumeData, style: Style, locale: Locale) -> (usize, Recorder<HelveticaMetrics>) {
    let mut recorder = Recorder::new(HelveticaMetrics);
    let composer = Composer::new(style, LabelCatalog::builtin(), locale);
    let pages = composer.compose(resume, &mut recorder, FONTS);
    (pages, recorder)
}

fn base_resume() -> ResumeData {
    ResumeData {
        name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
        summary: "Backend engineer.".to_string(),
        ..ResumeData::default()
    }
}

fn rule_count(recorder: &Recorder<HelveticaMetrics>) -> usize {
    recorder
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Line { .. }))
        .count()
}

#[test]
fn empty_experience_list_has_no_title() {
    let (_, recorder) = compose(&base_resume(), Style::default(), Locale::En);
    let texts = recorder.texts();
    assert!(texts.contains(&"SUMMARY"));
    assert!(!texts.contains(&"EXPERIENCE"));
}

#[test]
fn entries_without_role_or_company_are_skipped() {
    let mut resume = base_resume();
    resume.experiences = vec![Experience {
        period: "2020".to_string(),
        activities: "Did things".to_string(),
        ..Experience::default()
    }];
    let (_, recorder) = compose(&resume, Style::default(), Locale::En);
    assert!(!recorder.texts().contains(&"EXPERIENCE"));
    assert!(!recorder.texts().contains(&"Did things"));
}

#[test]
fn company_only_entry_is_still_emitted() {
    let mut resume = base_resume();
    resume.experiences = vec![Experience {
        company: "Acme".to_string(),
        activities: "Built the billing system\n\nOn-call rotation".to_string(),
        ..Experience::default()
    }];
    let (_, recorder) = compose(&resume, Style::default(), Locale::En);
    let texts = recorder.texts();
    let start = texts.iter().position(|t| *t == "EXPERIENCE").unwrap();
    assert_eq!(
        &texts[start..],
        &["EXPERIENCE", "Acme", "•", "Built the billing system", "•", "On-call rotation"]
    );
}

#[test]
fn sections_follow_the_default_order_with_dividers_between() {
    let mut resume = base_resume();
    resume.experiences = vec![Experience {
        role: "Engineer".to_string(),
        ..Experience::default()
    }];
    resume.education = vec![Education {
        level: EducationLevel::Masters,
        course: "Computer Science".to_string(),
        institution: "USP".to_string(),
        period: "2019".to_string(),
    }];
    resume.skills = vec!["Rust".to_string()];
    resume.languages = vec![Language {
        name: "English".to_string(),
        proficiency: "Fluent".to_string(),
    }];
    resume.certifications = vec!["CKAD".to_string(), "  ".to_string()];

    let (_, recorder) = compose(&resume, Style::default(), Locale::Pt);
    let titles: Vec<&str> = recorder
        .texts()
        .into_iter()
        .filter(|t| {
            ["RESUMO", "EXPERIÊNCIA", "FORMAÇÃO", "HABILIDADES", "IDIOMAS", "CERTIFICAÇÕES"].contains(t)
        })
        .collect();
    assert_eq!(
        titles,
        vec!["RESUMO", "EXPERIÊNCIA", "FORMAÇÃO", "HABILIDADES", "IDIOMAS", "CERTIFICAÇÕES"]
    );
    // below the header, then between each of the six sections
    assert_eq!(rule_count(&recorder), 6);
    assert!(recorder
        .texts()
        .contains(&"Mestrado - Computer Science - USP (2019)"));
    assert!(recorder.texts().contains(&"English (Fluent)"));
    assert_eq!(recorder.texts().last(), Some(&"CKAD"));
}

#[test]
fn custom_section_order() {
    let mut resume = base_resume();
    resume.skills = vec!["Rust".to_string()];
    let style = Style {
        sections: vec![Section::Skills, Section::Summary],
        ..Style::default()
    };
    let (_, recorder) = compose(&resume, style, Locale::En);
    let texts = recorder.texts();
    let skills = texts.iter().position(|t| *t == "SKILLS").unwrap();
    let summary = texts.iter().position(|t| *t == "SUMMARY").unwrap();
    assert!(skills < summary);
}

#[test]
fn skills_are_deduplicated() {
    let mut resume = base_resume();
    resume.skills = ["React", " React ", "Go"].iter().map(|s| s.to_string()).collect();

    let (_, recorder) = compose(&resume, Style::default(), Locale::En);
    assert!(recorder.texts().contains(&"React, Go"));

    let style = Style {
        skills: SkillsLayout::Bullets,
        ..Style::default()
    };
    let (_, recorder) = compose(&resume, style, Locale::En);
    let texts = recorder.texts();
    let start = texts.iter().position(|t| *t == "SKILLS").unwrap();
    assert_eq!(&texts[start + 1..], &["•", "React", "•", "Go"]);
}

#[test]
fn list_markers_are_stripped_when_asked() {
    let mut resume = base_resume();
    resume.experiences = vec![Experience {
        role: "Engineer".to_string(),
        results: "- Cut costs by 30%\n• Doubled throughput".to_string(),
        ..Experience::default()
    }];

    let (_, recorder) = compose(&resume, Style::default(), Locale::En);
    assert!(recorder.texts().contains(&"- Cut costs by 30%"));

    let style = Style {
        strip_list_markers: true,
        ..Style::default()
    };
    let (_, recorder) = compose(&resume, style, Locale::En);
    assert!(recorder.texts().contains(&"Cut costs by 30%"));
    assert!(recorder.texts().contains(&"Doubled throughput"));
}

#[test]
fn long_summaries_flow_onto_more_pages() {
    let mut resume = base_resume();
    resume.summary = lipsum::lipsum(2500);
    let (pages, recorder) = compose(&resume, Style::default(), Locale::En);

    assert!(pages >= 2);
    assert_eq!(recorder.page_count(), pages);
    for op in &recorder.ops {
        if let DrawOp::Text { page, at, .. } = op {
            // every line after the first page starts below the top margin
            if *page > 0 {
                assert!(at.1 .0 <= 842.0 - 50.0);
            }
            assert!(at.1 .0 >= 50.0);
        }
    }
}

#[test]
fn invisible_dividers_draw_no_rules() {
    let mut resume = base_resume();
    resume.skills = vec!["Rust".to_string()];
    let style = Style {
        visible_divider: false,
        ..Style::default()
    };
    let (_, recorder) = compose(&resume, style, Locale::En);
    assert_eq!(rule_count(&recorder), 0);
}
