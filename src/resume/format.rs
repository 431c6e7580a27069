use crate::resume::{Education, Experience, Language, Phone, ResumeData};
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

static LIST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[-•*]\s*").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// The trimmed value, if there is anything left of it
fn present(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

impl Phone {
    /// `+55 (11) 99999-9999`, leaving out whichever of the country and area
    /// code are missing. `None` without a number.
    pub fn formatted(&self) -> Option<String> {
        let number = present(&self.number)?;
        let mut parts: Vec<String> = Vec::with_capacity(3);
        if let Some(country) = present(&self.country_code) {
            parts.push(country.to_string());
        }
        if let Some(area) = present(&self.area_code) {
            parts.push(format!("({area})"));
        }
        parts.push(number.to_string());
        Some(parts.join(" "))
    }
}

/// Phone, email, LinkedIn, portfolio and city, whichever are filled in
pub fn contact_line(resume: &ResumeData, separator: &str) -> String {
    let linkedin = present(&resume.linkedin).map(|handle| format!("linkedin.com/in/{handle}"));
    [
        resume.phone.formatted(),
        present(&resume.email).map(str::to_string),
        linkedin,
        present(&resume.portfolio).map(str::to_string),
        present(&resume.city).map(str::to_string),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(separator)
}

/// `role | company (period)`. `None` for an entry with neither a role nor a
/// company, which is left off the résumé.
pub fn experience_header(experience: &Experience) -> Option<String> {
    let role = present(&experience.role);
    let company = present(&experience.company);
    if role.is_none() && company.is_none() {
        return None;
    }

    let mut header = [role, company].into_iter().flatten().collect::<Vec<_>>().join(" | ");
    if let Some(period) = present(&experience.period) {
        header.push_str(&format!(" ({period})"));
    }
    Some(header)
}

/// `level - course - institution (period)`. `None` when there is neither a
/// course nor an institution.
pub fn education_line(education: &Education, level_label: &str) -> Option<String> {
    let course = present(&education.course);
    let institution = present(&education.institution);
    if course.is_none() && institution.is_none() {
        return None;
    }

    let mut line = [present(level_label), course, institution]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" - ");
    if let Some(period) = present(&education.period) {
        line.push_str(&format!(" ({period})"));
    }
    Some(line)
}

/// `English (Fluent)`, or just the language when no proficiency is given
pub fn language_line(language: &Language) -> Option<String> {
    let name = present(&language.name)?;
    Some(match present(&language.proficiency) {
        Some(proficiency) => format!("{name} ({proficiency})"),
        None => name.to_string(),
    })
}

/// Trimmed skills with blanks and repeats removed, in the order they first
/// appear
pub fn dedupe_skills(skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .filter_map(|skill| present(skill))
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Remove a leading `-`, `•` or `*` typed as a list marker
pub fn strip_list_marker(line: &str) -> &str {
    match LIST_MARKER.find(line) {
        Some(marker) => &line[marker.end()..],
        None => line,
    }
}

/// The non-blank lines of a multi-line field, trimmed, one per bullet
pub fn bullet_lines(text: &str, strip_markers: bool) -> Vec<String> {
    text.lines()
        .map(|line| if strip_markers { strip_list_marker(line) } else { line })
        .filter_map(present)
        .map(str::to_string)
        .collect()
}

/// `CV_<Name>.pdf`, with whitespace runs turned into underscores and
/// anything that could escape the output directory removed
pub fn pdf_file_name(name: &str) -> String {
    let safe: String = name
        .trim()
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | '\0'))
        .collect();
    format!("CV_{}.pdf", WHITESPACE.replace_all(&safe, "_"))
}
