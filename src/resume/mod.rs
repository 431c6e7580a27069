//! The résumé data model, and the rules that turn its fields into the
//! strings that get printed.

mod format;

pub use format::*;

use crate::labels::LabelKey;
use serde::{Deserialize, Deserializer, Serialize};

/// Everything printed on a résumé. Every field is optional when decoding;
/// missing fields are empty and their sections are skipped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub name: String,
    pub desired_title: String,
    pub phone: Phone,
    pub city: String,
    pub email: String,
    /// The handle part of a `linkedin.com/in/<handle>` profile URL
    pub linkedin: String,
    pub portfolio: String,
    pub summary: String,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    #[serde(deserialize_with = "list_or_comma_separated")]
    pub skills: Vec<String>,
    pub languages: Vec<Language>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Phone {
    /// Including the leading `+`, e.g. `+55`
    pub country_code: String,
    pub area_code: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub technologies: String,
    /// One activity per line
    pub activities: String,
    /// One result per line
    pub results: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub level: EducationLevel,
    pub course: String,
    pub institution: String,
    pub period: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    #[default]
    #[serde(alias = "superior")]
    HigherEducation,
    #[serde(alias = "tecnologo")]
    Technologist,
    #[serde(alias = "medio")]
    HighSchool,
    #[serde(alias = "tecnico")]
    Technical,
    #[serde(alias = "pos")]
    Postgraduate,
    #[serde(alias = "mestrado")]
    Masters,
    #[serde(alias = "doutorado")]
    Doctorate,
    #[serde(alias = "outro")]
    Other,
}

impl EducationLevel {
    pub fn label_key(self) -> LabelKey {
        match self {
            EducationLevel::HigherEducation => LabelKey::HigherEducation,
            EducationLevel::Technologist => LabelKey::Technologist,
            EducationLevel::HighSchool => LabelKey::HighSchool,
            EducationLevel::Technical => LabelKey::Technical,
            EducationLevel::Postgraduate => LabelKey::Postgraduate,
            EducationLevel::Masters => LabelKey::Masters,
            EducationLevel::Doctorate => LabelKey::Doctorate,
            EducationLevel::Other => LabelKey::OtherEducation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub name: String,
    pub proficiency: String,
}

impl ResumeData {
    /// Read a résumé from JSON
    pub fn from_json(json: &str) -> Result<ResumeData, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Split a comma separated skill string into skills, trimming each one and
/// dropping empty entries.
///
/// ```
/// use cv_gen::resume::parse_skill_list;
///
/// assert_eq!(parse_skill_list("Rust, Go,, SQL "), vec!["Rust", "Go", "SQL"]);
/// ```
pub fn parse_skill_list(skills: &str) -> Vec<String> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

fn list_or_comma_separated<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Skills {
        List(Vec<String>),
        Text(String),
    }

    Ok(match Skills::deserialize(deserializer)? {
        Skills::List(list) => list,
        Skills::Text(text) => parse_skill_list(&text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_empty() {
        let resume = ResumeData::from_json(r#"{"name": "Ana Souza"}"#).unwrap();
        assert_eq!(resume.name, "Ana Souza");
        assert!(resume.experiences.is_empty());
        assert_eq!(resume.phone, Phone::default());
    }

    #[test]
    fn skills_may_be_a_comma_separated_string() {
        let resume = ResumeData::from_json(r#"{"skills": "React, Node.js , ,Go"}"#).unwrap();
        assert_eq!(resume.skills, vec!["React", "Node.js", "Go"]);

        let resume = ResumeData::from_json(r#"{"skills": ["React", "Go"]}"#).unwrap();
        assert_eq!(resume.skills, vec!["React", "Go"]);
    }

    #[test]
    fn education_levels_accept_short_codes() {
        let education: Education =
            serde_json::from_str(r#"{"level": "mestrado", "course": "CS"}"#).unwrap();
        assert_eq!(education.level, EducationLevel::Masters);

        let education: Education = serde_json::from_str(r#"{"level": "high_school"}"#).unwrap();
        assert_eq!(education.level, EducationLevel::HighSchool);
        assert_eq!(Education::default().level, EducationLevel::HigherEducation);
    }
}
