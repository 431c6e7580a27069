//! Localised text the composer prints: section titles, the technologies
//! prefix, and the names of education levels.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Languages the built-in labels are available in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Pt,
    En,
    Es,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Pt => write!(f, "pt"),
            Locale::En => write!(f, "en"),
            Locale::Es => write!(f, "es"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pt" => Ok(Locale::Pt),
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => Err(format!("unknown locale `{other}`, expected pt, en or es")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKey {
    Summary,
    Experience,
    Education,
    Skills,
    Languages,
    Certifications,
    /// Prefix of the technologies line of an experience entry
    Technologies,
    HigherEducation,
    Technologist,
    HighSchool,
    Technical,
    Postgraduate,
    Masters,
    Doctorate,
    OtherEducation,
}

type Table = HashMap<LabelKey, String>;

fn table(entries: &[(LabelKey, &str)]) -> Table {
    entries
        .iter()
        .map(|(key, label)| (*key, label.to_string()))
        .collect()
}

static BUILTIN: Lazy<HashMap<Locale, Table>> = Lazy::new(|| {
    use LabelKey::*;

    let mut tables = HashMap::new();
    tables.insert(
        Locale::Pt,
        table(&[
            (Summary, "RESUMO"),
            (Experience, "EXPERIÊNCIA"),
            (Education, "FORMAÇÃO"),
            (Skills, "HABILIDADES"),
            (Languages, "IDIOMAS"),
            (Certifications, "CERTIFICAÇÕES"),
            (Technologies, "Tecnologias utilizadas"),
            (HigherEducation, "Ensino Superior"),
            (Technologist, "Tecnólogo"),
            (HighSchool, "Ensino Médio"),
            (Technical, "Técnico"),
            (Postgraduate, "Pós-Graduação"),
            (Masters, "Mestrado"),
            (Doctorate, "Doutorado"),
            (OtherEducation, "Outro"),
        ]),
    );
    tables.insert(
        Locale::En,
        table(&[
            (Summary, "SUMMARY"),
            (Experience, "EXPERIENCE"),
            (Education, "EDUCATION"),
            (Skills, "SKILLS"),
            (Languages, "LANGUAGES"),
            (Certifications, "CERTIFICATIONS"),
            (Technologies, "Technologies used"),
            (HigherEducation, "Bachelor's Degree"),
            (Technologist, "Associate Degree"),
            (HighSchool, "High School"),
            (Technical, "Technical Course"),
            (Postgraduate, "Postgraduate"),
            (Masters, "Master's Degree"),
            (Doctorate, "Doctorate"),
            (OtherEducation, "Other"),
        ]),
    );
    tables.insert(
        Locale::Es,
        table(&[
            (Summary, "RESUMEN"),
            (Experience, "EXPERIENCIA"),
            (Education, "FORMACIÓN"),
            (Skills, "HABILIDADES"),
            (Languages, "IDIOMAS"),
            (Certifications, "CERTIFICACIONES"),
            (Technologies, "Tecnologías utilizadas"),
            (HigherEducation, "Educación Superior"),
            (Technologist, "Tecnólogo"),
            (HighSchool, "Educación Secundaria"),
            (Technical, "Técnico"),
            (Postgraduate, "Posgrado"),
            (Masters, "Maestría"),
            (Doctorate, "Doctorado"),
            (OtherEducation, "Otro"),
        ]),
    );
    tables
});

/// Label lookup by locale and key. Lookups that the requested locale
/// doesn't cover fall back to English, then to an empty string.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelCatalog {
    tables: HashMap<Locale, Table>,
}

impl LabelCatalog {
    /// Portuguese, English and Spanish labels
    pub fn builtin() -> LabelCatalog {
        LabelCatalog {
            tables: BUILTIN.clone(),
        }
    }

    /// Set a single label, replacing any existing one
    pub fn insert<S: Into<String>>(&mut self, locale: Locale, key: LabelKey, label: S) -> &mut Self {
        self.tables
            .entry(locale)
            .or_default()
            .insert(key, label.into());
        self
    }

    /// Layer `overrides` on top of this catalog, label by label
    pub fn merge(mut self, overrides: &LabelCatalog) -> LabelCatalog {
        for (locale, table) in &overrides.tables {
            for (key, label) in table {
                self.insert(*locale, *key, label.clone());
            }
        }
        self
    }

    pub fn get(&self, locale: Locale, key: LabelKey) -> &str {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(&key))
            .or_else(|| self.tables.get(&Locale::En).and_then(|table| table.get(&key)))
            .map(String::as_str)
            .unwrap_or("")
    }
}
