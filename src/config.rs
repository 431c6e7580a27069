use crate::font::Typeface;
use crate::labels::{LabelCatalog, Locale};
use crate::layout::Style;
use crate::PDFError;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything about how a résumé is rendered, apart from its content.
///
/// All fields have defaults, so a configuration file only needs the
/// settings it changes:
///
/// ```
/// use cv_gen::{GeneratorConfig, Locale, Pt};
///
/// let config: GeneratorConfig = serde_json::from_str(r#"{
///     "locale": "es",
///     "style": { "line_height": 14 },
///     "labels": { "es": { "skills": "COMPETENCIAS" } }
/// }"#).unwrap();
/// assert_eq!(config.locale, Locale::Es);
/// assert_eq!(config.style.line_height, Pt(14.0));
/// assert_eq!(config.style.body_size, Pt(11.0));
/// assert!(config.compress);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub locale: Locale,
    pub style: Style,
    pub typeface: Typeface,
    /// Labels to use instead of the built-in ones
    pub labels: LabelCatalog,
    /// Write a document information dictionary (title, author, ...)
    pub metadata: bool,
    pub compress: bool,
    /// Written as the document creation date. Without it, identical input
    /// always produces identical bytes.
    pub creation_date: Option<DateTime<FixedOffset>>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            locale: Locale::default(),
            style: Style::default(),
            typeface: Typeface::default(),
            labels: LabelCatalog::default(),
            metadata: true,
            compress: true,
            creation_date: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<GeneratorConfig, PDFError> {
        let path = path.as_ref();
        log::debug!("reading configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
