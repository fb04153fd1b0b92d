//! Field filters for the `fields` and `transient` request parameters.

use crate::types::{Language, Transform};
use std::fmt;

/// One entry of a field filter, with optional decorators.
///
/// Supports dot notation for nested fields: `ItemUICategory.Name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    language: Option<Language>,
    transform: Option<Transform>,
    /// None: not localized. Some(empty): use the client's localizations.
    localized: Option<Vec<Language>>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: None,
            transform: None,
            localized: None,
        }
    }

    /// Split a comma-separated list of field names
    pub fn list(names: &str) -> Vec<Field> {
        names
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(Field::new)
            .collect()
    }

    /// Read this field in an explicit language: `Name@lang(de)`
    pub fn lang(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Request the base field plus one variant per language.
    ///
    /// An empty slice means the languages configured on the client.
    /// Ignored when an explicit [`lang`](Self::lang) is set.
    pub fn localized(mut self, languages: &[Language]) -> Self {
        self.localized = Some(languages.to_vec());
        self
    }

    /// Apply a transformation: `Icon@as(raw)`
    pub fn as_(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn as_raw(self) -> Self {
        self.as_(Transform::Raw)
    }

    pub fn as_html(self) -> Self {
        self.as_(Transform::Html)
    }

    /// All filter entries this field expands to
    pub fn build(&self, global: &[Language]) -> Vec<String> {
        let mut out = vec![self.render(None)];

        if let (Some(languages), None) = (&self.localized, self.language) {
            let languages = if languages.is_empty() { global } else { languages };
            out.extend(languages.iter().map(|lang| self.render(Some(*lang))));
        }

        out
    }

    fn render(&self, language: Option<Language>) -> String {
        let mut s = self.name.clone();
        if let Some(lang) = language.or(self.language) {
            s.push_str(&format!("@lang({})", lang.code()));
        }
        if let Some(transform) = self.transform {
            s.push_str(&format!("@as({})", transform.as_str()));
        }
        s
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Field::new(name.trim())
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Field::new(name.trim())
    }
}

/// Comma-join the expansion of every field, or None when there are none
pub(crate) fn join_fields(fields: &[Field], global: &[Language]) -> Option<String> {
    if fields.is_empty() {
        return None;
    }
    let parts: Vec<String> = fields.iter().flat_map(|f| f.build(global)).collect();
    Some(parts.join(","))
}
