//! Canonical bracketed rendering.

use super::NameFormat;
use crate::model::language::is_language_tag;
use crate::model::{InvalidRecordError, ParsedName, KNOWN_LANGUAGES};

/// Renders a parsed name back into the canonical bracketed layout:
/// `[Group (Author)] Title [Language]`.
///
/// The language suffix is the first tag that matches the formatter's
/// language table; tags stay put on the record, the suffix is additive.
/// A sanitizer, when set, runs over the finished string as the last step
/// so callers can strip characters their filesystem rejects.
///
/// # Example
///
/// ```
/// use shelfsort_parser::model::ParsedName;
/// use shelfsort_parser::output::{CanonicalFormat, NameFormat};
///
/// let record = ParsedName {
///     author: Some("Author".into()),
///     group: Some("Group".into()),
///     name: Some("Title".into()),
///     tags: vec!["Digital".into(), "English".into()],
/// };
/// let rendered = CanonicalFormat::new().format(&record).unwrap();
/// assert_eq!(rendered, "[Group (Author)] Title [English]");
/// ```
#[derive(Debug, Clone)]
pub struct CanonicalFormat {
    languages: &'static phf::Set<&'static str>,
    sanitizer: Option<fn(&str) -> String>,
}

impl CanonicalFormat {
    /// Formatter with the built-in language table and no sanitizer.
    pub fn new() -> Self {
        Self::with_languages(&KNOWN_LANGUAGES)
    }

    /// Formatter with a caller-supplied language table.
    pub fn with_languages(languages: &'static phf::Set<&'static str>) -> Self {
        Self {
            languages,
            sanitizer: None,
        }
    }

    /// Set a sanitizer applied to the finished string.
    pub fn sanitizer(mut self, sanitizer: fn(&str) -> String) -> Self {
        self.sanitizer = Some(sanitizer);
        self
    }

    fn language_suffix<'a>(&self, record: &'a ParsedName) -> Option<&'a str> {
        record
            .tags
            .iter()
            .map(String::as_str)
            .find(|tag| is_language_tag(tag, self.languages))
    }
}

impl Default for CanonicalFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl NameFormat for CanonicalFormat {
    type Output = Result<String, InvalidRecordError>;

    fn format(&self, record: &ParsedName) -> Self::Output {
        if record.is_empty() {
            return Err(InvalidRecordError);
        }

        // Runs of whitespace inside the title collapse to single spaces.
        let name = record
            .name
            .as_deref()
            .map(|n| n.split_whitespace().collect::<Vec<_>>().join(" "));

        let mut rendered = match (record.author_info(), name) {
            (Some(info), Some(name)) => format!("[{info}] {name}"),
            (Some(info), None) => format!("[{info}]"),
            (None, Some(name)) => name,
            (None, None) => return Err(InvalidRecordError),
        };

        if let Some(language) = self.language_suffix(record) {
            rendered.push_str(&format!(" [{language}]"));
        }

        match self.sanitizer {
            Some(sanitize) => Ok(sanitize(&rendered)),
            None => Ok(rendered),
        }
    }
}
