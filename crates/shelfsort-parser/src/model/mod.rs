//! Data model for parsed collection names.

pub(crate) mod language;

pub use language::KNOWN_LANGUAGES;

/// The output type containing all fields recovered from a collection name.
///
/// Produced once per input string and never mutated afterwards. At least one
/// of `author` and `name` is populated by the parser: when nothing at all can
/// be extracted, the whole normalized input falls back into one of the two
/// (see [`crate::parse`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedName {
    /// Primary creator name. Present whenever an author zone was found,
    /// possibly as an empty string for an empty `[]` pair.
    pub author: Option<String>,
    /// Releasing/scan group. Present only when the author zone matched the
    /// `"Group (Author)"` sub-pattern.
    pub group: Option<String>,
    /// Title of the work.
    pub name: Option<String>,
    /// Trailing bracketed qualifiers (language, "Digital", ...), in source
    /// order.
    pub tags: Vec<String>,
}

impl ParsedName {
    /// Render the author zone back into its source form.
    ///
    /// Returns `"{group} ({author})"` when a group is present, plain
    /// `"{author}"` otherwise, and `None` when no author was extracted.
    /// This is the inverse of the author/group split and is used by
    /// re-serialization sanity checks.
    pub fn author_info(&self) -> Option<String> {
        let author = self.author.as_deref()?;
        Some(match self.group.as_deref() {
            Some(group) => format!("{} ({})", group, author),
            None => author.to_string(),
        })
    }

    /// True when neither author nor name was populated.
    ///
    /// A record in this state is not produced by the parser and is rejected
    /// by the renderer.
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.name.is_none()
    }
}

/// Error returned when rendering a record that carries neither author nor
/// name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRecordError;

impl std::fmt::Display for InvalidRecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "record has neither author nor name")
    }
}

impl std::error::Error for InvalidRecordError {}
