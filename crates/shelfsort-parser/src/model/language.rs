//! Known natural-language names for tag promotion.

use phf::phf_set;

/// Lowercase display names of natural languages recognized in trailing tags.
///
/// A tag matching one of these entries case-insensitively is promoted to a
/// trailing language tag by the canonical renderer. The table is static
/// configuration data: renderers take it as an explicit parameter so tests
/// can substitute their own.
pub static KNOWN_LANGUAGES: phf::Set<&'static str> = phf_set! {
    "english",
    "french",
    "german",
    "spanish",
    "italian",
    "portuguese",
    "russian",
    "japanese",
    "korean",
    "chinese",
    "mandarin",
    "cantonese",
    "arabic",
    "hindi",
    "turkish",
    "polish",
    "dutch",
    "swedish",
    "norwegian",
    "danish",
    "finnish",
    "czech",
    "hungarian",
    "romanian",
    "bulgarian",
    "greek",
    "hebrew",
    "thai",
    "vietnamese",
    "indonesian",
    "malay",
    "filipino",
    "ukrainian",
    "croatian",
    "serbian",
    "slovenian",
    "slovak",
    "lithuanian",
    "latvian",
    "estonian",
    "bengali",
    "tamil",
    "telugu",
    "punjabi",
    "marathi",
    "gujarati",
    "kannada",
    "malayalam",
    "persian",
    "urdu",
    "swahili",
    "latin",
};

/// Check a tag for exact membership in a language table,
/// case-insensitively. Tags that merely contain a language name
/// (`"English Translated"`) do not count.
pub(crate) fn is_language_tag(tag: &str, table: &phf::Set<&'static str>) -> bool {
    table.contains(tag.to_lowercase().as_str())
}
