//! Title and tag extraction from the title zone.
//!
//! The title is the first maximal run of name-safe characters; everything
//! after it is scanned for bracketed tags. When the zone holds no name-safe
//! character at all, the run is considered unmatched so the caller can apply
//! its opaque-input fallback.

use crate::lexer;

/// Outcome of scanning a title zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleParts {
    /// Trimmed title text. The whole trimmed zone when `matched` is false.
    pub name: String,
    /// Tag contents in order of appearance after the title run.
    pub tags: Vec<String>,
    /// Whether a name-safe run was found.
    pub matched: bool,
}

/// Characters allowed inside a title run.
fn is_name_safe(ch: char) -> bool {
    // U+3000 shows up as the word separator in raw Japanese titles.
    ch.is_alphanumeric() || matches!(ch, '_' | ' ' | '\u{3000}' | '!' | '~' | '\'' | '-')
}

/// Split a title zone into title text and trailing tags.
pub fn extract(zone: &str) -> TitleParts {
    let Some(start) = zone.find(is_name_safe) else {
        return TitleParts {
            name: zone.trim().to_string(),
            tags: Vec::new(),
            matched: false,
        };
    };

    let end = zone[start..]
        .find(|ch| !is_name_safe(ch))
        .map_or(zone.len(), |off| start + off);

    let tag_region = &zone[end..];
    let tags = lexer::find_tag_spans(tag_region)
        .into_iter()
        .map(|span| span.slice(tag_region).trim().to_string())
        .collect();

    TitleParts {
        name: zone[start..end].trim().to_string(),
        tags,
        matched: true,
    }
}
