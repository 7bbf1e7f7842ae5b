//! Top-level name parsing.
//!
//! Splits a raw name into zones, runs the author and title extractors, and
//! assembles a [`ParsedName`]. Parsing is total: unrecognizable input lands
//! in the opaque-input fallback rather than an error.

mod author;
mod title;

use crate::config::ParserConfig;
use crate::lexer;
use crate::model::ParsedName;

/// Parse a raw name with the given configuration.
///
/// `has_subfolders` steers the opaque-input fallback: when the input yields
/// neither an author zone nor a title run, the whole trimmed input becomes
/// the author for a container directory and the name otherwise.
pub fn parse_with_config(input: &str, has_subfolders: bool, config: &ParserConfig) -> ParsedName {
    let normalized = if config.replace_underscores {
        input.replace('_', " ")
    } else {
        input.to_string()
    };

    let zones = lexer::split_zones(&normalized);

    let mut parsed = ParsedName::default();
    if let Some(zone) = zones.author_zone {
        let info = author::extract(zone.slice(&normalized));
        parsed.author = Some(info.author);
        parsed.group = info.group;
    }

    let parts = title::extract(zones.title_zone.slice(&normalized));
    if parsed.author.is_none() && !parts.matched {
        // Opaque input: nothing recognizable anywhere.
        let whole = normalized.trim().to_string();
        if has_subfolders {
            parsed.author = Some(whole);
        } else {
            parsed.name = Some(whole);
        }
        return parsed;
    }

    parsed.name = Some(parts.name);
    parsed.tags = parts.tags;
    parsed
}
