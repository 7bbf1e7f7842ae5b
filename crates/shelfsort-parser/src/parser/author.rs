//! Author/group extraction from the author zone.
//!
//! The author zone content is matched against the `"Group (Author)"`
//! sub-pattern: arbitrary text, an optional separator, then a parenthesized
//! author. When the pattern does not match, the whole content is the author
//! and no group is recorded. Extraction never fails.

/// Author information recovered from an author zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInfo {
    /// Primary creator, trimmed. Empty for an empty `[]` zone.
    pub author: String,
    /// Releasing group, present only when the sub-pattern matched.
    pub group: Option<String>,
}

/// Extract author and group from author-zone content.
///
/// Greedy split: the group ends at the rightmost `(` that still leaves
/// non-empty author text before the final `)`. A comma-separated author list
/// is normalized to `"A,B"` (each part trimmed, rejoined without spaces);
/// the group is never split this way.
pub fn extract(content: &str) -> AuthorInfo {
    if let Some((group, author)) = split_group_author(content) {
        AuthorInfo {
            author: normalize_author_list(author),
            group: Some(group.to_string()),
        }
    } else {
        AuthorInfo {
            author: content.trim().to_string(),
            group: None,
        }
    }
}

/// Try the `<group> (<author>)` split. Returns the trimmed group slice and
/// the raw author slice.
fn split_group_author(content: &str) -> Option<(&str, &str)> {
    let close = content.rfind(')')?;

    // Rightmost opener that leaves author text before the closer and group
    // text before itself.
    let open = content[..close]
        .char_indices()
        .rev()
        .find(|&(i, ch)| ch == '(' && i > 0 && i + 1 < close)
        .map(|(i, _)| i)?;

    let group = content[..open].trim_end();
    // At most one separating underscore survives trimming.
    let group = group.strip_suffix('_').unwrap_or(group).trim();
    let author = &content[open + 1..close];

    Some((group, author))
}

fn normalize_author_list(author: &str) -> String {
    if author.contains(',') {
        author
            .split(',')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(",")
    } else {
        author.trim().to_string()
    }
}
