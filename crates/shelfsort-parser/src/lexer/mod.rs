//! Bracket scanning for collection names.
//!
//! Release-style names carry their structure in delimiter pairs: the first
//! `[...]` holds author/group information (the "author zone") and everything
//! after its closing bracket holds the title and trailing tags (the "title
//! zone"). This module locates those zones and the flat tag spans inside the
//! tag region.

use std::ops::Range;

/// Byte span in the input string.
///
/// Represents a range of bytes in the original input, used for tracking
/// zone positions and extracting substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Resolve the span against the string it was produced from.
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start..self.end]
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// The two zones of a collection name.
///
/// `author_zone` is the content between the first `[` and the first `]`
/// (exclusive on both sides); `title_zone` is everything after that closing
/// bracket. When no complete `[...]` pair exists the author zone is absent
/// and the entire input is the title zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameZones {
    /// Span of the author-zone content, if a complete pair was found.
    pub author_zone: Option<Span>,
    /// Span of the title zone.
    pub title_zone: Span,
}

/// Split an input into author zone and title zone.
///
/// The scan is single-pass and non-nesting: only the first `[` and the first
/// `]` matter. A lone `[` or `]`, or a `]` appearing before any `[`, yields
/// no author zone. An empty pair `[]` yields an empty (but present) author
/// zone.
pub fn split_zones(input: &str) -> NameZones {
    let open = input.find('[');
    let close = input.find(']');

    match (open, close) {
        (Some(o), Some(c)) if o < c => NameZones {
            author_zone: Some(Span::new(o + 1, c)),
            title_zone: Span::new(c + 1, input.len()),
        },
        _ => NameZones {
            author_zone: None,
            title_zone: Span::new(0, input.len()),
        },
    }
}

fn is_opener(ch: char) -> bool {
    matches!(ch, '[' | '(' | '{')
}

fn is_closer(ch: char) -> bool {
    matches!(ch, ']' | ')' | '}')
}

/// Find the flat tag spans in a tag region.
///
/// Walks the region tracking a single open/close flag across all three
/// bracket kinds. On each closer while the flag is open, the content between
/// the recorded opener and that closer is emitted as one tag span, in source
/// order. A second opener while already open is ignored, as is a closer while
/// closed — nested brackets intentionally under-split.
pub fn find_tag_spans(region: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut open_at: Option<usize> = None;

    for (i, ch) in region.char_indices() {
        match open_at {
            None if is_opener(ch) => open_at = Some(i + ch.len_utf8()),
            Some(start) if is_closer(ch) => {
                spans.push(Span::new(start, i));
                open_at = None;
            }
            _ => {}
        }
    }

    spans
}
