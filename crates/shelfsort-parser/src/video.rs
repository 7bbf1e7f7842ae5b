//! Video filename normalization.
//!
//! Strips bracketed noise (release group prefixes, checksum suffixes) from a
//! video filename and rejoins the remaining words with underscores. Operates
//! on a single filename, never a path.

/// Normalize a video filename.
///
/// Removes every complete `[..]` span, then every complete `(..)` span,
/// splits the stem on spaces and underscores, and rejoins with single
/// underscores. The extension (text after the last `.`) is untouched. The
/// function is idempotent.
///
/// # Example
///
/// ```
/// use shelfsort_parser::normalize_video_name;
///
/// assert_eq!(
///     normalize_video_name("[SubGroup] Some Show - 03 [x264] [A1B2C3].mkv"),
///     "Some_Show_-_03.mkv",
/// );
/// ```
pub fn normalize_video_name(filename: &str) -> String {
    let (stem, extension) = match filename.rfind('.') {
        Some(dot) => (&filename[..dot], Some(&filename[dot + 1..])),
        None => (filename, None),
    };

    let mut stem = stem.to_string();
    strip_spans(&mut stem, '[', ']');
    strip_spans(&mut stem, '(', ')');

    let joined = stem
        .split([' ', '_'])
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    match extension {
        // A stem ending in '.' already carries its separator.
        Some(ext) if joined.ends_with('.') => format!("{joined}{ext}"),
        Some(ext) => format!("{joined}.{ext}"),
        None => joined,
    }
}

/// Repeatedly remove the first complete `open..close` span.
fn strip_spans(text: &mut String, open: char, close: char) {
    while let Some(start) = text.find(open) {
        let Some(offset) = text[start..].find(close) else {
            break;
        };
        text.replace_range(start..start + offset + close.len_utf8(), "");
    }
}
