//! Path utilities for detecting file types by extension.
//!
//! Used by the organizing pipelines to decide which files a command applies
//! to: video renaming only touches video files, manga archiving only touches
//! archives.

use std::path::Path;

/// List of supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m4v", "ts", "webm", "mov", "wmv", "flv",
];

/// List of supported comic/manga archive extensions.
const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "cbz", "rar", "cbr", "7z"];

/// Check if a path has a video file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use shelfsort_common::paths::is_video_file;
///
/// assert!(is_video_file(Path::new("episode.mkv")));
/// assert!(is_video_file(Path::new("/path/to/video.MP4")));
/// assert!(!is_video_file(Path::new("chapter.cbz")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    has_extension_in(path, VIDEO_EXTENSIONS)
}

/// Check if a path has a comic/manga archive extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use shelfsort_common::paths::is_archive_file;
///
/// assert!(is_archive_file(Path::new("volume01.cbz")));
/// assert!(is_archive_file(Path::new("scans.zip")));
/// assert!(!is_archive_file(Path::new("episode.mkv")));
/// ```
pub fn is_archive_file(path: &Path) -> bool {
    has_extension_in(path, ARCHIVE_EXTENSIONS)
}

fn has_extension_in(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
