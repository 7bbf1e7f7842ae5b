//! Mass renaming.
//!
//! Cleans bracketed noise and year stamps out of file and folder names in
//! place: `[scans] Title (2019) - 03.cbz` becomes `Title - 03.cbz`.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;

use super::{resolve_destination, CollisionPolicy, Report, Resolution};

fn bracketed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[[^\]]*\]").unwrap())
}

fn year_stamp() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\([0-9]{4}\)").unwrap())
}

fn underscore_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"_+").unwrap())
}

fn hyphen_spacing() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*-\s*").unwrap())
}

/// Clean one file name.
///
/// Strips every `[..]` span and `(YYYY)` year stamp from the stem,
/// collapses underscore runs, trims leftover separators, and standardizes
/// spacing around hyphens. The extension is untouched.
pub fn clean_name(filename: &str) -> String {
    let (stem, extension) = match filename.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (filename, None),
    };

    let cleaned = bracketed().replace_all(stem, "");
    let cleaned = year_stamp().replace_all(&cleaned, "");
    let cleaned = underscore_runs().replace_all(&cleaned, "_");
    let cleaned = cleaned.trim_matches('_').trim();
    let cleaned = hyphen_spacing().replace_all(cleaned, " - ");
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    match extension {
        Some(ext) => format!("{cleaned}.{ext}"),
        None => cleaned,
    }
}

/// Rename every direct child of `source` to its cleaned name.
pub fn rename_source(source: &Path, collision: CollisionPolicy, dry_run: bool) -> Report {
    let mut report = Report::default();

    let entries = match fs::read_dir(source) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::error!("Cannot read source {:?}: {}", source, err);
            report.failed += 1;
            return report;
        }
    };

    let mut paths: Vec<_> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
    paths.sort();

    for path in paths {
        report.processed += 1;
        match rename_entry(&path, collision, dry_run) {
            Ok(true) => report.changed += 1,
            Ok(false) => report.skipped += 1,
            Err(err) => {
                tracing::error!("Renaming {:?} failed: {:#}", path, err);
                report.failed += 1;
            }
        }
    }

    report
}

fn rename_entry(path: &Path, collision: CollisionPolicy, dry_run: bool) -> Result<bool> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("unusable file name: {:?}", path))?;

    let cleaned = clean_name(name);
    if cleaned.is_empty() || cleaned == name {
        return Ok(false);
    }

    let target = path.with_file_name(&cleaned);
    if dry_run {
        tracing::info!("Would rename {:?} to {:?}", path, target);
        return Ok(false);
    }

    let target = match resolve_destination(&target, collision)? {
        Resolution::Write(target) => target,
        Resolution::Skip => {
            tracing::info!("Name taken, skipping {:?}", path);
            return Ok(false);
        }
    };

    if collision == CollisionPolicy::Overwrite && target.exists() && target != *path {
        if target.is_dir() {
            fs::remove_dir_all(&target)?;
        } else {
            fs::remove_file(&target)?;
        }
    }

    fs::rename(path, &target)
        .with_context(|| format!("Failed to rename {:?} to {:?}", path, target))?;
    tracing::info!("Renamed {:?} to {:?}", path, target);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_brackets_and_years() {
        assert_eq!(clean_name("[scans] Title (2019).cbz"), "Title.cbz");
    }

    #[test]
    fn collapses_underscores() {
        assert_eq!(clean_name("Some___Title__v2.zip"), "Some_Title_v2.zip");
    }

    #[test]
    fn standardizes_hyphen_spacing() {
        assert_eq!(clean_name("Title-03.cbz"), "Title - 03.cbz");
        assert_eq!(clean_name("Title  -  03.cbz"), "Title - 03.cbz");
    }

    #[test]
    fn extensionless_names_survive() {
        assert_eq!(clean_name("[x] Folder Name"), "Folder Name");
    }

    #[test]
    fn clean_names_are_untouched() {
        assert_eq!(clean_name("Title - 03.cbz"), "Title - 03.cbz");
    }

    #[test]
    fn non_year_parens_are_kept() {
        assert_eq!(clean_name("Title (complete).cbz"), "Title (complete).cbz");
    }

    #[test]
    fn renames_children_in_place() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("[x] Title (2019).cbz"), b"a").unwrap();
        std::fs::create_dir(dir.path().join("[y] Folder")).unwrap();

        let report = rename_source(dir.path(), CollisionPolicy::Rename, false);

        assert_eq!(report.changed, 2);
        assert!(dir.path().join("Title.cbz").exists());
        assert!(dir.path().join("Folder").exists());
    }

    #[test]
    fn collision_gets_duplicate_suffix() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Title.cbz"), b"old").unwrap();
        std::fs::write(dir.path().join("[x] Title.cbz"), b"new").unwrap();

        let report = rename_source(dir.path(), CollisionPolicy::Rename, false);

        assert_eq!(report.failed, 0);
        assert!(dir.path().join("Title.cbz").exists());
        let duplicates: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("_duplicate_"))
            .collect();
        assert_eq!(duplicates.len(), 1);
    }

    #[test]
    fn dry_run_reports_without_renaming() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("[x] Title.cbz"), b"a").unwrap();

        let report = rename_source(dir.path(), CollisionPolicy::Rename, true);

        assert_eq!(report.changed, 0);
        assert!(dir.path().join("[x] Title.cbz").exists());
    }
}
