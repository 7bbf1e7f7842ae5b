//! Video file renaming.
//!
//! Walks sources recursively and renames every video file to its
//! normalized form: bracketed release noise dropped, words joined with
//! underscores.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use shelfsort_common::paths::is_video_file;
use shelfsort_parser::normalize_video_name;
use walkdir::WalkDir;

use super::{resolve_destination, CollisionPolicy, Report, Resolution};
use crate::config::VideoConfig;

fn is_video(path: &Path, config: &VideoConfig) -> bool {
    if is_video_file(path) {
        return true;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            config.extra_extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
        })
        .unwrap_or(false)
}

/// Normalize every video file under `source`.
pub fn rename_source(
    source: &Path,
    config: &VideoConfig,
    collision: CollisionPolicy,
    dry_run: bool,
) -> Report {
    let mut report = Report::default();

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::error!("Walking {:?} failed: {}", source, err);
                report.failed += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_video(entry.path(), config) {
            continue;
        }

        report.processed += 1;
        match rename_video(entry.path(), collision, dry_run) {
            Ok(true) => report.changed += 1,
            Ok(false) => report.skipped += 1,
            Err(err) => {
                tracing::error!("Renaming {:?} failed: {:#}", entry.path(), err);
                report.failed += 1;
            }
        }
    }

    report
}

fn rename_video(path: &Path, collision: CollisionPolicy, dry_run: bool) -> Result<bool> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("unusable file name: {:?}", path))?;

    let normalized = normalize_video_name(name);
    if normalized == name {
        return Ok(false);
    }

    let target = path.with_file_name(&normalized);
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
        fs::remove_file(&target)?;
    }

    fs::rename(path, &target)
        .with_context(|| format!("Failed to rename {:?} to {:?}", path, target))?;
    tracing::info!("Renamed {:?} to {:?}", path, target);
    Ok(true)
}
