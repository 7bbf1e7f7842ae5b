//! Organizing pipelines.
//!
//! Each submodule implements one command: manga sorting, mass renaming,
//! video normalization, and folder archiving. This module holds what they
//! share: run reports, the filesystem-fact seam for the pure parser, the
//! worker-pool fan-out, and move/copy primitives.

pub mod archive;
mod collision;
pub mod manga;
pub mod rename;
pub mod video;

pub use collision::{resolve_destination, unique_name, CollisionPolicy, Resolution};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;

/// Counters for one organizing run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Items examined.
    pub processed: usize,
    /// Items moved, renamed, or archived.
    pub changed: usize,
    /// Items left alone (already clean, or collision policy said skip).
    pub skipped: usize,
    /// Items that errored; the run continues past them.
    pub failed: usize,
}

impl Report {
    pub fn merge(self, other: Report) -> Report {
        Report {
            processed: self.processed + other.processed,
            changed: self.changed + other.changed,
            skipped: self.skipped + other.skipped,
            failed: self.failed + other.failed,
        }
    }
}

/// Supplies filesystem facts to the pure name parser.
///
/// The parser never touches the filesystem; whether an item "has
/// subfolders" comes in through this seam so tests can fake it.
pub trait FilesystemFactProvider {
    /// Direct child directories of the item. Empty for plain files.
    fn subfolders(&self, path: &Path) -> Vec<PathBuf>;

    fn has_subfolders(&self, path: &Path) -> bool {
        !self.subfolders(path).is_empty()
    }
}

/// Facts read live from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirFacts;

impl FilesystemFactProvider for DirFacts {
    fn subfolders(&self, path: &Path) -> Vec<PathBuf> {
        subdirectories(path)
    }
}

/// Direct child directories of `path`, sorted by name. Empty for files and
/// unreadable paths.
pub fn subdirectories(path: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(path) else {
        return Vec::new();
    };
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    dirs
}

/// Fan a task out over source directories on a dedicated worker pool.
///
/// `threads == 0` means one worker per logical CPU. Task failures are the
/// task's business; each invocation reports its own counters.
pub fn run_parallel<F>(sources: &[PathBuf], threads: usize, task: F) -> Result<Report>
where
    F: Fn(&Path) -> Report + Send + Sync,
{
    let threads = if threads == 0 { num_cpus::get() } else { threads };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to build worker pool")?;

    Ok(pool.install(|| {
        sources
            .par_iter()
            .map(|source| task(source))
            .reduce(Report::default, Report::merge)
    }))
}

/// Move a file or directory, falling back to copy-then-delete when a plain
/// rename fails (cross-device moves).
pub fn move_entry(source: &Path, destination: &Path) -> Result<()> {
    if fs::rename(source, destination).is_ok() {
        return Ok(());
    }

    copy_entry(source, destination)?;
    if source.is_dir() {
        fs::remove_dir_all(source)
            .with_context(|| format!("Failed to remove moved source {:?}", source))?;
    } else {
        fs::remove_file(source)
            .with_context(|| format!("Failed to remove moved source {:?}", source))?;
    }
    Ok(())
}

/// Copy a file or a directory tree.
pub fn copy_entry(source: &Path, destination: &Path) -> Result<()> {
    if source.is_dir() {
        fs::create_dir_all(destination)
            .with_context(|| format!("Failed to create {:?}", destination))?;
        for entry in fs::read_dir(source).with_context(|| format!("Failed to read {:?}", source))? {
            let entry = entry?;
            copy_entry(&entry.path(), &destination.join(entry.file_name()))?;
        }
    } else {
        fs::copy(source, destination)
            .with_context(|| format!("Failed to copy {:?} to {:?}", source, destination))?;
    }
    Ok(())
}
