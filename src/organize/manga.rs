//! Manga folder sorting.
//!
//! Each child of a source directory is one manga collection. Its name is
//! parsed, the record is rendered canonically, and the collection lands
//! under `destination/<author>/`. A collection that itself holds
//! subfolders is fanned out: every inner folder becomes its own entry in
//! the author directory, re-rendered with the inner folder's title. Loose
//! archive files are sorted the same way by their stem.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use parking_lot::Mutex;
use shelfsort_common::paths::is_archive_file;
use shelfsort_parser::config::ParserConfig;
use shelfsort_parser::output::{CanonicalFormat, NameFormat};
use shelfsort_parser::{ParsedName, Parser};

use super::{
    archive, copy_entry, move_entry, resolve_destination, CollisionPolicy, DirFacts,
    FilesystemFactProvider, Report, Resolution,
};
use crate::config::Config;

/// Behavior switches for one manga sorting run.
#[derive(Debug, Clone, Copy, Default)]
pub struct MangaOptions {
    /// Archive each collection into a zip instead of moving it.
    pub archive: bool,
    /// Move (and for archives: delete) sources instead of copying.
    pub remove: bool,
    /// Log intended actions without touching the filesystem.
    pub dry_run: bool,
}

/// Sorts manga collections into per-author directories.
pub struct MangaSorter {
    parser: Parser,
    format: CanonicalFormat,
    forbidden: Vec<char>,
    collision: CollisionPolicy,
    options: MangaOptions,
    facts: Box<dyn FilesystemFactProvider + Send + Sync>,
    // Serializes author-directory creation across worker threads.
    mkdir_lock: Mutex<()>,
}

impl MangaSorter {
    pub fn new(config: &Config, options: MangaOptions) -> Self {
        Self::with_facts(config, options, Box::new(DirFacts))
    }

    /// Sorter with a caller-supplied fact provider; the parser itself never
    /// touches the filesystem.
    pub fn with_facts(
        config: &Config,
        options: MangaOptions,
        facts: Box<dyn FilesystemFactProvider + Send + Sync>,
    ) -> Self {
        let parser_config = ParserConfig::builder()
            .replace_underscores(config.manga.replace_underscores)
            .build();
        Self {
            parser: Parser::new(parser_config),
            format: CanonicalFormat::new(),
            forbidden: config.manga.forbidden_characters.chars().collect(),
            collision: config.organize.collision,
            options,
            facts,
            mkdir_lock: Mutex::new(()),
        }
    }

    /// Sort every collection directly under `source` into `destination`.
    pub fn sort_source(&self, source: &Path, destination: &Path) -> Report {
        let mut report = Report::default();

        let entries = match fs::read_dir(source) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::error!("Cannot read source {:?}: {}", source, err);
                report.failed += 1;
                return report;
            }
        };

        let mut children: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.is_dir() || is_archive_file(p))
            .collect();
        children.sort();

        for child in children {
            report.processed += 1;
            let outcome = if child.is_dir() {
                self.sort_collection(&child, destination)
            } else {
                self.sort_archive(&child, destination)
            };
            match outcome {
                Ok(changed) => {
                    if changed {
                        report.changed += 1;
                    } else {
                        report.skipped += 1;
                    }
                }
                Err(err) => {
                    tracing::error!("Sorting {:?} failed: {:#}", child, err);
                    report.failed += 1;
                }
            }
        }

        report
    }

    /// Sort a loose archive file: parse its stem, keep its extension.
    fn sort_archive(&self, file: &Path, destination: &Path) -> Result<bool> {
        let stem = file
            .file_stem()
            .and_then(|n| n.to_str())
            .with_context(|| format!("unusable file name: {:?}", file))?;
        let extension = file
            .extension()
            .and_then(|e| e.to_str())
            .with_context(|| format!("unusable extension: {:?}", file))?;

        let record = self.parser.parse(stem, false);
        let author_root = destination.join(self.author_folder(&record));
        if !self.options.dry_run {
            let _guard = self.mkdir_lock.lock();
            fs::create_dir_all(&author_root)
                .with_context(|| format!("Failed to create {:?}", author_root))?;
        }

        let rendered = self.render(&record)?;
        let target = author_root.join(format!("{rendered}.{extension}"));
        if self.options.dry_run {
            let verb = if self.options.remove { "move" } else { "copy" };
            tracing::info!("Would {} {:?} to {:?}", verb, file, target);
            return Ok(false);
        }

        let target = match resolve_destination(&target, self.collision)? {
            Resolution::Write(path) => path,
            Resolution::Skip => {
                tracing::info!("Destination exists, skipping {:?}", file);
                return Ok(false);
            }
        };

        if self.collision == CollisionPolicy::Overwrite && target.exists() {
            fs::remove_file(&target)
                .with_context(|| format!("Failed to replace {:?}", target))?;
        }

        if self.options.remove {
            move_entry(file, &target)?;
        } else {
            copy_entry(file, &target)?;
        }
        tracing::info!("Placed {:?} as {:?}", file, target);
        Ok(true)
    }

    fn sort_collection(&self, collection: &Path, destination: &Path) -> Result<bool> {
        let raw_name = collection
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("unusable collection name: {:?}", collection))?;

        let inner = self.facts.subfolders(collection);
        let record = self.parser.parse(raw_name, !inner.is_empty());

        let author_root = destination.join(self.author_folder(&record));
        if !self.options.dry_run {
            let _guard = self.mkdir_lock.lock();
            fs::create_dir_all(&author_root)
                .with_context(|| format!("Failed to create {:?}", author_root))?;
        }

        if inner.is_empty() {
            let rendered = self.render(&record)?;
            return self.place(collection, &author_root, &rendered);
        }

        // Fan out: each inner folder is its own entry, re-rendered with the
        // inner folder's name as the title.
        let mut any_changed = false;
        for folder in inner {
            let inner_name = folder
                .file_name()
                .and_then(|n| n.to_str())
                .with_context(|| format!("unusable folder name: {:?}", folder))?;
            let mut entry_record = record.clone();
            entry_record.name = Some(inner_name.to_string());
            let rendered = self.render(&entry_record)?;
            any_changed |= self.place(&folder, &author_root, &rendered)?;
        }
        Ok(any_changed)
    }

    /// Archive or move/copy one folder into the author directory under its
    /// rendered name. Returns whether anything changed.
    fn place(&self, folder: &Path, author_root: &Path, rendered: &str) -> Result<bool> {
        if self.options.archive {
            if self.options.dry_run {
                tracing::info!("Would archive {:?} as {:?}/{}.zip", folder, author_root, rendered);
                return Ok(false);
            }
            archive::zip_directory(folder, author_root, rendered)?;
            if self.options.remove {
                fs::remove_dir_all(folder)
                    .with_context(|| format!("Failed to remove archived source {:?}", folder))?;
            }
            return Ok(true);
        }

        let target = author_root.join(rendered);
        if self.options.dry_run {
            let verb = if self.options.remove { "move" } else { "copy" };
            tracing::info!("Would {} {:?} to {:?}", verb, folder, target);
            return Ok(false);
        }

        let target = match resolve_destination(&target, self.collision)? {
            Resolution::Write(path) => path,
            Resolution::Skip => {
                tracing::info!("Destination exists, skipping {:?}", folder);
                return Ok(false);
            }
        };

        if self.collision == CollisionPolicy::Overwrite && target.exists() {
            fs::remove_dir_all(&target)
                .with_context(|| format!("Failed to replace {:?}", target))?;
        }

        if self.options.remove {
            move_entry(folder, &target)?;
        } else {
            copy_entry(folder, &target)?;
        }
        tracing::info!("Placed {:?} as {:?}", folder, target);
        Ok(true)
    }

    fn author_folder(&self, record: &ParsedName) -> String {
        let author = record
            .author
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or("Unknown");
        self.sanitize(author)
    }

    fn render(&self, record: &ParsedName) -> Result<String> {
        let rendered = self
            .format
            .format(record)
            .context("record has neither author nor name")?;
        Ok(self.sanitize(&rendered))
    }

    fn sanitize(&self, name: &str) -> String {
        name.chars().filter(|c| !self.forbidden.contains(c)).collect()
    }
}
