//! Folder archiving.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Zip a directory's contents into `destination_dir/<name>.zip`.
///
/// Entries are stored relative to the directory root. An archive that
/// already exists at the target path is first renamed to
/// `<name>_previous.zip` so the run never destroys an earlier result.
pub fn zip_directory(source: &Path, destination_dir: &Path, name: &str) -> Result<PathBuf> {
    let archive_path = destination_dir.join(format!("{name}.zip"));
    if archive_path.exists() {
        let previous = destination_dir.join(format!("{name}_previous.zip"));
        std::fs::rename(&archive_path, &previous)
            .with_context(|| format!("Failed to set aside existing archive {:?}", archive_path))?;
        tracing::info!("Set aside existing archive as {:?}", previous);
    }

    let file = File::create(&archive_path)
        .with_context(|| format!("Failed to create archive {:?}", archive_path))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {:?}", source))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .context("walked entry outside source root")?;
        let arc_name = relative.to_string_lossy().replace('\\', "/");

        if entry.file_type().is_dir() {
            writer.add_directory(arc_name, options)?;
        } else {
            writer.start_file(arc_name, options)?;
            let mut input = File::open(entry.path())
                .with_context(|| format!("Failed to read {:?}", entry.path()))?;
            io::copy(&mut input, &mut writer).context("Failed to write archive entry")?;
        }
    }

    writer.finish()?;
    tracing::info!("Archived {:?} into {:?}", source, archive_path);
    Ok(archive_path)
}

/// Zip every folder directly under `source`.
///
/// Archives land in `destination` when given, next to the folders
/// otherwise. Sources are left in place.
pub fn zip_source(source: &Path, destination: Option<&Path>, dry_run: bool) -> super::Report {
    let mut report = super::Report::default();

    for folder in super::subdirectories(source) {
        report.processed += 1;
        let Some(name) = folder.file_name().and_then(|n| n.to_str()).map(String::from) else {
            tracing::error!("Unusable folder name: {:?}", folder);
            report.failed += 1;
            continue;
        };
        let target_dir = destination.unwrap_or(source);

        if dry_run {
            tracing::info!("Would archive {:?} as {:?}/{}.zip", folder, target_dir, name);
            report.skipped += 1;
            continue;
        }

        match zip_directory(&folder, target_dir, &name) {
            Ok(_) => report.changed += 1,
            Err(err) => {
                tracing::error!("Archiving {:?} failed: {:#}", folder, err);
                report.failed += 1;
            }
        }
    }

    report
}
