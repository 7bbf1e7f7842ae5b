//! Destination collision handling.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use shelfsort_common::{Error, Result};

/// What to do when a destination path already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Keep both: the incoming item gets a `_duplicate_<hex>` suffix.
    #[default]
    Rename,
    /// Leave the existing item alone and skip the incoming one.
    Skip,
    /// Replace the existing item.
    Overwrite,
    /// Set the existing item aside under a `_duplicate_<hex>` name and let
    /// the incoming one take the original path.
    MoveAside,
}

/// Outcome of resolving a destination against the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Write to this path (possibly the original destination).
    Write(PathBuf),
    /// Policy says to leave the existing item and drop the incoming one.
    Skip,
}

/// Resolve a destination path against the collision policy.
///
/// `Overwrite` leaves removal of the old item to the caller. `MoveAside` is
/// the one arm with a side effect: it renames the existing item before
/// handing back the original path.
pub fn resolve_destination(destination: &Path, policy: CollisionPolicy) -> Result<Resolution> {
    if !destination.exists() {
        return Ok(Resolution::Write(destination.to_path_buf()));
    }

    match policy {
        CollisionPolicy::Rename => Ok(Resolution::Write(unique_name(destination)?)),
        CollisionPolicy::Skip => Ok(Resolution::Skip),
        CollisionPolicy::Overwrite => Ok(Resolution::Write(destination.to_path_buf())),
        CollisionPolicy::MoveAside => {
            let aside = unique_name(destination)?;
            std::fs::rename(destination, &aside)?;
            tracing::info!("Set aside existing {:?} as {:?}", destination, aside);
            Ok(Resolution::Write(destination.to_path_buf()))
        }
    }
}

/// Derive a sibling path that does not exist yet by appending a
/// `_duplicate_<hex>` marker to the stem.
pub fn unique_name(path: &Path) -> Result<PathBuf> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::invalid_input(format!("unusable file name: {:?}", path)))?;
    let extension = path.extension().and_then(|e| e.to_str());

    // A fresh id per attempt; collisions across eight hex digits are not a
    // practical concern.
    let tag = &uuid::Uuid::new_v4().simple().to_string()[..8];
    let name = match extension {
        Some(ext) => format!("{stem}_duplicate_{tag}.{ext}"),
        None => format!("{stem}_duplicate_{tag}"),
    };

    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(parent.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_destination_passes_through() {
        let dest = Path::new("/nonexistent/path/file.cbz");
        let resolved = resolve_destination(dest, CollisionPolicy::Rename).unwrap();
        assert_eq!(resolved, Resolution::Write(dest.to_path_buf()));
    }

    #[test]
    fn existing_destination_renames() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("file.cbz");
        std::fs::write(&dest, b"x").unwrap();

        let resolved = resolve_destination(&dest, CollisionPolicy::Rename).unwrap();
        match resolved {
            Resolution::Write(path) => {
                let name = path.file_name().unwrap().to_str().unwrap();
                assert!(name.starts_with("file_duplicate_"), "got {name}");
                assert!(name.ends_with(".cbz"));
                assert!(!path.exists());
            }
            Resolution::Skip => panic!("expected a renamed path"),
        }
    }

    #[test]
    fn existing_destination_skips() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("file.cbz");
        std::fs::write(&dest, b"x").unwrap();

        let resolved = resolve_destination(&dest, CollisionPolicy::Skip).unwrap();
        assert_eq!(resolved, Resolution::Skip);
    }

    #[test]
    fn overwrite_keeps_original_path() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("file.cbz");
        std::fs::write(&dest, b"x").unwrap();

        let resolved = resolve_destination(&dest, CollisionPolicy::Overwrite).unwrap();
        assert_eq!(resolved, Resolution::Write(dest));
    }

    #[test]
    fn move_aside_frees_the_original_path() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("file.cbz");
        std::fs::write(&dest, b"old").unwrap();

        let resolved = resolve_destination(&dest, CollisionPolicy::MoveAside).unwrap();
        assert_eq!(resolved, Resolution::Write(dest.clone()));
        assert!(!dest.exists());
        let aside: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("_duplicate_"))
            .collect();
        assert_eq!(aside.len(), 1);
    }

    #[test]
    fn unique_name_without_extension() {
        let path = unique_name(Path::new("/tmp/folder")).unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("folder_duplicate_"));
        assert!(!name.contains('.'));
    }

    #[test]
    fn policy_parses_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            collision: CollisionPolicy,
        }
        let wrapper: Wrapper = toml::from_str("collision = \"skip\"").unwrap();
        assert_eq!(wrapper.collision, CollisionPolicy::Skip);
    }
}
