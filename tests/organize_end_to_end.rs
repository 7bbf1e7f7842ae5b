//! End-to-end tests for the organizing pipelines, driven through the
//! library the way the binary drives them.

use std::fs;
use std::path::PathBuf;

use shelfsort::config::Config;
use shelfsort::organize::manga::{MangaOptions, MangaSorter};
use shelfsort::organize::{self, CollisionPolicy};

fn make_collection(root: &std::path::Path, name: &str, files: &[&str]) -> PathBuf {
    let folder = root.join(name);
    fs::create_dir_all(&folder).unwrap();
    for file in files {
        fs::write(folder.join(file), b"data").unwrap();
    }
    folder
}

#[test]
fn manga_library_is_sorted_by_author() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    make_collection(src.path(), "[Group (Author)] First Title [English]", &["01.jpg"]);
    make_collection(src.path(), "[Group (Author)] Second Title", &["01.jpg"]);
    make_collection(src.path(), "[Other] Third", &["01.jpg"]);

    let sorter = MangaSorter::new(
        &Config::default(),
        MangaOptions { remove: true, ..Default::default() },
    );
    let report = sorter.sort_source(src.path(), dest.path());

    assert_eq!(report.processed, 3);
    assert_eq!(report.changed, 3);
    assert_eq!(report.failed, 0);

    let author = dest.path().join("Author");
    assert!(author.join("[Group (Author)] First Title [English]").join("01.jpg").exists());
    assert!(author.join("[Group (Author)] Second Title").exists());
    assert!(dest.path().join("Other").join("[Other] Third").exists());
}

#[test]
fn parallel_fanout_covers_all_sources() {
    let dest = tempfile::tempdir().unwrap();
    let roots: Vec<tempfile::TempDir> = (0..3).map(|_| tempfile::tempdir().unwrap()).collect();
    for (i, root) in roots.iter().enumerate() {
        make_collection(root.path(), &format!("[Author] Volume {i}"), &["01.jpg"]);
    }
    let sources: Vec<PathBuf> = roots.iter().map(|r| r.path().to_path_buf()).collect();

    let sorter = MangaSorter::new(
        &Config::default(),
        MangaOptions { remove: true, ..Default::default() },
    );
    let report = organize::run_parallel(&sources, 2, |source| {
        sorter.sort_source(source, dest.path())
    })
    .unwrap();

    assert_eq!(report.changed, 3);
    // All three land under the same author directory without clobbering.
    let entries = fs::read_dir(dest.path().join("Author")).unwrap().count();
    assert_eq!(entries, 3);
}

#[test]
fn same_rendered_name_from_two_sources_keeps_both() {
    let dest = tempfile::tempdir().unwrap();
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    make_collection(a.path(), "[Author] Title", &["a.jpg"]);
    make_collection(b.path(), "[Author] Title", &["b.jpg"]);

    let sorter = MangaSorter::new(
        &Config::default(),
        MangaOptions { remove: true, ..Default::default() },
    );
    for src in [a.path(), b.path()] {
        let report = sorter.sort_source(src, dest.path());
        assert_eq!(report.failed, 0);
    }

    let author = dest.path().join("Author");
    let names: Vec<String> = fs::read_dir(&author)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.iter().any(|n| n == "[Author] Title"));
    assert!(names.iter().any(|n| n.contains("_duplicate_")));
}

#[test]
fn skip_policy_leaves_existing_collections() {
    let dest = tempfile::tempdir().unwrap();
    let src = tempfile::tempdir().unwrap();
    make_collection(src.path(), "[Author] Title", &["new.jpg"]);
    let existing = dest.path().join("Author").join("[Author] Title");
    fs::create_dir_all(&existing).unwrap();
    fs::write(existing.join("old.jpg"), b"old").unwrap();

    let mut config = Config::default();
    config.organize.collision = CollisionPolicy::Skip;
    let sorter = MangaSorter::new(
        &config,
        MangaOptions { remove: true, ..Default::default() },
    );
    let report = sorter.sort_source(src.path(), dest.path());

    assert_eq!(report.skipped, 1);
    assert!(existing.join("old.jpg").exists());
    assert!(!existing.join("new.jpg").exists());
    // Skipped sources stay where they were.
    assert!(src.path().join("[Author] Title").exists());
}

#[test]
fn rename_then_video_pipelines_compose() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("[raws] Show - 01 (2020).mkv"), b"v").unwrap();

    let report = organize::rename::rename_source(dir.path(), CollisionPolicy::Rename, false);
    assert_eq!(report.changed, 1);
    assert!(dir.path().join("Show - 01.mkv").exists());

    let report = organize::video::rename_source(
        dir.path(),
        &Config::default().video,
        CollisionPolicy::Rename,
        false,
    );
    assert_eq!(report.changed, 1);
    assert!(dir.path().join("Show_-_01.mkv").exists());
}

#[test]
fn archive_mode_produces_library_of_zips() {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    make_collection(src.path(), "[Author] Title", &["01.jpg", "02.jpg"]);

    let sorter = MangaSorter::new(
        &Config::default(),
        MangaOptions { archive: true, remove: true, ..Default::default() },
    );
    let report = sorter.sort_source(src.path(), dest.path());

    assert_eq!(report.changed, 1);
    let archive = dest.path().join("Author").join("[Author] Title.zip");
    assert!(archive.exists());
    // Removal after archiving.
    assert!(!src.path().join("[Author] Title").exists());
}
