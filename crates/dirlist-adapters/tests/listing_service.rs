//! `ListingService` wired to the real and in-memory filesystem adapters.

use std::fs;
use std::path::{Path, PathBuf};

use dirlist_adapters::{LocalFilesystem, MemoryFilesystem};
use dirlist_core::prelude::*;
use tempfile::TempDir;

fn run_local(target: &Path, out: &Path, trigger: &Path) -> ListerResult<ListingReport> {
    let request = ListingRequest::new(target, out)?.with_trigger_file(trigger);
    ListingService::new(Box::new(LocalFilesystem::new())).run(&request)
}

#[test]
fn memory_lists_only_directories_sorted() {
    let fs = MemoryFilesystem::new()
        .with_dir("D/c")
        .with_dir("D/a")
        .with_dir("D/b")
        .with_file("D/x", "")
        .with_file("D/y", "");

    let request = ListingRequest::new("D", "out/list.txt")
        .unwrap()
        .with_trigger_file("out/done");
    let report = ListingService::new(Box::new(fs.clone()))
        .run(&request)
        .unwrap();

    assert_eq!(report.subdirectories, 3);
    assert_eq!(
        fs.read_file(Path::new("out/list.txt")).as_deref(),
        Some("D/a\nD/b\nD/c")
    );
    assert_eq!(fs.read_file(Path::new("out/done")).as_deref(), Some(""));
}

#[test]
fn memory_missing_target_still_writes_both_files() {
    let fs = MemoryFilesystem::new();
    let request = ListingRequest::new("nowhere", "out/list.txt")
        .unwrap()
        .with_trigger_file("flags/done");

    ListingService::new(Box::new(fs.clone()))
        .run(&request)
        .unwrap();

    assert_eq!(fs.read_file(Path::new("out/list.txt")).as_deref(), Some(""));
    assert_eq!(fs.read_file(Path::new("flags/done")).as_deref(), Some(""));
}

#[test]
fn memory_target_that_is_a_file_is_empty() {
    let fs = MemoryFilesystem::new().with_file("data", "not a dir");
    let request = ListingRequest::new("data", "list.txt").unwrap();

    let report = ListingService::new(Box::new(fs.clone()))
        .run(&request)
        .unwrap();

    assert_eq!(report.subdirectories, 0);
    assert_eq!(fs.read_file(Path::new("list.txt")).as_deref(), Some(""));
}

#[test]
fn memory_output_parent_blocked_by_file_fails_without_trigger() {
    let fs = MemoryFilesystem::new()
        .with_dir("D/a")
        .with_file("out", "");
    let request = ListingRequest::new("D", "out/list.txt")
        .unwrap()
        .with_trigger_file("flags/done");

    let err = ListingService::new(Box::new(fs.clone()))
        .run(&request)
        .unwrap_err();

    assert!(err.to_string().contains("create directory"));
    assert!(!fs.exists(Path::new("flags/done")));
}

#[test]
fn local_lists_subdirectories_and_creates_parents() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("D");
    for name in ["c", "a", "b"] {
        fs::create_dir_all(target.join(name)).unwrap();
    }
    fs::write(target.join("x"), "x").unwrap();
    fs::write(target.join("y"), "y").unwrap();

    let out = temp.path().join("deep/nested/list.txt");
    let trigger = temp.path().join("flags/list.done");
    let report = run_local(&target, &out, &trigger).unwrap();

    let expected = ["a", "b", "c"]
        .iter()
        .map(|n| target.join(n).display().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(report.subdirectories, 3);
    assert_eq!(fs::read_to_string(&out).unwrap(), expected);
    assert_eq!(fs::metadata(&trigger).unwrap().len(), 0);
}

#[test]
fn local_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("D");
    fs::create_dir_all(target.join("one")).unwrap();
    fs::create_dir_all(target.join("two")).unwrap();
    let out = temp.path().join("out/list.txt");
    let trigger = temp.path().join("out/done");

    run_local(&target, &out, &trigger).unwrap();
    let first = (fs::read(&out).unwrap(), fs::read(&trigger).unwrap());
    run_local(&target, &out, &trigger).unwrap();
    let second = (fs::read(&out).unwrap(), fs::read(&trigger).unwrap());

    assert_eq!(first, second);
}

#[test]
fn local_overwrites_previous_contents() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("list.txt");
    let trigger = temp.path().join("done");
    fs::write(&out, "stale listing\nfrom before").unwrap();
    fs::write(&trigger, "stale").unwrap();

    run_local(&temp.path().join("missing"), &out, &trigger).unwrap();

    assert_eq!(fs::read(&out).unwrap().len(), 0);
    assert_eq!(fs::read(&trigger).unwrap().len(), 0);
}

#[cfg(unix)]
#[test]
fn local_follows_directory_symlinks_only() {
    use std::os::unix::fs::symlink;

    let temp = TempDir::new().unwrap();
    let target = temp.path().join("D");
    let elsewhere = temp.path().join("elsewhere");
    fs::create_dir_all(target.join("real")).unwrap();
    fs::create_dir_all(&elsewhere).unwrap();
    fs::write(temp.path().join("file"), "").unwrap();
    symlink(&elsewhere, target.join("dir-link")).unwrap();
    symlink(temp.path().join("file"), target.join("file-link")).unwrap();
    symlink(temp.path().join("gone"), target.join("broken-link")).unwrap();

    let listing = ListingService::new(Box::new(LocalFilesystem::new()))
        .scan(&target)
        .unwrap();

    let expected: Vec<String> = [target.join("dir-link"), target.join("real")]
        .iter()
        .map(|p: &PathBuf| p.display().to_string())
        .collect();
    assert_eq!(listing.entries(), expected.as_slice());
}
