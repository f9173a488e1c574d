//! Tests for the filtered directory walker.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use edgar_core::errors::{EdgarErrorCode, WalkError};
use edgar_localstore::{walk, NamePattern, WalkOptions};
use regex::Regex;
use tempfile::TempDir;

/// root/a.txt, root/b.log, root/sub/c.txt
fn sample_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(dir.path().join("b.log"), "b").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("c.txt"), "c").unwrap();
    dir
}

fn collect(root: &Path, options: WalkOptions) -> HashSet<PathBuf> {
    walk(root, options)
        .unwrap()
        .collect::<Result<HashSet<_>, _>>()
        .unwrap()
}

fn paths(root: &Path, names: &[&str]) -> HashSet<PathBuf> {
    names.iter().map(|n| root.join(n)).collect()
}

#[test]
fn test_pattern_filters_files() {
    let dir = sample_tree();
    let found = collect(dir.path(), WalkOptions::new().name_pattern(r"\.txt$"));
    assert_eq!(found, paths(dir.path(), &["a.txt", "sub/c.txt"]));
}

#[test]
fn test_no_pattern_yields_all_files_only() {
    let dir = sample_tree();
    let found = collect(dir.path(), WalkOptions::new());
    assert_eq!(found, paths(dir.path(), &["a.txt", "b.log", "sub/c.txt"]));
}

#[test]
fn test_include_dirs() {
    let dir = sample_tree();
    let found = collect(dir.path(), WalkOptions::new().include_dirs(true));
    assert_eq!(found, paths(dir.path(), &["a.txt", "b.log", "sub", "sub/c.txt"]));
}

#[test]
fn test_dirs_filtered_by_same_pattern() {
    let dir = sample_tree();
    let found = collect(
        dir.path(),
        WalkOptions::new().name_pattern("u").include_dirs(true),
    );
    // "sub" matches; its file "c.txt" does not, but the directory is still descended.
    assert_eq!(found, paths(dir.path(), &["sub"]));
}

#[test]
fn test_pattern_is_searched_in_base_name() {
    let dir = sample_tree();
    // Substring search, not a full match.
    let found = collect(dir.path(), WalkOptions::new().name_pattern("txt"));
    assert_eq!(found, paths(dir.path(), &["a.txt", "sub/c.txt"]));

    // The directory part of the path is not considered.
    let found = collect(dir.path(), WalkOptions::new().name_pattern("^sub"));
    assert!(found.is_empty());
}

#[test]
fn test_precompiled_pattern() {
    let dir = sample_tree();
    let re = Regex::new(r"(?i)^B\.").unwrap();
    let found = collect(dir.path(), WalkOptions::new().name_pattern(re));
    assert_eq!(found, paths(dir.path(), &["b.log"]));
}

#[test]
fn test_invalid_pattern_fails_before_walking() {
    let dir = sample_tree();
    let result = walk(
        dir.path(),
        WalkOptions::new().name_pattern("[").include_dirs(true),
    );
    let err = match result {
        Ok(_) => panic!("invalid pattern must not produce a walk"),
        Err(err) => err,
    };
    assert!(matches!(err, WalkError::Pattern { ref pattern, .. } if pattern == "["));
    assert_eq!(err.error_code(), "PATTERN_ERROR");
}

#[test]
fn test_invalid_pattern_fails_even_for_missing_root() {
    let result = walk(
        "/no/such/root",
        WalkOptions::new().name_pattern(NamePattern::Text("(".into())),
    );
    assert!(matches!(result, Err(WalkError::Pattern { .. })));
}

#[test]
fn test_missing_root_is_empty() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let mut walker = walk(&missing, WalkOptions::new().include_dirs(true)).unwrap();
    assert!(walker.next().is_none());
    assert!(walker.next().is_none());
}

#[test]
fn test_file_root_yields_nothing() {
    let dir = sample_tree();
    let found = collect(&dir.path().join("a.txt"), WalkOptions::new());
    assert!(found.is_empty());
}

#[test]
fn test_walk_is_lazy() {
    let dir = TempDir::new().unwrap();
    for name in ["left", "right"] {
        fs::create_dir(dir.path().join(name)).unwrap();
        fs::write(dir.path().join(name).join("seed.txt"), "").unwrap();
    }

    let mut walker = walk(dir.path(), WalkOptions::new()).unwrap();
    let first = walker.next().unwrap().unwrap();
    let visited = first.parent().unwrap().file_name().unwrap().to_owned();
    let pending = if visited == "left" { "right" } else { "left" };

    // The other directory has not been opened yet, so a file created now is seen.
    let late = dir.path().join(pending).join("late.txt");
    fs::write(&late, "").unwrap();

    let rest: HashSet<PathBuf> = walker.map(Result::unwrap).collect();
    assert!(rest.contains(&late));
    assert!(rest.contains(&dir.path().join(pending).join("seed.txt")));
}

#[test]
fn test_early_drop_and_fresh_walk() {
    let dir = TempDir::new().unwrap();
    for i in 0..200 {
        let sub = dir.path().join(format!("d{}", i % 10));
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join(format!("f{i}.txt")), "").unwrap();
    }

    let first: Vec<_> = walk(dir.path(), WalkOptions::new())
        .unwrap()
        .take(1)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(first.len(), 1);

    // A new call starts a fresh traversal.
    assert_eq!(walk(dir.path(), WalkOptions::new()).unwrap().count(), 200);
}

#[cfg(unix)]
#[test]
fn test_symlinked_dir_reported_but_not_descended() {
    let dir = sample_tree();
    std::os::unix::fs::symlink(dir.path().join("sub"), dir.path().join("link")).unwrap();

    let found = collect(dir.path(), WalkOptions::new().include_dirs(true));
    assert!(found.contains(&dir.path().join("link")));
    assert!(!found.contains(&dir.path().join("link").join("c.txt")));

    let files = collect(dir.path(), WalkOptions::new());
    assert!(!files.contains(&dir.path().join("link")));
}

#[test]
fn test_traversal_error_surfaces_and_walk_continues() {
    let dir = TempDir::new().unwrap();
    let names = ["one", "two", "three"];
    for name in names {
        fs::create_dir(dir.path().join(name)).unwrap();
        fs::write(dir.path().join(name).join("seed.txt"), "").unwrap();
    }

    let mut walker = walk(dir.path(), WalkOptions::new()).unwrap();
    let first = walker.next().unwrap().unwrap();
    let visited = first.parent().unwrap().to_path_buf();

    // Remove both directories that have not been opened yet.
    for name in names {
        let sub = dir.path().join(name);
        if sub != visited {
            fs::remove_dir_all(&sub).unwrap();
        }
    }

    let rest: Vec<Result<PathBuf, WalkError>> = walker.collect();
    let errors: Vec<&walkdir::Error> = rest
        .iter()
        .filter_map(|item| match item {
            Err(WalkError::Traversal(err)) => Some(err),
            _ => None,
        })
        .collect();

    // One error per removed directory: the walk keeps going after the first.
    assert_eq!(errors.len(), 2, "unexpected items: {rest:?}");
    for err in errors {
        assert_eq!(err.depth(), 1);
        assert_eq!(
            err.io_error().map(std::io::Error::kind),
            Some(std::io::ErrorKind::NotFound)
        );
    }
    assert!(rest
        .iter()
        .all(|item| matches!(item, Err(WalkError::Traversal(_)))));
    assert!(rest
        .iter()
        .all(|item| item.as_ref().is_err_and(|e| e.error_code() == "WALK_ERROR")));
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_name_matched_lossily_and_yielded_intact() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    let raw = OsStr::from_bytes(b"bad\xffname.txt");
    fs::write(dir.path().join(raw), "").unwrap();
    fs::write(dir.path().join("good.txt"), "").unwrap();

    let found = collect(dir.path(), WalkOptions::new().name_pattern(r"\.txt$"));
    assert!(found.contains(&dir.path().join(raw)));

    let found = collect(dir.path(), WalkOptions::new().name_pattern(r"\x{FFFD}"));
    assert_eq!(found, HashSet::from([dir.path().join(raw)]));
}
