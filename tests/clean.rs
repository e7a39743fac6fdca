mod utils;

use checkgen::{clean_dir, Stage};
use utils::{list, Scratch};

#[test]
fn keeps_reserved_and_directories() {
    let scratch = Scratch::new();
    scratch.write("main.go", "package checks\n");
    scratch.write("old_check.go", "package checks\n");
    scratch.write("nested/extra.go", "package nested\n");

    let removed = clean_dir(&scratch.root, "main.go").unwrap();

    assert_eq!(removed, 2);
    assert_eq!(list(&scratch.root), ["main.go", "nested/"]);
    assert_eq!(scratch.read("main.go"), "package checks\n");
}

#[test]
fn keeps_reserved_at_any_depth() {
    let scratch = Scratch::new();
    scratch.write("a/b/main.go", "");
    scratch.write("a/b/stale.go", "");
    scratch.write("a/notes.txt", "");
    scratch.mkdir("empty");

    let removed = clean_dir(&scratch.root, "main.go").unwrap();

    assert_eq!(removed, 2);
    assert_eq!(list(&scratch.root), ["a/", "a/b/", "a/b/main.go", "empty/"]);
}

#[test]
fn reserved_name_is_a_parameter() {
    let scratch = Scratch::new();
    scratch.write("main.go", "");
    scratch.write("doc.go", "");

    clean_dir(&scratch.root, "doc.go").unwrap();

    assert_eq!(list(&scratch.root), ["doc.go"]);
}

#[test]
fn reserved_name_matches_whole_file_name() {
    let scratch = Scratch::new();
    scratch.write("main.go.bak", "");
    scratch.write("not_main.go", "");

    let removed = clean_dir(&scratch.root, "main.go").unwrap();

    assert_eq!(removed, 2);
    assert!(list(&scratch.root).is_empty());
}

#[test]
fn empty_directory_is_a_noop() {
    let scratch = Scratch::new();

    assert_eq!(clean_dir(&scratch.root, "main.go").unwrap(), 0);
}

#[test]
fn missing_directory_fails() {
    let scratch = Scratch::new();

    let err = clean_dir(&scratch.root.join("pkg/checks"), "main.go").unwrap_err();

    assert_eq!(err.stage(), Stage::Clean);
    assert!(matches!(err, checkgen::Error::WalkDir { .. }));
}

#[cfg(unix)]
#[test]
fn removes_symlinks_without_following() {
    let scratch = Scratch::new();
    let target = scratch.write("outside/keep.go", "");
    let checks = scratch.mkdir("checks");
    std::os::unix::fs::symlink(target.parent().unwrap(), checks.join("linked")).unwrap();

    let removed = clean_dir(&checks, "main.go").unwrap();

    assert_eq!(removed, 1);
    assert!(list(&checks).is_empty());
    assert!(target.exists());
}
