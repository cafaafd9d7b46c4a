// Names such as "a:b.txt" cannot be created on Windows.
#![cfg(unix)]

use assert_fs::prelude::*;
use scrubname::rename::{is_reserved, needs_sanitizing};
use scrubname::{Outcome, scrub_paths};
use std::fs;
use walkdir::WalkDir;

#[test]
fn report_example_renames_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let f = temp.child("report#1.txt");
    f.write_str("q1").unwrap();

    let report = scrub_paths([f.path()]);

    assert_eq!(report.before_lines(), vec!["report#1.txt"]);
    assert_eq!(report.after_lines(), vec!["report_1.txt"]);
    temp.child("report_1.txt").assert("q1");
    assert!(!f.path().exists());
}

#[test]
fn plain_name_is_a_no_op() {
    let temp = assert_fs::TempDir::new().unwrap();
    let f = temp.child("plain.txt");
    f.write_str("x").unwrap();

    let report = scrub_paths([f.path()]);

    assert_eq!(report.entries()[0].to_string(), "plain.txt → plain.txt");
    assert_eq!(report.entries()[0].outcome, Outcome::Unchanged);
    f.assert("x");
}

#[test]
fn reserved_folder_gets_filler() {
    let temp = assert_fs::TempDir::new().unwrap();
    let d = temp.child("con");
    d.create_dir_all().unwrap();

    let report = scrub_paths([d.path()]);

    assert_eq!(report.entries()[0].to_string(), "con → con_");
    assert!(temp.child("con_").path().is_dir());
}

#[test]
fn children_are_renamed_before_their_directory() {
    let temp = assert_fs::TempDir::new().unwrap();
    let top = temp.child("Q1 & Q2");
    top.child("a:b.txt").write_str("ab").unwrap();
    top.child("sub dir").child("x?.md").write_str("x").unwrap();

    let report = scrub_paths([top.path()]);

    // Depth-first, children sorted by name, each directory after its contents.
    assert_eq!(
        report.before_lines(),
        vec!["a:b.txt", "x?.md", "sub dir", "Q1 & Q2"]
    );
    assert_eq!(
        report.after_lines(),
        vec!["a_b.txt", "x_.md", "sub_dir", "Q1___Q2"]
    );
    assert!(report.entries().iter().all(|e| matches!(e.outcome, Outcome::Renamed { .. })));

    let renamed = temp.child("Q1___Q2");
    renamed.child("a_b.txt").assert("ab");
    renamed.child("sub_dir").child("x_.md").assert("x");
    assert!(!top.path().exists());
}

#[test]
fn whole_tree_is_clean_afterwards() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("drop");
    root.child("50% off <sale>").child("nul.txt").touch().unwrap();
    root.child("site_vti_cnf").child("a|b").touch().unwrap();
    root.child("deep").child("er").child("*star*").child("desktop.ini").touch().unwrap();
    root.child(" vti_odd").touch().unwrap();

    let report = scrub_paths([root.path()]);
    assert!(!report.has_errors(), "unexpected errors: {:?}", report.entries());

    for entry in WalkDir::new(root.path()).min_depth(1) {
        let entry = entry.unwrap();
        let name = entry.file_name().to_string_lossy().into_owned();
        assert!(!needs_sanitizing(&name), "{name:?} still needs sanitizing");
        assert!(!is_reserved(&name), "{name:?} is still reserved");
    }
}

#[test]
fn second_run_changes_nothing() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("my files");
    root.child("a b#c").touch().unwrap();
    root.child("com1.log").touch().unwrap();

    scrub_paths([root.path()]);
    let again = scrub_paths([temp.child("my_files").path()]);

    assert!(again.entries().iter().all(|e| e.outcome == Outcome::Unchanged));
    assert_eq!(again.summary().unchanged, 3);
}

#[test]
fn collision_never_overwrites() {
    let temp = assert_fs::TempDir::new().unwrap();
    let dirty = temp.child("a:b.txt");
    let clean = temp.child("a_b.txt");
    dirty.write_str("dirty").unwrap();
    clean.write_str("clean").unwrap();

    let report = scrub_paths([dirty.path(), clean.path()]);

    let e = &report.entries()[0];
    assert_eq!(e.before, "a:b.txt");
    assert_eq!(e.outcome, Outcome::Collision { candidate: "a_b.txt".into() });
    assert!(e.after().contains("already exists"));
    assert_eq!(report.entries()[1].outcome, Outcome::Unchanged);

    dirty.assert("dirty");
    clean.assert("clean");
}

#[test]
fn collision_inside_directory_is_reported_for_second_sibling() {
    let temp = assert_fs::TempDir::new().unwrap();
    let d = temp.child("dir");
    d.child("a b").write_str("space").unwrap();
    d.child("a_b").write_str("under").unwrap();

    let report = scrub_paths([d.path()]);

    // "a b" sorts before "a_b"; its candidate is taken.
    assert_eq!(report.before_lines(), vec!["a b", "a_b", "dir"]);
    assert!(matches!(report.entries()[0].outcome, Outcome::Collision { .. }));
    assert_eq!(report.summary().collisions, 1);
    assert_eq!(fs::read_to_string(d.path().join("a_b")).unwrap(), "under");
    assert_eq!(fs::read_to_string(d.path().join("a b")).unwrap(), "space");
}

#[test]
fn missing_input_is_skipped_and_run_continues() {
    let temp = assert_fs::TempDir::new().unwrap();
    let ok = temp.child("x y");
    ok.touch().unwrap();

    let report = scrub_paths([temp.path().join("missing"), ok.path().to_path_buf()]);

    assert_eq!(report.entries()[0].outcome, Outcome::Skipped);
    assert_eq!(report.after_lines()[1], "x_y");
    assert!(!report.has_errors());
}
