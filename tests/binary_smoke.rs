use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn bin() -> Command {
    let me = assert_cmd::cargo::cargo_bin!("scrubname");
    let mut cmd = Command::new(me);
    // Keep the user's real config out of the way.
    cmd.env("SCRUBNAME_CONFIG", std::env::temp_dir().join("scrubname-test-absent.xml"));
    cmd
}

#[test]
fn binary_print_config_succeeds() {
    let out = bin().arg("--print-config").output().expect("spawn binary");
    assert!(out.status.success(), "binary should succeed with --print-config");
    assert!(String::from_utf8_lossy(&out.stdout).contains("scrubname-test-absent.xml"));
}

#[test]
fn binary_requires_a_path() {
    let out = bin().output().expect("spawn binary");
    assert!(!out.status.success());
}

#[test]
fn binary_renames_and_prints_plain_report() {
    let td = tempdir().unwrap();
    let dir = td.path().join("My Stuff");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("report#1.txt"), "r").unwrap();
    fs::write(dir.join("plain.txt"), "p").unwrap();

    let out = bin().arg("--plain").arg(&dir).output().expect("spawn binary");

    assert!(
        out.status.success(),
        "expected success; stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "plain.txt\tplain.txt",
            "report#1.txt\treport_1.txt",
            "My Stuff\tMy_Stuff",
        ]
    );
    let renamed = td.path().join("My_Stuff");
    assert_eq!(fs::read_to_string(renamed.join("report_1.txt")).unwrap(), "r");
    assert!(String::from_utf8_lossy(&out.stderr).contains("2 renamed, 1 unchanged"));
}

#[test]
fn binary_writes_log_file_when_asked() {
    let td = tempdir().unwrap();
    // Canonical so no ancestor is a symlink (file logging refuses those).
    let base = fs::canonicalize(td.path()).unwrap();
    let target = base.join("a b");
    fs::write(&target, "x").unwrap();
    let log = base.join("logs").join("scrub.log");

    let out = bin()
        .arg("--log-level")
        .arg("info")
        .arg("--log-file")
        .arg(&log)
        .arg(&target)
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let contents = fs::read_to_string(&log).expect("log file should exist");
    assert!(contents.contains("renamed"), "log was: {contents}");
}

#[cfg(unix)]
#[test]
fn binary_exits_nonzero_when_a_rename_fails() {
    use std::os::unix::fs::PermissionsExt;

    // SAFETY: geteuid has no preconditions.
    if unsafe { libc::geteuid() } == 0 {
        eprintln!("skipping: root ignores directory write permissions");
        return;
    }
    let td = tempdir().unwrap();
    let ro = td.path().join("ro");
    fs::create_dir(&ro).unwrap();
    let f = ro.join("a b.txt");
    fs::write(&f, "x").unwrap();
    fs::set_permissions(&ro, fs::Permissions::from_mode(0o555)).unwrap();

    let out = bin().arg("--plain").arg(&f).output().expect("spawn binary");

    fs::set_permissions(&ro, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("a b.txt\terror: rename"), "stdout: {stdout}");
    assert!(f.exists());
}
