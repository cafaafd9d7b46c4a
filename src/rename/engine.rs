//! Traversal & rename engine.
//!
//! Walks each input path depth-first and renames bottom-up: a directory's
//! children are handled before the directory itself, because renaming the
//! parent first would invalidate the child paths still to be visited.
//!
//! Every visited path yields exactly one `Entry` in the report. Nothing here
//! is fatal: listing and rename failures are recorded and the run continues
//! with the next sibling.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use crate::platform::rename_no_replace;
use crate::report::Report;

use super::helpers::build_message;
use super::outcome::{Entry, Outcome};
use super::reserved::guard_reserved;
use super::sanitize::sanitize_name;

/// Name the engine will try to give an entry currently called `name`.
pub fn scrubbed_name(name: &str) -> String {
    guard_reserved(sanitize_name(name))
}

/// Process a list of dropped paths in order and return the ordered results.
pub fn scrub_paths<I, P>(paths: I) -> Report
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut report = Report::new();
    for p in paths {
        scrub_path(p.as_ref(), &mut report);
    }
    info!(summary = %report.summary(), "scrub finished");
    report
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    File,
    Dir,
    Other,
}

/// Classify by what the path resolves to: a link to a directory is walked
/// like a directory, a link to a file is renamed like a file (the link
/// itself, never its target). Broken links fall through to `Other`.
fn classify(path: &Path) -> Kind {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Kind::Dir,
        Ok(meta) if meta.is_file() => Kind::File,
        _ => Kind::Other,
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Process one path (recursing into directories), appending to `report`.
pub fn scrub_path(path: &Path, report: &mut Report) {
    let mut ancestors = Vec::new();
    visit(path, report, &mut ancestors);
}

/// `ancestors` holds the resolved paths of the directories currently open
/// above `path`; a directory link pointing at one of them is a cycle.
fn visit(path: &Path, report: &mut Report, ancestors: &mut Vec<PathBuf>) {
    let kind = classify(path);
    debug!(path = %path.display(), ?kind, "visit");
    match kind {
        Kind::File => rename_entry(path, report),
        Kind::Dir => scrub_dir(path, report, ancestors),
        Kind::Other => {
            warn!(path = %path.display(), "not a file or directory; skipped");
            report.push(Entry::new(path, display_name(path), Outcome::Skipped));
        }
    }
}

/// Immediate children of `dir`, sorted by name. Collected up front so no
/// rename happens while the directory is still being read. A symlinked
/// `dir` is listed through the link.
fn list_children(dir: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .map(|res| res.map(walkdir::DirEntry::into_path))
        .collect()
}

fn list_failed(dir: &Path, message: String, report: &mut Report) {
    error!(path = %dir.display(), error = %message, "directory listing failed; subtree skipped");
    report.push(Entry::new(
        dir,
        display_name(dir),
        Outcome::ListFailed { error: message },
    ));
}

fn scrub_dir(dir: &Path, report: &mut Report, ancestors: &mut Vec<PathBuf>) {
    let resolved = match fs::canonicalize(dir) {
        Ok(p) => p,
        Err(e) => {
            list_failed(dir, build_message("resolve directory", dir, &e), report);
            return;
        }
    };
    if ancestors.contains(&resolved) {
        warn!(path = %dir.display(), target = %resolved.display(), "directory link loops back to an enclosing folder; not followed");
        report.push(Entry::new(dir, display_name(dir), Outcome::Cycle));
        return;
    }

    let children = match list_children(dir) {
        Ok(children) => children,
        Err(e) => {
            let message = match e.io_error() {
                Some(io_err) => build_message("list directory", dir, io_err),
                None => e.to_string(),
            };
            list_failed(dir, message, report);
            return;
        }
    };

    ancestors.push(resolved);
    for child in &children {
        visit(child, report, ancestors);
    }
    ancestors.pop();
    rename_entry(dir, report);
}

/// Absolute, simplified form used to decide whether a rename is needed.
fn normalized(path: &Path) -> PathBuf {
    std::path::absolute(path)
        .map(|abs| dunce::simplified(&abs).to_path_buf())
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Rename a single file, link or (already processed) directory in place.
fn rename_entry(path: &Path, report: &mut Report) {
    let Some(name_os) = path.file_name() else {
        debug!(path = %path.display(), "no final component; nothing to rename");
        report.push(Entry::new(path, path.display().to_string(), Outcome::Unchanged));
        return;
    };
    let Some(original) = name_os.to_str() else {
        warn!(path = %path.display(), "name is not valid UTF-8; left unchanged");
        report.push(Entry::new(
            path,
            name_os.to_string_lossy().into_owned(),
            Outcome::Unchanged,
        ));
        return;
    };

    let new_name = scrubbed_name(original);
    let candidate = path.with_file_name(&new_name);

    if normalized(path) == normalized(&candidate) {
        debug!(path = %path.display(), "name already clean");
        report.push(Entry::new(path, original, Outcome::Unchanged));
        return;
    }

    if fs::symlink_metadata(&candidate).is_ok() {
        warn!(path = %path.display(), candidate = %candidate.display(), "target name exists; left unchanged");
        report.push(Entry::new(path, original, Outcome::Collision { candidate: new_name }));
        return;
    }

    let result = rename_no_replace(path, &candidate);
    let outcome = rename_outcome(path, &candidate, new_name, result);
    report.push(Entry::new(path, original, outcome));
}

/// Map the result of the no-replace rename. A destination that appeared
/// after the existence check counts as a collision.
fn rename_outcome(path: &Path, candidate: &Path, new_name: String, result: io::Result<()>) -> Outcome {
    match result {
        Ok(()) => {
            info!(from = %path.display(), to = %candidate.display(), "renamed");
            Outcome::Renamed { to: new_name }
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            warn!(path = %path.display(), candidate = %candidate.display(), "target appeared before rename; left unchanged");
            Outcome::Collision { candidate: new_name }
        }
        Err(e) => {
            let message = build_message("rename", path, &e);
            error!(path = %path.display(), candidate = %candidate.display(), error = %message, "rename failed");
            Outcome::RenameFailed {
                candidate: new_name,
                error: message,
            }
        }
    }
}
