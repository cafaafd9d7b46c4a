//! Per-path results.
//! One `Entry` is recorded for every path the engine visits; the "after"
//! column text is derived from its `Outcome`.

use std::fmt;
use std::path::PathBuf;

/// What happened to a single path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Name was already clean; nothing touched.
    Unchanged,
    /// Renamed in place.
    Renamed { to: String },
    /// Candidate name already taken in the same directory; nothing touched.
    Collision { candidate: String },
    /// Not a regular file, directory, or link to one.
    Skipped,
    /// Directory link that resolves to a folder already being processed
    /// higher up; neither descended into nor renamed.
    Cycle,
    /// Directory could not be listed; its subtree was abandoned.
    ListFailed { error: String },
    /// The OS refused the rename; nothing touched.
    RenameFailed { candidate: String, error: String },
}

impl Outcome {
    /// Stable short label used in structured logs and plain output.
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Unchanged => "unchanged",
            Outcome::Renamed { .. } => "renamed",
            Outcome::Collision { .. } => "collision",
            Outcome::Skipped => "skipped",
            Outcome::Cycle => "cycle",
            Outcome::ListFailed { .. } => "list_failed",
            Outcome::RenameFailed { .. } => "rename_failed",
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::ListFailed { .. } | Outcome::RenameFailed { .. })
    }
}

/// A processed path paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Path as it was visited (before any rename).
    pub path: PathBuf,
    /// Original base name.
    pub before: String,
    pub outcome: Outcome,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, before: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            path: path.into(),
            before: before.into(),
            outcome,
        }
    }

    /// Text for the "after" column.
    pub fn after(&self) -> String {
        match &self.outcome {
            Outcome::Unchanged => self.before.clone(),
            Outcome::Renamed { to } => to.clone(),
            Outcome::Collision { candidate } => {
                format!("{candidate} (left unchanged: name already exists)")
            }
            Outcome::Skipped => "skipped: not a file or directory".to_string(),
            Outcome::Cycle => "skipped: link loops back to an enclosing folder".to_string(),
            Outcome::ListFailed { error } => format!("error: {error}"),
            Outcome::RenameFailed { error, .. } => format!("error: {error}"),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.before, self.after())
    }
}
