//! Ordered result list of one run.
//! Entries are kept in exact discovery order; the before/after columns are
//! the two parallel logs a front end renders.

use crate::rename::outcome::{Entry, Outcome};

/// Per-outcome totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub renamed: usize,
    pub unchanged: usize,
    pub collisions: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} renamed, {} unchanged, {} collisions, {} skipped, {} errors",
            self.renamed, self.unchanged, self.collisions, self.skipped, self.errors
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<Entry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Left pane: original names.
    pub fn before_lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.before.clone()).collect()
    }

    /// Right pane: new names or status strings.
    pub fn after_lines(&self) -> Vec<String> {
        self.entries.iter().map(Entry::after).collect()
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.outcome.is_error())
    }

    pub fn summary(&self) -> Summary {
        let mut s = Summary::default();
        for e in &self.entries {
            match e.outcome {
                Outcome::Renamed { .. } => s.renamed += 1,
                Outcome::Unchanged => s.unchanged += 1,
                Outcome::Collision { .. } => s.collisions += 1,
                Outcome::Skipped | Outcome::Cycle => s.skipped += 1,
                Outcome::ListFailed { .. } | Outcome::RenameFailed { .. } => s.errors += 1,
            }
        }
        s
    }
}
