//! Core library for `scrubname`.
//!
//! Renames files and folders in place so their names are accepted by
//! SharePoint/OneDrive and Windows filesystems. The front end (CLI here)
//! hands a list of paths to [`scrub_paths`] and renders the returned
//! [`Report`]; the engine never prints.

pub mod cli;
pub mod config;
pub mod errors;
pub mod output;
pub mod platform;
pub mod rename;
pub mod report;

pub use config::{Config, LogLevel, default_config_path, default_log_path, path_has_symlink_ancestor};
pub use errors::ScrubError;
pub use rename::{Entry, Outcome, scrub_path, scrub_paths, scrubbed_name};
pub use report::{Report, Summary};

/// Commonly used items for callers embedding the engine.
pub mod prelude {
    pub use crate::config::{Config, LogLevel, default_config_path};
    pub use crate::errors::ScrubError as Error;
    pub use crate::rename::{
        Entry, Outcome, guard_reserved, is_reserved, sanitize_name, scrub_path, scrub_paths,
        scrubbed_name,
    };
    pub use crate::report::{Report, Summary};
}
