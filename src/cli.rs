//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Positional PATHs play the role of a drag-and-drop: each is scrubbed in order.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Rename files and folders in place so their names are safe on
/// SharePoint/OneDrive and Windows filesystems.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Strip illegal characters and reserved names from file and folder names"
)]
pub struct Args {
    /// Files or folders to scrub. Folders are processed recursively, children first.
    #[arg(
        value_name = "PATH",
        value_hint = ValueHint::AnyPath,
        required_unless_present_any = ["print_config", "init_config"]
    )]
    pub paths: Vec<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_parser = parse_log_level, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<LogLevel>,

    /// Also write logs to this file.
    #[arg(long, value_hint = ValueHint::FilePath, help = "Also write logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print the report as `before<TAB>after` lines without colors or padding.
    #[arg(long, help = "Tab-separated report for scripting")]
    pub plain: bool,

    /// Print where scrubname will look for the config file, then exit.
    #[arg(long, help = "Print the config file location and exit")]
    pub print_config: bool,

    /// Write a template config file at the config location, then exit.
    #[arg(long, help = "Create a template config file and exit")]
    pub init_config: bool,
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    s.parse::<LogLevel>().map_err(|e| e.to_string())
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(path) = &self.log_file {
            cfg.log_file = Some(path.clone());
        }
        if self.json {
            cfg.json_logs = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
