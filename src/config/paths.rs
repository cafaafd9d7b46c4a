//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/log paths and detects symlinked ancestors.

use anyhow::Result;
use dirs::{config_dir, data_dir};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::ScrubError;

/// Environment variable naming an explicit config file (or its directory).
pub const CONFIG_ENV: &str = "SCRUBNAME_CONFIG";

const APP_DIR: &str = "scrubname";
const CONFIG_FILE: &str = "config.xml";

/// Config file location.
///
/// `$SCRUBNAME_CONFIG` wins: a directory (or a value ending in a separator)
/// means `<dir>/config.xml`, a relative value resolves against the current
/// directory. Otherwise the per-user config dir is used.
pub fn default_config_path() -> Result<PathBuf> {
    if let Some(raw) = env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        let mut p = PathBuf::from(&raw);
        if p.is_relative() {
            p = env::current_dir()?.join(p);
        }
        let trailing_sep = raw
            .to_string_lossy()
            .ends_with(|c: char| c == '/' || c == std::path::MAIN_SEPARATOR);
        if trailing_sep || p.is_dir() {
            p.push(CONFIG_FILE);
        }
        return Ok(p);
    }

    if let Some(mut base) = config_dir() {
        base.push(APP_DIR);
        base.push(CONFIG_FILE);
        return Ok(base);
    }
    env::var_os("HOME")
        .map(|h| PathBuf::from(h).join(".config").join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ScrubError::NoConfigDir.into())
}

/// Suggested log file location (per-user data dir). Nothing is created.
pub fn default_log_path() -> Option<PathBuf> {
    data_dir().map(|mut base| {
        base.push(APP_DIR);
        base.push("scrubname.log");
        base
    })
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.as_os_str().is_empty() {
            break;
        }
        match fs::symlink_metadata(anc) {
            Ok(meta) if meta.file_type().is_symlink() => return Ok(true),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        p = anc.parent();
    }
    Ok(false)
}
