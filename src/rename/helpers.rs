//! I/O error enrichment.
//!
//! Turns a bare `io::Error` into a message carrying the operation, the path,
//! a platform-aware hint and the raw OS code. Usable with `map_err` in both
//! `io::Result` and `anyhow::Result` code paths.
//!
//! Usage:
//!   fs::read_dir(dir).map_err(io_error_with_help("list directory", dir))?;
//!   rename_no_replace(a, b).map_err(io_error_with_help_io("rename", a))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

/// Hint for a raw OS error code, if we know one.
#[cfg(unix)]
fn hint_for_code(code: i32) -> Option<&'static str> {
    match code {
        libc::EACCES | libc::EPERM => {
            Some("permission denied; check ownership and write permissions on the parent folder")
        }
        libc::EBUSY => Some("resource busy; close programs using it and retry"),
        libc::ENOENT => Some("path not found; it may have been moved during the run"),
        libc::EEXIST | libc::ENOTEMPTY => Some("target name already exists"),
        libc::EROFS => Some("read-only filesystem; cannot rename here"),
        libc::ENAMETOOLONG => Some("filename or path too long"),
        libc::EINVAL => Some("name not accepted by this filesystem"),
        libc::ELOOP => Some("too many symbolic link levels; possible symlink cycle"),
        libc::EMFILE => Some("process file descriptor limit reached"),
        _ => None,
    }
}

/// Common Win32 errors.
#[cfg(windows)]
fn hint_for_code(code: i32) -> Option<&'static str> {
    match code {
        5 => Some("access denied; check permissions"), // ERROR_ACCESS_DENIED
        32 => Some("sharing violation; the file is in use"), // ERROR_SHARING_VIOLATION
        2 | 3 => Some("path not found; it may have been moved during the run"),
        80 | 183 => Some("target name already exists"), // ERROR_FILE_EXISTS / ERROR_ALREADY_EXISTS
        19 => Some("write protected / read-only media"), // ERROR_WRITE_PROTECT
        123 => Some("name not accepted by this filesystem"), // ERROR_INVALID_NAME
        206 => Some("filename or path too long"), // ERROR_FILENAME_EXCED_RANGE
        _ => None,
    }
}

#[cfg(not(any(unix, windows)))]
fn hint_for_code(_code: i32) -> Option<&'static str> {
    None
}

fn hint_for_kind(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => {
            Some("permission denied; check ownership and write permissions on the parent folder")
        }
        io::ErrorKind::NotFound => Some("path not found; it may have been moved during the run"),
        io::ErrorKind::AlreadyExists => Some("target name already exists"),
        _ => None,
    }
}

/// Format a human-friendly message with op/path plus a hint.
pub(crate) fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        if let Some(hint) = hint_for_code(code) {
            msg.push_str(" (");
            msg.push_str(hint);
            msg.push(')');
        }
        msg.push_str(&format!(" [os code: {code}]"));
    } else if let Some(hint) = hint_for_kind(e.kind()) {
        msg.push_str(" (");
        msg.push_str(hint);
        msg.push(')');
    }

    msg
}

/// Adapter for anyhow::Result code.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

/// Adapter for io::Result code; preserves the original ErrorKind.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), build_message(op, path, &e))
}
