//! Platform-specific helpers.
//! Hides OS differences (Unix/Windows) behind a uniform API so the rename
//! engine and config code stay platform-agnostic.

mod temp;
#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub use unix::{
    open_log_file_secure_append, rename_no_replace, set_dir_mode_0700, set_file_mode_0600,
    write_config_secure_new_0600,
};

#[cfg(not(unix))]
pub use windows::{
    open_log_file_secure_append, rename_no_replace, set_dir_mode_0700, set_file_mode_0600,
    write_config_secure_new_0600,
};
