//! Rename engine: name sanitizing, reserved-name guard and the bottom-up
//! traversal that applies them in place.

pub mod engine;
pub mod helpers;
pub mod outcome;
pub mod reserved;
pub mod sanitize;

pub use engine::{scrub_path, scrub_paths, scrubbed_name};
pub use helpers::{io_error_with_help, io_error_with_help_io};
pub use outcome::{Entry, Outcome};
pub use reserved::{guard_reserved, is_reserved};
pub use sanitize::{needs_sanitizing, sanitize_name};
