//! Configuration: runtime settings, default paths and the optional XML file.
//!
//! Only ambient settings live here (logging). The rename rules and the
//! reserved-name set are fixed and intentionally not configurable.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{CONFIG_ENV, default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{create_template_config, load_config, load_config_from_xml_path};
