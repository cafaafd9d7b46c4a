//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Creates a secure template on request.
//!
//! Notes:
//! - A missing file is not an error; callers fall back to defaults.
//! - Unknown XML fields are rejected to surface misconfigurations early.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use crate::errors::ScrubError;
use crate::platform::{set_dir_mode_0700, set_file_mode_0600, write_config_secure_new_0600};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
    #[serde(rename = "json_logs", default, deserialize_with = "de_bool_trimmed_opt")]
    json_logs: Option<bool>,
}

// Trims surrounding whitespace so "<json_logs> true </json_logs>" is accepted.
fn de_bool_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("true") || s == "1" => Ok(Some(true)),
        Some(s) if s.eq_ignore_ascii_case("false") || s == "0" => Ok(Some(false)),
        Some(other) => Err(serde::de::Error::custom(format!(
            "invalid boolean for json_logs: '{other}'"
        ))),
    }
}

fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();
    if let Some(s) = parsed.log_level.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        cfg.log_level = s.parse::<LogLevel>()?;
    }
    if let Some(s) = parsed.log_file.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        cfg.log_file = Some(PathBuf::from(s));
    }
    cfg.json_logs = parsed.json_logs.unwrap_or(false);
    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents).map_err(|e| ScrubError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    xml_to_config(parsed)
}

/// Load the config from its resolved location.
/// Returns Ok(None) when no file exists there.
pub fn load_config() -> Result<Option<(Config, PathBuf)>> {
    let path = default_config_path()?;
    if !path.exists() {
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(None);
    }
    let cfg = load_config_from_xml_path(&path)?;
    Ok(Some((cfg, path)))
}

fn template_contents() -> String {
    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "/path/to/scrubname.log".into());
    format!(
        "<!--\n  scrubname configuration (XML)\n\n    log_level  -> quiet | normal | info | debug\n    log_file   -> also write logs to this file (leave empty to disable)\n    json_logs  -> true to emit structured JSON log lines\n\n  CLI flags override these values. The rename rules are fixed.\n  Example log file location: {suggested_log}\n-->\n<config>\n  <log_level>normal</log_level>\n  <log_file></log_file>\n  <json_logs>false</json_logs>\n</config>\n"
    )
}

/// Create a template config file at `path` (secure, never overwrites).
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        return Err(ScrubError::SymlinkAncestor(path.to_path_buf()).into());
    }
    if fs::symlink_metadata(path).is_ok() {
        return Err(ScrubError::ConfigExists(path.to_path_buf()).into());
    }

    if let Some(parent) = path.parent() {
        let existed = parent.exists();
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir '{}'", parent.display()))?;
        if !existed {
            let _ = set_dir_mode_0700(parent);
        }
    }

    write_config_secure_new_0600(path, template_contents().as_bytes())?;
    let _ = set_file_mode_0600(path);

    info!("Created template config at {}", path.display());
    Ok(())
}
