use clap::Parser;
use scrubname::cli::Args;
use scrubname::config::types::{Config, LogLevel};
use std::path::PathBuf;

#[test]
fn paths_are_collected_in_order() {
    let args = Args::parse_from(["scrubname", "/tmp/b", "/tmp/a"]);
    assert_eq!(args.paths, vec![PathBuf::from("/tmp/b"), PathBuf::from("/tmp/a")]);
}

#[test]
fn paths_required_unless_config_flags() {
    assert!(Args::try_parse_from(["scrubname"]).is_err());
    assert!(Args::try_parse_from(["scrubname", "--print-config"]).is_ok());
    assert!(Args::try_parse_from(["scrubname", "--init-config"]).is_ok());
}

#[test]
fn invalid_log_level_rejected_by_parser() {
    let err = Args::try_parse_from(["scrubname", "--log-level", "loud", "x"]).unwrap_err();
    assert!(err.to_string().contains("loud"));
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["scrubname", "--debug", "--log-level", "quiet", "x"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug)); // --debug wins

    let args = Args::parse_from(["scrubname", "--log-level", "info", "x"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Info));

    let args = Args::parse_from(["scrubname", "x"]);
    assert_eq!(args.effective_log_level(), None);
}

#[test]
fn apply_overrides_sets_flags() {
    let args = Args::parse_from([
        "scrubname",
        "--log-level",
        "info",
        "--log-file",
        "/tmp/scrub.log",
        "--json",
        "x",
    ]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/scrub.log")));
    assert!(cfg.json_logs);
}

#[test]
fn unset_flags_keep_config_values() {
    let args = Args::parse_from(["scrubname", "x"]);
    let mut cfg = Config {
        log_level: LogLevel::Quiet,
        log_file: Some(PathBuf::from("/var/log/s.log")),
        json_logs: true,
    };
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.log_level, LogLevel::Quiet);
    assert_eq!(cfg.log_file, Some(PathBuf::from("/var/log/s.log")));
    assert!(cfg.json_logs);
}
