//! Application orchestrator.
//! Loads/merges config, initializes logging, runs the scrub over the given
//! paths and renders the report.

use anyhow::{Context, Result};
use scrubname::cli::Args;
use scrubname::config::{CONFIG_ENV, create_template_config, load_config};
use scrubname::output as out;
use scrubname::{Config, ScrubError, default_config_path, scrub_paths};
use std::process::ExitCode;
use tracing::{debug, error};

use crate::logging::init_tracing;

fn print_config_location() -> Result<()> {
    if let Some(v) = std::env::var_os(CONFIG_ENV) {
        out::print_info(&format!("Using {CONFIG_ENV} (explicit): {}", v.to_string_lossy()));
    }
    let p = default_config_path()?;
    out::print_info(&format!("scrubname config path:\n  {}\n", p.display()));
    if p.exists() {
        out::print_info("A config file already exists at that location.");
    } else {
        out::print_info("No config file exists there yet. Run with --init-config to create a template.");
    }
    Ok(())
}

fn init_config() -> Result<()> {
    let path = default_config_path()?;
    create_template_config(&path)
        .with_context(|| format!("create template config at '{}'", path.display()))?;
    out::print_success(&format!("A template scrubname config was written to: {}", path.display()));
    Ok(())
}

/// Run the CLI application.
pub fn run(args: Args) -> Result<ExitCode> {
    // Handled before logging init
    if args.print_config {
        print_config_location()?;
        return Ok(ExitCode::SUCCESS);
    }
    if args.init_config {
        init_config()?;
        return Ok(ExitCode::SUCCESS);
    }

    // Config file values first, then CLI overrides (CLI wins).
    let (mut cfg, cfg_path) = match load_config() {
        Ok(Some((cfg, path))) => (cfg, Some(path)),
        Ok(None) => (Config::default(), None),
        Err(e) => {
            if let Some(se) = e.downcast_ref::<ScrubError>() {
                out::print_error(&format!("{se} [code {}]", se.code()));
            } else {
                out::print_error(&format!("{e:#}"));
            }
            return Err(e);
        }
    };
    args.apply_overrides(&mut cfg);

    // Guard must live until the end of the run to flush file logs.
    let _guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), cfg.json_logs).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!(config = ?cfg, config_path = ?cfg_path, paths = args.paths.len(), "starting scrubname");

    let report = scrub_paths(&args.paths);
    for e in report.entries() {
        debug!(kind = e.outcome.kind(), path = %e.path.display(), after = %e.after(), "result");
    }
    out::print_report(&report, args.plain);

    if report.has_errors() {
        let summary = report.summary();
        error!(errors = summary.errors, "some paths could not be processed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
