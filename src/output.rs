use owo_colors::OwoColorize;

use crate::rename::outcome::{Entry, Outcome};
use crate::report::Report;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix).
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// Render the report as two panes: before column, after column.
/// Rows line up one-to-one, in discovery order.
pub fn render_two_pane(report: &Report, color: bool) -> Vec<String> {
    let width = report
        .entries()
        .iter()
        .map(|e| e.before.chars().count())
        .max()
        .unwrap_or(0);
    report
        .entries()
        .iter()
        .map(|e| {
            let pad = width - e.before.chars().count();
            let after = e.after();
            let after = if color { colorize(e, &after) } else { after };
            format!("{}{}  │  {}", e.before, " ".repeat(pad), after)
        })
        .collect()
}

/// Tab-separated `before<TAB>after` rows for scripting.
pub fn render_plain(report: &Report) -> Vec<String> {
    report
        .entries()
        .iter()
        .map(|e| format!("{}\t{}", e.before, e.after()))
        .collect()
}

fn colorize(entry: &Entry, text: &str) -> String {
    match entry.outcome {
        Outcome::Renamed { .. } => text.green().to_string(),
        Outcome::Unchanged => text.dimmed().to_string(),
        Outcome::Collision { .. } | Outcome::Skipped | Outcome::Cycle => text.yellow().to_string(),
        Outcome::ListFailed { .. } | Outcome::RenameFailed { .. } => text.red().to_string(),
    }
}

/// Print the report (two-pane or plain) followed by a summary on stderr.
pub fn print_report(report: &Report, plain: bool) {
    let lines = if plain {
        render_plain(report)
    } else {
        render_two_pane(report, is_tty())
    };
    for line in lines {
        print_user(&line);
    }
    let summary = report.summary().to_string();
    if report.has_errors() {
        print_warn(&summary);
    } else if is_tty() {
        eprintln!("{} {}", "done:".green().bold(), summary);
    } else {
        eprintln!("done: {}", summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_pane_columns_align() {
        let mut r = Report::new();
        r.push(Entry::new("/t/a b", "a b", Outcome::Renamed { to: "a_b".into() }));
        r.push(Entry::new("/t/long name", "long name", Outcome::Renamed { to: "long_name".into() }));
        let lines = render_two_pane(&r, false);
        assert_eq!(lines[0], "a b        │  a_b");
        assert_eq!(lines[1], "long name  │  long_name");
    }

    #[test]
    fn plain_is_tab_separated() {
        let mut r = Report::new();
        r.push(Entry::new("/t/x", "x", Outcome::Skipped));
        assert_eq!(render_plain(&r), vec!["x\tskipped: not a file or directory"]);
    }
}
