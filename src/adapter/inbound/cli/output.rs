//! Terminal presentation for the CLI handlers.
//!
//! Human output is aligned `label value` fields under bold section titles.
//! With `--json` every helper instead writes one `{"type", "payload"}` object
//! per line to stdout, and `--quiet` drops everything except warnings and
//! errors.

use std::fmt::Display;
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// Presentation flags taken from the global CLI options.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// One JSON object per line instead of human text.
    pub json: bool,
    /// Only warnings and errors.
    pub quiet: bool,
    /// Number of `-v` flags.
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static MODE: OnceLock<OutputConfig> = OnceLock::new();

/// Install the presentation flags. Only the first call takes effect.
pub fn configure(config: OutputConfig) {
    let _ = MODE.set(config);
}

fn mode() -> OutputConfig {
    MODE.get().copied().unwrap_or_default()
}

#[must_use]
pub fn is_json() -> bool {
    mode().json
}

#[must_use]
pub fn verbosity() -> u8 {
    mode().verbose
}

/// Whether a line survives `--quiet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Alert,
}

fn emit(level: Level, kind: &str, payload: Value, human: impl FnOnce()) {
    let mode = mode();
    if mode.json {
        json_output(json!({ "type": kind, "payload": payload }));
    } else if level == Level::Alert || !mode.quiet {
        human();
    }
}

/// Print the `cloudshift <version>` banner.
pub fn header(version: &str) {
    emit(
        Level::Info,
        "header",
        json!({ "app": "cloudshift", "version": version }),
        || {
            println!("{} {}", "cloudshift".bold(), version.dimmed());
            println!();
        },
    );
}

pub fn section(title: &str) {
    emit(Level::Info, "section", json!({ "title": title }), || {
        println!();
        println!("{}", title.bold());
    });
}

/// Print a `label value` row aligned with its neighbours.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        Level::Info,
        "field",
        json!({ "label": label, "value": value }),
        || println!("  {:<22} {}", label.dimmed(), value),
    );
}

pub fn note(message: &str) {
    emit(Level::Info, "note", json!({ "message": message }), || {
        println!("  {}", message.dimmed());
    });
}

/// Print a pre-rendered block (e.g. a table), indented.
pub fn lines(content: &str) {
    emit(Level::Info, "lines", json!({ "content": content }), || {
        for line in content.lines() {
            println!("  {line}");
        }
    });
}

pub fn success(message: &str) {
    emit(Level::Info, "success", json!({ "message": message }), || {
        println!("  {} {}", "✓".green(), message);
    });
}

pub fn warning(message: &str) {
    emit(Level::Alert, "warning", json!({ "message": message }), || {
        println!("  {} {}", "⚠".yellow(), message);
    });
}

/// Report a fatal error on stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!(
            "{}",
            json!({ "type": "error", "payload": { "message": message } })
        );
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}

/// Write a complete JSON document as one line.
pub fn json_output(value: Value) {
    println!("{value}");
}

/// Start a spinner; hidden under `--json` and `--quiet`.
pub fn spinner(message: &str) -> ProgressBar {
    let mode = mode();
    let pb = if mode.json || mode.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
        );
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    };
    pb.set_message(message.to_string());
    pb
}

pub fn spinner_success(pb: &ProgressBar, message: &str) {
    finish_spinner(pb, "done", "✓".green().to_string(), message);
}

pub fn spinner_fail(pb: &ProgressBar, message: &str) {
    finish_spinner(pb, "failed", "×".red().to_string(), message);
}

fn finish_spinner(pb: &ProgressBar, status: &str, mark: String, message: &str) {
    if is_json() {
        json_output(json!({
            "type": "progress",
            "payload": { "status": status, "message": message },
        }));
    }
    if pb.is_hidden() {
        pb.finish_and_clear();
    } else {
        pb.finish_with_message(format!("{mark} {message}"));
    }
}

/// Dim a value in human mode; pass it through untouched in JSON mode.
pub fn muted(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        value
    } else {
        value.dimmed().to_string()
    }
}

/// Format a dollar amount with thousands separators and two decimals.
#[must_use]
pub fn usd(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}
