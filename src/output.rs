//! User-facing diagnostics.
//!
//! Three severities, each routed to a fixed stream: informational messages go
//! to stdout, warnings and errors to stderr. Colors are applied with the
//! `colored` crate, which disables itself automatically when the stream is
//! not a terminal.

use colored::Colorize;

/// Print an informational message to stdout.
pub fn info(message: &str) {
    println!("{message}");
}

/// Print a success message to stdout in green.
pub fn success(message: &str) {
    println!("{}", message.green());
}

/// Print supplementary detail (e.g. a config excerpt) to stdout in blue.
pub fn detail(message: &str) {
    println!("{}", message.blue());
}

/// Print a section heading to stdout in blue.
pub fn heading(message: &str) {
    println!("{}", message.blue());
}

/// Print a warning to stderr in yellow.
pub fn warn(message: &str) {
    eprintln!("{}", message.yellow());
}

/// Print an error to stderr in red.
pub fn error(message: &str) {
    eprintln!("{}", message.red());
}

/// Format a `name: command` listing entry.
pub fn script_entry(name: &str, command: &str) -> String {
    format!("{}{}{}", name.green(), ": ".dimmed(), command)
}
