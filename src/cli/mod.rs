//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use colored::Colorize;
use std::io::Write;

/// Print the tool banner to stderr.
pub fn print_banner() {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle);
    let _ = writeln!(
        handle,
        "  {} {}",
        "stormstack-keys".bold(),
        "· provisions JWT signing key pairs for platform services".dimmed(),
    );
    let _ = writeln!(handle);
    let _ = handle.flush();
}
