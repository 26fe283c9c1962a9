// file: src/report.rs
// version: 1.2.0
// guid: a7b8c9d0-e1f2-3456-7890-123456abcdef

//! Colored, user-facing reporting of links and link changes
//!
//! Every message describes a link as `origin -> target`. Informational
//! lines go to stdout, skip notices and per-link failures to stderr.

use colored::*;

/// Print a link description, optionally prefixed with a label.
pub fn print_link(prefix: Option<ColoredString>, origin: &str, target: &str) {
    if let Some(p) = prefix {
        print!("{}: ", p);
    }
    println!("{} -> {}", origin.cyan(), target.yellow());
}

/// Print a link notice to stderr, optionally prefixed with the command
/// name and a reason.
pub fn print_link_err(
    cmd: Option<ColoredString>,
    reason: Option<ColoredString>,
    origin: &str,
    target: &str,
) {
    if let Some(c) = cmd {
        eprint!("{}: ", c);
    }
    if let Some(r) = reason {
        eprint!("{}: ", r);
    }
    eprintln!("{} -> {}", origin.cyan(), target.yellow());
}

/// Print a target rewrite as `origin -> (old => new)`.
pub fn print_change(cmd: &str, origin: &str, old: &str, new: &str) {
    println!(
        "{}: {} -> ({} {} {})",
        cmd.bold(),
        origin.cyan(),
        old.dimmed(),
        "=>".bright_white(),
        new.yellow()
    );
}

/// Stderr notice for a dangling link an operation refuses to touch.
pub fn skip_dangling(cmd: &str, origin: &str, target: &str) {
    print_link_err(
        Some(cmd.bold()),
        Some("skipping dangling symlink".red()),
        origin,
        target,
    );
}

/// Report a per-link operation failure without aborting the walk.
pub fn operation_failure(err: &crate::SlinkyError) {
    eprintln!("{}: {}", "Error".red(), err);
}
