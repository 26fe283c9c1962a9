// file: src/cli/commands.rs
// version: 1.5.0
// guid: c5d6e7f8-a9b0-1234-5678-901234cdefab

//! Command implementations for both binaries
//!
//! `run_slinky` drives the tree scanner and applies one operation per
//! surviving link; a failing link is reported and the walk continues.
//! `run_slinky_ln` creates a single link and fails hard.

use crate::cli::args::{SlinkyCli, SlinkyCommand, SlinkyLnCli, SlinkyLnCommand};
use crate::cli::generate;
use crate::links::{create, transform, LinkEntry, LinkFilters, LinkScanner};
use crate::report;
use crate::{Result, SlinkyError};
use clap::CommandFactory;
use colored::*;
use regex::Regex;
use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

struct RunContext {
    verbose: bool,
    dry_run: bool,
}

/// Report a per-link failure and keep walking.
fn attempt<F>(op: F)
where
    F: FnOnce() -> Result<()>,
{
    if let Err(e) = op() {
        report::operation_failure(&e);
    }
}

/// Entry point for the `slinky` binary.
pub fn run_slinky(cli: SlinkyCli) -> Result<()> {
    if let SlinkyCommand::Generate { command } = &cli.command {
        return generate::run(SlinkyCli::command(), command);
    }

    let filters = LinkFilters {
        only_dangling: cli.only_dangling,
        only_attached: cli.only_attached,
        only_absolute: cli.only_absolute,
        only_relative: cli.only_relative,
        origin_pattern: cli.filter_origin.as_deref().map(Regex::new).transpose()?,
        target_pattern: cli.filter_target.as_deref().map(Regex::new).transpose()?,
    };

    // Compiled once up front; edit-target is the only command carrying
    // its own pattern.
    let edit_pattern = match &cli.command {
        SlinkyCommand::EditTarget { pattern, .. } => Some(Regex::new(pattern)?),
        _ => None,
    };

    let ctx = RunContext {
        verbose: cli.verbose,
        dry_run: cli.dry_run,
    };
    let cmd_name = cli.command.to_string();

    let scanner = LinkScanner::new(&cli.path)
        .with_max_depth(cli.max_depth)
        .with_filters(filters);

    for entry in scanner.scan()? {
        debug!("visiting {}", entry.origin.display());
        match &cli.command {
            SlinkyCommand::List {
                status,
                origin_only,
            } => list_entry(&entry, *status, *origin_only),
            SlinkyCommand::ToRelative => attempt(|| to_relative(&ctx, &cmd_name, &entry)),
            SlinkyCommand::ToAbsolute => attempt(|| to_absolute(&ctx, &cmd_name, &entry)),
            SlinkyCommand::Tidy => attempt(|| tidy(&ctx, &cmd_name, &entry)),
            SlinkyCommand::EditTarget {
                replace,
                replace_all,
                ..
            } => {
                if let Some(re) = &edit_pattern {
                    edit_target(&ctx, &cmd_name, &entry, re, replace, *replace_all);
                }
            }
            SlinkyCommand::ToHardlink => attempt(|| to_hardlink(&ctx, &cmd_name, &entry)),
            SlinkyCommand::ToTree { hard } => attempt(|| to_tree(&ctx, &cmd_name, &entry, *hard)),
            SlinkyCommand::ReplaceWithTarget => {
                attempt(|| replace_with_target(&ctx, &cmd_name, &entry))
            }
            SlinkyCommand::Remove => remove(&ctx, &cmd_name, &entry),
            SlinkyCommand::Exec { cmd_string } => {
                attempt(|| exec(&ctx, &cmd_name, &entry, cmd_string))
            }
            // Handled before the walk starts.
            SlinkyCommand::Generate { .. } => {}
        }
    }
    Ok(())
}

fn list_entry(entry: &LinkEntry, status: bool, origin_only: bool) {
    if origin_only {
        println!("{}", entry.origin_str().cyan());
        return;
    }
    let prefix = if status {
        Some(if entry.dangling {
            "dangling".red()
        } else {
            "attached".green()
        })
    } else {
        None
    };
    report::print_link(prefix, &entry.origin_str(), &entry.target_str());
}

fn to_relative(ctx: &RunContext, cmd: &str, entry: &LinkEntry) -> Result<()> {
    if entry.dangling {
        report::skip_dangling(cmd, &entry.origin_str(), &entry.target_str());
        return Ok(());
    }
    if !entry.absolute {
        return Ok(());
    }
    let rel_target = transform::relative_target(entry)?;
    if ctx.verbose {
        report::print_change(
            cmd,
            &entry.origin_str(),
            &entry.target_str(),
            &rel_target.to_string_lossy(),
        );
    }
    if !ctx.dry_run {
        transform::relink(&entry.origin, &rel_target)?;
    }
    Ok(())
}

fn to_absolute(ctx: &RunContext, cmd: &str, entry: &LinkEntry) -> Result<()> {
    if entry.dangling {
        report::skip_dangling(cmd, &entry.origin_str(), &entry.target_str());
        return Ok(());
    }
    if entry.absolute {
        return Ok(());
    }
    let abs_target = transform::absolute_target(entry)?;
    if ctx.verbose {
        report::print_change(
            cmd,
            &entry.origin_str(),
            &entry.target_str(),
            &abs_target.to_string_lossy(),
        );
    }
    if !ctx.dry_run {
        transform::relink(&entry.origin, &abs_target)?;
    }
    Ok(())
}

fn tidy(ctx: &RunContext, cmd: &str, entry: &LinkEntry) -> Result<()> {
    let cleaned = transform::tidy_target(&entry.target);
    // Compare the raw strings; Path equality ignores the redundant
    // components tidy exists to remove.
    if cleaned.as_os_str() == entry.target.as_os_str() {
        report::print_link_err(
            Some(cmd.bold()),
            Some("target is already tidy".green()),
            &entry.origin_str(),
            &entry.target_str(),
        );
        return Ok(());
    }
    if ctx.verbose {
        report::print_change(
            cmd,
            &entry.origin_str(),
            &entry.target_str(),
            &cleaned.to_string_lossy(),
        );
    }
    if !ctx.dry_run {
        transform::relink(&entry.origin, &cleaned)?;
    }
    Ok(())
}

fn edit_target(
    ctx: &RunContext,
    cmd: &str,
    entry: &LinkEntry,
    re: &Regex,
    replace: &str,
    replace_all: bool,
) {
    let target_str = entry.target_str();
    if !re.is_match(&target_str) {
        return;
    }
    attempt(|| {
        let new_target = transform::edited_target(re, &target_str, replace, replace_all);
        if new_target == target_str {
            report::print_link_err(
                Some(cmd.bold()),
                Some("new target is identical to old target".red()),
                &entry.origin_str(),
                &target_str,
            );
            return Ok(());
        }
        if ctx.verbose {
            report::print_change(cmd, &entry.origin_str(), &target_str, &new_target);
        }
        if !ctx.dry_run {
            transform::relink(&entry.origin, &new_target)?;
        }
        Ok(())
    });
}

fn to_hardlink(ctx: &RunContext, cmd: &str, entry: &LinkEntry) -> Result<()> {
    if entry.dangling {
        report::skip_dangling(cmd, &entry.origin_str(), &entry.target_str());
        return Ok(());
    }
    if entry.resolved.is_dir() {
        report::print_link_err(
            Some(cmd.bold()),
            Some("skipping directory".red()),
            &entry.origin_str(),
            &entry.target_str(),
        );
        return Ok(());
    }
    if ctx.verbose {
        report::print_link(
            Some(cmd.bold()),
            &entry.origin_str(),
            &entry.resolved.to_string_lossy(),
        );
    }
    if !ctx.dry_run {
        transform::to_hardlink(entry)?;
    }
    Ok(())
}

fn to_tree(ctx: &RunContext, cmd: &str, entry: &LinkEntry, hard: bool) -> Result<()> {
    if entry.dangling {
        report::skip_dangling(cmd, &entry.origin_str(), &entry.target_str());
        return Ok(());
    }
    if !entry.resolved.is_dir() {
        report::print_link_err(
            Some(cmd.bold()),
            Some("skipping file".red()),
            &entry.origin_str(),
            &entry.target_str(),
        );
        return Ok(());
    }
    if ctx.verbose {
        report::print_link(
            Some(cmd.bold()),
            &entry.origin_str(),
            &entry.resolved.to_string_lossy(),
        );
    }
    if !ctx.dry_run {
        // The link must go before the tree can take its place; resolve
        // its target first so nothing dangles in between.
        let target = fs::canonicalize(&entry.resolved)?;
        fs::remove_file(&entry.origin)?;
        if hard {
            create::hard_link_tree(&target, &entry.origin)?;
        } else {
            create::symlink_tree(&target, &entry.origin)?;
        }
    }
    Ok(())
}

fn replace_with_target(ctx: &RunContext, cmd: &str, entry: &LinkEntry) -> Result<()> {
    if entry.dangling {
        report::skip_dangling(cmd, &entry.origin_str(), &entry.target_str());
        return Ok(());
    }
    if ctx.verbose {
        report::print_link(
            Some(cmd.bold()),
            &entry.origin_str(),
            &entry.resolved.to_string_lossy(),
        );
    }
    if !ctx.dry_run {
        transform::replace_with_target(entry)?;
    }
    Ok(())
}

fn remove(ctx: &RunContext, cmd: &str, entry: &LinkEntry) {
    if ctx.verbose {
        report::print_link(
            Some(cmd.bold().red()),
            &entry.origin_str(),
            &entry.target_str(),
        );
    }
    if !ctx.dry_run {
        attempt(|| {
            fs::remove_file(&entry.origin)?;
            Ok(())
        });
    }
}

fn exec(ctx: &RunContext, cmd: &str, entry: &LinkEntry, cmd_string: &str) -> Result<()> {
    let shell = std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string());
    if ctx.verbose {
        println!(
            "{}: {} {} {}",
            cmd.bold(),
            cmd_string.blue(),
            entry.origin_str().cyan(),
            entry.target_str().yellow(),
        );
    }
    if !ctx.dry_run {
        Command::new(shell)
            .arg("-c")
            .arg(cmd_string)
            .arg("--")
            .arg(&entry.origin)
            .arg(&entry.target)
            .status()?;
    }
    Ok(())
}

/// Entry point for the `slinky-ln` binary.
pub fn run_slinky_ln(cli: SlinkyLnCli) -> Result<()> {
    if let Some(SlinkyLnCommand::Generate { command }) = &cli.command {
        return generate::run(SlinkyLnCli::command(), command);
    }

    let raw_target = cli.target.as_deref().ok_or(SlinkyError::TargetRequired)?;

    let target_path = if cli.dereference {
        create::dereference(Path::new(raw_target))
    } else {
        PathBuf::from(raw_target)
    };
    let target_text = target_path.to_string_lossy().into_owned();

    let origin = create::resolve_origin(&target_path, cli.origin.as_deref())?;
    let origin_text = origin.display().to_string();

    if cli.force && !cli.dry_run && origin.symlink_metadata().is_ok() {
        debug!("removing existing {}", origin.display());
        fs::remove_file(&origin)?;
    }

    let target_exists = target_path.exists();

    if cli.tree {
        if !target_exists {
            return Err(SlinkyError::TargetMissing("tree"));
        }
        let label = if cli.hard {
            "create hardlink tree"
        } else {
            "create symlink tree"
        };
        if cli.verbose {
            report::print_link(Some(label.bold()), &origin_text, raw_target);
        }
        if !cli.dry_run {
            if cli.hard {
                create::hard_link_tree(&target_path, &origin)?;
            } else {
                create::symlink_tree(&target_path, &origin)?;
            }
        }
    } else if cli.hard {
        if !target_exists {
            return Err(SlinkyError::TargetMissing("hardlink"));
        }
        if cli.verbose {
            report::print_link(Some("create hardlink".bold()), &origin_text, raw_target);
        }
        if !cli.dry_run {
            create::hard_link(&target_path, &origin)?;
        }
    } else {
        if !target_exists && !cli.allow_dangling {
            return Err(SlinkyError::DanglingRefused);
        }
        let link_text = if cli.absolute {
            fs::canonicalize(&target_path)?
                .to_string_lossy()
                .into_owned()
        } else if cli.relative {
            let abs_target = fs::canonicalize(&target_path)?;
            let origin_parent = origin
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let abs_origin_parent = fs::canonicalize(origin_parent)?;
            pathdiff::diff_paths(&abs_target, &abs_origin_parent)
                .ok_or(SlinkyError::RelativePath)?
                .to_string_lossy()
                .into_owned()
        } else {
            target_text
        };
        if cli.verbose {
            report::print_link(Some("create symlink".bold()), &origin_text, &link_text);
        }
        if !cli.dry_run {
            symlink(&link_text, &origin)?;
        }
    }

    Ok(())
}
