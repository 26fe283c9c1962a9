// file: src/cli/generate.rs
// version: 1.2.0
// guid: b4c5d6e7-f8a9-0123-4567-890123bcdefa

//! The `generate` subcommand: shell completions and man pages on stdout
//!
//! Packaging scripts call this on the freshly built binaries to collect
//! the auxiliary artifacts they install next to the executables.

use crate::cli::args::GenerateCommand;
use crate::Result;
use clap_complete::generate;
use std::io::Write;

/// Emit the requested artifact for `cmd` to stdout.
pub fn run(mut cmd: clap::Command, command: &GenerateCommand) -> Result<()> {
    match command {
        GenerateCommand::Completions { shell } => {
            let bin_name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
        GenerateCommand::Man => {
            let mut buffer: Vec<u8> = Vec::new();
            clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;

            // The root page only covers the top level; append a section
            // for each real subcommand.
            for sub in cmd.get_subcommands() {
                if sub.get_name() == "help" || sub.get_name() == "generate" {
                    continue;
                }
                render_subcommand(sub, &mut buffer)?;
            }

            std::io::stdout().write_all(&buffer)?;
        }
    }
    Ok(())
}

/// Render a subcommand's man page as a section of the parent page,
/// demoting its headers and stripping the duplicate title lines.
fn render_subcommand(cmd: &clap::Command, buffer: &mut Vec<u8>) -> Result<()> {
    buffer.write_all(
        format!("\n.SH SUBCOMMAND: {}\n", cmd.get_name().to_uppercase()).as_bytes(),
    )?;

    let mut sub_buffer: Vec<u8> = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut sub_buffer)?;
    let man_content = String::from_utf8_lossy(&sub_buffer);

    let mut passed_name = false;
    for line in man_content.lines() {
        if line.starts_with(".TH") || line.starts_with(".SH NAME") {
            continue;
        }
        // Skip the name/description line right after .SH NAME
        if !passed_name && !line.starts_with('.') && !line.is_empty() {
            passed_name = true;
            continue;
        }
        if line.starts_with(".SH") {
            passed_name = true;
            let demoted = line.replace(".SH", ".SS");
            buffer.write_all(demoted.as_bytes())?;
        } else if passed_name {
            buffer.write_all(line.as_bytes())?;
        } else {
            continue;
        }
        buffer.write_all(b"\n")?;
    }

    for sub in cmd.get_subcommands() {
        render_subcommand(sub, buffer)?;
    }
    Ok(())
}
