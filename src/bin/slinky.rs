// file: src/bin/slinky.rs
// version: 1.2.0
// guid: d6e7f8a9-b0c1-2345-6789-012345defabc

//! `slinky` - search a tree for symlinks and act on each one

use clap::Parser;
use colored::*;
use slinky::cli::args::{ColorChoice, SlinkyCli};
use slinky::cli::commands;
use slinky::logging;

fn main() {
    let cli = SlinkyCli::parse();

    match cli.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }

    let result = logging::init_logger(cli.verbose).and_then(|()| commands::run_slinky(cli));
    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red(), e);
        std::process::exit(1);
    }
}
