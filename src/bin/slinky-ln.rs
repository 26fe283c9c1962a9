// file: src/bin/slinky-ln.rs
// version: 1.2.0
// guid: e7f8a9b0-c1d2-3456-7890-123456efabcd

//! `slinky-ln` - create symbolic links without confusion

use clap::Parser;
use colored::*;
use slinky::cli::args::{ColorChoice, SlinkyLnCli};
use slinky::cli::commands;
use slinky::logging;

fn main() {
    let cli = SlinkyLnCli::parse();

    match cli.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }

    let result = logging::init_logger(cli.verbose).and_then(|()| commands::run_slinky_ln(cli));
    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red(), e);
        std::process::exit(1);
    }
}
