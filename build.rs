// file: build.rs
// version: 1.1.0
// guid: f8a9b0c1-d2e3-4567-8901-234567fabcde

//! Compile-time artifact generation: shell completions and man pages
//! for both binaries, written to `generate/` for the packaging layer.

use clap::CommandFactory;
use clap_complete::generate_to;
use std::fs;
use std::path::Path;

include!("src/cli/args.rs");

fn main() -> std::io::Result<()> {
    let out_dir = Path::new("generate");
    if !out_dir.exists() {
        fs::create_dir_all(out_dir)?;
    }

    for (name, mut cmd) in [
        ("slinky", SlinkyCli::command()),
        ("slinky-ln", SlinkyLnCli::command()),
    ] {
        for &shell in &[Shell::Bash, Shell::Zsh, Shell::Fish] {
            generate_to(shell, &mut cmd, name, out_dir)?;
        }

        let man = clap_mangen::Man::new(cmd);
        let mut buffer = Vec::new();
        man.render(&mut buffer)?;
        fs::write(out_dir.join(format!("{}.1", name)), buffer)?;
    }

    println!("cargo:rerun-if-changed=src/cli/args.rs");
    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
