use std::env;
use std::fs;
use std::io::Result;
use std::path::{Path, PathBuf};

use clap::{Command, CommandFactory};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;

#[path = "src/cli.rs"]
mod cli;

const BIN: &str = "glyphmark";

fn write_completions(cmd: &mut Command, outdir: &Path) -> Result<()> {
    for shell in [Shell::Bash, Shell::Fish, Shell::Zsh, Shell::PowerShell] {
        generate_to(shell, cmd, BIN, outdir)?;
    }
    Ok(())
}

/// Render `cmd` as a man page, including its long help and the
/// EXAMPLES/STYLES text it carries in `after_help`.
fn write_man_page(cmd: Command, path: &Path) -> Result<()> {
    let mut page = Vec::new();
    Man::new(cmd).render(&mut page)?;
    fs::write(path, page)
}

fn main() -> Result<()> {
    let mut cmd = cli::Cli::command();

    if let Some(outdir) = env::var_os("OUT_DIR") {
        write_completions(&mut cmd, Path::new(&outdir))?;
    }

    let man_dir = PathBuf::from("target/man");
    fs::create_dir_all(&man_dir)?;
    write_man_page(cmd.clone(), &man_dir.join(format!("{BIN}.1")))?;

    // convert, render, tree and emoji each get glyphmark-<name>.1
    for sub in cmd.get_subcommands().filter(|sub| sub.get_name() != "help") {
        let page = format!("{BIN}-{}", sub.get_name());
        let sub = sub.clone().bin_name(format!("{BIN} {}", sub.get_name()));
        write_man_page(sub, &man_dir.join(format!("{page}.1")))?;
    }

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
