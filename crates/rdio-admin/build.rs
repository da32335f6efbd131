//! Renders man pages and shell completions for `rdio-admin` into `OUT_DIR`.
//!
//! Pages follow the `rdio-admin-<subcommand>[-<subcommand>]` naming, one per
//! command (`rdio-admin-import.1`, `rdio-admin-options-defaults.1`, ...).

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::Shell;

// cli.rs depends only on clap and clap_complete, both build-dependencies.
#[path = "src/cli.rs"]
#[allow(dead_code)]
mod cli;

const BIN_NAME: &str = "rdio-admin";

const SHELLS: [Shell; 5] = [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish];

fn main() -> io::Result<()> {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let out_dir = std::env::var_os("OUT_DIR").ok_or_else(|| io::Error::other("OUT_DIR is unset"))?;
    let out_dir = Path::new(&out_dir);

    let cmd = cli::Cli::command();
    let man_dir = out_dir.join("man");
    std::fs::create_dir_all(&man_dir)?;
    render_pages(&cmd, BIN_NAME, &man_dir)?;

    let completions_dir = out_dir.join("completions");
    std::fs::create_dir_all(&completions_dir)?;
    let mut cmd = cmd;
    for shell in SHELLS {
        clap_complete::generate_to(shell, &mut cmd, BIN_NAME, &completions_dir)?;
    }
    Ok(())
}

fn render_pages(cmd: &clap::Command, page: &str, dir: &Path) -> io::Result<()> {
    let mut roff = Vec::new();
    clap_mangen::Man::new(cmd.clone().name(page.to_owned())).render(&mut roff)?;
    std::fs::write(dir.join(format!("{page}.1")), roff)?;

    for sub in cmd.get_subcommands().filter(|sub| !sub.is_hide_set()) {
        render_pages(sub, &format!("{page}-{}", sub.get_name()), dir)?;
    }
    Ok(())
}
