//! Command handlers, one module per top-level subcommand.

pub mod config_cmd;
pub mod export;
pub mod import;
pub mod normalize;
pub mod options;
mod util;

use clap::CommandFactory;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

/// Route a parsed command to its handler.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Normalize(args) => normalize::handle(args, global).await,
        Command::Import(args) => import::handle(args, global).await,
        Command::Export(args) => export::handle(args, global).await,
        Command::Options(args) => options::handle(args, global).await,
        Command::Config(args) => config_cmd::handle(args, global).await,
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "rdio-admin", &mut std::io::stdout());
            Ok(())
        }
    }
}
