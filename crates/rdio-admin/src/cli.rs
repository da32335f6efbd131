//! Clap derive structures for the `rdio-admin` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// rdio-admin -- configuration migration and transfer for Rdio Scanner
#[derive(Debug, Parser)]
#[command(
    name = "rdio-admin",
    version,
    about = "Migrate, import, and export Rdio Scanner configurations",
    long_about = "Normalizes configuration documents exported by any Rdio Scanner\n\
        generation into the current schema, and moves them in and out of a\n\
        server's stored configuration.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "RDIO_ADMIN_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Stored configuration file (overrides profile)
    #[arg(long, env = "RDIO_ADMIN_STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Output format for documents [default: profile default, else json]
    #[arg(long, short = 'o', env = "RDIO_ADMIN_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalize a configuration file to the current schema and print it
    #[command(alias = "norm")]
    Normalize(NormalizeArgs),

    /// Import a configuration file into the stored configuration
    #[command(alias = "imp")]
    Import(ImportArgs),

    /// Export the stored configuration to a file
    #[command(alias = "exp")]
    Export(ExportArgs),

    /// Inspect canonical options
    Options(OptionsArgs),

    /// Manage rdio-admin profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Normalize ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Configuration file to normalize ("-" reads stdin)
    pub input: PathBuf,

    /// Write the normalized document here instead of stdout
    #[arg(long, short = 'O')]
    pub out: Option<PathBuf>,

    /// Print a summary of the rewrites to stderr
    #[arg(long)]
    pub report: bool,
}

// ── Import ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Configuration file to import (JSON or a base64 data URI)
    pub file: PathBuf,

    /// Print the normalized document for review instead of saving it
    #[arg(long)]
    pub review: bool,
}

// ── Export ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Directory to write the export file into (overrides profile)
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,

    /// Print a base64 data URI instead of writing a file
    #[arg(long, conflicts_with = "dir")]
    pub data_uri: bool,
}

// ── Options ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct OptionsArgs {
    #[command(subcommand)]
    pub command: OptionsCommand,
}

#[derive(Debug, Subcommand)]
pub enum OptionsCommand {
    /// Show the canonical option defaults
    Defaults,

    /// List option keys removed during normalization
    Obsolete,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or update a profile
    Init {
        /// Profile name
        #[arg(default_value = "default")]
        name: String,

        /// Stored configuration file for this profile (prompted if omitted)
        #[arg(long = "store-path")]
        store_path: Option<PathBuf>,

        /// Directory exports are written to
        #[arg(long)]
        export_dir: Option<PathBuf>,
    },

    /// Show the current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Set the default profile
    Use {
        /// Profile name
        name: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
