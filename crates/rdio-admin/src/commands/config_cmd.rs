//! Config subcommand handlers.

use std::path::PathBuf;

use dialoguer::Input;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn prompt_store_path() -> Result<PathBuf, CliError> {
    let raw: String = Input::new()
        .with_prompt("Stored configuration file")
        .interact_text()
        .map_err(prompt_err)?;
    if raw.trim().is_empty() {
        return Err(CliError::Validation {
            field: "store".into(),
            reason: "path cannot be empty".into(),
        });
    }
    Ok(PathBuf::from(raw.trim()))
}

fn save_config(cfg: &Config) -> Result<(), CliError> {
    config::save_config(cfg)?;
    Ok(())
}

fn render_config(cfg: &Config) -> Result<String, CliError> {
    toml::to_string_pretty(cfg).map_err(|e| CliError::ConfigFile(e.to_string()))
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::unused_async)]
pub async fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let color = output::should_color(global.color);

    match args.command {
        ConfigCommand::Init {
            name,
            store_path,
            export_dir,
        } => {
            let mut cfg = config::load_config_or_default();
            let store = match store_path {
                Some(path) => path,
                None => prompt_store_path()?,
            };
            let profile = Profile { store, export_dir };
            profile.validate()?;

            cfg.profiles.insert(name.clone(), profile);
            if cfg.profiles.len() == 1 {
                cfg.default_profile = Some(name.clone());
            }
            save_config(&cfg)?;
            output::print_success(
                &format!(
                    "Profile '{name}' saved to {}",
                    config::config_path().display()
                ),
                color,
                global.quiet,
            );
        }

        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            output::print_output(&render_config(&cfg)?, global.quiet);
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
        }

        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();
            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: config::available_profiles(&cfg),
                    name,
                });
            }
            cfg.default_profile = Some(name.clone());
            save_config(&cfg)?;
            output::print_success(&format!("Default profile set to '{name}'"), color, global.quiet);
        }
    }
    Ok(())
}
