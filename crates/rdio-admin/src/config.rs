//! CLI configuration: thin wrapper around `rdio_admin_config` shared types.
//!
//! Re-exports the shared types and adds resolution that respects
//! `GlobalOpts` flag overrides (--profile, --store, --output).

use std::path::PathBuf;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use rdio_admin_config::{Config, Profile, config_path, load_config_or_default, save_config};

/// Where a command reads and writes the stored configuration.
#[derive(Debug, Clone)]
pub struct ResolvedProfile {
    pub store: PathBuf,
    pub export_dir: PathBuf,
}

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Resolve the store location: `--store` > profile > error.
///
/// An explicitly requested profile must exist even when `--store` is given.
pub fn resolve_profile(global: &GlobalOpts, config: &Config) -> Result<ResolvedProfile, CliError> {
    let name = active_profile_name(global, config);
    let profile = config.profiles.get(&name);

    if profile.is_none() && global.profile.is_some() {
        return Err(CliError::ProfileNotFound {
            name,
            available: available_profiles(config),
        });
    }

    let export_dir = profile.map_or_else(|| PathBuf::from("."), |p| p.export_dir().to_path_buf());
    let store = global
        .store
        .clone()
        .or_else(|| profile.map(|p| p.store.clone()))
        .ok_or_else(|| CliError::NoStore {
            path: config_path().display().to_string(),
        })?;

    tracing::debug!(profile = %name, store = %store.display(), "resolved store");
    Ok(ResolvedProfile { store, export_dir })
}

/// Resolve the document output format: `--output` > config default > JSON.
pub fn resolve_output(global: &GlobalOpts, config: &Config) -> OutputFormat {
    global.output.unwrap_or_else(|| match config.defaults.output.as_str() {
        "yaml" => OutputFormat::Yaml,
        "json-compact" => OutputFormat::JsonCompact,
        _ => OutputFormat::Json,
    })
}

pub fn available_profiles(config: &Config) -> String {
    if config.profiles.is_empty() {
        "(none)".into()
    } else {
        config.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::ColorMode;

    fn global(profile: Option<&str>, store: Option<&str>) -> GlobalOpts {
        GlobalOpts {
            profile: profile.map(Into::into),
            store: store.map(PathBuf::from),
            output: None,
            color: ColorMode::Never,
            verbose: 0,
            quiet: false,
            yes: false,
        }
    }

    fn config_with_default_profile() -> Config {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "default".into(),
            Profile {
                store: PathBuf::from("/srv/rdio/config.json"),
                export_dir: Some(PathBuf::from("/srv/exports")),
            },
        );
        cfg
    }

    #[test]
    fn store_flag_overrides_profile() {
        let cfg = config_with_default_profile();
        let resolved = resolve_profile(&global(None, Some("/tmp/other.json")), &cfg).unwrap();
        assert_eq!(resolved.store, PathBuf::from("/tmp/other.json"));
        assert_eq!(resolved.export_dir, PathBuf::from("/srv/exports"));
    }

    #[test]
    fn profile_store_is_used_without_flag() {
        let cfg = config_with_default_profile();
        let resolved = resolve_profile(&global(None, None), &cfg).unwrap();
        assert_eq!(resolved.store, PathBuf::from("/srv/rdio/config.json"));
    }

    #[test]
    fn unknown_explicit_profile_is_an_error() {
        let cfg = config_with_default_profile();
        let err = resolve_profile(&global(Some("nope"), None), &cfg).unwrap_err();
        assert!(matches!(err, CliError::ProfileNotFound { .. }));
    }

    #[test]
    fn missing_store_is_an_error() {
        let err = resolve_profile(&global(None, None), &Config::default()).unwrap_err();
        assert!(matches!(err, CliError::NoStore { .. }));
    }

    #[test]
    fn output_defaults_to_json() {
        assert_eq!(resolve_output(&global(None, None), &Config::default()), OutputFormat::Json);
    }
}
