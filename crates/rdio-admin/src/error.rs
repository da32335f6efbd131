//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use rdio_admin_config::ConfigError;
use rdio_admin_core::CoreError;

/// Failure exit codes; success is `ExitCode::SUCCESS`.
pub mod exit_code {
    pub const GENERAL: u8 = 1;
    pub const USAGE: u8 = 2;
    pub const NOT_FOUND: u8 = 4;
    /// Input data was malformed (sysexits `EX_DATAERR`).
    pub const DATA: u8 = 65;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Input ────────────────────────────────────────────────────────

    #[error("Could not read configuration document: {reason}")]
    #[diagnostic(
        code(rdio_admin::invalid_document),
        help(
            "The file must contain a JSON configuration export or a base64 data URI.\n\
             Nothing was saved."
        )
    )]
    InvalidDocument { reason: String },

    #[error("File '{path}' not found")]
    #[diagnostic(code(rdio_admin::input_not_found))]
    InputNotFound { path: String },

    #[error("Configuration does not match the canonical schema at {field}: {reason}")]
    #[diagnostic(code(rdio_admin::shape))]
    Shape { field: String, reason: String },

    // ── Persistence ──────────────────────────────────────────────────

    #[error("Failed to save configuration: {message}")]
    #[diagnostic(
        code(rdio_admin::persistence),
        help("The import can be re-run from the original file; nothing is retried automatically.")
    )]
    Persistence { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(rdio_admin::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(rdio_admin::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: rdio-admin config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No stored configuration file configured")]
    #[diagnostic(
        code(rdio_admin::no_store),
        help(
            "Pass --store <FILE>, set RDIO_ADMIN_STORE, or create a profile with:\n\
             rdio-admin config init --store-path <FILE>\n\
             Config file: {path}"
        )
    )]
    NoStore { path: String },

    #[error(transparent)]
    #[diagnostic(code(rdio_admin::config))]
    Config(Box<figment::Error>),

    #[error("Configuration file error: {0}")]
    #[diagnostic(code(rdio_admin::config_file))]
    ConfigFile(String),

    // ── Interactive ──────────────────────────────────────────────────

    #[error("Operation '{action}' requires confirmation")]
    #[diagnostic(
        code(rdio_admin::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    #[error("Operation '{action}' cancelled")]
    #[diagnostic(code(rdio_admin::cancelled))]
    Cancelled { action: String },

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidDocument { .. } | Self::Shape { .. } => exit_code::DATA,
            Self::InputNotFound { .. } | Self::ProfileNotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::NoStore { .. } | Self::NonInteractiveRequiresYes { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Parse(e) => CliError::InvalidDocument {
                reason: e.to_string(),
            },
            CoreError::DataUri { reason } => CliError::InvalidDocument { reason },
            CoreError::Shape { field, reason } => CliError::Shape { field, reason },
            CoreError::Persistence { message } => CliError::Persistence { message },
            CoreError::Io(e) => CliError::Io(e),
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Io(e) => CliError::Io(e),
            other @ ConfigError::Serialization(_) => CliError::ConfigFile(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_map_to_data_exit_code() {
        let parse = serde_json::from_str::<serde_json::Value>("nope")
            .map_err(CoreError::from)
            .map_err(CliError::from);
        let Err(err) = parse else {
            panic!("expected a parse error");
        };
        assert!(matches!(err, CliError::InvalidDocument { .. }));
        assert_eq!(err.exit_code(), exit_code::DATA);
    }

    #[test]
    fn persistence_errors_are_general_failures() {
        let err = CliError::from(CoreError::Persistence {
            message: "read-only".into(),
        });
        assert_eq!(err.exit_code(), exit_code::GENERAL);
    }

    #[test]
    fn shape_errors_name_the_field() {
        let err = CliError::from(CoreError::Shape {
            field: "systems".into(),
            reason: "expected an array".into(),
        });
        assert_eq!(err.exit_code(), exit_code::DATA);
        assert!(err.to_string().contains("at systems: expected an array"));
    }

    #[test]
    fn config_validation_is_a_usage_error() {
        let err = CliError::from(ConfigError::Validation {
            field: "store".into(),
            reason: "path cannot be empty".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }
}
