// ── Core error types ──
//
// User-facing errors from rdio-admin-core. Normalization itself never
// fails: a wrong-typed sub-tree is skipped, not reported. These variants
// cover what happens around it (parsing the uploaded bytes, reading the
// typed view, talking to the persistence collaborator).

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input errors ─────────────────────────────────────────────────
    #[error("Configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid data URI: {reason}")]
    DataUri { reason: String },

    // ── Shape errors ─────────────────────────────────────────────────
    #[error("Unexpected shape for {field}: {reason}")]
    Shape { field: String, reason: String },

    // ── Persistence errors ───────────────────────────────────────────
    #[error("Failed to persist configuration: {message}")]
    Persistence { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Whether the error originates from the caller's input rather than
    /// from the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Parse(_) | Self::DataUri { .. } | Self::Shape { .. }
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_are_input_errors() {
        let err: CoreError = serde_json::from_str::<serde_json::Value>("{")
            .map_err(CoreError::from)
            .unwrap_err();
        assert!(err.is_input_error());
        assert!(err.to_string().starts_with("Configuration is not valid JSON"));
    }

    #[test]
    fn persistence_errors_are_not_input_errors() {
        let err = CoreError::Persistence {
            message: "disk full".into(),
        };
        assert!(!err.is_input_error());
    }
}
