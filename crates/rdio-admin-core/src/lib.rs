//! Configuration migration and transfer for Rdio Scanner administration.
//!
//! This crate owns the logic behind the admin console's import/export
//! feature:
//!
//! - **[`migrate`]**: Deterministic normalization of a configuration
//!   document from any earlier schema generation into the canonical shape.
//!   Pure and synchronous; see [`normalize()`].
//!
//! - **Domain model** ([`model`]): Strongly-typed canonical [`Config`] and
//!   the [`DEFAULT_OPTIONS`] table. Untyped JSON only exists on the input
//!   side of the migration boundary.
//!
//! - **[`transfer`]**: Parsing uploaded bytes, the single
//!   [`prepare_import`] step shared by the apply and review flows, and
//!   export packaging (file name, MIME type, data URI).
//!
//! - **[`store`]**: Collaborator traits ([`ConfigStore`], [`ReviewSink`])
//!   and a JSON file-backed store.

pub mod error;
pub mod migrate;
pub mod model;
pub mod store;
pub mod transfer;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;
pub use migrate::{MigrationReport, Normalized, normalize, normalize_in_place};
pub use model::{Config, DEFAULT_OPTIONS, OBSOLETE_OPTIONS, Options};
pub use store::{CollectingSink, ConfigStore, FileStore, MemoryStore, ReviewSink};
pub use transfer::{ExportFile, ImportMode, ImportOutcome, export, prepare_import};
