// ── Domain model ──
//
// Canonical configuration types. The migration engine works on untyped
// JSON; these types are the strongly-typed side of that boundary.

pub mod config;
pub mod options;

pub use config::{Config, Entity, System, Talkgroup, Unit};
pub use options::{
    DEFAULT_OPTIONS, OBSOLETE_OPTIONS, OptionDefault, Options, default_options_map,
};
