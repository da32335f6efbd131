// ── Options defaulting and pruning ──

use serde_json::{Map, Value};
use tracing::warn;

use super::MigrationReport;
use crate::model::options::{DEFAULT_OPTIONS, OBSOLETE_OPTIONS};

pub const OPTIONS: &str = "options";

/// Overlay the document's options on the canonical defaults, then drop
/// obsolete keys. Input values always win; unknown keys are kept.
pub fn merge_options(root: &mut Map<String, Value>, report: &mut MigrationReport) {
    let mut existing = match root.remove(OPTIONS) {
        Some(Value::Object(map)) => map,
        None | Some(Value::Null) => Map::new(),
        Some(other) => {
            warn!("skipping options record that is not an object");
            root.insert(OPTIONS.to_owned(), other);
            return;
        }
    };

    let mut merged = Map::new();
    for &(key, default) in DEFAULT_OPTIONS {
        let value = existing.remove(key).unwrap_or_else(|| {
            report.options_filled += 1;
            default.to_value()
        });
        merged.insert(key.to_owned(), value);
    }
    merged.extend(existing);

    for key in OBSOLETE_OPTIONS {
        if merged.remove(*key).is_some() {
            report.options_pruned += 1;
        }
    }

    root.insert(OPTIONS.to_owned(), Value::Object(merged));
}
