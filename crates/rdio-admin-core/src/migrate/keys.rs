// ── Top-level key renamer ──
//
// Earlier generations spelled some collection keys differently. The
// canonical key always wins when both spellings are present.

use serde_json::{Map, Value};
use tracing::debug;

use super::MigrationReport;

/// `(legacy, canonical)` pairs for whole sub-trees.
pub const TOP_LEVEL_ALIASES: &[(&str, &str)] = &[
    ("apiKeys", "apikeys"),
    ("dirWatch", "dirwatch"),
    ("downStreams", "downstreams"),
];

/// Move every aliased sub-tree to its canonical key.
pub fn rename_top_level_keys(root: &mut Map<String, Value>, report: &mut MigrationReport) {
    for &(legacy, canonical) in TOP_LEVEL_ALIASES {
        let Some(value) = root.remove(legacy) else {
            continue;
        };
        if root.contains_key(canonical) {
            debug!(legacy, canonical, "discarding alias shadowed by canonical key");
        } else {
            root.insert(canonical.to_owned(), value);
        }
        report.keys_renamed += 1;
    }
}
