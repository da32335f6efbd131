//! Configuration schema normalization.
//!
//! Rewrites a configuration document from any earlier generation into the
//! canonical shape. The generation is never inspected: every rule keys off
//! field presence, so canonical input passes through unchanged.
//!
//! Stages run in a fixed order against one mutable document:
//!
//! 1. [`rename_top_level_keys`]: legacy collection spellings.
//! 2. [`ids::reconcile_simple`] over every simple top-level collection.
//! 3. [`fix_systems`]: system ids, sites, units, talkgroups.
//! 4. [`sort_by_label`] over `groups` and `tags`.
//! 5. [`merge_options`]: defaults and obsolete-key pruning.
//!
//! Wrong-typed sub-trees are skipped, never reported as errors.

pub mod ids;
pub mod keys;
pub mod options;
pub mod order;
mod report;
pub mod systems;

use serde_json::{Map, Value};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};
use tracing::{debug, warn};

pub use keys::rename_top_level_keys;
pub use options::merge_options;
pub use order::{LabelOrder, locale_compare, sort_by_label};
pub use report::MigrationReport;
pub use systems::fix_systems;

/// Top-level collections whose records follow the simple-entity rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum Collection {
    #[strum(serialize = "apikeys")]
    ApiKeys,
    #[strum(serialize = "dirwatch")]
    DirWatch,
    #[strum(serialize = "downstreams")]
    Downstreams,
    #[strum(serialize = "groups")]
    Groups,
    #[strum(serialize = "tags")]
    Tags,
    #[strum(serialize = "users")]
    Users,
    #[strum(serialize = "userGroups")]
    UserGroups,
    #[strum(serialize = "access")]
    Access,
}

impl Collection {
    /// Whether records are presented in label order.
    pub fn is_label_sorted(self) -> bool {
        matches!(self, Self::Groups | Self::Tags)
    }
}

/// A normalized document together with what was rewritten to get there.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub document: Value,
    pub report: MigrationReport,
}

impl Normalized {
    pub fn into_document(self) -> Value {
        self.document
    }
}

/// Normalize an owned document.
pub fn normalize(mut document: Value) -> Normalized {
    let report = normalize_in_place(&mut document);
    Normalized { document, report }
}

/// Normalize `document` in place and report what changed.
///
/// A root that is not a JSON object is left untouched.
pub fn normalize_in_place(document: &mut Value) -> MigrationReport {
    let mut report = MigrationReport::default();
    let Some(root) = document.as_object_mut() else {
        warn!("configuration root is not an object; nothing to normalize");
        return report;
    };

    rename_top_level_keys(root, &mut report);
    reconcile_collections(root, &mut report);
    fix_systems(root, &mut report);
    sort_collections(root);
    merge_options(root, &mut report);

    debug!(
        changes = report.total(),
        ids_renamed = report.ids_renamed,
        refs_extracted = report.refs_extracted,
        options_filled = report.options_filled,
        "configuration normalized"
    );
    report
}

fn collection_mut<'a>(
    root: &'a mut Map<String, Value>,
    collection: Collection,
) -> Option<&'a mut Vec<Value>> {
    match root.get_mut(collection.as_ref()) {
        Some(Value::Array(records)) => Some(records),
        None | Some(Value::Null) => None,
        Some(_) => {
            warn!(%collection, "skipping collection that is not an array");
            None
        }
    }
}

fn reconcile_collections(root: &mut Map<String, Value>, report: &mut MigrationReport) {
    for collection in Collection::iter() {
        if let Some(records) = collection_mut(root, collection) {
            systems::for_each_record(records, report, ids::reconcile_simple);
        }
    }
}

fn sort_collections(root: &mut Map<String, Value>) {
    for collection in Collection::iter().filter(|c| c.is_label_sorted()) {
        if let Some(records) = root.get_mut(collection.as_ref()).and_then(Value::as_array_mut) {
            sort_by_label(records);
        }
    }
}
