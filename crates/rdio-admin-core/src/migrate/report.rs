use serde::Serialize;

/// Tally of the rewrites one normalization pass performed.
///
/// Normalizing an already-canonical document produces an empty report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationReport {
    /// Top-level alias keys moved to (or discarded in favor of) their canonical key.
    pub keys_renamed: usize,
    /// Legacy `_id` fields renamed to `id`.
    pub ids_renamed: usize,
    /// Legacy `_id` fields discarded because the record already had an `id`.
    pub ids_discarded: usize,
    /// Identifiers reinterpreted as domain references (`systemRef`, `unitRef`, `talkgroupRef`).
    pub refs_extracted: usize,
    /// Scalar `groupId` values absorbed into `groupIds`.
    pub group_ids_folded: usize,
    /// Non-numeric `groupId` values dropped.
    pub group_ids_dropped: usize,
    /// Systems that received an empty `sites` list.
    pub sites_defaulted: usize,
    /// Null unit companion fields inserted.
    pub unit_fields_seeded: usize,
    /// Option keys filled from the defaults table.
    pub options_filled: usize,
    /// Obsolete option keys removed.
    pub options_pruned: usize,
}

impl MigrationReport {
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }

    /// Total number of individual rewrites.
    pub fn total(&self) -> usize {
        self.rows().iter().map(|(_, n)| n).sum()
    }

    /// Human-readable `(label, count)` pairs, in pipeline order.
    pub fn rows(&self) -> [(&'static str, usize); 10] {
        [
            ("top-level keys renamed", self.keys_renamed),
            ("legacy ids renamed", self.ids_renamed),
            ("legacy ids discarded", self.ids_discarded),
            ("references extracted", self.refs_extracted),
            ("groupId folded", self.group_ids_folded),
            ("groupId dropped", self.group_ids_dropped),
            ("sites defaulted", self.sites_defaulted),
            ("unit fields seeded", self.unit_fields_seeded),
            ("options filled", self.options_filled),
            ("options pruned", self.options_pruned),
        ]
    }
}
