// ── Identifier reconciler ──
//
// Legacy records carry the storage identifier under `_id`, and some of
// them reuse `id` for the radio-network identifier. Canonical records keep
// the storage identifier in `id` and the network identifier in a separate
// reference field whose name depends on the entity kind.

use serde_json::{Map, Value};

use super::MigrationReport;

/// Legacy storage-identifier field.
pub const LEGACY_ID: &str = "_id";
/// Canonical storage-identifier field.
pub const ID: &str = "id";

pub const SYSTEM_REF: &str = "systemRef";
pub const UNIT_REF: &str = "unitRef";
pub const UNIT_FROM: &str = "unitFrom";
pub const UNIT_TO: &str = "unitTo";
pub const TALKGROUP_REF: &str = "talkgroupRef";
pub const GROUP_ID: &str = "groupId";
pub const GROUP_IDS: &str = "groupIds";

type Record = Map<String, Value>;

/// Rename `_id` to `id` when the record has no canonical id.
fn rename_legacy_id(record: &mut Record, report: &mut MigrationReport) {
    if record.contains_key(ID) {
        return;
    }
    if let Some(legacy) = record.remove(LEGACY_ID) {
        record.insert(ID.to_owned(), legacy);
        report.ids_renamed += 1;
    }
}

/// A record that still has `_id` next to a canonical `id` keeps the canonical one.
fn discard_residual_legacy_id(record: &mut Record, report: &mut MigrationReport) {
    if record.remove(LEGACY_ID).is_some() {
        report.ids_discarded += 1;
    }
}

/// Treat a sole `id` as a domain reference: move it to `ref_field`, leaving
/// the record without a storage id so the persistence layer assigns one.
fn extract_ref(record: &mut Record, ref_field: &str, report: &mut MigrationReport) {
    if let Some(id) = record.remove(ID) {
        record.insert(ref_field.to_owned(), id);
        report.refs_extracted += 1;
    }
}

/// Entities without a reference concept (api keys, groups, users, sites, ...).
pub fn reconcile_simple(record: &mut Record, report: &mut MigrationReport) {
    rename_legacy_id(record, report);
    discard_residual_legacy_id(record, report);
}

/// Systems: `_id` is the storage id, a pre-existing `id` is the system reference.
pub fn reconcile_system(record: &mut Record, report: &mut MigrationReport) {
    if let Some(legacy) = record.remove(LEGACY_ID) {
        if let Some(existing) = record.remove(ID) {
            record.insert(SYSTEM_REF.to_owned(), existing);
            report.refs_extracted += 1;
        }
        record.insert(ID.to_owned(), legacy);
        report.ids_renamed += 1;
    } else if record.contains_key(ID) && !record.contains_key(SYSTEM_REF) {
        extract_ref(record, SYSTEM_REF, report);
    }
}

/// Units: a sole `id` is the unit reference; companion fields always exist afterwards.
pub fn reconcile_unit(record: &mut Record, report: &mut MigrationReport) {
    if record.contains_key(ID)
        && !record.contains_key(UNIT_REF)
        && !record.contains_key(LEGACY_ID)
    {
        extract_ref(record, UNIT_REF, report);
    } else {
        rename_legacy_id(record, report);
    }
    discard_residual_legacy_id(record, report);

    for field in [UNIT_REF, UNIT_FROM, UNIT_TO] {
        if !record.contains_key(field) {
            record.insert(field.to_owned(), Value::Null);
            report.unit_fields_seeded += 1;
        }
    }
}

/// Talkgroups: a sole `id` is the talkgroup reference; `groupId` folds into `groupIds`.
pub fn reconcile_talkgroup(record: &mut Record, report: &mut MigrationReport) {
    if record.contains_key(ID) && !record.contains_key(TALKGROUP_REF) {
        extract_ref(record, TALKGROUP_REF, report);
    }
    rename_legacy_id(record, report);
    discard_residual_legacy_id(record, report);
    fold_group_id(record, report);
}

fn fold_group_id(record: &mut Record, report: &mut MigrationReport) {
    let Some(group_id) = record.remove(GROUP_ID) else {
        return;
    };
    if !group_id.is_number() {
        report.group_ids_dropped += 1;
        return;
    }

    match record.get_mut(GROUP_IDS) {
        Some(Value::Array(ids)) => {
            if !ids.contains(&group_id) {
                ids.push(group_id);
            }
        }
        _ => {
            record.insert(GROUP_IDS.to_owned(), Value::Array(vec![group_id]));
        }
    }
    report.group_ids_folded += 1;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn apply(f: fn(&mut Record, &mut MigrationReport), input: Value) -> (Value, MigrationReport) {
        let mut report = MigrationReport::default();
        let mut record = match input {
            Value::Object(map) => map,
            other => panic!("test input must be an object, got {other}"),
        };
        f(&mut record, &mut report);
        (Value::Object(record), report)
    }

    // ── Simple entities ──────────────────────────────────────────────

    #[test]
    fn simple_entity_renames_legacy_id() {
        let (out, report) = apply(reconcile_simple, json!({"_id": 3, "label": "Fire"}));
        assert_eq!(out, json!({"id": 3, "label": "Fire"}));
        assert_eq!(report.ids_renamed, 1);
    }

    #[test]
    fn simple_entity_keeps_canonical_id_over_legacy() {
        let (out, report) = apply(reconcile_simple, json!({"_id": 3, "id": 4}));
        assert_eq!(out, json!({"id": 4}));
        assert_eq!(report.ids_discarded, 1);
    }

    #[test]
    fn simple_entity_without_ids_is_untouched() {
        let (out, report) = apply(reconcile_simple, json!({"label": "EMS"}));
        assert_eq!(out, json!({"label": "EMS"}));
        assert!(report.is_noop());
    }

    // ── Systems ──────────────────────────────────────────────────────

    #[test]
    fn system_with_both_ids_splits_storage_and_reference() {
        let (out, report) = apply(reconcile_system, json!({"_id": 5, "id": 9}));
        assert_eq!(out, json!({"id": 5, "systemRef": 9}));
        assert_eq!(report.ids_renamed, 1);
        assert_eq!(report.refs_extracted, 1);
    }

    #[test]
    fn system_legacy_id_overwrites_existing_reference() {
        let (out, _) = apply(reconcile_system, json!({"_id": 5, "id": 9, "systemRef": 1}));
        assert_eq!(out, json!({"id": 5, "systemRef": 9}));
    }

    #[test]
    fn system_with_only_legacy_id_gets_storage_id() {
        let (out, _) = apply(reconcile_system, json!({"_id": 5, "label": "County"}));
        assert_eq!(out, json!({"id": 5, "label": "County"}));
    }

    #[test]
    fn system_sole_id_becomes_reference() {
        let (out, report) = apply(reconcile_system, json!({"id": 9}));
        assert_eq!(out, json!({"systemRef": 9}));
        assert!(out.get("id").is_none());
        assert_eq!(report.refs_extracted, 1);
    }

    #[test]
    fn canonical_system_is_untouched() {
        let (out, report) = apply(reconcile_system, json!({"id": 2, "systemRef": 9}));
        assert_eq!(out, json!({"id": 2, "systemRef": 9}));
        assert!(report.is_noop());
    }

    // ── Units ────────────────────────────────────────────────────────

    #[test]
    fn unit_sole_id_becomes_reference() {
        let (out, _) = apply(reconcile_unit, json!({"id": 1234, "label": "Engine 1"}));
        assert_eq!(
            out,
            json!({"unitRef": 1234, "label": "Engine 1", "unitFrom": null, "unitTo": null})
        );
    }

    #[test]
    fn unit_legacy_id_becomes_storage_id() {
        let (out, _) = apply(reconcile_unit, json!({"_id": 7, "unitRef": 1234}));
        assert_eq!(
            out,
            json!({"id": 7, "unitRef": 1234, "unitFrom": null, "unitTo": null})
        );
    }

    #[test]
    fn unit_without_reference_fields_is_seeded_with_nulls() {
        let (out, report) = apply(reconcile_unit, json!({"label": "Dispatch"}));
        assert_eq!(
            out,
            json!({"label": "Dispatch", "unitRef": null, "unitFrom": null, "unitTo": null})
        );
        assert_eq!(report.unit_fields_seeded, 3);
    }

    #[test]
    fn unit_range_fields_are_preserved() {
        let (out, report) = apply(
            reconcile_unit,
            json!({"id": 1, "unitRef": null, "unitFrom": 100, "unitTo": 199}),
        );
        assert_eq!(
            out,
            json!({"id": 1, "unitRef": null, "unitFrom": 100, "unitTo": 199})
        );
        assert!(report.is_noop());
    }

    #[test]
    fn unit_with_both_ids_keeps_canonical_id() {
        let (out, _) = apply(reconcile_unit, json!({"_id": 7, "id": 8}));
        assert_eq!(
            out,
            json!({"id": 8, "unitRef": null, "unitFrom": null, "unitTo": null})
        );
    }

    // ── Talkgroups ───────────────────────────────────────────────────

    #[test]
    fn talkgroup_sole_id_becomes_reference() {
        let (out, _) = apply(reconcile_talkgroup, json!({"id": 5101}));
        assert_eq!(out, json!({"talkgroupRef": 5101}));
    }

    #[test]
    fn talkgroup_legacy_and_sole_id_split() {
        let (out, _) = apply(reconcile_talkgroup, json!({"_id": 3, "id": 5101}));
        assert_eq!(out, json!({"talkgroupRef": 5101, "id": 3}));
    }

    #[test]
    fn numeric_group_id_folds_into_set() {
        let (out, report) = apply(reconcile_talkgroup, json!({"groupId": 12}));
        assert_eq!(out, json!({"groupIds": [12]}));
        assert_eq!(report.group_ids_folded, 1);
    }

    #[test]
    fn non_numeric_group_id_is_dropped() {
        let (out, report) = apply(reconcile_talkgroup, json!({"groupId": "x"}));
        assert_eq!(out, json!({}));
        assert_eq!(report.group_ids_dropped, 1);
    }

    #[test]
    fn group_id_joins_existing_set_once() {
        let (out, _) = apply(reconcile_talkgroup, json!({"groupId": 2, "groupIds": [1, 2]}));
        assert_eq!(out, json!({"groupIds": [1, 2]}));

        let (out, _) = apply(reconcile_talkgroup, json!({"groupId": 3, "groupIds": [1]}));
        assert_eq!(out, json!({"groupIds": [1, 3]}));
    }
}
