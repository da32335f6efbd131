// ── System structural fixups ──
//
// Systems own three nested collections. Sites always exist afterwards;
// units and talkgroups are only visited when present.

use serde_json::{Map, Value};
use tracing::warn;

use super::MigrationReport;
use super::ids::{reconcile_simple, reconcile_system, reconcile_talkgroup, reconcile_unit};

pub const SYSTEMS: &str = "systems";
pub const SITES: &str = "sites";
pub const UNITS: &str = "units";
pub const TALKGROUPS: &str = "talkgroups";

/// Apply `f` to every object element of `records`; other elements are left alone.
pub(crate) fn for_each_record(
    records: &mut [Value],
    report: &mut MigrationReport,
    f: fn(&mut Map<String, Value>, &mut MigrationReport),
) {
    for record in records.iter_mut().filter_map(Value::as_object_mut) {
        f(record, report);
    }
}

/// Reconcile a nested collection if it is an array; skip it otherwise.
fn visit_nested(
    system: &mut Map<String, Value>,
    key: &str,
    report: &mut MigrationReport,
    f: fn(&mut Map<String, Value>, &mut MigrationReport),
) {
    match system.get_mut(key) {
        Some(Value::Array(records)) => for_each_record(records, report, f),
        None | Some(Value::Null) => {}
        Some(_) => warn!(collection = key, "skipping nested collection that is not an array"),
    }
}

pub fn fix_system(system: &mut Map<String, Value>, report: &mut MigrationReport) {
    reconcile_system(system, report);

    match system.get(SITES) {
        None | Some(Value::Null) => {
            system.insert(SITES.to_owned(), Value::Array(Vec::new()));
            report.sites_defaulted += 1;
        }
        Some(_) => visit_nested(system, SITES, report, reconcile_simple),
    }

    visit_nested(system, UNITS, report, reconcile_unit);
    visit_nested(system, TALKGROUPS, report, reconcile_talkgroup);
}

/// Run the system-level pipeline over `root.systems`.
pub fn fix_systems(root: &mut Map<String, Value>, report: &mut MigrationReport) {
    match root.get_mut(SYSTEMS) {
        Some(Value::Array(systems)) => for_each_record(systems, report, fix_system),
        None | Some(Value::Null) => {}
        Some(_) => warn!(collection = SYSTEMS, "skipping collection that is not an array"),
    }
}
