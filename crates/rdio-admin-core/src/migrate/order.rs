// ── Deterministic reordering ──
//
// Groups and tags are presented sorted by label using the Unicode
// Collation Algorithm with the root locale: base letters decide first,
// then accents, then case (lowercase before uppercase). Labels the
// collator considers equal fall back to code-point order so the result
// is a total order.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use serde_json::Value;
use tracing::warn;

pub const LABEL: &str = "label";

fn label(record: &Value) -> &str {
    record.get(LABEL).and_then(Value::as_str).unwrap_or_default()
}

/// Label comparator backed by the root-locale collator.
///
/// Building a collator loads collation tables, so one instance should be
/// reused across a whole sort.
pub struct LabelOrder {
    collator: Option<Collator>,
}

impl LabelOrder {
    pub fn new() -> Self {
        let collator = Collator::try_new(&locale!("und").into(), CollatorOptions::new())
            .map_err(|e| warn!(error = %e, "root collator unavailable; falling back to case folding"))
            .ok();
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let collated = match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => case_folded_compare(a, b),
        };
        collated.then_with(|| a.cmp(b))
    }
}

impl Default for LabelOrder {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two labels the way [`sort_by_label`] orders them.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    LabelOrder::new().compare(a, b)
}

fn case_folded_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| {
        a.chars()
            .zip(b.chars())
            .find(|(x, y)| x != y)
            .map_or(Ordering::Equal, |(x, y)| y.is_lowercase().cmp(&x.is_lowercase()))
    })
}

/// Stable sort of `records` by their `label`; missing labels sort first.
pub fn sort_by_label(records: &mut [Value]) {
    let order = LabelOrder::new();
    records.sort_by(|a, b| order.compare(label(a), label(b)));
}
