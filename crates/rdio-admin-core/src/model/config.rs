// ── Canonical configuration document ──
//
// Strongly-typed view of a normalized document. Identifier fields stay as
// raw JSON scalars because storage ids and network references may be
// numbers or strings depending on which server produced them. Every record
// carries a flattened `extra` map so that converting to this view and back
// loses nothing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::options::Options;
use crate::error::CoreError;
use crate::migrate::Normalized;

/// Record of any collection without a domain reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct System {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    /// Radio-network system identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_ref: Option<Value>,

    #[serde(default)]
    pub sites: Vec<Entity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Vec<Unit>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talkgroups: Option<Vec<Talkgroup>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Radio unit. `unitFrom`/`unitTo` describe a range alias and are
/// always serialized, null when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default)]
    pub unit_ref: Option<Value>,

    #[serde(default)]
    pub unit_from: Option<Value>,

    #[serde(default)]
    pub unit_to: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Talkgroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talkgroup_ref: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<Value>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Canonical configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<Vec<Entity>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apikeys: Option<Vec<Entity>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dirwatch: Option<Vec<Entity>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downstreams: Option<Vec<Entity>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Entity>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Entity>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub systems: Option<Vec<System>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<Entity>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_groups: Option<Vec<Entity>>,

    #[serde(default)]
    pub options: Options,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Config {
    /// Convert back to an untyped document.
    pub fn to_document(&self) -> Result<Value, CoreError> {
        Ok(serde_json::to_value(self)?)
    }
}

impl TryFrom<Value> for Config {
    type Error = CoreError;

    fn try_from(document: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(document).map_err(|e| CoreError::Shape {
            field: "document".into(),
            reason: e.to_string(),
        })
    }
}

impl TryFrom<Normalized> for Config {
    type Error = CoreError;

    fn try_from(normalized: Normalized) -> Result<Self, Self::Error> {
        Self::try_from(normalized.document)
    }
}
