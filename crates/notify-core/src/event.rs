//! The bound EventBridge event record.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::BindError;
use crate::normalize::normalize_keys;
use crate::schema::{bind, FieldShape, FieldSpec, Schema};

/// An EventBridge event, reduced to the fields the notifier uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    pub account: String,
    pub region: String,
    pub source: String,
    pub detail_type: String,
    /// Event detail, in the order the producer sent it.
    pub detail: IndexMap<String, String>,
    pub resources: Vec<String>,
}

impl Schema for InboundEvent {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("account", FieldShape::Text),
        FieldSpec::new("region", FieldShape::Text),
        FieldSpec::new("source", FieldShape::Text),
        FieldSpec::new("detail_type", FieldShape::Text),
        FieldSpec::new("detail", FieldShape::TextMap),
        FieldSpec::new("resources", FieldShape::TextList),
    ];
}

impl InboundEvent {
    /// Normalize the keys of a raw payload and bind it.
    pub fn from_raw(raw: Map<String, Value>) -> Result<Self, BindError> {
        bind(normalize_keys(raw))
    }

    /// Same as [`InboundEvent::from_raw`], for an arbitrary JSON value.
    pub fn from_value(value: Value) -> Result<Self, BindError> {
        match value {
            Value::Object(map) => Self::from_raw(map),
            _ => Err(BindError::NotAnObject),
        }
    }

    /// Compact JSON form of the record, as embedded into prompts.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
