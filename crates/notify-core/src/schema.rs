//! Bind-or-fail schema binding for untyped JSON mappings.
//!
//! A record describes its required fields with a static [`FieldSpec`] list.
//! [`bind`] checks the mapping against that list before any deserialization
//! happens, so a missing field is reported by name rather than as a serde
//! error.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::BindError;

/// Expected JSON shape of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// A JSON string.
    Text,
    /// A JSON array of strings.
    TextList,
    /// A JSON object whose values are all strings.
    TextMap,
}

impl FieldShape {
    /// Human-readable description used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Text => "a string",
            Self::TextList => "a list of strings",
            Self::TextMap => "a mapping of strings to strings",
        }
    }

    /// Check whether a value has this shape.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Text => value.is_string(),
            Self::TextList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            Self::TextMap => value
                .as_object()
                .is_some_and(|entries| entries.values().all(Value::is_string)),
        }
    }
}

/// A required field in a schema descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub shape: FieldShape,
}

impl FieldSpec {
    pub const fn new(name: &'static str, shape: FieldShape) -> Self {
        Self { name, shape }
    }
}

/// What to do with keys that are not part of the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcessPolicy {
    /// Silently discard them.
    Drop,
    /// Fail the bind.
    Reject,
}

/// A record that can be bound from an untyped mapping.
pub trait Schema: DeserializeOwned {
    /// Required fields, in reporting order.
    const FIELDS: &'static [FieldSpec];

    /// Handling of keys outside [`Schema::FIELDS`].
    const EXCESS: ExcessPolicy = ExcessPolicy::Drop;
}

/// Bind a mapping onto `T`, failing on missing or mis-shaped fields.
pub fn bind<T: Schema>(mut data: Map<String, Value>) -> Result<T, BindError> {
    let missing: Vec<String> = T::FIELDS
        .iter()
        .filter(|spec| !data.contains_key(spec.name))
        .map(|spec| spec.name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(BindError::Missing(missing));
    }

    let excess: Vec<String> = data
        .keys()
        .filter(|key| !T::FIELDS.iter().any(|spec| spec.name == key.as_str()))
        .cloned()
        .collect();
    if !excess.is_empty() {
        match T::EXCESS {
            ExcessPolicy::Reject => return Err(BindError::Unexpected(excess)),
            ExcessPolicy::Drop => {
                debug!(keys = ?excess, "Dropping keys outside the schema");
                for key in &excess {
                    data.remove(key);
                }
            }
        }
    }

    for spec in T::FIELDS {
        if !data.get(spec.name).is_some_and(|v| spec.shape.matches(v)) {
            return Err(BindError::WrongShape {
                field: spec.name.to_string(),
                expected: spec.shape.describe(),
            });
        }
    }

    serde_json::from_value(Value::Object(data)).map_err(|e| BindError::Construction(e.to_string()))
}

/// Bind an arbitrary JSON value, which must be an object.
pub fn bind_value<T: Schema>(value: Value) -> Result<T, BindError> {
    match value {
        Value::Object(map) => bind(map),
        _ => Err(BindError::NotAnObject),
    }
}
