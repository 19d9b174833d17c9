use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub mod defaults;
pub mod manifest;

pub use defaults::{ConfigDefaults, DefaultEntry};
pub use manifest::{ItemsDescriptor, Manifest, PropertyDescriptor, PropertyType};

/// Deserialize a field that distinguishes an explicit `null` from an absent key.
///
/// Pair with `#[serde(default)]`: absent stays `None`, `null` becomes `Some(Value::Null)`.
pub(crate) fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
