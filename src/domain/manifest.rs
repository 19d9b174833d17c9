//! Manifest property descriptors
//!
//! A manifest describes configurable properties by name, declared type,
//! default value and (for arrays) element type. Properties keep the order in
//! which they appear in the manifest file so rows render in that order.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;

use super::deserialize_present;
use anyhow::Context;

// ============================================================================
// Property Type
// ============================================================================

/// Declared type of a manifest property
///
/// Unrecognized type names are preserved in [`PropertyType::Other`] so the
/// declared text can still be carried in the `data-type` marker.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Other(String),
}

impl PropertyType {
    /// The declared type name as it appears in the manifest
    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::String => "string",
            PropertyType::Number => "number",
            PropertyType::Integer => "integer",
            PropertyType::Boolean => "boolean",
            PropertyType::Object => "object",
            PropertyType::Array => "array",
            PropertyType::Other(name) => name,
        }
    }

    /// Object and array values are edited as JSON text
    pub fn is_structured(&self) -> bool {
        matches!(self, PropertyType::Object | PropertyType::Array)
    }
}

impl From<String> for PropertyType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "string" => PropertyType::String,
            "number" => PropertyType::Number,
            "integer" => PropertyType::Integer,
            "boolean" => PropertyType::Boolean,
            "object" => PropertyType::Object,
            "array" => PropertyType::Array,
            _ => PropertyType::Other(name),
        }
    }
}

impl From<&str> for PropertyType {
    fn from(name: &str) -> Self {
        PropertyType::from(name.to_string())
    }
}

impl From<PropertyType> for String {
    fn from(property_type: PropertyType) -> Self {
        match property_type {
            PropertyType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Descriptors
// ============================================================================

/// Element type declaration of an array property
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemsDescriptor {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<PropertyType>,
}

/// One manifest entry: declared type, default value and optional item type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// `None` when the manifest omits the default; an explicit `null` is `Some(Value::Null)`
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemsDescriptor>,
}

impl PropertyDescriptor {
    pub fn new(property_type: impl Into<PropertyType>) -> Self {
        Self {
            property_type: property_type.into(),
            default: None,
            items: None,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_items(mut self, item_type: impl Into<PropertyType>) -> Self {
        self.items = Some(ItemsDescriptor {
            item_type: Some(item_type.into()),
        });
        self
    }

    /// Item type declaration that applies to this property.
    ///
    /// Only array properties with a declared `items.type` carry one.
    pub fn declared_items(&self) -> Option<ItemsDescriptor> {
        if self.property_type != PropertyType::Array {
            return None;
        }
        let item_type = self.items.as_ref()?.item_type.clone()?;
        Some(ItemsDescriptor {
            item_type: Some(item_type),
        })
    }
}

// ============================================================================
// Manifest
// ============================================================================

/// Plugin manifest holding the configurable properties
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Property descriptors in manifest order
    #[serde(
        default,
        deserialize_with = "deserialize_properties",
        serialize_with = "serialize_properties"
    )]
    pub properties: Vec<(String, PropertyDescriptor)>,
}

impl Manifest {
    pub fn from_json_str(json: &str) -> Result<Self, anyhow::Error> {
        let manifest = serde_json::from_str(json)?;
        Ok(manifest)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse manifest {}", path.display()))
    }

    pub fn property(&self, key: &str) -> Option<&PropertyDescriptor> {
        self.properties
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, descriptor)| descriptor)
    }
}

fn deserialize_properties<'de, D>(
    deserializer: D,
) -> Result<Vec<(String, PropertyDescriptor)>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Map::<String, Value>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(key, value)| match serde_json::from_value(value) {
            Ok(descriptor) => Ok((key, descriptor)),
            Err(e) => Err(de::Error::custom(format!("property '{}': {}", key, e))),
        })
        .collect()
}

fn serialize_properties<S>(
    properties: &[(String, PropertyDescriptor)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(properties.iter().map(|(key, descriptor)| (key, descriptor)))
}
