//! Defaults mapping accumulated while rows are rendered

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::deserialize_present;
use super::manifest::{ItemsDescriptor, PropertyDescriptor, PropertyType};

/// Resolved default for one rendered key
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefaultEntry {
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// The original default, not its rendered string or JSON form
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
    /// Serialized as `null` when no item type applies
    pub items: Option<ItemsDescriptor>,
}

impl DefaultEntry {
    pub fn from_descriptor(descriptor: &PropertyDescriptor) -> Self {
        Self {
            property_type: descriptor.property_type.clone(),
            value: descriptor.default.clone(),
            items: descriptor.declared_items(),
        }
    }
}

/// Key to resolved default, owned by the caller and written by the row builder
///
/// Entries keep the order in which keys were first recorded, so the exported
/// mapping lists properties in manifest order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigDefaults {
    entries: Vec<(String, DefaultEntry)>,
}

impl ConfigDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the default for `key`, returning any entry it replaced.
    ///
    /// A replaced key keeps its original position.
    pub fn record(&mut self, key: &str, descriptor: &PropertyDescriptor) -> Option<DefaultEntry> {
        let entry = DefaultEntry::from_descriptor(descriptor);
        match self.entries.iter_mut().find(|(name, _)| name == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, entry)),
            None => {
                self.entries.push((key.to_string(), entry));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&DefaultEntry> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DefaultEntry)> {
        self.entries.iter().map(|(key, entry)| (key, entry))
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for ConfigDefaults {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for ConfigDefaults {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        let entries = raw
            .into_iter()
            .map(|(key, value)| match serde_json::from_value(value) {
                Ok(entry) => Ok((key, entry)),
                Err(e) => Err(de::Error::custom(format!("default '{}': {}", key, e))),
            })
            .collect::<Result<Vec<_>, D::Error>>()?;
        Ok(Self { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_serializes_null_items() {
        let descriptor = PropertyDescriptor::new("string").with_default(json!("hello"));
        let entry = DefaultEntry::from_descriptor(&descriptor);
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"type": "string", "value": "hello", "items": null})
        );
    }

    #[test]
    fn test_entry_omits_absent_value() {
        let entry = DefaultEntry::from_descriptor(&PropertyDescriptor::new("number"));
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"type": "number", "items": null})
        );
    }

    #[test]
    fn test_record_overwrites_previous_entry() {
        let mut defaults = ConfigDefaults::new();
        assert!(defaults
            .record("limit", &PropertyDescriptor::new("number").with_default(json!(1)))
            .is_none());

        let replaced = defaults
            .record("limit", &PropertyDescriptor::new("number").with_default(json!(2)))
            .unwrap();
        assert_eq!(replaced.value, Some(json!(1)));
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults.get("limit").unwrap().value, Some(json!(2)));
    }

    #[test]
    fn test_mapping_serializes_as_object() {
        let mut defaults = ConfigDefaults::new();
        defaults.record(
            "ids",
            &PropertyDescriptor::new("array")
                .with_default(json!([1, 2, 3]))
                .with_items("number"),
        );
        assert_eq!(
            serde_json::to_value(&defaults).unwrap(),
            json!({"ids": {"type": "array", "value": [1, 2, 3], "items": {"type": "number"}}})
        );
    }

    #[test]
    fn test_entries_keep_recording_order() {
        let mut defaults = ConfigDefaults::new();
        defaults.record("zeta", &PropertyDescriptor::new("string").with_default(json!("z")));
        defaults.record("alpha", &PropertyDescriptor::new("boolean").with_default(json!(true)));
        defaults.record("zeta", &PropertyDescriptor::new("string").with_default(json!("again")));

        let keys: Vec<&str> = defaults.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);

        let exported = defaults.to_json_pretty().unwrap();
        let zeta = exported.find("\"zeta\"").unwrap();
        let alpha = exported.find("\"alpha\"").unwrap();
        assert!(zeta < alpha);

        let restored: ConfigDefaults = serde_json::from_str(&exported).unwrap();
        assert_eq!(restored, defaults);
        assert_eq!(restored.get("zeta").unwrap().value, Some(json!("again")));
    }
}
