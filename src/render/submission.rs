//! Reads rendered config inputs back into typed values
//!
//! Inputs are located by their shared class and `data-config-key` marker,
//! and parsed according to their `data-type` marker, so the collector works
//! on any tree produced by the renderer regardless of element kind.

use serde_json::{Map, Number, Value};

use super::FormRenderer;
use crate::dom::Element;
use crate::domain::PropertyType;
use crate::error::{FormError, FormResult};

impl FormRenderer {
    /// Collect the current value of every config input under `root`
    pub fn collect_values(&self, root: &Element) -> FormResult<Map<String, Value>> {
        let mut values = Map::new();

        for element in root.descendants() {
            if !element.has_class(&self.settings.input_class) {
                continue;
            }
            let Some(key) = element.attribute("data-config-key") else {
                continue;
            };
            let data_type = PropertyType::from(element.attribute("data-type").unwrap_or("string"));
            let value = read_value(key, &data_type, element)?;
            values.insert(key.to_string(), value);
        }

        tracing::debug!("Collected {} config values", values.len());
        Ok(values)
    }
}

fn read_value(key: &str, data_type: &PropertyType, element: &Element) -> FormResult<Value> {
    if *data_type == PropertyType::Boolean {
        return Ok(Value::Bool(element.checked()));
    }

    let raw = element.value().unwrap_or_default();
    match data_type {
        PropertyType::Object | PropertyType::Array => {
            if raw.trim().is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(&raw).map_err(|source| FormError::InvalidJson {
                key: key.to_string(),
                source,
            })
        }
        PropertyType::Integer | PropertyType::Number if is_unset(&raw) => Ok(Value::Null),
        PropertyType::Integer => raw
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| invalid_number(key, &raw)),
        PropertyType::Number => parse_number(raw.trim()).ok_or_else(|| invalid_number(key, &raw)),
        _ => Ok(Value::String(raw)),
    }
}

/// Blank numeric inputs and the text rendered for absent or null defaults
fn is_unset(raw: &str) -> bool {
    matches!(raw.trim(), "" | "undefined" | "null")
}

fn parse_number(text: &str) -> Option<Value> {
    if let Ok(int) = text.parse::<i64>() {
        return Some(Value::from(int));
    }
    let float = text.parse::<f64>().ok()?;
    Number::from_f64(float).map(Value::Number)
}

fn invalid_number(key: &str, raw: &str) -> FormError {
    FormError::InvalidNumber {
        key: key.to_string(),
        value: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{create_element, ElementKind};
    use crate::domain::{ConfigDefaults, Manifest, PropertyDescriptor};
    use serde_json::json;

    fn rendered(properties: Vec<(&str, PropertyDescriptor)>) -> Element {
        let renderer = FormRenderer::default();
        let mut container = Element::new(ElementKind::Tbody);
        let mut defaults = ConfigDefaults::new();
        for (key, descriptor) in properties {
            renderer
                .build_row(&mut container, key, &descriptor, &mut defaults)
                .unwrap();
        }
        container
    }

    fn input_mut<'a>(root: &'a mut Element, key: &str) -> &'a mut Element {
        root.find_by_id_mut(key).unwrap()
    }

    #[test]
    fn test_collects_rendered_defaults() {
        let container = rendered(vec![
            ("greeting", PropertyDescriptor::new("string").with_default(json!("hello"))),
            ("port", PropertyDescriptor::new("number").with_default(json!(8080))),
            ("ratio", PropertyDescriptor::new("number").with_default(json!(0.25))),
            ("retries", PropertyDescriptor::new("integer").with_default(json!(3))),
            ("enabled", PropertyDescriptor::new("boolean").with_default(json!(true))),
            ("ids", PropertyDescriptor::new("array").with_default(json!([1, 2, 3]))),
            ("extra", PropertyDescriptor::new("object").with_default(json!({"a": null}))),
        ]);

        let values = FormRenderer::default().collect_values(&container).unwrap();
        assert_eq!(
            Value::Object(values),
            json!({
                "greeting": "hello",
                "port": 8080,
                "ratio": 0.25,
                "retries": 3,
                "enabled": true,
                "ids": [1, 2, 3],
                "extra": {"a": null}
            })
        );
    }

    #[test]
    fn test_collects_edited_values() {
        let mut container = rendered(vec![
            ("greeting", PropertyDescriptor::new("string").with_default(json!("hello"))),
            ("enabled", PropertyDescriptor::new("boolean").with_default(json!(true))),
            ("ids", PropertyDescriptor::new("array").with_default(json!([]))),
        ]);

        input_mut(&mut container, "greeting").set_value("bonjour");
        input_mut(&mut container, "enabled").set_checked(false);
        input_mut(&mut container, "ids").set_value("[4, 5]");

        let values = FormRenderer::default().collect_values(&container).unwrap();
        assert_eq!(values["greeting"], json!("bonjour"));
        assert_eq!(values["enabled"], json!(false));
        assert_eq!(values["ids"], json!([4, 5]));
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let mut container =
            rendered(vec![("extra", PropertyDescriptor::new("object").with_default(json!({})))]);
        input_mut(&mut container, "extra").set_value("{not json");

        let err = FormRenderer::default().collect_values(&container).unwrap_err();
        assert!(matches!(err, FormError::InvalidJson { key, .. } if key == "extra"));
    }

    #[test]
    fn test_invalid_number_is_reported() {
        let mut container =
            rendered(vec![("port", PropertyDescriptor::new("integer").with_default(json!(80)))]);
        input_mut(&mut container, "port").set_value("8.5");

        let err = FormRenderer::default().collect_values(&container).unwrap_err();
        assert!(matches!(err, FormError::InvalidNumber { key, value } if key == "port" && value == "8.5"));
    }

    #[test]
    fn test_untouched_numbers_without_defaults_collect_as_null() {
        let manifest = Manifest::from_json_str(
            r#"{"properties": {
                "port": {"type": "number"},
                "limit": {"type": "number", "default": null},
                "retries": {"type": "integer"}
            }}"#,
        )
        .unwrap();
        let container = rendered(
            manifest
                .properties
                .iter()
                .map(|(key, descriptor)| (key.as_str(), descriptor.clone()))
                .collect(),
        );
        assert_eq!(container.find_by_id("port").unwrap().value().as_deref(), Some("undefined"));
        assert_eq!(container.find_by_id("limit").unwrap().value().as_deref(), Some("null"));

        let values = FormRenderer::default().collect_values(&container).unwrap();
        assert_eq!(
            Value::Object(values),
            json!({"port": null, "limit": null, "retries": null})
        );
    }

    #[test]
    fn test_cleared_number_is_null() {
        let mut container =
            rendered(vec![("port", PropertyDescriptor::new("number").with_default(json!(80)))]);
        input_mut(&mut container, "port").set_value("  ");

        let values = FormRenderer::default().collect_values(&container).unwrap();
        assert_eq!(values["port"], Value::Null);
    }

    #[test]
    fn test_empty_structured_input_is_null() {
        let container = rendered(vec![("extra", PropertyDescriptor::new("object"))]);
        let values = FormRenderer::default().collect_values(&container).unwrap();
        assert_eq!(values["extra"], Value::Null);
    }

    #[test]
    fn test_ignores_unmarked_elements() {
        let mut container = rendered(vec![("tint", PropertyDescriptor::new("color").with_default(json!("red")))]);
        container.append_child(create_element(
            ElementKind::Input,
            &[("class", "config-input"), ("value", "stray")],
        ));
        container.append_child(create_element(
            ElementKind::Input,
            &[("data-config-key", "other"), ("value", "unclassed")],
        ));

        let values = FormRenderer::default().collect_values(&container).unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values["tint"], json!("red"));
    }
}
