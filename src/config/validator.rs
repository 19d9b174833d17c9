use std::collections::HashMap;
use thiserror::Error;

use crate::config::{FormSettings, Settings};
use crate::domain::{Manifest, PropertyType};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Duplicate entry: {0}")]
    Duplicate(String),
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        Self::validate_form(&settings.form)
    }

    fn validate_form(form: &FormSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if form.container_id.trim().is_empty() {
            errors.push(ValidationError::MissingField("form.container_id".to_string()));
        } else if form.container_id.chars().any(char::is_whitespace) {
            errors.push(ValidationError::InvalidValue {
                field: "form.container_id".to_string(),
                reason: "Element ids cannot contain whitespace".to_string(),
            });
        }

        let classes = [
            ("form.input_class", &form.input_class),
            ("form.header_cell_class", &form.header_cell_class),
            ("form.value_cell_class", &form.value_cell_class),
        ];
        for (field, class) in classes {
            if class.is_empty() {
                errors.push(ValidationError::MissingField(field.to_string()));
            } else if class.chars().any(char::is_whitespace) {
                errors.push(ValidationError::InvalidValue {
                    field: field.to_string(),
                    reason: "Must be a single class name".to_string(),
                });
            }
        }

        if form.textarea_rows == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "form.textarea_rows".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if form.textarea_cols == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "form.textarea_cols".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Check a manifest before any of it is rendered
    pub fn validate_manifest(manifest: &Manifest) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut seen_keys = HashMap::new();

        for (idx, (key, descriptor)) in manifest.properties.iter().enumerate() {
            if key.is_empty() {
                errors.push(ValidationError::MissingField(format!(
                    "properties[{}].key",
                    idx
                )));
                continue;
            }

            if let Some(prev_idx) = seen_keys.insert(key, idx) {
                errors.push(ValidationError::Duplicate(format!(
                    "Property '{}' appears at indices {} and {}",
                    key, prev_idx, idx
                )));
            }

            // Odd descriptors still render: an empty type falls back to a
            // text input and untyped items are recorded as null
            if descriptor.property_type.as_str().is_empty() {
                tracing::warn!("Property '{}' declares no type, rendering as text", key);
            }

            if descriptor.property_type == PropertyType::Array
                && descriptor.items.is_some()
                && descriptor.declared_items().is_none()
            {
                tracing::warn!("Property '{}' has 'items' without a type", key);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PropertyDescriptor;
    use serde_json::json;

    fn manifest(properties: Vec<(&str, PropertyDescriptor)>) -> Manifest {
        Manifest {
            name: None,
            properties: properties
                .into_iter()
                .map(|(k, d)| (k.to_string(), d))
                .collect(),
        }
    }

    #[test]
    fn test_valid_settings() {
        let settings = Settings::default();
        assert!(ConfigValidator::validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_invalid_form_settings() {
        let settings = Settings {
            form: FormSettings {
                container_id: String::new(),
                input_class: "config input".to_string(),
                textarea_rows: 0,
                ..FormSettings::default()
            },
        };

        let errors = ConfigValidator::validate_settings(&settings).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(matches!(&errors[0], ValidationError::MissingField(f) if f == "form.container_id"));
        assert!(matches!(&errors[1], ValidationError::InvalidValue { field, .. } if field == "form.input_class"));
        assert!(matches!(&errors[2], ValidationError::InvalidValue { field, .. } if field == "form.textarea_rows"));
    }

    #[test]
    fn test_valid_manifest() {
        let manifest = manifest(vec![
            ("greeting", PropertyDescriptor::new("string").with_default(json!("hello"))),
            (
                "ids",
                PropertyDescriptor::new("array")
                    .with_default(json!([1]))
                    .with_items("number"),
            ),
        ]);
        assert!(ConfigValidator::validate_manifest(&manifest).is_ok());
    }

    #[test]
    fn test_empty_key_and_duplicates() {
        let manifest = manifest(vec![
            ("", PropertyDescriptor::new("string")),
            ("port", PropertyDescriptor::new("number")),
            ("port", PropertyDescriptor::new("number")),
        ]);

        let errors = ConfigValidator::validate_manifest(&manifest).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(&errors[0], ValidationError::MissingField(f) if f == "properties[0].key"));
        assert!(matches!(&errors[1], ValidationError::Duplicate(_)));
    }

    #[test]
    fn test_untyped_items_and_blank_type_are_accepted() {
        let mut untyped = PropertyDescriptor::new("array");
        untyped.items = Some(crate::domain::ItemsDescriptor { item_type: None });
        let manifest = manifest(vec![("tags", untyped), ("blank", PropertyDescriptor::new(""))]);

        assert!(ConfigValidator::validate_manifest(&manifest).is_ok());
    }
}
