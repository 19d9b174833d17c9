//! Input dispatch and the typed input renderers

use serde_json::Value;

use super::value::{display_string, is_truthy};
use super::FormRenderer;
use crate::dom::{create_element, Element, ElementKind, TEXT_CONTENT};
use crate::domain::{PropertyDescriptor, PropertyType};
use crate::error::{FormError, FormResult};

impl FormRenderer {
    /// Build the input element for one property.
    ///
    /// Object and array properties get a JSON textarea, booleans a checkbox,
    /// and every other declared type a text input.
    pub fn create_input(
        &self,
        key: &str,
        default: Option<&Value>,
        descriptor: &PropertyDescriptor,
    ) -> FormResult<Element> {
        if key.is_empty() {
            return Err(FormError::MissingKey);
        }

        let data_type = &descriptor.property_type;
        let element = match data_type {
            _ if data_type.is_structured() => self.create_textarea_input(key, default, data_type)?,
            PropertyType::Boolean => self.create_boolean_input(key, default),
            PropertyType::Other(name) => {
                tracing::debug!("Unrecognized type '{}' for '{}', using a text input", name, key);
                self.create_string_input(key, default, data_type)
            }
            _ => self.create_string_input(key, default, data_type),
        };

        Ok(element)
    }

    /// Single-line text input holding the stringified default
    pub fn create_string_input(
        &self,
        key: &str,
        default: Option<&Value>,
        data_type: &PropertyType,
    ) -> Element {
        let value = display_string(default);
        create_element(
            ElementKind::Input,
            &[
                ("type", "text"),
                ("id", key),
                ("name", key),
                ("data-config-key", key),
                ("data-type", data_type.as_str()),
                ("class", self.settings.input_class.as_str()),
                ("value", value.as_str()),
            ],
        )
    }

    /// Checkbox, checked when the default is truthy
    pub fn create_boolean_input(&self, key: &str, default: Option<&Value>) -> Element {
        let mut element = create_element(
            ElementKind::Input,
            &[
                ("type", "checkbox"),
                ("id", key),
                ("name", key),
                ("data-config-key", key),
                ("data-type", PropertyType::Boolean.as_str()),
                ("class", self.settings.input_class.as_str()),
            ],
        );

        if is_truthy(default) {
            element.set_attribute("checked", "");
        }

        element
    }

    /// Multi-line input holding the default as indented JSON
    pub fn create_textarea_input(
        &self,
        key: &str,
        default: Option<&Value>,
        data_type: &PropertyType,
    ) -> FormResult<Element> {
        let rows = self.settings.textarea_rows.to_string();
        let cols = self.settings.textarea_cols.to_string();
        let mut element = create_element(
            ElementKind::Textarea,
            &[
                ("id", key),
                ("name", key),
                ("data-config-key", key),
                ("data-type", data_type.as_str()),
                ("class", self.settings.input_class.as_str()),
                ("rows", rows.as_str()),
                ("cols", cols.as_str()),
            ],
        );

        // An absent default leaves the textarea empty
        let text = match default {
            Some(value) => serde_json::to_string_pretty(value)?,
            None => String::new(),
        };
        element.set_named(TEXT_CONTENT, &text);

        element.set_attribute("placeholder", &format!("Enter {} in JSON format", data_type));

        Ok(element)
    }
}
