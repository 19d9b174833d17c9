//! Row building and whole-manifest render passes

use super::FormRenderer;
use crate::config::validator::ConfigValidator;
use crate::dom::{create_element, Document, Element, ElementKind, TEXT_CONTENT};
use crate::domain::{ConfigDefaults, Manifest, PropertyDescriptor};
use crate::error::{FormError, FormResult};

impl FormRenderer {
    /// Append one labelled input row to `container` and record its default.
    ///
    /// The input is built before anything is written, so a rejected key
    /// leaves both `container` and `defaults` unchanged. Calling this twice
    /// for the same key appends a second row and replaces the defaults entry.
    pub fn build_row(
        &self,
        container: &mut Element,
        key: &str,
        descriptor: &PropertyDescriptor,
        defaults: &mut ConfigDefaults,
    ) -> FormResult<()> {
        let header_cell = create_element(
            ElementKind::Td,
            &[
                ("className", self.settings.header_cell_class.as_str()),
                (TEXT_CONTENT, key),
            ],
        );

        let input = self.create_input(key, descriptor.default.as_ref(), descriptor)?;
        let mut value_cell = create_element(
            ElementKind::Td,
            &[("className", self.settings.value_cell_class.as_str())],
        );
        value_cell.append_child(input);

        let mut row = Element::new(ElementKind::Tr);
        row.append_child(header_cell);
        row.append_child(value_cell);
        container.append_child(row);

        defaults.record(key, descriptor);

        tracing::debug!("Rendered row for '{}' ({})", key, descriptor.property_type);
        Ok(())
    }

    /// Render every manifest property into the document's container.
    ///
    /// The manifest is validated and the container located before any row
    /// is appended, so a failed pass leaves the document and `defaults`
    /// untouched. Returns the number of rows rendered.
    pub fn render_manifest(
        &self,
        document: &mut Document,
        manifest: &Manifest,
        defaults: &mut ConfigDefaults,
    ) -> FormResult<usize> {
        ConfigValidator::validate_manifest(manifest).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            FormError::Validation(error_messages.join("; "))
        })?;

        let container_id = self.settings.container_id.as_str();
        let container = document.container_mut(container_id)?;

        for (key, descriptor) in &manifest.properties {
            self.build_row(container, key, descriptor, defaults)?;
        }

        tracing::info!(
            "Rendered {} manifest properties into #{}",
            manifest.properties.len(),
            container_id
        );
        Ok(manifest.properties.len())
    }
}
