use super::element::{create_element, Element, ElementKind};
use crate::error::{FormError, FormResult};

/// Page fragment that owns the container rows are rendered into
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// `<table><tbody id="{container_id}"></tbody></table>`
    pub fn form_shell(container_id: &str) -> Self {
        let mut table = Element::new(ElementKind::Table);
        table.append_child(create_element(ElementKind::Tbody, &[("id", container_id)]));
        Self::new(table)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    pub fn container_mut(&mut self, id: &str) -> FormResult<&mut Element> {
        self.root
            .find_by_id_mut(id)
            .ok_or_else(|| FormError::ContainerNotFound(id.to_string()))
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }
}
