//! In-memory element tree the form is rendered into

pub mod document;
pub mod element;
pub mod html;

pub use document::Document;
pub use element::{
    attribute_target, create_element, create_element_by_tag, AttributeTarget, Element,
    ElementKind, ElementProperty, Node, TEXT_CONTENT,
};
pub use html::escape_html;
