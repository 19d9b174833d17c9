//! Owned element tree and the element factory
//!
//! Elements are plain values: they are built detached, filled in, and
//! appended to a parent that takes ownership. Setting a named attribute goes
//! through a per-kind policy table that decides whether the name is the
//! text-content pseudo-attribute, a settable element property, or a generic
//! markup attribute.

use std::fmt;
use std::str::FromStr;

use crate::error::{FormError, FormResult};

/// Pseudo-attribute that sets the visible text of an element
pub const TEXT_CONTENT: &str = "textContent";

// ============================================================================
// Element Kinds
// ============================================================================

/// Supported element tags
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Table,
    Tbody,
    Tr,
    Td,
    Input,
    Textarea,
    Div,
}

impl ElementKind {
    pub fn tag_name(&self) -> &'static str {
        match self {
            ElementKind::Table => "table",
            ElementKind::Tbody => "tbody",
            ElementKind::Tr => "tr",
            ElementKind::Td => "td",
            ElementKind::Input => "input",
            ElementKind::Textarea => "textarea",
            ElementKind::Div => "div",
        }
    }

    /// Void elements have no children and no end tag
    pub fn is_void(&self) -> bool {
        matches!(self, ElementKind::Input)
    }

    /// Properties settable on this kind of element
    pub fn properties(&self) -> &'static [ElementProperty] {
        match self {
            ElementKind::Input => INPUT_PROPERTIES,
            ElementKind::Textarea => TEXTAREA_PROPERTIES,
            _ => GLOBAL_PROPERTIES,
        }
    }
}

impl FromStr for ElementKind {
    type Err = FormError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "table" => Ok(ElementKind::Table),
            "tbody" => Ok(ElementKind::Tbody),
            "tr" => Ok(ElementKind::Tr),
            "td" => Ok(ElementKind::Td),
            "input" => Ok(ElementKind::Input),
            "textarea" => Ok(ElementKind::Textarea),
            "div" => Ok(ElementKind::Div),
            _ => Err(FormError::UnknownTag(tag.to_string())),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

// ============================================================================
// Properties
// ============================================================================

/// Element properties that can be set by name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementProperty {
    Id,
    ClassName,
    Title,
    Name,
    Type,
    Value,
    Checked,
    Placeholder,
    Rows,
    Cols,
}

const GLOBAL_PROPERTIES: &[ElementProperty] = &[
    ElementProperty::Id,
    ElementProperty::ClassName,
    ElementProperty::Title,
];

const INPUT_PROPERTIES: &[ElementProperty] = &[
    ElementProperty::Id,
    ElementProperty::ClassName,
    ElementProperty::Title,
    ElementProperty::Name,
    ElementProperty::Type,
    ElementProperty::Value,
    ElementProperty::Checked,
    ElementProperty::Placeholder,
];

const TEXTAREA_PROPERTIES: &[ElementProperty] = &[
    ElementProperty::Id,
    ElementProperty::ClassName,
    ElementProperty::Title,
    ElementProperty::Name,
    ElementProperty::Value,
    ElementProperty::Placeholder,
    ElementProperty::Rows,
    ElementProperty::Cols,
];

impl ElementProperty {
    /// Property name as used in an attribute mapping
    pub fn name(&self) -> &'static str {
        match self {
            ElementProperty::Id => "id",
            ElementProperty::ClassName => "className",
            ElementProperty::Title => "title",
            ElementProperty::Name => "name",
            ElementProperty::Type => "type",
            ElementProperty::Value => "value",
            ElementProperty::Checked => "checked",
            ElementProperty::Placeholder => "placeholder",
            ElementProperty::Rows => "rows",
            ElementProperty::Cols => "cols",
        }
    }

    /// Content attribute kept in sync with the property.
    ///
    /// `value` and `checked` change live state only.
    pub fn reflected_attribute(&self) -> Option<&'static str> {
        match self {
            ElementProperty::ClassName => Some("class"),
            ElementProperty::Value | ElementProperty::Checked => None,
            other => Some(other.name()),
        }
    }
}

/// Where a named entry of an attribute mapping lands on an element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeTarget {
    TextContent,
    Property(ElementProperty),
    Markup,
}

/// Resolve an attribute name against the policy table for `kind`
pub fn attribute_target(kind: ElementKind, name: &str) -> AttributeTarget {
    if name == TEXT_CONTENT {
        return AttributeTarget::TextContent;
    }
    kind.properties()
        .iter()
        .find(|property| property.name() == name)
        .map(|property| AttributeTarget::Property(*property))
        .unwrap_or(AttributeTarget::Markup)
}

// ============================================================================
// Nodes
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    kind: ElementKind,
    attributes: Vec<(String, String)>,
    value: Option<String>,
    checked: Option<bool>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
            value: None,
            checked: None,
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn tag_name(&self) -> &'static str {
        self.kind.tag_name()
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|(n, _)| n == name)
    }

    /// Set a content attribute, keeping its original position when replaced
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.retain(|(n, _)| n != name);
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub fn class_list(&self) -> impl Iterator<Item = &str> {
        self.attribute("class").unwrap_or("").split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_list().any(|c| c == class)
    }

    /// Apply one entry of an attribute mapping using the policy table
    pub fn set_named(&mut self, name: &str, value: &str) {
        match attribute_target(self.kind, name) {
            AttributeTarget::TextContent => self.set_text_content(value),
            AttributeTarget::Property(property) => self.set_property(property, value),
            AttributeTarget::Markup => self.set_attribute(name, value),
        }
    }

    pub fn set_property(&mut self, property: ElementProperty, value: &str) {
        match property {
            ElementProperty::Value => self.value = Some(value.to_string()),
            // A string assigned to a boolean property is truthy unless empty
            ElementProperty::Checked => self.checked = Some(!value.is_empty()),
            other => {
                if let Some(attribute) = other.reflected_attribute() {
                    self.set_attribute(attribute, value);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Live form state
    // ------------------------------------------------------------------

    /// Current value of a form control.
    ///
    /// Inputs fall back to their `value` attribute, textareas to their text.
    pub fn value(&self) -> Option<String> {
        if let Some(value) = &self.value {
            return Some(value.clone());
        }
        match self.kind {
            ElementKind::Input => self.attribute("value").map(str::to_string),
            ElementKind::Textarea => Some(self.text_content()),
            _ => None,
        }
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }

    pub(crate) fn live_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Current checkedness; the `checked` attribute applies until set live
    pub fn checked(&self) -> bool {
        self.checked.unwrap_or_else(|| self.has_attribute("checked"))
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = Some(checked);
    }

    pub(crate) fn live_checked(&self) -> Option<bool> {
        self.checked
    }

    // ------------------------------------------------------------------
    // Tree
    // ------------------------------------------------------------------

    pub fn text_content(&self) -> String {
        let mut text = String::new();
        collect_text(&self.children, &mut text);
        text
    }

    pub fn set_text_content(&mut self, text: &str) {
        self.children.clear();
        if !text.is_empty() {
            self.children.push(Node::Text(text.to_string()));
        }
    }

    pub fn append_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// All descendant elements in document order, excluding `self`
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_elements(self, &mut out);
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(child) => child.find_by_id_mut(id),
            Node::Text(_) => None,
        })
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(&element.children, out),
        }
    }
}

fn collect_elements<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    for child in element.child_elements() {
        out.push(child);
        collect_elements(child, out);
    }
}

// ============================================================================
// Factory
// ============================================================================

/// Create a detached element and apply an attribute mapping to it, in order
pub fn create_element(kind: ElementKind, attributes: &[(&str, &str)]) -> Element {
    let mut element = Element::new(kind);
    for (name, value) in attributes {
        element.set_named(name, value);
    }
    element
}

/// Like [`create_element`], resolving the tag from its name
pub fn create_element_by_tag(tag: &str, attributes: &[(&str, &str)]) -> FormResult<Element> {
    let kind = tag.parse::<ElementKind>()?;
    Ok(create_element(kind, attributes))
}
