//! HTML serialization of element trees

use super::element::{Element, ElementKind, Node};

/// Escape text for use in element content or a double-quoted attribute value
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl Element {
    /// Serialize this element and its subtree.
    ///
    /// Live input state has no markup of its own, so a live `value` on an
    /// input is written as its `value` attribute and live checkedness as
    /// `checked`.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let live_value = match self.kind() {
            ElementKind::Input => self.live_value(),
            _ => None,
        };
        let live_checked = self.live_checked();

        out.push('<');
        out.push_str(self.tag_name());
        for (name, value) in self.attributes() {
            if (name == "value" && live_value.is_some()) || (name == "checked" && live_checked.is_some()) {
                continue;
            }
            push_attribute(out, name, value);
        }
        if let Some(value) = live_value {
            push_attribute(out, "value", value);
        }
        if live_checked == Some(true) {
            push_attribute(out, "checked", "");
        }
        out.push('>');

        if self.kind().is_void() {
            return;
        }

        for child in self.children() {
            match child {
                Node::Text(text) => out.push_str(&escape_html(text)),
                Node::Element(element) => element.write_html(out),
            }
        }

        out.push_str("</");
        out.push_str(self.tag_name());
        out.push('>');
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::element::create_element;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_void_input_with_live_value() {
        let input = create_element(
            ElementKind::Input,
            &[("type", "text"), ("data-config-key", "motd"), ("value", "a \"quoted\" <b>")],
        );
        assert_eq!(
            input.to_html(),
            r#"<input type="text" data-config-key="motd" value="a &quot;quoted&quot; &lt;b&gt;">"#
        );
    }

    #[test]
    fn test_nested_elements_and_text() {
        let mut row = Element::new(ElementKind::Tr);
        row.append_child(create_element(ElementKind::Td, &[("textContent", "a & b")]));
        assert_eq!(row.to_html(), "<tr><td>a &amp; b</td></tr>");
    }

    #[test]
    fn test_live_checked_overrides_attribute() {
        let mut checkbox = create_element(ElementKind::Input, &[("type", "checkbox")]);
        checkbox.set_attribute("checked", "");
        assert_eq!(checkbox.to_html(), r#"<input type="checkbox" checked="">"#);

        checkbox.set_checked(false);
        assert_eq!(checkbox.to_html(), r#"<input type="checkbox">"#);
    }

    #[test]
    fn test_textarea_keeps_text_content() {
        let textarea = create_element(
            ElementKind::Textarea,
            &[("rows", "5"), ("textContent", "[\n  1\n]")],
        );
        assert_eq!(
            textarea.to_html(),
            "<textarea rows=\"5\">[\n  1\n]</textarea>"
        );
    }
}
