use crate::ast::*;

/// Flat serializer: renders a subtree back to markup without adding any
/// whitespace, the way `outerHTML` does.
pub struct Serializer<'doc> {
    doc: &'doc Document,
    output: String,
}

impl<'doc> Serializer<'doc> {
    pub fn new(doc: &'doc Document) -> Self {
        Self {
            doc,
            output: String::new(),
        }
    }

    /// Serialize `node` and its descendants
    pub fn serialize(mut self, node: NodeId) -> String {
        self.serialize_node(node);
        self.output
    }

    fn serialize_node(&mut self, node: NodeId) {
        match self.doc.kind(node) {
            Some(NodeKind::Element {
                tag,
                attributes,
                children,
            }) => {
                self.output.push('<');
                self.output.push_str(tag);
                for attr in attributes {
                    self.output.push(' ');
                    self.output.push_str(&attr.name);
                    self.output.push_str("=\"");
                    self.output.push_str(&escape_attribute(&attr.value));
                    self.output.push('"');
                }
                self.output.push('>');
                if is_void_tag(tag) {
                    return;
                }
                for child in children {
                    self.serialize_node(*child);
                }
                self.output.push_str("</");
                self.output.push_str(tag);
                self.output.push('>');
            }
            Some(NodeKind::Text { content }) => {
                self.output.push_str(&escape_text(content));
            }
            Some(NodeKind::Comment { content }) => {
                self.output.push_str("<!--");
                self.output.push_str(content);
                self.output.push_str("-->");
            }
            None => {}
        }
    }
}

/// Escape text content (`&`, `<`, `>`)
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a double-quoted attribute value (`&`, `"`)
pub fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

/// Serialize a subtree of `doc` rooted at `node`
pub fn serialize(doc: &Document, node: NodeId) -> String {
    Serializer::new(doc).serialize(node)
}
