use serde::{Deserialize, Serialize};

/// Opaque node identity: an index into the owning [`Document`] arena.
///
/// Ids are assigned in creation order, which for parsed documents is
/// document (pre-)order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Element attribute, kept in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Payload of an arena node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    Element {
        tag: String,
        attributes: Vec<Attribute>,
        children: Vec<NodeId>,
    },
    Text {
        content: String,
    },
    Comment {
        content: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
}

/// Arena-backed markup tree.
///
/// Top-level nodes (fragment roots) are tracked separately; every other node
/// is reachable through its parent's `children`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { kind, parent: None });
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.push(NodeKind::Element {
            tag: tag.into().to_ascii_lowercase(),
            attributes: Vec::new(),
            children: Vec::new(),
        })
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text {
            content: content.into(),
        })
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: impl Into<String>) -> NodeId {
        self.push(NodeKind::Comment {
            content: content.into(),
        })
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// Returns `false` (and does nothing) if `parent` is not an element or
    /// `child` is already attached.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child || self.parent(child).is_some() || self.roots.contains(&child) {
            return false;
        }
        match self.nodes.get_mut(parent.0).map(|node| &mut node.kind) {
            Some(NodeKind::Element { children, .. }) => children.push(child),
            _ => return false,
        }
        if let Some(node) = self.nodes.get_mut(child.0) {
            node.parent = Some(parent);
        }
        true
    }

    /// Register `node` as a top-level node of the fragment
    pub fn append_root(&mut self, node: NodeId) -> bool {
        if self.parent(node).is_some() || self.roots.contains(&node) || node.0 >= self.nodes.len() {
            return false;
        }
        self.roots.push(node);
        true
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// First top-level element, ignoring text and comments
    pub fn first_root_element(&self) -> Option<NodeId> {
        self.roots.iter().copied().find(|id| self.is_element(*id))
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.get(id).map(|node| &node.kind)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.kind(id), Some(NodeKind::Element { .. }))
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            Some(NodeKind::Element { tag, .. }) => Some(tag),
            _ => None,
        }
    }

    pub fn attributes(&self, id: NodeId) -> &[Attribute] {
        match self.kind(id) {
            Some(NodeKind::Element { attributes, .. }) => attributes,
            _ => &[],
        }
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.attributes(id)
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
            .map(|attr| attr.value.as_str())
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.kind(id) {
            Some(NodeKind::Element { children, .. }) => children,
            _ => &[],
        }
    }

    /// Element children only, in order
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(move |child| self.is_element(*child))
    }

    /// Text content of a text node
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            Some(NodeKind::Text { content }) => Some(content),
            _ => None,
        }
    }

    /// Set (or overwrite in place) an attribute value
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(NodeKind::Element { attributes, .. }) = self.nodes.get_mut(id.0).map(|n| &mut n.kind) {
            match attributes
                .iter_mut()
                .find(|attr| attr.name.eq_ignore_ascii_case(name))
            {
                Some(attr) => attr.value = value,
                None => attributes.push(Attribute::new(name.to_ascii_lowercase(), value)),
            }
        }
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        if let Some(NodeKind::Element { attributes, .. }) = self.nodes.get_mut(id.0).map(|n| &mut n.kind) {
            attributes.retain(|attr| !attr.name.eq_ignore_ascii_case(name));
        }
    }

    /// Keep only the attributes for which `keep` returns true
    pub fn retain_attributes(&mut self, id: NodeId, mut keep: impl FnMut(&Attribute) -> bool) {
        if let Some(NodeKind::Element { attributes, .. }) = self.nodes.get_mut(id.0).map(|n| &mut n.kind) {
            attributes.retain(|attr| keep(attr));
        }
    }

    /// Convenience for building trees by hand: create an element with
    /// attributes and attach it under `parent` (or as a root).
    pub fn append_element(
        &mut self,
        parent: Option<NodeId>,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> NodeId {
        let id = self.create_element(tag);
        for (name, value) in attributes {
            self.set_attribute(id, name, *value);
        }
        match parent {
            Some(parent) => self.append_child(parent, id),
            None => self.append_root(id),
        };
        id
    }

    /// Convenience for building trees by hand: append a text run under `parent`
    pub fn append_text(&mut self, parent: NodeId, content: &str) -> NodeId {
        let id = self.create_text(content);
        self.append_child(parent, id);
        id
    }
}

/// Elements that never have children or a closing tag
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.iter().any(|void| void.eq_ignore_ascii_case(tag))
}
