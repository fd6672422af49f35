use once_cell::sync::Lazy;
use regex::RegexSet;
use std::collections::HashMap;
use stylecopy_parser::{serialize, Document, NodeId, NodeKind};

/// Framework and tooling attributes that carry no meaning in a copy
static NOISE_ATTRIBUTES: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"^data-",
        r"^svelte-",
        r"^_svelte",
        r"^ng-",
        r"^v-",
        r"^x-",
        r"^fdprocessedid$",
        r"^jsaction$",
        r"^jsmodel$",
        r"^jscontroller$",
        r"^jsrenderer$",
        r"^jsshadow$",
    ])
    .expect("valid attribute patterns")
});

pub fn is_noise_attribute(name: &str) -> bool {
    NOISE_ATTRIBUTES.is_match(name)
}

/// Builds a cleaned structural copy of a subtree.
///
/// The copy lives in a fresh [`Document`]; the source tree is only read.
#[derive(Debug, Clone, Default)]
pub struct MarkupCleaner {
    ignore_id_prefix: Option<String>,
}

impl MarkupCleaner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_id_prefix(mut self, prefix: Option<String>) -> Self {
        self.ignore_id_prefix = prefix.filter(|p| !p.is_empty());
        self
    }

    /// Copy the subtree at `root`, replacing each element's `class` with its
    /// entry in `classes` (or dropping it) and removing inline styles and
    /// noise attributes. Returns the copy and its root, `None` when the root
    /// itself is skipped.
    pub fn clean(
        &self,
        doc: &Document,
        root: NodeId,
        classes: &HashMap<NodeId, String>,
    ) -> (Document, Option<NodeId>) {
        let mut copy = Document::new();
        let copied_root = self.copy_node(doc, root, classes, &mut copy, None);
        (copy, copied_root)
    }

    fn is_ignored(&self, doc: &Document, node: NodeId) -> bool {
        match (&self.ignore_id_prefix, doc.attribute(node, "id")) {
            (Some(prefix), Some(id)) => id.starts_with(prefix.as_str()),
            _ => false,
        }
    }

    fn copy_node(
        &self,
        doc: &Document,
        node: NodeId,
        classes: &HashMap<NodeId, String>,
        copy: &mut Document,
        parent: Option<NodeId>,
    ) -> Option<NodeId> {
        let copied = match doc.kind(node)? {
            NodeKind::Element {
                tag,
                attributes,
                children,
            } => {
                if self.is_ignored(doc, node) {
                    return None;
                }
                let id = copy.create_element(tag.as_str());
                let class = classes.get(&node).filter(|c| !c.is_empty());
                for attr in attributes {
                    let name = attr.name.as_str();
                    if name == "class" {
                        // Keep the generated class where the original one was
                        if let Some(class) = class {
                            copy.set_attribute(id, "class", class.as_str());
                        }
                        continue;
                    }
                    if name == "style" || is_noise_attribute(name) {
                        continue;
                    }
                    copy.set_attribute(id, name, attr.value.as_str());
                }
                if let Some(class) = class {
                    copy.set_attribute(id, "class", class.as_str());
                }
                attach(copy, parent, id);
                for child in children {
                    self.copy_node(doc, *child, classes, copy, Some(id));
                }
                return Some(id);
            }
            NodeKind::Text { content } => copy.create_text(content.as_str()),
            NodeKind::Comment { content } => copy.create_comment(content.as_str()),
        };
        attach(copy, parent, copied);
        Some(copied)
    }
}

fn attach(copy: &mut Document, parent: Option<NodeId>, node: NodeId) {
    match parent {
        Some(parent) => copy.append_child(parent, node),
        None => copy.append_root(node),
    };
}

/// Flat markup of the cleaned copy, empty when the root is skipped
pub fn clean_markup(
    cleaner: &MarkupCleaner,
    doc: &Document,
    root: NodeId,
    classes: &HashMap<NodeId, String>,
) -> String {
    match cleaner.clean(doc, root, classes) {
        (copy, Some(copied_root)) => serialize(&copy, copied_root),
        (_, None) => String::new(),
    }
}
