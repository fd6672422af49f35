use stylecopy_parser::{Document, NodeId, NodeKind};

/// Visitor pattern for traversing a markup subtree immutably
///
/// The default implementations walk the whole subtree in pre-order. Override
/// `visit_element` and return without calling [`walk_element`] to prune a
/// branch.
pub trait Visitor: Sized {
    fn visit_element(&mut self, doc: &Document, id: NodeId) {
        walk_element(self, doc, id);
    }

    fn visit_text(&mut self, _doc: &Document, _id: NodeId) {
        // Leaf node, no children to walk
    }

    fn visit_comment(&mut self, _doc: &Document, _id: NodeId) {
        // Leaf node, no children to walk
    }
}

/// Dispatch `id` to the matching visit_* method
pub fn walk_node<V: Visitor>(visitor: &mut V, doc: &Document, id: NodeId) {
    match doc.kind(id) {
        Some(NodeKind::Element { .. }) => visitor.visit_element(doc, id),
        Some(NodeKind::Text { .. }) => visitor.visit_text(doc, id),
        Some(NodeKind::Comment { .. }) => visitor.visit_comment(doc, id),
        None => {}
    }
}

pub fn walk_element<V: Visitor>(visitor: &mut V, doc: &Document, id: NodeId) {
    for child in doc.children(id) {
        walk_node(visitor, doc, *child);
    }
}

struct ElementCollector {
    elements: Vec<NodeId>,
}

impl Visitor for ElementCollector {
    fn visit_element(&mut self, doc: &Document, id: NodeId) {
        self.elements.push(id);
        walk_element(self, doc, id);
    }
}

/// Every element of the subtree rooted at `root`, in pre-order, root first
pub fn elements_preorder(doc: &Document, root: NodeId) -> Vec<NodeId> {
    let mut collector = ElementCollector {
        elements: Vec::new(),
    };
    walk_node(&mut collector, doc, root);
    collector.elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylecopy_parser::parse;

    #[test]
    fn test_elements_preorder() {
        let doc = parse("<div><p><b>x</b></p>text<span></span></div>").expect("Failed to parse");
        let root = doc.first_root_element().unwrap();
        let tags: Vec<_> = elements_preorder(&doc, root)
            .into_iter()
            .filter_map(|id| doc.tag(id))
            .collect();

        assert_eq!(tags, vec!["div", "p", "b", "span"]);
    }

    #[test]
    fn test_pruning_visitor() {
        struct SkipParagraphs(Vec<String>);

        impl Visitor for SkipParagraphs {
            fn visit_element(&mut self, doc: &Document, id: NodeId) {
                if doc.tag(id) == Some("p") {
                    return;
                }
                self.0.push(doc.tag(id).unwrap_or_default().to_string());
                walk_element(self, doc, id);
            }
        }

        let doc = parse("<div><p><b>x</b></p><i></i></div>").expect("Failed to parse");
        let mut visitor = SkipParagraphs(Vec::new());
        walk_node(&mut visitor, &doc, doc.first_root_element().unwrap());

        assert_eq!(visitor.0, vec!["div", "i"]);
    }

    #[test]
    fn test_text_root_has_no_elements() {
        let doc = parse("just text").expect("Failed to parse");
        assert!(elements_preorder(&doc, doc.roots()[0]).is_empty());
    }
}
