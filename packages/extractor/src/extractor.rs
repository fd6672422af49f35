use crate::baseline::{is_no_op, TagBaseline, TAG_BASELINES};
use crate::properties::{is_text_property, tracked_properties};
use crate::resolver::{StyleResolver, StyleSnapshot};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use stylecopy_common::{is_color_property, normalize_color, walk_element, walk_node, Declarations, Visitor};
use stylecopy_parser::{Document, NodeId};
use tracing::{debug, info, instrument};

/// Class name given to the captured root element
pub const DEFAULT_ROOT_CLASS: &str = "copied-el";

// Sub-pixel widths/heights such as `103.328125px` are layout noise
static SUBPIXEL_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.\d{3,}px$").expect("valid sub-pixel pattern"));

/// The declarations of one element that survived diffing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyleRecord {
    pub node: NodeId,
    pub tag: String,
    pub class_name: String,
    pub declarations: Declarations,
}

/// Style extractor - diffs each element's resolved style against its tag
/// baseline and its parent
#[derive(Debug, Clone)]
pub struct StyleExtractor {
    root_class: String,
    ignore_id_prefix: Option<String>,
    baseline: &'static TagBaseline,
}

impl Default for StyleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleExtractor {
    pub fn new() -> Self {
        Self {
            root_class: DEFAULT_ROOT_CLASS.to_string(),
            ignore_id_prefix: None,
            baseline: &TAG_BASELINES,
        }
    }

    pub fn with_root_class(mut self, root_class: impl Into<String>) -> Self {
        self.root_class = root_class.into();
        self
    }

    /// Skip elements (and their subtrees) whose `id` starts with `prefix`
    pub fn with_ignore_id_prefix(mut self, prefix: Option<String>) -> Self {
        self.ignore_id_prefix = prefix.filter(|p| !p.is_empty());
        self
    }

    pub fn root_class(&self) -> &str {
        &self.root_class
    }

    /// Extract records for the subtree at `root`, root first, in pre-order
    #[instrument(skip(self, doc, snapshot), fields(root = root.index(), root_class = %self.root_class))]
    pub fn extract(&self, doc: &Document, root: NodeId, snapshot: &StyleSnapshot) -> Vec<NodeStyleRecord> {
        let mut visitor = ExtractVisitor {
            extractor: self,
            snapshot,
            root,
            counter: 0,
            records: Vec::new(),
        };
        walk_node(&mut visitor, doc, root);

        info!(records = visitor.records.len(), "Style extraction complete");
        visitor.records
    }

    /// Snapshot `resolver` and extract in one step
    pub fn extract_with<R: StyleResolver + ?Sized>(
        &self,
        doc: &Document,
        root: NodeId,
        resolver: &R,
    ) -> Vec<NodeStyleRecord> {
        let snapshot = StyleSnapshot::capture(doc, root, resolver);
        self.extract(doc, root, &snapshot)
    }

    fn is_ignored(&self, doc: &Document, node: NodeId) -> bool {
        match (&self.ignore_id_prefix, doc.attribute(node, "id")) {
            (Some(prefix), Some(id)) => id.starts_with(prefix.as_str()),
            _ => false,
        }
    }

    /// Diff one element. `parent` is `None` for the captured root, which is
    /// never subject to inheritance elision.
    fn diff_node(
        &self,
        tag: &str,
        node: NodeId,
        parent: Option<NodeId>,
        snapshot: &StyleSnapshot,
    ) -> Declarations {
        let mut declarations = Declarations::new();

        for tracked in tracked_properties() {
            let property = tracked.name;
            let Some(value) = snapshot.get(node, property) else {
                continue;
            };
            if value.is_empty() || is_no_op(value) {
                continue;
            }
            if self.baseline.is_baseline(tag, property, value) {
                continue;
            }
            // Approximation: only the immediate parent's resolved value is
            // compared, never the real cascade origin
            if let Some(parent) = parent {
                if is_text_property(property) && snapshot.get(parent, property) == Some(value) {
                    continue;
                }
            }
            if (property == "width" || property == "height") && SUBPIXEL_NOISE.is_match(value) {
                continue;
            }

            let value = if is_color_property(property) {
                normalize_color(value)
            } else {
                value.to_string()
            };
            declarations.insert(property, value);
        }

        if !declarations.contains("display") {
            if let Some(display) = snapshot.get(node, "display") {
                let is_flow = display == "inline" || display == "block";
                if !is_flow && !self.baseline.is_baseline(tag, "display", display) {
                    declarations.insert("display", display);
                }
            }
        }

        declarations
    }
}

struct ExtractVisitor<'a> {
    extractor: &'a StyleExtractor,
    snapshot: &'a StyleSnapshot,
    root: NodeId,
    counter: usize,
    records: Vec<NodeStyleRecord>,
}

impl Visitor for ExtractVisitor<'_> {
    fn visit_element(&mut self, doc: &Document, id: NodeId) {
        if self.extractor.is_ignored(doc, id) {
            return;
        }

        let is_root = id == self.root;
        let class_name = if is_root {
            self.extractor.root_class.clone()
        } else {
            self.counter += 1;
            format!("{}-c{}", self.extractor.root_class, self.counter)
        };
        let tag = doc.tag(id).unwrap_or_default().to_string();
        let parent = if is_root { None } else { doc.parent(id) };
        let declarations = self.extractor.diff_node(&tag, id, parent, self.snapshot);

        debug!(
            class_name = %class_name,
            tag = %tag,
            declarations = declarations.len(),
            "Extracted node styles"
        );

        self.records.push(NodeStyleRecord {
            node: id,
            tag,
            class_name,
            declarations,
        });
        walk_element(self, doc, id);
    }
}

/// Node → generated class name, for every extracted record
pub fn class_map(records: &[NodeStyleRecord]) -> HashMap<NodeId, String> {
    records
        .iter()
        .map(|record| (record.node, record.class_name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ComputedStyles;
    use stylecopy_parser::parse;

    fn setup(source: &str) -> (Document, Vec<NodeId>) {
        let doc = parse(source).expect("Failed to parse");
        let root = doc.first_root_element().expect("root element");
        let elements = stylecopy_common::elements_preorder(&doc, root);
        (doc, elements)
    }

    #[test]
    fn test_class_names_follow_preorder() {
        let (doc, ids) = setup("<div><p><b>x</b></p><span></span></div>");
        let records = StyleExtractor::new().extract_with(&doc, ids[0], &ComputedStyles::new());

        let names: Vec<_> = records.iter().map(|r| r.class_name.as_str()).collect();
        assert_eq!(names, vec!["copied-el", "copied-el-c1", "copied-el-c2", "copied-el-c3"]);
        assert!(records.iter().all(|r| r.declarations.is_empty()));
    }

    #[test]
    fn test_baseline_and_no_op_elision() {
        let (doc, ids) = setup("<div></div>");
        let styles = ComputedStyles::new().with_all(
            ids[0],
            &[
                ("display", "block"),
                ("position", "static"),
                ("margin", "0px"),
                ("float", "none"),
                ("color", "CurrentColor"),
            ],
        );
        let records = StyleExtractor::new().extract_with(&doc, ids[0], &styles);

        let props: Vec<_> = records[0].declarations.properties().collect();
        assert_eq!(props, vec!["position"]);
    }

    #[test]
    fn test_inheritance_elision_only_for_text_properties() {
        let (doc, ids) = setup("<div><p></p></div>");
        let shared = [("font-size", "18px"), ("background-color", "rgb(255, 255, 255)")];
        let styles = ComputedStyles::new()
            .with_all(ids[0], &shared)
            .with_all(ids[1], &shared);
        let records = StyleExtractor::new().extract_with(&doc, ids[0], &styles);

        assert_eq!(records[0].declarations.get("font-size"), Some("18px"));
        assert_eq!(records[1].declarations.get("font-size"), None);
        assert_eq!(records[1].declarations.get("background-color"), Some("#ffffff"));
    }

    #[test]
    fn test_inheritance_compares_to_immediate_parent_only() {
        let (doc, ids) = setup("<div><section><p></p></section></div>");
        let styles = ComputedStyles::new()
            .with(ids[0], "color", "rgb(1, 2, 3)")
            .with(ids[1], "color", "rgb(9, 9, 9)")
            .with(ids[2], "color", "rgb(9, 9, 9)");
        let records = StyleExtractor::new().extract_with(&doc, ids[0], &styles);

        assert_eq!(records[0].declarations.get("color"), Some("#010203"));
        assert_eq!(records[1].declarations.get("color"), Some("#090909"));
        assert_eq!(records[2].declarations.get("color"), None);
    }

    #[test]
    fn test_root_is_not_elided_against_its_parent() {
        let (doc, ids) = setup("<div><span></span></div>");
        let styles = ComputedStyles::new()
            .with(ids[0], "color", "red")
            .with(ids[1], "color", "red");
        let records = StyleExtractor::new().extract_with(&doc, ids[1], &styles);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].class_name, "copied-el");
        assert_eq!(records[0].declarations.get("color"), Some("red"));
    }

    #[test]
    fn test_subpixel_sizes_are_dropped() {
        let (doc, ids) = setup("<div></div>");
        let styles = ComputedStyles::new()
            .with(ids[0], "width", "103.328125px")
            .with(ids[0], "height", "40.5px")
            .with(ids[0], "min-width", "10.123px");
        let records = StyleExtractor::new().extract_with(&doc, ids[0], &styles);

        let decls = &records[0].declarations;
        assert_eq!(decls.get("width"), None);
        assert_eq!(decls.get("height"), Some("40.5px"));
        assert_eq!(decls.get("min-width"), Some("10.123px"));
    }

    #[test]
    fn test_display_none_is_force_included() {
        let (doc, ids) = setup("<div></div>");
        let styles = ComputedStyles::new().with(ids[0], "display", "none");
        let records = StyleExtractor::new().extract_with(&doc, ids[0], &styles);

        assert_eq!(records[0].declarations.get("display"), Some("none"));
    }

    #[test]
    fn test_display_baseline_is_not_force_included() {
        let (doc, ids) = setup("<ul><li></li></ul>");
        let styles = ComputedStyles::new()
            .with(ids[0], "display", "block")
            .with(ids[1], "display", "list-item");
        let records = StyleExtractor::new().extract_with(&doc, ids[0], &styles);

        assert!(records[0].declarations.is_empty());
        assert!(records[1].declarations.is_empty());
    }

    #[test]
    fn test_span_with_block_display_keeps_it() {
        let (doc, ids) = setup("<span></span>");
        let styles = ComputedStyles::new().with(ids[0], "display", "block");
        let records = StyleExtractor::new().extract_with(&doc, ids[0], &styles);

        assert_eq!(records[0].declarations.get("display"), Some("block"));
    }

    #[test]
    fn test_declarations_follow_tracked_order() {
        let (doc, ids) = setup("<div></div>");
        let styles = ComputedStyles::new()
            .with(ids[0], "opacity", "0.5")
            .with(ids[0], "background-color", "#fff")
            .with(ids[0], "padding", "8px")
            .with(ids[0], "display", "flex");
        let records = StyleExtractor::new().extract_with(&doc, ids[0], &styles);

        let props: Vec<_> = records[0].declarations.properties().collect();
        assert_eq!(props, vec!["display", "padding", "background-color", "opacity"]);
    }

    #[test]
    fn test_ignored_subtrees() {
        let (doc, ids) = setup("<div><div id=\"__overlay\"><p></p></div><span></span></div>");
        let records = StyleExtractor::new()
            .with_ignore_id_prefix(Some("__overlay".to_string()))
            .extract_with(&doc, ids[0], &ComputedStyles::new());

        let tags: Vec<_> = records.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(tags, vec!["div", "span"]);
        assert_eq!(records[1].class_name, "copied-el-c1");
    }

    #[test]
    fn test_custom_root_class_and_class_map() {
        let (doc, ids) = setup("<div><i></i></div>");
        let records = StyleExtractor::new()
            .with_root_class("snap")
            .extract_with(&doc, ids[0], &ComputedStyles::new());
        let map = class_map(&records);

        assert_eq!(map.get(&ids[0]).map(String::as_str), Some("snap"));
        assert_eq!(map.get(&ids[1]).map(String::as_str), Some("snap-c1"));
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let (doc, ids) = setup("<p></p>");
        let styles = ComputedStyles::new().with(ids[0], "color", "rgb(0, 0, 0)");
        let records = StyleExtractor::new().extract_with(&doc, ids[0], &styles);
        let json = serde_json::to_value(&records[0]).expect("Failed to serialize");

        assert_eq!(json["className"], "copied-el");
        assert_eq!(json["tag"], "p");
        assert_eq!(json["declarations"][0]["property"], "color");
        assert_eq!(json["declarations"][0]["value"], "#000000");
    }
}
