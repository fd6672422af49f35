use super::{arbitrary_property, push_mapped, UtilityRule};
use crate::spacing::quantize_spacing;
use crate::tokens::TokenList;
use stylecopy_common::Declarations;

const DISPLAY: &[(&str, &str)] = &[
    ("flex", "flex"),
    ("inline-flex", "inline-flex"),
    ("grid", "grid"),
    ("inline-grid", "inline-grid"),
    ("block", "block"),
    ("inline-block", "inline-block"),
    ("inline", "inline"),
    ("none", "hidden"),
    ("table", "table"),
    ("table-row", "table-row"),
    ("table-cell", "table-cell"),
    ("list-item", "list-item"),
    ("flow-root", "flow-root"),
    ("contents", "contents"),
];

const POSITION: &[(&str, &str)] = &[
    ("static", "static"),
    ("relative", "relative"),
    ("absolute", "absolute"),
    ("fixed", "fixed"),
    ("sticky", "sticky"),
];

const OVERFLOW: &[&str] = &["hidden", "scroll", "auto", "visible", "clip"];

const VISIBILITY: &[(&str, &str)] = &[
    ("visible", "visible"),
    ("hidden", "invisible"),
    ("collapse", "collapse"),
];

const BOX_SIZING: &[(&str, &str)] = &[("border-box", "box-border"), ("content-box", "box-content")];

const FLOAT: &[(&str, &str)] = &[
    ("left", "float-left"),
    ("right", "float-right"),
    ("inline-start", "float-start"),
    ("inline-end", "float-end"),
];

const CLEAR: &[(&str, &str)] = &[
    ("left", "clear-left"),
    ("right", "clear-right"),
    ("both", "clear-both"),
    ("inline-start", "clear-start"),
    ("inline-end", "clear-end"),
];

pub struct DisplayRule;

impl UtilityRule for DisplayRule {
    fn name(&self) -> &'static str {
        "display"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["display"]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        push_mapped(declarations, tokens, "display", DISPLAY);
    }
}

/// Position keyword plus `top`/`right`/`bottom`/`left` offsets
pub struct PositionRule;

impl UtilityRule for PositionRule {
    fn name(&self) -> &'static str {
        "position"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["position", "top", "right", "bottom", "left"]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        push_mapped(declarations, tokens, "position", POSITION);

        let offsets: Vec<(&str, Option<String>)> = ["top", "right", "bottom", "left"]
            .into_iter()
            .map(|side| (side, declarations.get(side).map(quantize_spacing)))
            .collect();

        let first = &offsets[0].1;
        if first.is_some() && offsets.iter().all(|(_, value)| value == first) {
            if let Some(value) = first {
                tokens.push(format!("inset-{}", value));
            }
            return;
        }
        for (side, value) in &offsets {
            if let Some(value) = value {
                tokens.push(format!("{}-{}", side, value));
            }
        }
    }
}

pub struct OverflowRule;

impl UtilityRule for OverflowRule {
    fn name(&self) -> &'static str {
        "overflow"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["overflow", "overflow-x", "overflow-y"]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        for (property, prefix) in [
            ("overflow", "overflow"),
            ("overflow-x", "overflow-x"),
            ("overflow-y", "overflow-y"),
        ] {
            if let Some(value) = declarations.get(property) {
                if OVERFLOW.contains(&value) {
                    tokens.push(format!("{}-{}", prefix, value));
                } else {
                    tokens.push(arbitrary_property(property, value));
                }
            }
        }
    }
}

/// Visibility, box sizing and floats
pub struct LayoutMiscRule;

impl UtilityRule for LayoutMiscRule {
    fn name(&self) -> &'static str {
        "layout-misc"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["visibility", "box-sizing", "float", "clear"]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        push_mapped(declarations, tokens, "visibility", VISIBILITY);
        push_mapped(declarations, tokens, "box-sizing", BOX_SIZING);
        push_mapped(declarations, tokens, "float", FLOAT);
        push_mapped(declarations, tokens, "clear", CLEAR);
    }
}
