use super::{arbitrary_value, lookup, push_mapped, UtilityRule};
use crate::tokens::TokenList;
use stylecopy_common::{escape_whitespace, parse_number, Declarations};

const OPACITY_STEPS: &[i64] = &[0, 5, 10, 20, 25, 30, 40, 50, 60, 70, 75, 80, 90, 95, 100];

// Checked in table order; the first entry contained in the shadow wins
const SHADOWS: &[(&str, &str)] = &[
    ("rgba(0, 0, 0, 0.05)", "shadow-sm"),
    ("rgba(0, 0, 0, 0.1)", "shadow"),
    ("rgba(0, 0, 0, 0.15)", "shadow-md"),
    ("rgba(0, 0, 0, 0.25)", "shadow-lg"),
    ("rgba(0, 0, 0, 0.3)", "shadow-xl"),
];

const CURSORS: &[(&str, &str)] = &[
    ("pointer", "cursor-pointer"),
    ("not-allowed", "cursor-not-allowed"),
    ("default", "cursor-default"),
    ("move", "cursor-move"),
    ("text", "cursor-text"),
    ("wait", "cursor-wait"),
    ("crosshair", "cursor-crosshair"),
    ("grab", "cursor-grab"),
    ("grabbing", "cursor-grabbing"),
];

const Z_INDEX: &[(&str, &str)] = &[
    ("10", "z-10"),
    ("20", "z-20"),
    ("30", "z-30"),
    ("40", "z-40"),
    ("50", "z-50"),
];

const POINTER_EVENTS: &[(&str, &str)] = &[
    ("none", "pointer-events-none"),
    ("auto", "pointer-events-auto"),
];

pub struct OpacityRule;

impl UtilityRule for OpacityRule {
    fn name(&self) -> &'static str {
        "opacity"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["opacity"]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        let Some(opacity) = declarations.get("opacity") else {
            return;
        };
        let number = parse_number(opacity);
        if number == Some(1.0) {
            return;
        }
        let percent = number.map(|n| (n * 100.0).round() as i64);
        match percent {
            Some(percent) if OPACITY_STEPS.contains(&percent) => {
                tokens.push(format!("opacity-{}", percent))
            }
            _ => tokens.push(arbitrary_value("opacity", opacity)),
        }
    }
}

pub struct ShadowRule;

impl UtilityRule for ShadowRule {
    fn name(&self) -> &'static str {
        "box-shadow"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["box-shadow"]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        let Some(shadow) = declarations.get("box-shadow") else {
            return;
        };
        match SHADOWS.iter().find(|(alpha, _)| shadow.contains(alpha)) {
            Some((_, token)) => tokens.push(*token),
            None => tokens.push(arbitrary_value("shadow", shadow)),
        }
    }
}

pub struct CursorRule;

impl UtilityRule for CursorRule {
    fn name(&self) -> &'static str {
        "cursor"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["cursor"]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        let Some(cursor) = declarations.get("cursor") else {
            return;
        };
        if cursor == "auto" {
            return;
        }
        match lookup(CURSORS, cursor) {
            Some(token) => tokens.push(token),
            None => tokens.push(arbitrary_value("cursor", cursor)),
        }
    }
}

pub struct ZIndexRule;

impl UtilityRule for ZIndexRule {
    fn name(&self) -> &'static str {
        "z-index"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["z-index"]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        let Some(z_index) = declarations.get("z-index") else {
            return;
        };
        if z_index == "auto" || z_index == "0" {
            return;
        }
        match lookup(Z_INDEX, z_index) {
            Some(token) => tokens.push(token),
            None => tokens.push(arbitrary_value("z", z_index)),
        }
    }
}

pub struct TransformRule;

impl UtilityRule for TransformRule {
    fn name(&self) -> &'static str {
        "transform"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["transform"]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        if let Some(transform) = declarations.get("transform") {
            tokens.push(format!("[transform:{}]", escape_whitespace(transform)));
        }
    }
}

pub struct PointerEventsRule;

impl UtilityRule for PointerEventsRule {
    fn name(&self) -> &'static str {
        "pointer-events"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["pointer-events"]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        push_mapped(declarations, tokens, "pointer-events", POINTER_EVENTS);
    }
}
