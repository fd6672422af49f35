use super::{arbitrary_property, arbitrary_value, lookup, UtilityRule};
use crate::palette::color_token;
use crate::tokens::TokenList;
use once_cell::sync::Lazy;
use regex::Regex;
use stylecopy_common::{parse_px, split_components, Declarations};

const RADIUS: &[(&str, &str)] = &[
    ("0px", "rounded-none"),
    ("2px", "rounded-sm"),
    ("4px", "rounded"),
    ("6px", "rounded-md"),
    ("8px", "rounded-lg"),
    ("12px", "rounded-xl"),
    ("16px", "rounded-2xl"),
    ("24px", "rounded-3xl"),
    ("9999px", "rounded-full"),
    ("50%", "rounded-full"),
];

/// Pixel radii at or above this are treated as fully rounded
const FULL_RADIUS_PX: f64 = 50.0;

const BORDER_WIDTHS: &[(&str, &str)] = &[("1px", ""), ("2px", "-2"), ("4px", "-4"), ("8px", "-8")];

const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "none", "hidden"];

static BORDER_SHORTHAND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?px)\s+(solid|dashed|dotted|double|none|hidden)\s+(.+)$")
        .expect("valid border pattern")
});

pub struct BorderRadiusRule;

impl UtilityRule for BorderRadiusRule {
    fn name(&self) -> &'static str {
        "border-radius"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["border-radius"]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        let Some(radius) = declarations.get("border-radius") else {
            return;
        };
        if parse_px(radius).is_some_and(|px| px >= FULL_RADIUS_PX) {
            tokens.push("rounded-full");
            return;
        }
        match lookup(RADIUS, radius) {
            Some(token) => tokens.push(token),
            None => tokens.push(arbitrary_value("rounded", radius)),
        }
    }
}

/// Border shorthands (all sides and per side) and the width, style and
/// color longhands
pub struct BorderRule;

impl BorderRule {
    const SIDES: [(&'static str, &'static str); 5] = [
        ("border", "border"),
        ("border-top", "border-t"),
        ("border-right", "border-r"),
        ("border-bottom", "border-b"),
        ("border-left", "border-l"),
    ];

    fn shorthand(prefix: &str, value: &str, tokens: &mut TokenList) {
        let Some(captures) = BORDER_SHORTHAND.captures(value.trim()) else {
            tokens.push(prefix);
            return;
        };
        let width = &captures[1];
        let style = &captures[2];
        let color = captures[3].trim();

        if parse_px(width) == Some(0.0) || style == "none" || style == "hidden" {
            tokens.push(format!("{}-0", prefix));
            return;
        }
        tokens.push(width_token(prefix, width));
        if style != "solid" {
            tokens.push(format!("border-{}", style));
        }
        tokens.push(color_token(prefix, color));
    }
}

fn width_token(prefix: &str, width: &str) -> String {
    match lookup(BORDER_WIDTHS, width) {
        Some(suffix) => format!("{}{}", prefix, suffix),
        None if parse_px(width) == Some(0.0) => format!("{}-0", prefix),
        None => arbitrary_value(prefix, width),
    }
}

impl UtilityRule for BorderRule {
    fn name(&self) -> &'static str {
        "border"
    }

    fn properties(&self) -> &'static [&'static str] {
        &[
            "border",
            "border-top",
            "border-right",
            "border-bottom",
            "border-left",
            "border-width",
            "border-style",
            "border-color",
        ]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        for (property, prefix) in Self::SIDES {
            if let Some(value) = declarations.get(property) {
                Self::shorthand(prefix, value, tokens);
            }
        }

        if let Some(width) = declarations.get("border-width") {
            match split_components(width).as_slice() {
                [single] => tokens.push(width_token("border", single)),
                _ => tokens.push(arbitrary_property("border-width", width)),
            }
        }

        if let Some(style) = declarations.get("border-style") {
            if BORDER_STYLES.contains(&style) {
                tokens.push(format!("border-{}", style));
            } else {
                tokens.push(arbitrary_property("border-style", style));
            }
        }

        if let Some(color) = declarations.get("border-color") {
            match split_components(color).as_slice() {
                [single] => tokens.push(color_token("border", single)),
                _ => tokens.push(arbitrary_property("border-color", color)),
            }
        }
    }
}
