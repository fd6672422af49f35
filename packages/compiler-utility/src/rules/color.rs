use super::{arbitrary_value, push_mapped, UtilityRule};
use crate::palette::color_token;
use crate::tokens::TokenList;
use stylecopy_common::Declarations;

const BACKGROUND_SIZE: &[(&str, &str)] = &[("cover", "bg-cover"), ("contain", "bg-contain"), ("auto", "bg-auto")];

const BACKGROUND_REPEAT: &[(&str, &str)] = &[
    ("repeat", "bg-repeat"),
    ("no-repeat", "bg-no-repeat"),
    ("repeat-x", "bg-repeat-x"),
    ("repeat-y", "bg-repeat-y"),
    ("round", "bg-repeat-round"),
    ("space", "bg-repeat-space"),
];

const BACKGROUND_POSITION: &[(&str, &str)] = &[
    ("50% 50%", "bg-center"),
    ("center", "bg-center"),
    ("50% 0%", "bg-top"),
    ("50% 100%", "bg-bottom"),
    ("0% 50%", "bg-left"),
    ("100% 50%", "bg-right"),
    ("0% 0%", "bg-left-top"),
    ("100% 0%", "bg-right-top"),
    ("0% 100%", "bg-left-bottom"),
    ("100% 100%", "bg-right-bottom"),
];

/// Background and text color
pub struct ColorRule;

impl UtilityRule for ColorRule {
    fn name(&self) -> &'static str {
        "colors"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["background-color", "color"]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        if let Some(background) = declarations.get("background-color") {
            tokens.push(color_token("bg", background));
        }
        if let Some(color) = declarations.get("color") {
            tokens.push(color_token("text", color));
        }
    }
}

/// Background image, size, position and repeat
pub struct BackgroundRule;

impl UtilityRule for BackgroundRule {
    fn name(&self) -> &'static str {
        "background"
    }

    fn properties(&self) -> &'static [&'static str] {
        &[
            "background-image",
            "background-size",
            "background-position",
            "background-repeat",
        ]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        if let Some(image) = declarations.get("background-image") {
            tokens.push(arbitrary_value("bg", image));
        }
        push_mapped(declarations, tokens, "background-size", BACKGROUND_SIZE);
        push_mapped(declarations, tokens, "background-position", BACKGROUND_POSITION);
        push_mapped(declarations, tokens, "background-repeat", BACKGROUND_REPEAT);
    }
}
