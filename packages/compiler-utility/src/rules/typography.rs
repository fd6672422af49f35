use super::{arbitrary_property, arbitrary_value, lookup, push_mapped, UtilityRule};
use crate::tokens::TokenList;
use stylecopy_common::{format_number, parse_number, Declarations};

const FONT_SIZE: &[(&str, &str)] = &[
    ("10px", "text-[10px]"),
    ("11px", "text-[11px]"),
    ("12px", "text-xs"),
    ("13px", "text-[13px]"),
    ("14px", "text-sm"),
    ("15px", "text-[15px]"),
    ("16px", "text-base"),
    ("18px", "text-lg"),
    ("20px", "text-xl"),
    ("24px", "text-2xl"),
    ("30px", "text-3xl"),
    ("36px", "text-4xl"),
    ("48px", "text-5xl"),
    ("60px", "text-6xl"),
    ("72px", "text-7xl"),
    ("96px", "text-8xl"),
];

const FONT_WEIGHT: &[(&str, &str)] = &[
    ("100", "font-thin"),
    ("200", "font-extralight"),
    ("300", "font-light"),
    ("400", "font-normal"),
    ("500", "font-medium"),
    ("600", "font-semibold"),
    ("700", "font-bold"),
    ("800", "font-extrabold"),
    ("900", "font-black"),
];

const FONT_STYLE: &[(&str, &str)] = &[("italic", "italic"), ("normal", "not-italic")];

// Keys are unitless multipliers rounded to three decimals
const LINE_HEIGHT: &[(&str, &str)] = &[
    ("1", "leading-none"),
    ("1.25", "leading-tight"),
    ("1.375", "leading-snug"),
    ("1.5", "leading-normal"),
    ("1.625", "leading-relaxed"),
    ("2", "leading-loose"),
];

const LETTER_SPACING: &[(&str, &str)] = &[
    ("-0.05em", "tracking-tighter"),
    ("-0.025em", "tracking-tight"),
    ("0em", "tracking-normal"),
    ("0.025em", "tracking-wide"),
    ("0.05em", "tracking-wider"),
    ("0.1em", "tracking-widest"),
];

const TEXT_ALIGN: &[(&str, &str)] = &[
    ("left", "text-left"),
    ("center", "text-center"),
    ("right", "text-right"),
    ("justify", "text-justify"),
    ("start", "text-start"),
    ("end", "text-end"),
];

const TEXT_TRANSFORM: &[(&str, &str)] = &[
    ("uppercase", "uppercase"),
    ("lowercase", "lowercase"),
    ("capitalize", "capitalize"),
    ("none", "normal-case"),
];

const TEXT_OVERFLOW: &[(&str, &str)] = &[("ellipsis", "text-ellipsis"), ("clip", "text-clip")];

const WHITE_SPACE: &[&str] = &["normal", "nowrap", "pre", "pre-line", "pre-wrap", "break-spaces"];

const VERTICAL_ALIGN: &[&str] = &[
    "baseline",
    "top",
    "middle",
    "bottom",
    "text-top",
    "text-bottom",
    "sub",
    "super",
];

pub struct TypographyRule;

impl TypographyRule {
    fn line_height(value: &str) -> String {
        let key = parse_number(value).map(|n| format_number((n * 1000.0).round() / 1000.0));
        key.and_then(|key| lookup(LINE_HEIGHT, &key))
            .map(str::to_string)
            .unwrap_or_else(|| arbitrary_value("leading", value))
    }

    fn text_decoration(value: &str) -> String {
        let value = value.trim();
        if value.starts_with("none") {
            "no-underline".to_string()
        } else if value.contains("underline") {
            "underline".to_string()
        } else if value.contains("line-through") {
            "line-through".to_string()
        } else if value.contains("overline") {
            "overline".to_string()
        } else {
            arbitrary_property("text-decoration", value)
        }
    }
}

impl UtilityRule for TypographyRule {
    fn name(&self) -> &'static str {
        "typography"
    }

    fn properties(&self) -> &'static [&'static str] {
        &[
            "font-size",
            "font-weight",
            "font-style",
            "line-height",
            "letter-spacing",
            "text-align",
            "text-decoration",
            "text-transform",
            "text-overflow",
            "white-space",
            "vertical-align",
        ]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        if let Some(size) = declarations.get("font-size") {
            match lookup(FONT_SIZE, size) {
                Some(token) => tokens.push(token),
                None => tokens.push(arbitrary_value("text", size)),
            }
        }
        if let Some(weight) = declarations.get("font-weight") {
            match lookup(FONT_WEIGHT, weight) {
                Some(token) => tokens.push(token),
                None => tokens.push(arbitrary_value("font", weight)),
            }
        }
        push_mapped(declarations, tokens, "font-style", FONT_STYLE);

        if let Some(line_height) = declarations.get("line-height") {
            tokens.push(Self::line_height(line_height));
        }
        if let Some(spacing) = declarations.get("letter-spacing") {
            match lookup(LETTER_SPACING, spacing) {
                Some(token) => tokens.push(token),
                None => tokens.push(arbitrary_value("tracking", spacing)),
            }
        }

        push_mapped(declarations, tokens, "text-align", TEXT_ALIGN);
        if let Some(decoration) = declarations.get("text-decoration") {
            tokens.push(Self::text_decoration(decoration));
        }
        push_mapped(declarations, tokens, "text-transform", TEXT_TRANSFORM);
        push_mapped(declarations, tokens, "text-overflow", TEXT_OVERFLOW);

        if let Some(white_space) = declarations.get("white-space") {
            if WHITE_SPACE.contains(&white_space) {
                tokens.push(format!("whitespace-{}", white_space));
            } else {
                tokens.push(arbitrary_property("white-space", white_space));
            }
        }
        if let Some(align) = declarations.get("vertical-align") {
            if VERTICAL_ALIGN.contains(&align) {
                tokens.push(format!("align-{}", align));
            } else {
                tokens.push(arbitrary_value("align", align));
            }
        }
    }
}
