//! Default values assumed per tag, used only to suppress redundant output

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Values that never carry information on their own
pub const NO_OP_VALUES: &[&str] = &[
    "none",
    "0px",
    "auto",
    "initial",
    "inherit",
    "unset",
    "revert",
    "rgba(0, 0, 0, 0)",
    "transparent",
    "currentcolor",
    "normal",
];

/// Case-insensitive membership in [`NO_OP_VALUES`]
pub fn is_no_op(value: &str) -> bool {
    NO_OP_VALUES
        .iter()
        .any(|no_op| no_op.eq_ignore_ascii_case(value))
}

/// Immutable tag → {property: default value} table
#[derive(Debug, Clone)]
pub struct TagBaseline {
    tags: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl TagBaseline {
    fn from_table(table: &[(&'static str, &[(&'static str, &'static str)])]) -> Self {
        let tags = table
            .iter()
            .map(|(tag, defaults)| (*tag, defaults.iter().copied().collect()))
            .collect();
        Self { tags }
    }

    /// Baseline value of `property` on `tag`, if the tag defines one
    pub fn get(&self, tag: &str, property: &str) -> Option<&'static str> {
        self.tags.get(tag).and_then(|defaults| defaults.get(property)).copied()
    }

    /// True when `value` is exactly the tag's default for `property`
    pub fn is_baseline(&self, tag: &str, property: &str, value: &str) -> bool {
        self.get(tag, property) == Some(value)
    }
}

pub static TAG_BASELINES: Lazy<TagBaseline> = Lazy::new(|| {
    TagBaseline::from_table(&[
        ("div", &[("display", "block")]),
        ("span", &[("display", "inline")]),
        (
            "p",
            &[("display", "block"), ("margin-top", "16px"), ("margin-bottom", "16px")],
        ),
        (
            "ul",
            &[("display", "block"), ("list-style", "disc"), ("padding-left", "40px")],
        ),
        (
            "ol",
            &[("display", "block"), ("list-style", "decimal"), ("padding-left", "40px")],
        ),
        ("li", &[("display", "list-item")]),
        (
            "a",
            &[
                ("color", "rgb(0, 0, 238)"),
                ("text-decoration", "underline"),
                ("cursor", "pointer"),
            ],
        ),
        ("button", &[("display", "inline-block"), ("cursor", "pointer")]),
        ("input", &[("display", "inline-block")]),
        (
            "h1",
            &[
                ("display", "block"),
                ("font-size", "32px"),
                ("font-weight", "700"),
                ("margin-top", "21.44px"),
                ("margin-bottom", "21.44px"),
            ],
        ),
        (
            "h2",
            &[("display", "block"), ("font-size", "24px"), ("font-weight", "700")],
        ),
        (
            "h3",
            &[("display", "block"), ("font-size", "18.72px"), ("font-weight", "700")],
        ),
        (
            "h4",
            &[("display", "block"), ("font-size", "16px"), ("font-weight", "700")],
        ),
        ("img", &[("display", "inline-block")]),
        ("table", &[("display", "table"), ("border-collapse", "separate")]),
        ("thead", &[("display", "table-header-group")]),
        ("tbody", &[("display", "table-row-group")]),
        ("tr", &[("display", "table-row")]),
        (
            "td",
            &[("display", "table-cell"), ("vertical-align", "inherit")],
        ),
        ("th", &[("display", "table-cell"), ("font-weight", "700")]),
    ])
});
