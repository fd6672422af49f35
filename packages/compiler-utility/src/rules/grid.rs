use super::{arbitrary_property, arbitrary_value, push_mapped, UtilityRule};
use crate::tokens::TokenList;
use once_cell::sync::Lazy;
use regex::Regex;
use stylecopy_common::Declarations;

static EQUAL_TRACKS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^repeat\((\d+),\s*minmax\(0(?:px)?,\s*1fr\)\)$").expect("valid track pattern")
});

static SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^span (\d+)(?: / span \d+)?$").expect("valid span pattern"));

const JUSTIFY_ITEMS: &[(&str, &str)] = &[
    ("start", "justify-items-start"),
    ("end", "justify-items-end"),
    ("center", "justify-items-center"),
    ("stretch", "justify-items-stretch"),
];

const PLACE_ITEMS: &[(&str, &str)] = &[
    ("start", "place-items-start"),
    ("end", "place-items-end"),
    ("center", "place-items-center"),
    ("stretch", "place-items-stretch"),
];

const PLACE_CONTENT: &[(&str, &str)] = &[
    ("start", "place-content-start"),
    ("end", "place-content-end"),
    ("center", "place-content-center"),
    ("stretch", "place-content-stretch"),
    ("space-between", "place-content-between"),
    ("space-around", "place-content-around"),
    ("space-evenly", "place-content-evenly"),
];

pub struct GridRule;

impl GridRule {
    fn template(prefix: &str, value: &str) -> String {
        match EQUAL_TRACKS.captures(value.trim()) {
            Some(captures) => format!("{}-{}", prefix, &captures[1]),
            None => arbitrary_value(prefix, value),
        }
    }

    /// Placement such as `span 2 / span 2`, `1 / -1` or `auto / auto`
    fn placement(prefix: &str, value: &str) -> String {
        let value = value.trim();
        match value {
            "auto" | "auto / auto" => format!("{}-auto", prefix),
            "1 / -1" => format!("{}-span-full", prefix),
            _ => match SPAN.captures(value) {
                Some(captures) => format!("{}-span-{}", prefix, &captures[1]),
                None => arbitrary_value(prefix, value),
            },
        }
    }
}

impl UtilityRule for GridRule {
    fn name(&self) -> &'static str {
        "grid"
    }

    fn properties(&self) -> &'static [&'static str] {
        &[
            "grid-template-columns",
            "grid-template-rows",
            "grid-template-areas",
            "grid-column",
            "grid-row",
            "grid-area",
            "justify-items",
            "place-items",
            "place-content",
        ]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        if let Some(columns) = declarations.get("grid-template-columns") {
            tokens.push(Self::template("grid-cols", columns));
        }
        if let Some(rows) = declarations.get("grid-template-rows") {
            tokens.push(Self::template("grid-rows", rows));
        }
        if let Some(areas) = declarations.get("grid-template-areas") {
            tokens.push(arbitrary_property("grid-template-areas", areas));
        }
        if let Some(column) = declarations.get("grid-column") {
            tokens.push(Self::placement("col", column));
        }
        if let Some(row) = declarations.get("grid-row") {
            tokens.push(Self::placement("row", row));
        }
        if let Some(area) = declarations.get("grid-area") {
            tokens.push(arbitrary_property("grid-area", area));
        }

        push_mapped(declarations, tokens, "justify-items", JUSTIFY_ITEMS);
        push_mapped(declarations, tokens, "place-items", PLACE_ITEMS);
        push_mapped(declarations, tokens, "place-content", PLACE_CONTENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(declarations: &[(&str, &str)]) -> Vec<String> {
        let declarations: Declarations = declarations.iter().copied().collect();
        let mut tokens = TokenList::new();
        GridRule.apply(&declarations, &mut tokens);
        tokens.into_vec()
    }

    #[test]
    fn test_templates() {
        assert_eq!(
            run(&[("grid-template-columns", "repeat(3, minmax(0, 1fr))")]),
            vec!["grid-cols-3"]
        );
        assert_eq!(
            run(&[("grid-template-rows", "100px 200px")]),
            vec!["grid-rows-[100px_200px]"]
        );
    }

    #[test]
    fn test_placement() {
        assert_eq!(
            run(&[("grid-column", "span 2 / span 2"), ("grid-row", "1 / -1")]),
            vec!["col-span-2", "row-span-full"]
        );
        assert_eq!(
            run(&[("grid-column", "auto / auto"), ("grid-row", "auto / auto")]),
            vec!["col-auto", "row-auto"]
        );
        assert_eq!(run(&[("grid-column", "2 / 4")]), vec!["col-[2_/_4]"]);
    }

    #[test]
    fn test_default_area_still_yields_a_token() {
        assert_eq!(
            run(&[("grid-area", "auto / auto / auto / auto")]),
            vec!["[grid-area:auto_/_auto_/_auto_/_auto]"]
        );
    }

    #[test]
    fn test_item_alignment() {
        assert_eq!(
            run(&[("justify-items", "center"), ("place-content", "space-between")]),
            vec!["justify-items-center", "place-content-between"]
        );
    }
}
