use super::{arbitrary_property, lookup, push_mapped, UtilityRule};
use crate::spacing::quantize_spacing;
use crate::tokens::TokenList;
use stylecopy_common::{split_components, Declarations};

const LIST_TYPE: &[(&str, &str)] = &[
    ("none", "list-none"),
    ("disc", "list-disc"),
    ("decimal", "list-decimal"),
];

const LIST_POSITION: &[(&str, &str)] = &[("inside", "list-inside"), ("outside", "list-outside")];

const TABLE_LAYOUT: &[(&str, &str)] = &[("auto", "table-auto"), ("fixed", "table-fixed")];

const BORDER_COLLAPSE: &[(&str, &str)] = &[
    ("collapse", "border-collapse"),
    ("separate", "border-separate"),
];

/// List markers and table layout
pub struct ListTableRule;

impl ListTableRule {
    /// `list-style` resolves to `<type> <position> <image>`
    fn list_style(value: &str, tokens: &mut TokenList) {
        let parts = split_components(value);
        let marker = parts.first().and_then(|part| lookup(LIST_TYPE, part));
        let position = parts.iter().find_map(|part| lookup(LIST_POSITION, part));
        let has_image = parts.iter().any(|part| part.starts_with("url("));

        match marker {
            Some(marker) if !has_image => {
                tokens.push(marker);
                if position == Some("list-inside") {
                    tokens.push("list-inside");
                }
            }
            _ => tokens.push(arbitrary_property("list-style", value)),
        }
    }
}

impl UtilityRule for ListTableRule {
    fn name(&self) -> &'static str {
        "list-table"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["list-style", "table-layout", "border-collapse", "border-spacing"]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        if let Some(list_style) = declarations.get("list-style") {
            Self::list_style(list_style, tokens);
        }
        push_mapped(declarations, tokens, "table-layout", TABLE_LAYOUT);
        push_mapped(declarations, tokens, "border-collapse", BORDER_COLLAPSE);

        if let Some(spacing) = declarations.get("border-spacing") {
            match split_components(spacing).as_slice() {
                [both] => tokens.push(format!("border-spacing-{}", quantize_spacing(both))),
                [x, y] if x == y => {
                    tokens.push(format!("border-spacing-{}", quantize_spacing(x)))
                }
                [x, y] => {
                    tokens.push(format!("border-spacing-x-{}", quantize_spacing(x)));
                    tokens.push(format!("border-spacing-y-{}", quantize_spacing(y)));
                }
                _ => tokens.push(arbitrary_property("border-spacing", spacing)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(declarations: &[(&str, &str)]) -> Vec<String> {
        let declarations: Declarations = declarations.iter().copied().collect();
        let mut tokens = TokenList::new();
        ListTableRule.apply(&declarations, &mut tokens);
        tokens.into_vec()
    }

    #[test]
    fn test_list_style() {
        assert_eq!(run(&[("list-style", "none outside none")]), vec!["list-none"]);
        assert_eq!(
            run(&[("list-style", "decimal inside none")]),
            vec!["list-decimal", "list-inside"]
        );
        assert_eq!(
            run(&[("list-style", "square outside none")]),
            vec!["[list-style:square_outside_none]"]
        );
    }

    #[test]
    fn test_table_properties() {
        assert_eq!(
            run(&[
                ("table-layout", "fixed"),
                ("border-collapse", "collapse"),
                ("border-spacing", "4px 8px"),
            ]),
            vec!["table-fixed", "border-collapse", "border-spacing-x-1", "border-spacing-y-2"]
        );
    }
}
