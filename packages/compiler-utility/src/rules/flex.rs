use super::{arbitrary_property, arbitrary_value, lookup, push_mapped, UtilityRule};
use crate::rules::sizing::named_size;
use crate::spacing::quantize_spacing;
use crate::tokens::TokenList;
use stylecopy_common::{format_number, parse_number, split_components, Declarations};

const FLEX_DIRECTION: &[(&str, &str)] = &[
    ("row", "flex-row"),
    ("column", "flex-col"),
    ("row-reverse", "flex-row-reverse"),
    ("column-reverse", "flex-col-reverse"),
];

const FLEX_WRAP: &[(&str, &str)] = &[
    ("wrap", "flex-wrap"),
    ("nowrap", "flex-nowrap"),
    ("wrap-reverse", "flex-wrap-reverse"),
];

const JUSTIFY_CONTENT: &[(&str, &str)] = &[
    ("flex-start", "justify-start"),
    ("flex-end", "justify-end"),
    ("center", "justify-center"),
    ("space-between", "justify-between"),
    ("space-around", "justify-around"),
    ("space-evenly", "justify-evenly"),
];

const ALIGN_ITEMS: &[(&str, &str)] = &[
    ("flex-start", "items-start"),
    ("flex-end", "items-end"),
    ("center", "items-center"),
    ("stretch", "items-stretch"),
    ("baseline", "items-baseline"),
];

const ALIGN_CONTENT: &[(&str, &str)] = &[
    ("flex-start", "content-start"),
    ("flex-end", "content-end"),
    ("center", "content-center"),
    ("space-between", "content-between"),
    ("space-around", "content-around"),
    ("space-evenly", "content-evenly"),
    ("stretch", "content-stretch"),
];

const ALIGN_SELF: &[(&str, &str)] = &[
    ("auto", "self-auto"),
    ("start", "self-start"),
    ("flex-start", "self-start"),
    ("end", "self-end"),
    ("flex-end", "self-end"),
    ("center", "self-center"),
    ("stretch", "self-stretch"),
    ("baseline", "self-baseline"),
];

const FLEX_SHORTHAND: &[(&str, &str)] = &[
    ("1 1 0%", "flex-1"),
    ("1 1 auto", "flex-auto"),
    ("0 1 auto", "flex-initial"),
    ("0 0 auto", "flex-none"),
];

/// Flex container: direction, wrapping and alignment
pub struct FlexRule;

impl UtilityRule for FlexRule {
    fn name(&self) -> &'static str {
        "flex-container"
    }

    fn properties(&self) -> &'static [&'static str] {
        &[
            "flex-direction",
            "flex-wrap",
            "flex-flow",
            "justify-content",
            "align-items",
            "align-content",
        ]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        push_mapped(declarations, tokens, "flex-direction", FLEX_DIRECTION);
        push_mapped(declarations, tokens, "flex-wrap", FLEX_WRAP);

        if let Some(flow) = declarations.get("flex-flow") {
            let mapped: Option<Vec<&str>> = split_components(flow)
                .into_iter()
                .map(|part| lookup(FLEX_DIRECTION, part).or_else(|| lookup(FLEX_WRAP, part)))
                .collect();
            match mapped {
                Some(parts) if !parts.is_empty() => tokens.extend(parts),
                _ => tokens.push(arbitrary_property("flex-flow", flow)),
            }
        }

        push_mapped(declarations, tokens, "justify-content", JUSTIFY_CONTENT);
        push_mapped(declarations, tokens, "align-items", ALIGN_ITEMS);
        push_mapped(declarations, tokens, "align-content", ALIGN_CONTENT);
    }
}

/// Flex item: `flex` shorthand, grow/shrink/basis, self-alignment and order
pub struct FlexItemRule;

impl UtilityRule for FlexItemRule {
    fn name(&self) -> &'static str {
        "flex-item"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["flex", "flex-grow", "flex-shrink", "flex-basis", "align-self", "order"]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        if let Some(flex) = declarations.get("flex") {
            match lookup(FLEX_SHORTHAND, flex) {
                Some(token) => tokens.push(token),
                None => tokens.push(arbitrary_value("flex", flex)),
            }
        }

        if let Some(grow) = declarations.get("flex-grow") {
            match parse_number(grow) {
                Some(n) if n == 0.0 => {}
                Some(n) if n == 1.0 => tokens.push("grow"),
                Some(n) => tokens.push(format!("grow-[{}]", format_number(n))),
                None => tokens.push(arbitrary_value("grow", grow)),
            }
        }

        if let Some(shrink) = declarations.get("flex-shrink") {
            match parse_number(shrink) {
                Some(n) if n == 1.0 => {}
                Some(n) if n == 0.0 => tokens.push("shrink-0"),
                Some(n) => tokens.push(format!("shrink-[{}]", format_number(n))),
                None => tokens.push(arbitrary_value("shrink", shrink)),
            }
        }

        if let Some(basis) = declarations.get("flex-basis") {
            match named_size("basis", basis) {
                Some(token) => tokens.push(token),
                None => tokens.push(format!("basis-{}", quantize_spacing(basis))),
            }
        }

        push_mapped(declarations, tokens, "align-self", ALIGN_SELF);

        if let Some(order) = declarations.get("order") {
            let order = order.trim();
            match order.parse::<i64>() {
                Ok(0) => {}
                Ok(n @ 1..=12) => tokens.push(format!("order-{}", n)),
                _ => tokens.push(arbitrary_value("order", order)),
            }
        }
    }
}

/// `gap`, or the `row-gap`/`column-gap` longhands when no shorthand survived
pub struct GapRule;

impl UtilityRule for GapRule {
    fn name(&self) -> &'static str {
        "gap"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["gap", "row-gap", "column-gap"]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        if let Some(gap) = declarations.get("gap") {
            let parts = split_components(gap);
            match parts.as_slice() {
                [single] => tokens.push(format!("gap-{}", quantize_spacing(single))),
                [row, column] if row == column => {
                    tokens.push(format!("gap-{}", quantize_spacing(row)))
                }
                [row, column] => {
                    tokens.push(format!("gap-y-{}", quantize_spacing(row)));
                    tokens.push(format!("gap-x-{}", quantize_spacing(column)));
                }
                _ => tokens.push(arbitrary_property("gap", gap)),
            }
            return;
        }

        if let Some(row) = declarations.get("row-gap") {
            tokens.push(format!("gap-y-{}", quantize_spacing(row)));
        }
        if let Some(column) = declarations.get("column-gap") {
            tokens.push(format!("gap-x-{}", quantize_spacing(column)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rule: &dyn UtilityRule, declarations: &[(&str, &str)]) -> Vec<String> {
        let declarations: Declarations = declarations.iter().copied().collect();
        let mut tokens = TokenList::new();
        rule.apply(&declarations, &mut tokens);
        tokens.into_vec()
    }

    #[test]
    fn test_container_alignment() {
        assert_eq!(
            run(
                &FlexRule,
                &[
                    ("flex-direction", "column"),
                    ("justify-content", "space-between"),
                    ("align-items", "center"),
                ]
            ),
            vec!["flex-col", "justify-between", "items-center"]
        );
    }

    #[test]
    fn test_flex_flow_dedupes_with_longhands() {
        assert_eq!(
            run(
                &FlexRule,
                &[("flex-direction", "column"), ("flex-wrap", "wrap"), ("flex-flow", "column wrap")]
            ),
            vec!["flex-col", "flex-wrap"]
        );
    }

    #[test]
    fn test_unmapped_alignment_is_arbitrary() {
        assert_eq!(
            run(&FlexRule, &[("justify-content", "start")]),
            vec!["[justify-content:start]"]
        );
    }

    #[test]
    fn test_grow_and_shrink_edges() {
        assert_eq!(run(&FlexItemRule, &[("flex-grow", "0")]), Vec::<String>::new());
        assert_eq!(run(&FlexItemRule, &[("flex-grow", "1")]), vec!["grow"]);
        assert_eq!(run(&FlexItemRule, &[("flex-grow", "2")]), vec!["grow-[2]"]);
        assert_eq!(run(&FlexItemRule, &[("flex-shrink", "1")]), Vec::<String>::new());
        assert_eq!(run(&FlexItemRule, &[("flex-shrink", "0")]), vec!["shrink-0"]);
        assert_eq!(run(&FlexItemRule, &[("flex-shrink", "0.5")]), vec!["shrink-[0.5]"]);
    }

    #[test]
    fn test_order() {
        assert_eq!(run(&FlexItemRule, &[("order", "0")]), Vec::<String>::new());
        assert_eq!(run(&FlexItemRule, &[("order", "3")]), vec!["order-3"]);
        assert_eq!(run(&FlexItemRule, &[("order", "-1")]), vec!["order-[-1]"]);
        assert_eq!(run(&FlexItemRule, &[("order", "99")]), vec!["order-[99]"]);
    }

    #[test]
    fn test_flex_shorthand_and_basis() {
        assert_eq!(
            run(&FlexItemRule, &[("flex", "1 1 0%"), ("flex-basis", "0%")]),
            vec!["flex-1", "basis-[0%]"]
        );
        assert_eq!(run(&FlexItemRule, &[("flex-basis", "50%")]), vec!["basis-1/2"]);
        assert_eq!(run(&FlexItemRule, &[("flex", "2 1 10px")]), vec!["flex-[2_1_10px]"]);
    }

    #[test]
    fn test_gap() {
        assert_eq!(run(&GapRule, &[("gap", "8px")]), vec!["gap-2"]);
        assert_eq!(run(&GapRule, &[("gap", "8px 8px")]), vec!["gap-2"]);
        assert_eq!(run(&GapRule, &[("gap", "8px 16px")]), vec!["gap-y-2", "gap-x-4"]);
        assert_eq!(
            run(&GapRule, &[("gap", "8px"), ("row-gap", "8px"), ("column-gap", "8px")]),
            vec!["gap-2"]
        );
        assert_eq!(run(&GapRule, &[("column-gap", "12px")]), vec!["gap-x-3"]);
    }
}
