use super::{arbitrary_property, UtilityRule};
use crate::spacing::quantize_spacing;
use crate::tokens::TokenList;
use stylecopy_common::{split_components, Declarations};

/// Per-side box spacing (`padding` or `margin`) consolidated into as few
/// tokens as possible
pub struct SideRule {
    name: &'static str,
    prefix: &'static str,
    shorthand: &'static str,
    properties: &'static [&'static str],
}

impl SideRule {
    pub fn padding() -> Self {
        Self {
            name: "padding",
            prefix: "p",
            shorthand: "padding",
            properties: &["padding", "padding-top", "padding-right", "padding-bottom", "padding-left"],
        }
    }

    pub fn margin() -> Self {
        Self {
            name: "margin",
            prefix: "m",
            shorthand: "margin",
            properties: &["margin", "margin-top", "margin-right", "margin-bottom", "margin-left"],
        }
    }

    fn longhands(&self) -> &'static [&'static str] {
        &self.properties[1..]
    }

    /// Scale values for top, right, bottom, left. `None` when the shorthand
    /// has a shape that cannot be split into sides.
    fn sides(&self, declarations: &Declarations) -> Option<[Option<String>; 4]> {
        let from_longhands = self
            .longhands()
            .iter()
            .map(|property| declarations.get(property).map(quantize_spacing))
            .collect::<Vec<_>>();
        if from_longhands.iter().any(Option::is_some) {
            return Some([
                from_longhands[0].clone(),
                from_longhands[1].clone(),
                from_longhands[2].clone(),
                from_longhands[3].clone(),
            ]);
        }

        let shorthand = declarations.get(self.shorthand)?;
        let (top, right, bottom, left) = match split_components(shorthand).as_slice() {
            [all] => (*all, *all, *all, *all),
            [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
            [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
            [top, right, bottom, left] => (*top, *right, *bottom, *left),
            _ => return None,
        };
        // Zero sides are dropped, as the same longhand would have been
        let side = |value: &str| Some(quantize_spacing(value)).filter(|v| v != "0");
        Some([side(top), side(right), side(bottom), side(left)])
    }
}

impl UtilityRule for SideRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn properties(&self) -> &'static [&'static str] {
        self.properties
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        if !self.properties.iter().any(|property| declarations.contains(property)) {
            return;
        }
        match self.sides(declarations) {
            Some(sides) => consolidate(self.prefix, &sides, tokens),
            None => {
                if let Some(shorthand) = declarations.get(self.shorthand) {
                    tokens.push(arbitrary_property(self.shorthand, shorthand));
                }
            }
        }
    }
}

fn consolidate(prefix: &str, sides: &[Option<String>; 4], tokens: &mut TokenList) {
    let [top, right, bottom, left] = sides;
    let mut push = |axis: &str, value: &Option<String>| {
        if let Some(value) = value {
            tokens.push(format!("{}{}-{}", prefix, axis, value));
        }
    };

    if top.is_some() && top == right && right == bottom && bottom == left {
        push("", top);
        return;
    }
    if top == bottom && right == left {
        push("y", top);
        push("x", right);
        return;
    }

    if top.is_some() && top == bottom {
        push("y", top);
    } else {
        push("t", top);
        push("b", bottom);
    }
    if right.is_some() && right == left {
        push("x", right);
    } else {
        push("r", right);
        push("l", left);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padding(declarations: &[(&str, &str)]) -> Vec<String> {
        let declarations: Declarations = declarations.iter().copied().collect();
        let mut tokens = TokenList::new();
        SideRule::padding().apply(&declarations, &mut tokens);
        tokens.into_vec()
    }

    fn all_sides(property: &str, values: [&str; 4]) -> Vec<(String, String)> {
        ["top", "right", "bottom", "left"]
            .iter()
            .zip(values)
            .map(|(side, value)| (format!("{}-{}", property, side), value.to_string()))
            .collect()
    }

    fn padding_owned(declarations: Vec<(String, String)>) -> Vec<String> {
        let declarations: Declarations = declarations.into_iter().collect();
        let mut tokens = TokenList::new();
        SideRule::padding().apply(&declarations, &mut tokens);
        tokens.into_vec()
    }

    #[test]
    fn test_uniform_sides() {
        assert_eq!(
            padding_owned(all_sides("padding", ["8px", "8px", "8px", "8px"])),
            vec!["p-2"]
        );
        assert_eq!(padding(&[("padding", "8px")]), vec!["p-2"]);
    }

    #[test]
    fn test_axis_pairs() {
        assert_eq!(
            padding_owned(all_sides("padding", ["8px", "4px", "8px", "4px"])),
            vec!["py-2", "px-1"]
        );
        assert_eq!(padding(&[("padding", "8px 4px")]), vec!["py-2", "px-1"]);
    }

    #[test]
    fn test_distinct_sides() {
        assert_eq!(
            padding_owned(all_sides("padding", ["4px", "8px", "12px", "16px"])),
            vec!["pt-1", "pb-3", "pr-2", "pl-4"]
        );
    }

    #[test]
    fn test_vertical_pair_with_distinct_horizontal() {
        assert_eq!(
            padding(&[("padding", "8px 4px 8px 12px")]),
            vec!["py-2", "pr-1", "pl-3"]
        );
    }

    #[test]
    fn test_absent_sides_contribute_nothing() {
        assert_eq!(padding(&[("padding-top", "16px")]), vec!["pt-4"]);
        assert_eq!(
            padding(&[("padding-left", "4px"), ("padding-right", "4px")]),
            vec!["px-1"]
        );
        assert_eq!(padding(&[("padding", "0px 8px")]), vec!["px-2"]);
        assert!(padding(&[]).is_empty());
    }

    #[test]
    fn test_longhands_win_over_shorthand() {
        assert_eq!(
            padding(&[("padding", "8px"), ("padding-top", "4px")]),
            vec!["pt-1"]
        );
    }

    #[test]
    fn test_margin_auto_and_uneven_shorthand() {
        let declarations: Declarations = [("margin", "0px auto")].into_iter().collect();
        let mut tokens = TokenList::new();
        SideRule::margin().apply(&declarations, &mut tokens);
        assert_eq!(tokens.as_slice(), &["mx-auto"]);

        assert_eq!(
            padding(&[("padding", "1px 2px 3px 4px 5px")]),
            vec!["[padding:1px_2px_3px_4px_5px]"]
        );
    }
}
