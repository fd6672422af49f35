use super::UtilityRule;
use crate::spacing::sized_token;
use crate::tokens::TokenList;
use stylecopy_common::Declarations;

const NAMED_SIZES: &[(&str, &str)] = &[
    ("100%", "full"),
    ("100vw", "screen"),
    ("100vh", "screen"),
    ("50%", "1/2"),
    ("33.3333%", "1/3"),
    ("66.6667%", "2/3"),
    ("25%", "1/4"),
    ("75%", "3/4"),
    ("max-content", "max"),
    ("min-content", "min"),
    ("fit-content", "fit"),
];

const SIZES: &[(&str, &str)] = &[
    ("width", "w"),
    ("height", "h"),
    ("min-width", "min-w"),
    ("max-width", "max-w"),
    ("min-height", "min-h"),
    ("max-height", "max-h"),
];

/// Keyword or fraction size such as `w-full` or `basis-1/2`
pub(crate) fn named_size(prefix: &str, value: &str) -> Option<String> {
    NAMED_SIZES
        .iter()
        .find(|(size, _)| *size == value)
        .map(|(_, name)| format!("{}-{}", prefix, name))
}

pub struct SizingRule;

impl UtilityRule for SizingRule {
    fn name(&self) -> &'static str {
        "sizing"
    }

    fn properties(&self) -> &'static [&'static str] {
        &["width", "height", "min-width", "max-width", "min-height", "max-height"]
    }

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList) {
        for (property, prefix) in SIZES {
            let Some(value) = declarations.get(property) else {
                continue;
            };
            if value == "auto" {
                continue;
            }
            match named_size(prefix, value) {
                Some(token) => tokens.push(token),
                None => tokens.push(sized_token(prefix, value)),
            }
        }
    }
}
