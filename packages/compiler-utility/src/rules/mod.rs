mod border;
mod color;
mod effects;
mod flex;
mod grid;
mod layout;
mod list;
mod sides;
mod sizing;
mod typography;

pub use border::{BorderRadiusRule, BorderRule};
pub use color::{BackgroundRule, ColorRule};
pub use effects::{CursorRule, OpacityRule, PointerEventsRule, ShadowRule, TransformRule, ZIndexRule};
pub use flex::{FlexItemRule, FlexRule, GapRule};
pub use grid::GridRule;
pub use layout::{DisplayRule, LayoutMiscRule, OverflowRule, PositionRule};
pub use list::ListTableRule;
pub use sides::SideRule;
pub use sizing::SizingRule;
pub use typography::TypographyRule;

use crate::tokens::TokenList;
use once_cell::sync::Lazy;
use stylecopy_common::{escape_whitespace, Declarations};

/// Trait for implementing utility rules
///
/// A rule reads a fixed set of properties and appends tokens for the ones
/// present. Every declared property that is present must produce at least
/// one token, falling back to an arbitrary value when no named utility fits.
pub trait UtilityRule: Send + Sync {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Properties this rule consumes
    fn properties(&self) -> &'static [&'static str];

    fn apply(&self, declarations: &Declarations, tokens: &mut TokenList);
}

/// Registry of utility rules, applied in registration order
pub struct RuleRegistry {
    rules: Vec<Box<dyn UtilityRule>>,
}

impl RuleRegistry {
    /// Create a registry with all built-in rules in their fixed order
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(DisplayRule),
                Box::new(PositionRule),
                Box::new(OverflowRule),
                Box::new(LayoutMiscRule),
                Box::new(FlexRule),
                Box::new(FlexItemRule),
                Box::new(GridRule),
                Box::new(GapRule),
                Box::new(SideRule::padding()),
                Box::new(SideRule::margin()),
                Box::new(SizingRule),
                Box::new(BorderRadiusRule),
                Box::new(ColorRule),
                Box::new(BackgroundRule),
                Box::new(TypographyRule),
                Box::new(BorderRule),
                Box::new(OpacityRule),
                Box::new(ShadowRule),
                Box::new(CursorRule),
                Box::new(ZIndexRule),
                Box::new(TransformRule),
                Box::new(PointerEventsRule),
                Box::new(ListTableRule),
            ],
        }
    }

    pub fn rules(&self) -> &[Box<dyn UtilityRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: Box<dyn UtilityRule>) {
        self.rules.push(rule);
    }

    /// Whether some registered rule consumes `property`
    pub fn handles(&self, property: &str) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.properties().contains(&property))
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}

static DEFAULT_REGISTRY: Lazy<RuleRegistry> = Lazy::new(RuleRegistry::new);

/// The shared built-in registry
pub fn default_registry() -> &'static RuleRegistry {
    &DEFAULT_REGISTRY
}

/// Named value lookup in a static table
pub(crate) fn lookup(map: &[(&str, &'static str)], value: &str) -> Option<&'static str> {
    map.iter()
        .find(|(key, _)| *key == value)
        .map(|(_, token)| *token)
}

/// `{prefix}-[value]`
pub(crate) fn arbitrary_value(prefix: &str, value: &str) -> String {
    format!("{}-[{}]", prefix, escape_whitespace(value.trim()))
}

/// `[property:value]`
pub fn arbitrary_property(property: &str, value: &str) -> String {
    format!("[{}:{}]", property, escape_whitespace(value.trim()))
}

/// Push the named token for `property`'s value, or an arbitrary property
/// token when the value is not in `map`
pub(crate) fn push_mapped(
    declarations: &Declarations,
    tokens: &mut TokenList,
    property: &str,
    map: &[(&str, &'static str)],
) {
    if let Some(value) = declarations.get(property) {
        match lookup(map, value) {
            Some(token) => tokens.push(token),
            None => tokens.push(arbitrary_property(property, value)),
        }
    }
}
