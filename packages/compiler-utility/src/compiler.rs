use crate::rules::{arbitrary_property, default_registry, RuleRegistry};
use crate::tokens::TokenList;
use std::collections::HashMap;
use stylecopy_common::Declarations;
use stylecopy_extractor::NodeStyleRecord;
use stylecopy_parser::NodeId;
use tracing::debug;

/// Utility compiler - runs the rule registry over a declaration set
#[derive(Debug, Clone, Copy)]
pub struct UtilityCompiler<'r> {
    registry: &'r RuleRegistry,
}

impl Default for UtilityCompiler<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl UtilityCompiler<'static> {
    /// Compiler over the built-in rules
    pub fn new() -> Self {
        Self {
            registry: default_registry(),
        }
    }
}

impl<'r> UtilityCompiler<'r> {
    pub fn with_registry(registry: &'r RuleRegistry) -> Self {
        Self { registry }
    }

    /// Tokens for one declaration set.
    ///
    /// Rules run in registry order; any declaration no rule consumes is
    /// emitted last as an arbitrary `[property:value]` token.
    pub fn compile(&self, declarations: &Declarations) -> TokenList {
        let mut tokens = TokenList::new();
        for rule in self.registry.rules() {
            rule.apply(declarations, &mut tokens);
        }
        for declaration in declarations {
            if !self.registry.handles(&declaration.property) {
                tokens.push(arbitrary_property(&declaration.property, &declaration.value));
            }
        }
        tokens
    }

    pub fn compile_record(&self, record: &NodeStyleRecord) -> TokenList {
        let tokens = self.compile(&record.declarations);
        debug!(
            class_name = %record.class_name,
            tag = %record.tag,
            tokens = tokens.len(),
            "Compiled utility tokens"
        );
        tokens
    }
}

/// Utility tokens for a declaration set using the built-in rules
pub fn compile_utilities(declarations: &Declarations) -> Vec<String> {
    UtilityCompiler::new().compile(declarations).into_vec()
}

/// Compile every record with the built-in rules, in record order
pub fn compile_records(records: &[NodeStyleRecord]) -> Vec<(NodeId, TokenList)> {
    let compiler = UtilityCompiler::new();
    records
        .iter()
        .map(|record| (record.node, compiler.compile_record(record)))
        .collect()
}

/// Node → space-joined utility classes. Nodes whose token list is empty are
/// left out.
pub fn utility_class_map(compiled: &[(NodeId, TokenList)]) -> HashMap<NodeId, String> {
    compiled
        .iter()
        .filter(|(_, tokens)| !tokens.is_empty())
        .map(|(node, tokens)| (*node, tokens.to_class_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(declarations: &[(&str, &str)]) -> Vec<String> {
        let declarations: Declarations = declarations.iter().copied().collect();
        compile_utilities(&declarations)
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let tokens = compile(&[
            ("display", "flex"),
            ("padding", "8px"),
            ("background-color", "#2563eb"),
            ("gap", "4px"),
            ("align-items", "center"),
        ]);
        assert_eq!(tokens, vec!["flex", "items-center", "gap-1", "p-2", "bg-blue-600"]);
    }

    #[test]
    fn test_unconsumed_properties_fall_back() {
        let tokens = compile(&[
            ("font-family", "Inter, sans-serif"),
            ("color", "#111827"),
            ("transition", "all 0.2s ease 0s"),
        ]);
        assert_eq!(
            tokens,
            vec![
                "text-gray-900",
                "[font-family:Inter,_sans-serif]",
                "[transition:all_0.2s_ease_0s]",
            ]
        );
    }

    #[test]
    fn test_no_duplicate_tokens() {
        let tokens = compile(&[
            ("flex-direction", "column"),
            ("flex-flow", "column nowrap"),
            ("flex-wrap", "nowrap"),
            ("border-top", "1px solid #000000"),
            ("border-bottom", "1px solid #000000"),
        ]);
        let mut deduped = tokens.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), tokens.len());
    }

    #[test]
    fn test_empty_declarations() {
        assert!(compile(&[]).is_empty());
    }

    #[test]
    fn test_custom_registry() {
        let registry = RuleRegistry::empty();
        let compiler = UtilityCompiler::with_registry(&registry);
        let declarations: Declarations = [("display", "flex")].into_iter().collect();
        assert_eq!(compiler.compile(&declarations).as_slice(), &["[display:flex]"]);
    }

    #[test]
    fn test_utility_class_map_skips_empty_records() {
        let records = vec![
            NodeStyleRecord {
                node: NodeId(0),
                tag: "div".to_string(),
                class_name: "copied-el".to_string(),
                declarations: [("display", "flex"), ("gap", "8px")].into_iter().collect(),
            },
            NodeStyleRecord {
                node: NodeId(1),
                tag: "span".to_string(),
                class_name: "copied-el-c1".to_string(),
                declarations: Declarations::new(),
            },
        ];
        let compiled = compile_records(&records);
        let map = utility_class_map(&compiled);

        assert_eq!(compiled.len(), 2);
        assert_eq!(map.get(&NodeId(0)).map(String::as_str), Some("flex gap-2"));
        assert!(!map.contains_key(&NodeId(1)));
    }
}
