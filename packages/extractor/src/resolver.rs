use crate::properties::tracked_properties;
use std::collections::HashMap;
use stylecopy_common::elements_preorder;
use stylecopy_parser::{Document, NodeId};

/// Host-side source of resolved style values.
///
/// Cascade resolution belongs to the host; the core only asks for the final
/// value of a property on a node. `None` or a blank string means "no value".
pub trait StyleResolver {
    fn resolve(&self, node: NodeId, property: &str) -> Option<String>;
}

impl<F> StyleResolver for F
where
    F: Fn(NodeId, &str) -> Option<String>,
{
    fn resolve(&self, node: NodeId, property: &str) -> Option<String> {
        self(node, property)
    }
}

/// In-memory resolver, for hosts that compute styles up front and for tests
#[derive(Debug, Clone, Default)]
pub struct ComputedStyles {
    values: HashMap<NodeId, HashMap<String, String>>,
}

impl ComputedStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, node: NodeId, property: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values
            .entry(node)
            .or_default()
            .insert(property.into(), value.into());
        self
    }

    /// Builder form of [`ComputedStyles::set`]
    pub fn with(mut self, node: NodeId, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(node, property, value);
        self
    }

    /// Set several properties of one node at once
    pub fn with_all(mut self, node: NodeId, properties: &[(&str, &str)]) -> Self {
        for (property, value) in properties {
            self.set(node, *property, *value);
        }
        self
    }
}

impl StyleResolver for ComputedStyles {
    fn resolve(&self, node: NodeId, property: &str) -> Option<String> {
        self.values
            .get(&node)
            .and_then(|properties| properties.get(property))
            .cloned()
    }
}

/// Immutable snapshot of every tracked property of every element in a
/// subtree, captured once at the start of an extraction.
#[derive(Debug, Clone, Default)]
pub struct StyleSnapshot {
    values: HashMap<NodeId, HashMap<&'static str, String>>,
}

impl StyleSnapshot {
    /// Query `resolver` for all tracked properties of the subtree at `root`.
    /// Values are trimmed; blank values are not stored.
    pub fn capture<R: StyleResolver + ?Sized>(doc: &Document, root: NodeId, resolver: &R) -> Self {
        let mut values = HashMap::new();
        for node in elements_preorder(doc, root) {
            let resolved: HashMap<&'static str, String> = tracked_properties()
                .iter()
                .filter_map(|tracked| {
                    let value = resolver.resolve(node, tracked.name)?;
                    let value = value.trim();
                    (!value.is_empty()).then(|| (tracked.name, value.to_string()))
                })
                .collect();
            values.insert(node, resolved);
        }
        Self { values }
    }

    pub fn get(&self, node: NodeId, property: &str) -> Option<&str> {
        self.values
            .get(&node)
            .and_then(|properties| properties.get(property))
            .map(String::as_str)
    }

    /// Number of captured elements
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
