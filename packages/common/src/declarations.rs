use serde::{Deserialize, Serialize};

/// A single `property: value` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// Ordered list of declarations with by-property lookup.
///
/// Insertion order is preserved so output built from it is deterministic;
/// a property appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Declarations {
    entries: Vec<Declaration>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration, or overwrite the value in place if the property
    /// is already present
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|d| d.property == property) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Declaration { property, value }),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.entries.iter()
    }

    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|d| d.property.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Declarations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut declarations = Declarations::new();
        for (property, value) in iter {
            declarations.insert(property, value);
        }
        declarations
    }
}

impl<'a> IntoIterator for &'a Declarations {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order_and_overwrites() {
        let mut decls = Declarations::new();
        decls.insert("display", "flex");
        decls.insert("color", "#fff");
        decls.insert("display", "grid");

        let props: Vec<_> = decls.properties().collect();
        assert_eq!(props, vec!["display", "color"]);
        assert_eq!(decls.get("display"), Some("grid"));
        assert_eq!(decls.len(), 2);
    }

    #[test]
    fn test_from_iterator() {
        let decls: Declarations = [("padding", "8px"), ("margin", "0px")].into_iter().collect();
        assert!(decls.contains("margin"));
        assert_eq!(decls.get("gap"), None);
    }

    #[test]
    fn test_serializes_as_list() {
        let decls: Declarations = [("color", "red")].into_iter().collect();
        let json = serde_json::to_string(&decls).unwrap();
        assert_eq!(json, r#"[{"property":"color","value":"red"}]"#);
    }
}
