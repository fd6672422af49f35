use serde::Serialize;

/// Ordered, duplicate-free list of utility tokens.
///
/// The first occurrence of a token wins, so the order is stable for a given
/// input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenList {
    tokens: Vec<String>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `token` unless it is empty or already present
    pub fn push(&mut self, token: impl Into<String>) {
        let token = token.into();
        if token.is_empty() || self.contains(&token) {
            return;
        }
        self.tokens.push(token);
    }

    pub fn extend<I, T>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        for token in tokens {
            self.push(token);
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }

    /// Space-joined, as used for a `class` attribute
    pub fn to_class_string(&self) -> String {
        self.tokens.join(" ")
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
