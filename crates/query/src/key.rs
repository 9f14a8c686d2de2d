//! Structured cache keys.
//!
//! A [`QueryKey`] is a resource-family name plus named request
//! parameters. Parameters are kept sorted, so two logically identical
//! requests normalize to the same key no matter the order the call
//! site added them in.

use std::fmt;

/// Cache key for one logical request.
///
/// Keys are cheap to clone and are owned by the cache for as long as
/// the slot lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    family: &'static str,
    params: Vec<(String, String)>,
}

impl QueryKey {
    /// A key for a resource family with no parameters.
    pub fn new(family: &'static str) -> Self {
        Self {
            family,
            params: Vec::new(),
        }
    }

    /// Add one named parameter, keeping the parameter list sorted.
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        let pair = (name.into(), value.to_string());
        let position = self.params.binary_search(&pair).unwrap_or_else(|e| e);
        self.params.insert(position, pair);
        self
    }

    /// Add a batch of parameters (e.g. pagination query pairs).
    pub fn with_pairs(mut self, pairs: &[(&str, String)]) -> Self {
        for (name, value) in pairs {
            self = self.with(*name, value);
        }
        self
    }

    /// The resource-family name.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// The normalized (sorted) parameter list.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.family)?;
        if self.params.is_empty() {
            return Ok(());
        }
        write!(f, "[")?;
        for (i, (name, value)) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{name}={value}")?;
        }
        write!(f, "]")
    }
}
