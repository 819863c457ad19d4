//! Variable value and store types.
//! The store is supplied entirely by the caller; the engine only reads it
//! for the duration of one run.

use indexmap::IndexMap;
use serde::Deserialize;

/// A literal variable value together with its sensitivity flag.
///
/// Sensitive values should be treated as confidential by downstream
/// consumers (e.g. excluded from logs); the engine propagates the flag
/// but does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    /// Bare-string shorthand for a non-sensitive value
    Plain(String),
    /// Explicit value with an optional sensitivity flag
    Tagged {
        value: String,
        #[serde(default)]
        sensitive: bool,
    },
}

impl VariableValue {
    pub fn new(value: impl Into<String>, sensitive: bool) -> Self {
        Self::Tagged { value: value.into(), sensitive }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Plain(value) => value,
            Self::Tagged { value, .. } => value,
        }
    }

    pub fn is_sensitive(&self) -> bool {
        match self {
            Self::Plain(_) => false,
            Self::Tagged { sensitive, .. } => *sensitive,
        }
    }
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

/// Immutable mapping from variable name to value.
///
/// Keys are case-sensitive and unique. Deserializes from a JSON object
/// where each value is either a bare string or `{"value": ..,
/// "sensitive": ..}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariableStore(IndexMap<String, VariableValue>);

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&VariableValue> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: VariableValue) {
        self.0.insert(name.into(), value);
    }
}
