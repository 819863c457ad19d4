//! Placeholder token resolution.
//! Tokens have the form `${{ name }}`; the interior is trimmed of
//! whitespace to obtain the variable name, but replacement is keyed by
//! the literal matched text, so `${{ X }}` and `${{X}}` are distinct
//! replacement targets even though they name the same variable.

use log::debug;
use regex::Regex;

use crate::variables::VariableStore;

/// The result of resolving a single input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValue {
    /// The input with every recognized token substituted
    pub value: String,
    /// True if any substituted variable was marked sensitive
    pub sensitive: bool,
    /// Names of tokens that had no entry in the variable store
    pub missing: Vec<String>,
}

impl ResolvedValue {
    fn unchanged(value: &str) -> Self {
        Self { value: value.to_string(), sensitive: false, missing: Vec::new() }
    }
}

/// Resolves placeholder tokens in strings against a variable store.
pub struct Resolver {
    token_pattern: Regex,
}

impl Resolver {
    pub fn new() -> Self {
        // Interior runs up to the first closing marker.
        let token_pattern = Regex::new(r"\$\{\{(.*?)\}\}").unwrap();
        Self { token_pattern }
    }

    /// Resolves all placeholder tokens in `input`.
    ///
    /// Known variables are substituted everywhere their exact token
    /// spelling occurs; sensitivity is monotonic across tokens. Unknown
    /// variables are substituted with the empty string and reported in
    /// `missing` rather than raised as errors, so templated files with
    /// optional placeholders degrade gracefully.
    pub fn resolve(&self, input: &str, variables: &VariableStore) -> ResolvedValue {
        if !self.token_pattern.is_match(input) {
            return ResolvedValue::unchanged(input);
        }

        let mut resolved = input.to_string();
        let mut sensitive = false;
        let mut missing = Vec::new();
        let mut seen: Vec<&str> = Vec::new();

        for capture in self.token_pattern.captures_iter(input) {
            let token = capture.get(0).map_or("", |m| m.as_str());
            if seen.contains(&token) {
                continue;
            }
            seen.push(token);

            let name = capture.get(1).map_or("", |m| m.as_str()).trim();
            match variables.get(name) {
                Some(variable) => {
                    resolved = resolved.replace(token, variable.value());
                    sensitive = sensitive || variable.is_sensitive();
                }
                None => {
                    debug!("Variable '{}' not found, substituting empty string", name);
                    resolved = resolved.replace(token, "");
                    missing.push(name.to_string());
                }
            }
        }

        ResolvedValue { value: resolved, sensitive, missing }
    }

    /// Resolves an optional input, propagating absence without error.
    pub fn resolve_opt(
        &self,
        input: Option<&str>,
        variables: &VariableStore,
    ) -> Option<ResolvedValue> {
        input.map(|input| self.resolve(input, variables))
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver::new()
    }
}
