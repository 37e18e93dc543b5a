//! Placeholder substitution over JSON documents.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{TemplateError, TemplateResult};

/// Placeholder values, applied in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    values: IndexMap<String, String>,
}

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a value. Re-inserting a key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse a `KEY=VALUE` pair as given on the command line.
    ///
    /// The value may itself contain `=`; the key may not be empty.
    pub fn parse_pair(pair: &str) -> TemplateResult<(String, String)> {
        match pair.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.to_string()))
            }
            _ => Err(TemplateError::InvalidReplacement(pair.to_string())),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Replacements {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut replacements = Self::new();
        for (key, value) in iter {
            replacements.insert(key, value);
        }
        replacements
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Replacements {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Replace every `{{key}}` token in a string, one key at a time.
pub fn substitute_str(text: &str, replacements: &Replacements) -> String {
    let mut result = text.to_string();
    for (key, value) in replacements.iter() {
        let token = format!("{{{{{}}}}}", key);
        result = result.replace(&token, value);
    }
    result
}

/// Return a copy of `document` with placeholders replaced in every string value.
///
/// Object keys are left as they are, and so are tokens without a replacement.
pub fn substitute(document: &Value, replacements: &Replacements) -> Value {
    match document {
        Value::String(text) => Value::String(substitute_str(text, replacements)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| substitute(item, replacements))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), substitute(value, replacements)))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}

/// Substitutes placeholders and reports the ones left unfilled.
pub struct TemplateRenderer {
    placeholder_pattern: Regex,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    pub fn new() -> Self {
        Self {
            // Match {{NAME}} tokens
            placeholder_pattern: Regex::new(r"\{\{([A-Za-z_][A-Za-z0-9_]*)\}\}")
                .expect("placeholder pattern is valid"),
        }
    }

    /// Substitute placeholders, logging any token that is still present afterwards.
    pub fn render(&self, document: &Value, replacements: &Replacements) -> Value {
        let rendered = substitute(document, replacements);
        debug!("Applied {} replacement(s)", replacements.len());

        let leftover = self.placeholders(&rendered);
        if !leftover.is_empty() {
            let names: Vec<&str> = leftover.iter().map(String::as_str).collect();
            warn!("Template has unfilled placeholders: {}", names.join(", "));
        }

        rendered
    }

    /// Names of all placeholder tokens found in string values of the document.
    pub fn placeholders(&self, document: &Value) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        self.collect_placeholders(document, &mut found);
        found
    }

    fn collect_placeholders(&self, document: &Value, found: &mut BTreeSet<String>) {
        match document {
            Value::String(text) => {
                for caps in self.placeholder_pattern.captures_iter(text) {
                    found.insert(caps[1].to_string());
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.collect_placeholders(item, found);
                }
            }
            Value::Object(map) => {
                for value in map.values() {
                    self.collect_placeholders(value, found);
                }
            }
            _ => {}
        }
    }
}
