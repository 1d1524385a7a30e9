//! CSS generation.
//!
//! Holds the fixed document style sheet and the ordered [`StyleMap`] that
//! per-node styles are collected into before being written out as an
//! inline `style` attribute.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Style block embedded in every exported document.
pub const STYLESHEET: &str = concat!(
    "      body {\n",
    "        margin: 0;\n",
    "        padding: 0;\n",
    "        font-family: sans-serif;\n",
    "        position: absolute;\n",
    "        width: 100%;\n",
    "        min-height: 100%;\n",
    "      }\n",
    "      \n",
    "      .root {\n",
    "        position: absolute;\n",
    "        width: 100%;\n",
    "        min-height: 100%;\n",
    "      }\n",
    "      \n",
    "      .outerDiv {\n",
    "        position: relative;\n",
    "        display: flex;\n",
    "        width: 100%;\n",
    "        pointer-events: none;\n",
    "      }\n",
    "      \n",
    "      .innerDiv {\n",
    "        position: relative;\n",
    "        box-sizing: border-box;\n",
    "        pointer-events: auto;\n",
    "      }\n",
    "      \n",
    "      .centerer {\n",
    "        position: absolute;\n",
    "        height: 100%;\n",
    "        top: 0;\n",
    "        left: 0;\n",
    "      }\n",
);

/// Ordered CSS declarations keyed by camel-cased property name.
///
/// Insertion order is kept; setting an existing key updates it in place.
/// A property without a value is simply absent, so serialization never
/// emits an empty or null declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    /// Set the property when there is a value, otherwise drop it.
    pub fn set_opt<V: Into<String>>(&mut self, key: &str, value: Option<V>) {
        match value {
            Some(value) => self.set(key, value),
            None => self.remove(key),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.retain(|(k, _)| k != key);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as `prop:value;prop:value` with hyphenated property names.
    pub fn to_inline(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}:{}", to_kebab_case(k), v))
            .collect::<Vec<_>>()
            .join(";")
    }
}

fn camel_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z])([A-Z])").expect("valid regex"))
}

fn bracketed_segment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[(.+?)\]").expect("valid regex"))
}

fn hyphenated_letter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-([a-z])").expect("valid regex"))
}

fn to_camel_case(s: &str) -> String {
    hyphenated_letter()
        .replace_all(s, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Convert a camel-cased property name to its CSS form.
///
/// - `@keyframes ...` passes through untouched.
/// - A leading capital becomes a vendor prefix: `WebkitTransition` →
///   `-webkit-transition`.
/// - Bracketed segments keep camel case: `foo[myProp]` → `foo[myProp]`.
pub fn to_kebab_case(key: &str) -> String {
    if key.starts_with("@keyframes") {
        return key.to_string();
    }

    let kebabed = camel_boundary().replace_all(key, "$1-$2").to_lowercase();
    let kebabed = if key.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
        format!("-{kebabed}")
    } else {
        kebabed
    };

    bracketed_segment()
        .replace_all(&kebabed, |caps: &Captures| to_camel_case(&caps[0]))
        .into_owned()
}
