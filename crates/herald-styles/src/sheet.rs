//! Stylesheet-as-data: a mapping from selector to property set.
//!
//! A [`StyleSheet`] is the unit everything else in this crate operates on:
//! theme providers hand one out, the override engine merges into one, the
//! serializer renders one back to CSS text. Selectors are opaque strings —
//! embedded comment text is significant and may be used to keep two
//! otherwise-identical selectors apart (e.g. two `@font-face` rules).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The properties declared for one selector, property name to value.
pub type PropertySet = BTreeMap<String, String>;

/// A stylesheet represented as data: selector to [`PropertySet`].
///
/// Backed by a `BTreeMap` so iteration (and therefore serialization) is
/// deterministic, and so `Clone` is a deep copy — cloning a sheet never
/// shares property storage with the original.
///
/// # Example
///
/// ```rust
/// use herald_styles::StyleSheet;
///
/// let mut sheet = StyleSheet::new();
/// sheet.set("body", "color", "#74787E");
/// assert_eq!(sheet.get_property("body", "color"), Some("#74787E"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet {
    rules: BTreeMap<String, PropertySet>,
}

impl StyleSheet {
    /// Creates an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no selectors are defined.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the number of selectors.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the selector has an entry.
    pub fn contains(&self, selector: &str) -> bool {
        self.rules.contains_key(selector)
    }

    /// Returns the property set for a selector, if present.
    pub fn get(&self, selector: &str) -> Option<&PropertySet> {
        self.rules.get(selector)
    }

    /// Returns a single property value, if both selector and property exist.
    pub fn get_property(&self, selector: &str, property: &str) -> Option<&str> {
        self.rules
            .get(selector)
            .and_then(|props| props.get(property))
            .map(String::as_str)
    }

    /// Sets one property on a selector, creating the selector entry if needed.
    pub fn set(
        &mut self,
        selector: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.rules
            .entry(selector.into())
            .or_default()
            .insert(property.into(), value.into());
    }

    /// Sets one property only when the selector already has an entry.
    ///
    /// Returns true if the property was written. Used by derived overrides
    /// (like the body-width directive) that must not invent new selectors.
    pub fn set_existing(&mut self, selector: &str, property: &str, value: &str) -> bool {
        match self.rules.get_mut(selector) {
            Some(props) => {
                props.insert(property.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    /// Merges a property set into a selector.
    ///
    /// If the selector already exists this is a property-level union with
    /// the incoming side winning on key collision; otherwise the set is
    /// inserted as a new entry.
    pub fn merge_selector(&mut self, selector: impl Into<String>, props: &PropertySet) {
        let entry = self.rules.entry(selector.into()).or_default();
        for (name, value) in props {
            entry.insert(name.clone(), value.clone());
        }
    }

    /// Merges every selector of `other` into this sheet.
    ///
    /// Additive-with-override: selectors and properties are only ever added
    /// or overwritten, never removed.
    pub fn merge(&mut self, other: &StyleSheet) {
        for (selector, props) in &other.rules {
            self.merge_selector(selector.clone(), props);
        }
    }

    /// Iterates over `(selector, properties)` pairs in sorted selector order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertySet)> {
        self.rules.iter().map(|(sel, props)| (sel.as_str(), props))
    }

    /// Iterates over selectors in sorted order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

impl FromIterator<(String, PropertySet)> for StyleSheet {
    fn from_iter<I: IntoIterator<Item = (String, PropertySet)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
