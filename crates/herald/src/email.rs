//! The email content model.
//!
//! An [`Email`] carries one [`Body`]: the structured content (greeting,
//! intros, dictionary, tables, actions, outros) plus the per-call
//! [`StyleOverrides`] payload. Fields named `*_unsafe` hold raw HTML that is
//! injected without escaping — their safe counterparts are escaped at render
//! time. Unsafe variants take precedence over safe ones where both are set,
//! with one exception: [`Entry::value`] wins over [`Entry::unsafe_value`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use herald_styles::StyleOverrides;

use crate::markdown::Markdown;

/// An email to generate, containing a body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Email {
    pub body: Body,
}

/// The body of the email, containing all the interesting data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Body {
    /// Name of the contacted person.
    pub name: String,
    /// Greeting for the contacted person (defaults to "Hi").
    pub greeting: String,
    /// Signature before the product name (defaults to "Yours truly").
    pub signature: String,
    /// Title shown instead of greeting+name when set.
    pub title: String,
    /// Intro sentences, first displayed in the email.
    pub intros: Vec<String>,
    /// Intro as Markdown; overrides `intros`.
    pub intros_markdown: Option<Markdown>,
    /// Intro sentences as raw HTML; overrides `intros`.
    pub intros_unsafe: Vec<String>,
    /// Key/value pairs (parameters, settings, personal info).
    pub dictionary: Vec<Entry>,
    /// Deprecated: use `tables` instead. Folded into `tables` at generation
    /// time with a warning.
    pub table: Table,
    /// Data tables (pricing grid, a bill, and so on).
    pub tables: Vec<Table>,
    /// Actions the user can take: a button click or an invite code.
    pub actions: Vec<Action>,
    /// Outro sentences, last displayed in the email.
    pub outros: Vec<String>,
    /// Outro as Markdown; overrides `outros`.
    pub outros_markdown: Option<Markdown>,
    /// Outro sentences as raw HTML; overrides `outros`.
    pub outros_unsafe: Vec<String>,
    /// Free Markdown content replacing dictionary, tables and actions
    /// (intros and outros are still shown).
    pub free_markdown: Option<Markdown>,
    /// Per-call style directives (body width, structured CSS, raw CSS).
    pub template_overrides: StyleOverrides,
}

impl Body {
    /// Returns a copy with unset presentation fields filled with defaults.
    pub(crate) fn with_defaults(&self) -> Body {
        let mut body = self.clone();
        if body.greeting.is_empty() {
            body.greeting = "Hi".to_string();
        }
        if body.signature.is_empty() {
            body.signature = "Yours truly".to_string();
        }
        body
    }
}

/// A simple entry of a map. A slice of entries is used instead of a map so
/// column and dictionary order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    pub key: String,
    pub value: String,
    /// Raw-HTML value, used when `value` is empty.
    pub unsafe_value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            unsafe_value: String::new(),
        }
    }
}

/// A data table (pricing grid, a bill, and so on).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    /// Title displayed above the table.
    pub title: String,
    /// Raw-HTML title; wins over `title`.
    pub title_unsafe: String,
    /// Rows of entries; every row shares the first row's column keys.
    pub data: Vec<Vec<Entry>>,
    /// Per-column display metadata.
    pub columns: Columns,
    /// Footer displayed below the table.
    pub footer: String,
    /// Raw-HTML footer; wins over `footer`.
    pub footer_unsafe: String,
}

/// Display metadata for table columns, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Columns {
    pub custom_width: BTreeMap<String, String>,
    pub custom_alignment: BTreeMap<String, String>,
}

/// Anything the user can act on: click a button, or view an invite code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    pub instructions: String,
    pub button: Button,
    /// When set, rendered as an invite code instead of the button.
    pub invite_code: String,
}

/// A button the user can click.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Button {
    /// Background color; falls back to the theme's button style when empty.
    pub color: String,
    /// Text color; falls back to the theme's button style when empty.
    pub text_color: String,
    pub text: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_defaults() {
        let body = Body::default().with_defaults();
        assert_eq!(body.greeting, "Hi");
        assert_eq!(body.signature, "Yours truly");
    }

    #[test]
    fn test_body_defaults_keep_explicit_values() {
        let body = Body {
            greeting: "Hello".into(),
            signature: "Best".into(),
            ..Default::default()
        }
        .with_defaults();
        assert_eq!(body.greeting, "Hello");
        assert_eq!(body.signature, "Best");
    }

    #[test]
    fn test_body_deserializes_with_missing_fields() {
        let body: Body = serde_json::from_str(r#"{"name": "Jon", "intros": ["hey"]}"#).unwrap();
        assert_eq!(body.name, "Jon");
        assert_eq!(body.intros, vec!["hey".to_string()]);
        assert!(body.tables.is_empty());
        assert!(body.template_overrides.is_empty());
    }
}
