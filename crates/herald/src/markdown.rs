//! Markdown content fields.

use pulldown_cmark::{html, Options, Parser};
use serde::{Deserialize, Serialize};

/// A piece of Markdown content supplied by the email author.
///
/// Converted to an HTML fragment for the HTML variant of the email; the
/// plain-text variant includes the source text as-is, since Markdown is
/// readable prose by design.
///
/// # Example
///
/// ```rust
/// use herald::Markdown;
///
/// let md = Markdown::new("**Welcome** to our _premium_ service!");
/// let html = md.to_html();
/// assert!(html.contains("<strong>Welcome</strong>"));
/// assert!(html.contains("<em>premium</em>"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markdown(String);

impl Markdown {
    /// Wraps Markdown source text.
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// The raw Markdown source.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the source text is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts the Markdown source to an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(&self.0, options);
        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }
}

impl From<&str> for Markdown {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Markdown {
    fn from(source: String) -> Self {
        Self(source)
    }
}
