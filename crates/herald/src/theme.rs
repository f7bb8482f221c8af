//! Themes: a name, a pair of templates, and a base stylesheet.
//!
//! A theme bundles the markup skeletons for the HTML and plain-text
//! variants with the base [`StyleSheet`] the override engine starts from.
//! The two built-in themes share their markup — the flat look is entirely
//! stylesheet-driven — but custom themes are free to ship their own
//! templates. Adding a theme never changes the resolution algorithm.

use herald_styles::{theme_styles, StyleSheet};

use crate::templates::{DEFAULT_HTML_TEMPLATE, DEFAULT_PLAIN_TEMPLATE};

/// A visual theme for generated emails.
///
/// # Example
///
/// ```rust
/// use herald::{FlatTheme, Herald, Theme};
///
/// let herald = Herald {
///     theme: Box::new(FlatTheme),
///     ..Default::default()
/// };
/// assert_eq!(herald.theme.name(), "flat");
/// ```
pub trait Theme: Send + Sync {
    /// The theme's name, used to look up its base stylesheet.
    fn name(&self) -> &str;

    /// The minijinja template for the HTML email variant.
    fn html_template(&self) -> &str;

    /// The minijinja template for the plain-text email variant.
    fn plain_text_template(&self) -> &str;

    /// The base stylesheet the override engine resolves against.
    ///
    /// Defaults to the built-in provider lookup by name; themes with their
    /// own stylesheet override this.
    fn styles(&self) -> StyleSheet {
        theme_styles(self.name())
    }
}

/// The light built-in theme.
pub struct DefaultTheme;

impl Theme for DefaultTheme {
    fn name(&self) -> &str {
        herald_styles::DEFAULT_THEME
    }

    fn html_template(&self) -> &str {
        DEFAULT_HTML_TEMPLATE
    }

    fn plain_text_template(&self) -> &str {
        DEFAULT_PLAIN_TEMPLATE
    }
}

/// The dark built-in theme: same markup as [`DefaultTheme`], restyled with
/// darker chrome and square buttons.
pub struct FlatTheme;

impl Theme for FlatTheme {
    fn name(&self) -> &str {
        herald_styles::FLAT_THEME
    }

    fn html_template(&self) -> &str {
        DEFAULT_HTML_TEMPLATE
    }

    fn plain_text_template(&self) -> &str {
        DEFAULT_PLAIN_TEMPLATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_theme_names() {
        assert_eq!(DefaultTheme.name(), "default");
        assert_eq!(FlatTheme.name(), "flat");
    }

    #[test]
    fn test_builtin_styles_differ() {
        let default = DefaultTheme.styles();
        let flat = FlatTheme.styles();
        assert_eq!(
            default.get_property("body", "background-color"),
            Some("#F2F4F6")
        );
        assert_eq!(flat.get_property("body", "background-color"), Some("#2c3e50"));
    }

    #[test]
    fn test_templates_not_empty() {
        assert!(!DefaultTheme.html_template().is_empty());
        assert!(!DefaultTheme.plain_text_template().is_empty());
    }
}
