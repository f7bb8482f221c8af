//! Theme style provider.
//!
//! Each theme owns a base [`StyleSheet`]. The default theme's sheet is an
//! embedded dataset parsed once at first use; derived themes clone it and
//! layer a fixed patch list on top. Accessors always return an independent
//! deep copy, so one generation call mutating its sheet can never leak into
//! another call or into the shared dataset.

use once_cell::sync::Lazy;

use crate::sheet::StyleSheet;

/// Name of the built-in default theme.
pub const DEFAULT_THEME: &str = "default";

/// Name of the built-in flat theme.
pub const FLAT_THEME: &str = "flat";

// The default theme's full stylesheet, shipped with the crate. Parsed once;
// a parse failure here is a packaging bug, not a runtime condition.
static DEFAULT_STYLES: Lazy<StyleSheet> = Lazy::new(|| {
    serde_json::from_str(include_str!("../assets/default.css.json"))
        .expect("embedded default stylesheet is valid JSON")
});

// The flat theme is the default sheet with darker chrome and square buttons.
const FLAT_PATCH: &[(&str, &str, &str)] = &[
    ("body", "background-color", "#2c3e50"),
    (".email-wrapper", "background-color", "#2c3e50"),
    (".email-footer p", "color", "#eaeaea"),
    (".button", "background-color", "#00948d"),
    (".button", "border-radius", "0"),
];

/// Returns an independent copy of the default theme's base stylesheet.
pub fn default_styles() -> StyleSheet {
    DEFAULT_STYLES.clone()
}

/// Returns an independent copy of the flat theme's base stylesheet.
///
/// Derived from the default sheet by applying a fixed patch list; the
/// shared default dataset is never touched.
pub fn flat_styles() -> StyleSheet {
    let mut sheet = default_styles();
    for (selector, property, value) in FLAT_PATCH {
        sheet.set(*selector, *property, *value);
    }
    sheet
}

/// Returns the base stylesheet for a theme name.
///
/// Unknown names fall back to the default dataset, so a custom theme that
/// only changes templates still gets a complete stylesheet.
pub fn theme_styles(name: &str) -> StyleSheet {
    match name {
        FLAT_THEME => flat_styles(),
        _ => default_styles(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_has_core_selectors() {
        let sheet = default_styles();
        assert_eq!(
            sheet.get_property("body", "background-color"),
            Some("#F2F4F6")
        );
        assert_eq!(
            sheet.get_property(".button", "background-color"),
            Some("#3869D4")
        );
        assert_eq!(
            sheet.get_property(".email-body_inner", "width"),
            Some("570px")
        );
        assert_eq!(sheet.get_property(".email-footer", "width"), Some("570px"));
        assert!(sheet.len() > 40, "default dataset should be the full set");
    }

    #[test]
    fn test_flat_styles_applies_patch() {
        let sheet = flat_styles();
        assert_eq!(
            sheet.get_property("body", "background-color"),
            Some("#2c3e50")
        );
        assert_eq!(
            sheet.get_property(".email-wrapper", "background-color"),
            Some("#2c3e50")
        );
        assert_eq!(sheet.get_property(".email-footer p", "color"), Some("#eaeaea"));
        assert_eq!(
            sheet.get_property(".button", "background-color"),
            Some("#00948d")
        );
        assert_eq!(sheet.get_property(".button", "border-radius"), Some("0"));
    }

    #[test]
    fn test_flat_styles_keeps_unpatched_defaults() {
        let sheet = flat_styles();
        // Anything outside the patch list matches the default dataset.
        assert_eq!(sheet.get_property("a", "color"), Some("#3869D4"));
        assert_eq!(sheet.get_property("p", "font-size"), Some("16px"));
    }

    #[test]
    fn test_flat_derivation_never_mutates_default() {
        let _flat = flat_styles();
        let default = default_styles();
        assert_eq!(
            default.get_property("body", "background-color"),
            Some("#F2F4F6")
        );
        assert_eq!(default.get_property(".button", "border-radius"), Some("3px"));
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let mut first = flat_styles();
        first.set(".button", "background-color", "#000000");
        first.set(".made-up", "color", "#123456");

        let second = flat_styles();
        assert_eq!(
            second.get_property(".button", "background-color"),
            Some("#00948d")
        );
        assert!(!second.contains(".made-up"));
    }

    #[test]
    fn test_theme_styles_dispatch() {
        assert_eq!(theme_styles(DEFAULT_THEME), default_styles());
        assert_eq!(theme_styles(FLAT_THEME), flat_styles());
        // Unknown themes get the default dataset.
        assert_eq!(theme_styles("midnight"), default_styles());
    }
}
