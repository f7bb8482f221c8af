//! Override resolution: merges per-email style directives into a theme's
//! base stylesheet.
//!
//! Resolution is a pure function over `(base sheet, overrides)` and never
//! fails: unrecognized or malformed directives degrade to a no-op for that
//! directive. Every merge step is additive-with-override — selectors and
//! properties are added or overwritten, never removed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::parser::parse_css;
use crate::serialize;
use crate::sheet::{PropertySet, StyleSheet};

/// Selector whose `width` the body-width directive rewrites for the main
/// content column.
pub const CONTENT_WIDTH_SELECTOR: &str = ".email-body_inner";

/// Selector whose `width` the body-width directive rewrites for the footer
/// column.
pub const FOOTER_WIDTH_SELECTOR: &str = ".email-footer";

/// Body width used for the responsive breakpoint when no override is given.
pub const DEFAULT_BODY_WIDTH: &str = "570px";

/// Per-call style directives supplied by the email author.
///
/// All three directives are optional and independent:
///
/// - `body_width`: a CSS length (e.g. `"800px"`) applied to the main content
///   and footer selectors and reflected in the responsive breakpoint.
/// - `css`: a structured override, selector to property to value. Accepted
///   loosely: values may be any JSON scalar (numbers and booleans are
///   stringified); a JSON string is treated as raw CSS text; any other
///   shape counts as "no structured override".
/// - `additional_styles`: raw CSS text parsed with [`parse_css`]. Applied
///   last, so it wins on colliding `(selector, property)` pairs.
///
/// Scoped to a single generation call; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    pub body_width: Option<String>,
    pub css: Option<Value>,
    pub additional_styles: Option<String>,
}

impl StyleOverrides {
    /// True when no directive is set.
    pub fn is_empty(&self) -> bool {
        self.body_width.is_none() && self.css.is_none() && self.additional_styles.is_none()
    }
}

/// The stylesheet resolved for one generation call, plus the effective body
/// width the serializer needs to keep the responsive breakpoint consistent
/// with the width properties written into the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyles {
    sheet: StyleSheet,
    body_width: String,
}

impl ResolvedStyles {
    /// The fully merged stylesheet.
    pub fn sheet(&self) -> &StyleSheet {
        &self.sheet
    }

    /// The effective body width: the override value, or [`DEFAULT_BODY_WIDTH`].
    pub fn body_width(&self) -> &str {
        &self.body_width
    }

    /// Renders the merged stylesheet as CSS text, one block per selector in
    /// sorted order.
    pub fn to_css(&self) -> String {
        serialize::to_css(&self.sheet)
    }

    /// Renders the responsive breakpoint whose threshold matches
    /// [`body_width`](Self::body_width).
    pub fn breakpoint(&self) -> String {
        serialize::breakpoint(&self.body_width)
    }
}

/// Merges caller overrides into a theme's base stylesheet.
///
/// Steps, in order (later steps win on collision):
///
/// 1. Deep-copy `base` — the caller's sheet is never mutated.
/// 2. Body-width directive: overwrite `width` on the main-content and footer
///    selectors. Absent selectors are left absent (no entry is invented),
///    but the width still feeds the breakpoint.
/// 3. Structured override: normalized to the canonical sheet shape, then
///    union-merged per selector. New selectors are inserted verbatim.
/// 4. Raw CSS override: parsed, then union-merged the same way.
///
/// # Example
///
/// ```rust
/// use herald_styles::{default_styles, resolve, StyleOverrides};
///
/// let overrides = StyleOverrides {
///     body_width: Some("800px".into()),
///     ..Default::default()
/// };
/// let resolved = resolve(&default_styles(), &overrides);
/// assert_eq!(
///     resolved.sheet().get_property(".email-footer", "width"),
///     Some("800px")
/// );
/// assert!(resolved.breakpoint().contains("max-width: 800px"));
/// ```
pub fn resolve(base: &StyleSheet, overrides: &StyleOverrides) -> ResolvedStyles {
    let mut sheet = base.clone();
    let mut body_width = None;

    if let Some(width) = overrides.body_width.as_deref() {
        let width = width.trim();
        if !width.is_empty() {
            sheet.set_existing(CONTENT_WIDTH_SELECTOR, "width", width);
            sheet.set_existing(FOOTER_WIDTH_SELECTOR, "width", width);
            body_width = Some(width.to_string());
        }
    }

    if let Some(value) = &overrides.css {
        if let Some(structured) = normalize_structured(value) {
            sheet.merge(&structured);
        }
    }

    if let Some(raw) = overrides.additional_styles.as_deref() {
        sheet.merge(&parse_css(raw));
    }

    ResolvedStyles {
        sheet,
        body_width: body_width.unwrap_or_else(|| DEFAULT_BODY_WIDTH.to_string()),
    }
}

// Normalizes the loosely-typed structured override into the canonical sheet
// shape. Returns None for shapes that don't carry styles at all; inside an
// accepted shape, leaves that aren't scalars are dropped individually.
fn normalize_structured(value: &Value) -> Option<StyleSheet> {
    match value {
        // Raw CSS smuggled through the structured slot.
        Value::String(raw) => Some(parse_css(raw)),
        Value::Object(selectors) => {
            let mut sheet = StyleSheet::new();
            for (selector, props) in selectors {
                let Value::Object(props) = props else {
                    continue;
                };
                let mut set = PropertySet::new();
                for (name, value) in props {
                    if let Some(text) = scalar_to_string(value) {
                        set.insert(name.clone(), text);
                    }
                }
                if !set.is_empty() {
                    sheet.merge_selector(selector.clone(), &set);
                }
            }
            Some(sheet)
        }
        _ => None,
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> StyleSheet {
        let mut sheet = StyleSheet::new();
        sheet.set("body", "background-color", "#F2F4F6");
        sheet.set("body", "color", "#74787E");
        sheet.set(CONTENT_WIDTH_SELECTOR, "width", "570px");
        sheet.set(FOOTER_WIDTH_SELECTOR, "width", "570px");
        sheet
    }

    #[test]
    fn test_resolve_without_overrides_copies_base() {
        let base = base();
        let resolved = resolve(&base, &StyleOverrides::default());
        assert_eq!(resolved.sheet(), &base);
        assert_eq!(resolved.body_width(), DEFAULT_BODY_WIDTH);
    }

    #[test]
    fn test_resolve_never_mutates_base() {
        let base = base();
        let overrides = StyleOverrides {
            body_width: Some("800px".into()),
            css: Some(json!({"body": {"background-color": "#FF0000"}})),
            additional_styles: Some(".custom { color: red; }".into()),
        };
        let _ = resolve(&base, &overrides);

        assert_eq!(base.get_property("body", "background-color"), Some("#F2F4F6"));
        assert_eq!(base.get_property(CONTENT_WIDTH_SELECTOR, "width"), Some("570px"));
        assert!(!base.contains(".custom"));
    }

    #[test]
    fn test_body_width_rewrites_both_selectors() {
        let resolved = resolve(
            &base(),
            &StyleOverrides {
                body_width: Some("800px".into()),
                ..Default::default()
            },
        );
        assert_eq!(
            resolved.sheet().get_property(CONTENT_WIDTH_SELECTOR, "width"),
            Some("800px")
        );
        assert_eq!(
            resolved.sheet().get_property(FOOTER_WIDTH_SELECTOR, "width"),
            Some("800px")
        );
        assert_eq!(resolved.body_width(), "800px");
        assert!(resolved.breakpoint().contains("max-width: 800px"));
    }

    #[test]
    fn test_body_width_missing_selector_is_noop() {
        let mut tiny = StyleSheet::new();
        tiny.set("body", "color", "red");

        let resolved = resolve(
            &tiny,
            &StyleOverrides {
                body_width: Some("800px".into()),
                ..Default::default()
            },
        );
        assert!(!resolved.sheet().contains(CONTENT_WIDTH_SELECTOR));
        assert!(!resolved.sheet().contains(FOOTER_WIDTH_SELECTOR));
        // The width still drives the breakpoint.
        assert_eq!(resolved.body_width(), "800px");
    }

    #[test]
    fn test_empty_body_width_falls_back_to_default() {
        let resolved = resolve(
            &base(),
            &StyleOverrides {
                body_width: Some("  ".into()),
                ..Default::default()
            },
        );
        assert_eq!(
            resolved.sheet().get_property(CONTENT_WIDTH_SELECTOR, "width"),
            Some("570px")
        );
        assert_eq!(resolved.body_width(), DEFAULT_BODY_WIDTH);
    }

    #[test]
    fn test_structured_override_wins_over_base() {
        let resolved = resolve(
            &base(),
            &StyleOverrides {
                css: Some(json!({"body": {"background-color": "#FF0000"}})),
                ..Default::default()
            },
        );
        assert_eq!(
            resolved.sheet().get_property("body", "background-color"),
            Some("#FF0000")
        );
        // Non-colliding base properties survive.
        assert_eq!(resolved.sheet().get_property("body", "color"), Some("#74787E"));
    }

    #[test]
    fn test_raw_css_wins_over_structured() {
        let resolved = resolve(
            &base(),
            &StyleOverrides {
                css: Some(json!({"body": {"background-color": "#00FF00", "margin": "8px"}})),
                additional_styles: Some("body { background-color: #0000FF; }".into()),
                ..Default::default()
            },
        );
        // Raw CSS wins only on the colliding property.
        assert_eq!(
            resolved.sheet().get_property("body", "background-color"),
            Some("#0000FF")
        );
        // Non-colliding structured property survives.
        assert_eq!(resolved.sheet().get_property("body", "margin"), Some("8px"));
    }

    #[test]
    fn test_new_selectors_inserted_verbatim() {
        let resolved = resolve(
            &base(),
            &StyleOverrides {
                css: Some(json!({".custom-class": {"font-size": "20px"}})),
                additional_styles: Some(".raw-class { color: red; }".into()),
                ..Default::default()
            },
        );
        assert_eq!(
            resolved.sheet().get_property(".custom-class", "font-size"),
            Some("20px")
        );
        assert_eq!(resolved.sheet().get_property(".raw-class", "color"), Some("red"));
    }

    #[test]
    fn test_structured_scalars_are_stringified() {
        let resolved = resolve(
            &base(),
            &StyleOverrides {
                css: Some(json!({"body": {"line-height": 1.4, "z-index": 2, "mso-hide": true}})),
                ..Default::default()
            },
        );
        assert_eq!(resolved.sheet().get_property("body", "line-height"), Some("1.4"));
        assert_eq!(resolved.sheet().get_property("body", "z-index"), Some("2"));
        assert_eq!(resolved.sheet().get_property("body", "mso-hide"), Some("true"));
    }

    #[test]
    fn test_unrecognized_structured_shapes_are_skipped() {
        for value in [json!(42), json!(["body"]), json!(null), json!(true)] {
            let resolved = resolve(
                &base(),
                &StyleOverrides {
                    css: Some(value),
                    ..Default::default()
                },
            );
            assert_eq!(resolved.sheet(), &base());
        }
    }

    #[test]
    fn test_structured_non_scalar_leaves_dropped_individually() {
        let resolved = resolve(
            &base(),
            &StyleOverrides {
                css: Some(json!({
                    "body": {"background-color": "#FF0000", "nested": {"x": 1}},
                    ".weird": "not an object"
                })),
                ..Default::default()
            },
        );
        assert_eq!(
            resolved.sheet().get_property("body", "background-color"),
            Some("#FF0000")
        );
        assert_eq!(resolved.sheet().get_property("body", "nested"), None);
        assert!(!resolved.sheet().contains(".weird"));
    }

    #[test]
    fn test_structured_string_shape_is_raw_css() {
        let resolved = resolve(
            &base(),
            &StyleOverrides {
                css: Some(json!("body { background-color: #ABCDEF; }")),
                ..Default::default()
            },
        );
        assert_eq!(
            resolved.sheet().get_property("body", "background-color"),
            Some("#ABCDEF")
        );
    }

    #[test]
    fn test_malformed_raw_css_degrades_to_noop() {
        let resolved = resolve(
            &base(),
            &StyleOverrides {
                additional_styles: Some("span { missing colon }".into()),
                ..Default::default()
            },
        );
        assert_eq!(resolved.sheet(), &base());
    }

    #[test]
    fn test_resolution_is_never_subtractive() {
        let base = base();
        let resolved = resolve(
            &base,
            &StyleOverrides {
                body_width: Some("640px".into()),
                css: Some(json!({".added": {"color": "#fff"}})),
                additional_styles: Some(".more { margin: 0; }".into()),
            },
        );
        for selector in base.selectors() {
            assert!(resolved.sheet().contains(selector));
            for property in base.get(selector).unwrap().keys() {
                assert!(resolved
                    .sheet()
                    .get_property(selector, property)
                    .is_some());
            }
        }
    }

    #[test]
    fn test_overrides_is_empty() {
        assert!(StyleOverrides::default().is_empty());
        assert!(!StyleOverrides {
            body_width: Some("800px".into()),
            ..Default::default()
        }
        .is_empty());
    }
}
