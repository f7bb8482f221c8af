//! Minimal CSS-subset parser.
//!
//! Parses `selector[, selector...] { prop: value; ... }` blocks into a
//! [`StyleSheet`]. This is deliberately not a CSS engine: no nesting, no
//! media-query bodies, no value tokenization. It exists so callers can hand
//! the override engine raw CSS text, and it is permissive by design —
//! malformed declarations are dropped silently rather than aborting email
//! generation over caller-authored free text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::sheet::{PropertySet, StyleSheet};

// A rule block: selector text up to `{`, body text up to the matching `}`.
// Both may span lines.
static BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)([^{}]+)\{([^{}]+)\}").expect("block pattern compiles"));

// `/* ... */` comments inside a declaration body.
static BODY_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("comment pattern compiles"));

/// Parses a raw CSS string into a [`StyleSheet`].
///
/// Behavior, in order:
///
/// - Standalone comment lines (a trimmed line that starts with `/*`, ends
///   with `*/` and contains no `{`) are dropped before block extraction.
///   Comments embedded in a selector line are kept verbatim as part of the
///   selector text, so two `@font-face /* v1 */` and `@font-face /* v2 */`
///   blocks stay distinct map keys.
/// - Comments inside a declaration body are stripped.
/// - Declarations split on `;`, then on the first `:`. A declaration with
///   no colon, or an empty key or value after trimming, is discarded.
/// - A block that yields no valid declarations is skipped entirely.
/// - Comma-separated selectors each receive the block's full property set.
/// - A selector seen again in a later block is merged property-by-property,
///   with the later block winning on collision.
///
/// Never fails: unparseable input degrades to an empty (or partial) sheet.
///
/// # Example
///
/// ```rust
/// use herald_styles::parse_css;
///
/// let sheet = parse_css(".a, .b { font-size: 14px; }");
/// assert_eq!(sheet.get_property(".a", "font-size"), Some("14px"));
/// assert_eq!(sheet.get_property(".b", "font-size"), Some("14px"));
/// ```
pub fn parse_css(css: &str) -> StyleSheet {
    let mut sheet = StyleSheet::new();

    let cleaned: Vec<&str> = css
        .lines()
        .filter(|line| !is_standalone_comment(line))
        .collect();
    let cleaned = cleaned.join("\n");

    for caps in BLOCK.captures_iter(&cleaned) {
        let selector_part = caps[1].trim();
        let body_part = caps[2].trim();
        if selector_part.is_empty() || body_part.is_empty() {
            continue;
        }

        let body = BODY_COMMENT.replace_all(body_part, "");
        let props = parse_declarations(&body);
        if props.is_empty() {
            continue;
        }

        for selector in selector_part.split(',') {
            let selector = selector.trim();
            if selector.is_empty() {
                continue;
            }
            sheet.merge_selector(selector, &props);
        }
    }

    sheet
}

fn is_standalone_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("/*") && trimmed.ends_with("*/") && !trimmed.contains('{')
}

fn parse_declarations(body: &str) -> PropertySet {
    let mut props = PropertySet::new();
    for decl in body.split(';') {
        let decl = decl.trim();
        if decl.is_empty() {
            continue;
        }
        if let Some((key, value)) = decl.split_once(':') {
            let key = key.trim();
            let value = value.trim();
            if !key.is_empty() && !value.is_empty() {
                props.insert(key.to_string(), value.to_string());
            }
        }
    }
    props
}
