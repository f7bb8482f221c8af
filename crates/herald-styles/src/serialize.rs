//! Stylesheet serialization.
//!
//! Turns a [`StyleSheet`] back into CSS text embeddable in a document head,
//! and produces the responsive breakpoint fragment whose threshold matches
//! the resolved body width. Output order is sorted by selector, so identical
//! input always serializes identically.

use std::fmt::Write;

use crate::resolve::{CONTENT_WIDTH_SELECTOR, FOOTER_WIDTH_SELECTOR};
use crate::sheet::StyleSheet;

/// Renders a stylesheet as CSS text, one block per selector in sorted order.
///
/// Selector text, property names and values appear verbatim — including any
/// comment tokens preserved in selector keys and `!important` suffixes in
/// values.
pub fn to_css(sheet: &StyleSheet) -> String {
    let mut out = String::new();
    for (selector, props) in sheet.iter() {
        let _ = writeln!(out, "{} {{", selector);
        for (name, value) in props {
            let _ = writeln!(out, "  {}: {};", name, value);
        }
        out.push_str("}\n");
    }
    out
}

/// Renders the responsive breakpoint for the given body width.
///
/// The media threshold equals the width written into the static `width`
/// properties, collapsing the content and footer columns on narrow screens.
/// Keeping the two in lockstep is the engine's top invariant.
pub fn breakpoint(width: &str) -> String {
    format!(
        "@media only screen and (max-width: {}) {{\n  {},\n  {} {{\n    width: 100% !important;\n  }}\n}}\n",
        width, CONTENT_WIDTH_SELECTOR, FOOTER_WIDTH_SELECTOR
    )
}
