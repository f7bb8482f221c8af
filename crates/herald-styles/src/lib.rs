//! # Herald Styles - Stylesheet Resolution for Transactional Email
//!
//! `herald-styles` is the style core of the `herald` email generator: a
//! stylesheet-as-data model, a permissive CSS-subset parser, theme base
//! stylesheets, and the override resolution engine that layers per-email
//! directives on top of a theme.
//!
//! Everything here is a pure, synchronous computation. The theme datasets
//! are immutable statics cloned on every access, so any number of email
//! generation calls can resolve styles concurrently without coordination.
//!
//! ## Resolution pipeline
//!
//! ```rust
//! use herald_styles::{resolve, theme_styles, StyleOverrides};
//! use serde_json::json;
//!
//! let overrides = StyleOverrides {
//!     body_width: Some("800px".into()),
//!     css: Some(json!({"body": {"background-color": "#FF0000"}})),
//!     additional_styles: Some(".custom { color: red; }".into()),
//! };
//!
//! let resolved = resolve(&theme_styles("flat"), &overrides);
//!
//! assert_eq!(
//!     resolved.sheet().get_property("body", "background-color"),
//!     Some("#FF0000")
//! );
//! let css = resolved.to_css();
//! assert!(css.contains("width: 800px"));
//! assert!(resolved.breakpoint().contains("max-width: 800px"));
//! ```
//!
//! ## Failure policy
//!
//! Resolution never errors. Malformed CSS declarations are discarded,
//! unrecognized override shapes count as "no override", and a body-width
//! directive targeting a selector the theme doesn't define is a no-op.
//! Whatever the input, the engine produces some valid stylesheet.

mod parser;
mod resolve;
mod serialize;
mod sheet;
mod theme;

pub use parser::parse_css;
pub use resolve::{
    resolve, ResolvedStyles, StyleOverrides, CONTENT_WIDTH_SELECTOR, DEFAULT_BODY_WIDTH,
    FOOTER_WIDTH_SELECTOR,
};
pub use serialize::{breakpoint, to_css};
pub use sheet::{PropertySet, StyleSheet};
pub use theme::{default_styles, flat_styles, theme_styles, DEFAULT_THEME, FLAT_THEME};
