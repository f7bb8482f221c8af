//! # Herald - Transactional Email Generation
//!
//! `herald` generates transactional email bodies (HTML and plain text) from
//! a structured content model. Pick a theme, describe the email as data, and
//! get back ready-to-send markup:
//!
//! ```rust
//! use herald::{Action, Body, Button, Email, Herald, Product};
//!
//! let herald = Herald {
//!     product: Product {
//!         name: "Acme".into(),
//!         link: "https://acme.example".into(),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! let email = Email {
//!     body: Body {
//!         name: "Jon Snow".into(),
//!         intros: vec!["Welcome to Acme! We're excited to have you.".into()],
//!         actions: vec![Action {
//!             instructions: "To get started, please click here:".into(),
//!             button: Button {
//!                 text: "Confirm your account".into(),
//!                 link: "https://acme.example/confirm?token=abc".into(),
//!                 ..Default::default()
//!             },
//!             ..Default::default()
//!         }],
//!         ..Default::default()
//!     },
//! };
//!
//! let html = herald.generate_html(&email).unwrap();
//! let text = herald.generate_plain_text(&email).unwrap();
//! assert!(html.contains("Confirm your account"));
//! assert!(text.contains("https://acme.example/confirm?token=abc"));
//! ```
//!
//! ## Styling
//!
//! Each theme owns a base stylesheet; per-email overrides (a body-width
//! directive, structured selector/property data, raw CSS text) are layered
//! on top by the [`herald_styles`] resolution engine and serialized into the
//! document's `<style>` block. Set a [`CssInliner`] on the generator to
//! inline the result for clients that ignore `<style>`.
//!
//! ## Themes
//!
//! Two built-in themes, [`DefaultTheme`] (light) and [`FlatTheme`] (dark,
//! square buttons), share their markup. Implement [`Theme`] to ship your own
//! templates or stylesheet; the resolution algorithm never changes.

mod email;
mod engine;
mod error;
mod generator;
mod inliner;
mod markdown;
mod templates;
mod text_table;
mod theme;

pub use email::{Action, Body, Button, Columns, Email, Entry, Table};
pub use engine::{register_filters, MiniJinjaEngine, TemplateEngine};
pub use error::RenderError;
pub use generator::{Herald, Product, TextDirection};
pub use inliner::{CssInliner, InlineError};
pub use markdown::Markdown;
pub use theme::{DefaultTheme, FlatTheme, Theme};

// The style core is part of herald's public contract; callers build
// `StyleOverrides` and may want the resolution primitives directly.
pub use herald_styles::{StyleOverrides, StyleSheet};
