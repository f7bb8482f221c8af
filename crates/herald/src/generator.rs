//! The email generator: themes, product branding and the generation
//! pipeline.
//!
//! [`Herald`] ties everything together. For each generation call it fills
//! unset content fields with defaults, resolves the theme's stylesheet
//! against the email's style overrides, renders the theme's template through
//! the engine, and (for HTML, when configured) passes the document through
//! the CSS inliner.

use serde::{Deserialize, Serialize};
use tracing::warn;

use herald_styles::resolve;

use crate::email::{Body, Email};
use crate::engine::{MiniJinjaEngine, TemplateEngine};
use crate::error::RenderError;
use crate::inliner::CssInliner;
use crate::text_table;
use crate::theme::{DefaultTheme, Theme};

const HTML_TEMPLATE_NAME: &str = "email.html";
const PLAIN_TEMPLATE_NAME: &str = "email.txt";

/// Direction of the text in the HTML email.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left to right (the default).
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// The product (brand) sending the email, shown in header and footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub name: String,
    /// Link to the product's website.
    pub link: String,
    /// URL of the product's logo, shown in the masthead instead of the name.
    pub logo: String,
    pub copyright: String,
    /// Sentence shown near the end of the email for users having trouble
    /// with a button. `{ACTION}` is substituted with the button text.
    pub trouble_text: String,
}

impl Product {
    fn with_defaults(&self) -> Product {
        let mut product = self.clone();
        if product.name.is_empty() {
            product.name = "Herald".to_string();
        }
        if product.copyright.is_empty() {
            product.copyright = "Copyright © 2025 Herald. All rights reserved.".to_string();
        }
        if product.trouble_text.is_empty() {
            product.trouble_text = "If you're having trouble with the button '{ACTION}', \
                                    copy and paste the URL below into your web browser."
                .to_string();
        }
        product
    }
}

/// An instance of the email generator.
///
/// # Example
///
/// ```rust
/// use herald::{Body, Email, Herald, Product};
///
/// let herald = Herald {
///     product: Product {
///         name: "Acme".into(),
///         link: "https://acme.example".into(),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
///
/// let email = Email {
///     body: Body {
///         name: "Jon".into(),
///         intros: vec!["Welcome aboard!".into()],
///         ..Default::default()
///     },
/// };
///
/// let html = herald.generate_html(&email).unwrap();
/// assert!(html.contains("Hi Jon,"));
/// let text = herald.generate_plain_text(&email).unwrap();
/// assert!(text.contains("Welcome aboard!"));
/// ```
pub struct Herald {
    /// The visual theme; defaults to [`DefaultTheme`].
    pub theme: Box<dyn Theme>,
    pub text_direction: TextDirection,
    pub product: Product,
    /// Optional post-processor that inlines the stylesheet into elements'
    /// `style` attributes. When unset the document keeps its `<style>` block.
    pub css_inliner: Option<Box<dyn CssInliner>>,
}

impl Default for Herald {
    fn default() -> Self {
        Self {
            theme: Box::new(DefaultTheme),
            text_direction: TextDirection::default(),
            product: Product::default(),
            css_inliner: None,
        }
    }
}

#[derive(Serialize)]
struct HtmlContext<'a> {
    product: &'a Product,
    text_direction: TextDirection,
    body: &'a Body,
    stylesheet: String,
    breakpoint: String,
}

#[derive(Serialize)]
struct PlainTextContext<'a> {
    product: &'a Product,
    body: &'a Body,
    plain_tables: Vec<String>,
}

impl Herald {
    /// Generates the HTML variant of the email, for modern email clients.
    pub fn generate_html(&self, email: &Email) -> Result<String, RenderError> {
        let body = prepare_body(email);
        let product = self.product.with_defaults();

        let resolved = resolve(&self.theme.styles(), &body.template_overrides);
        let context = serde_json::to_value(HtmlContext {
            product: &product,
            text_direction: self.text_direction,
            body: &body,
            stylesheet: resolved.to_css(),
            breakpoint: resolved.breakpoint(),
        })?;

        let mut engine = MiniJinjaEngine::new();
        engine.add_template(HTML_TEMPLATE_NAME, self.theme.html_template())?;
        let html = engine.render_named(HTML_TEMPLATE_NAME, &context)?;

        match &self.css_inliner {
            Some(inliner) => inliner
                .inline(&html)
                .map_err(|err| RenderError::Inlining(err.to_string())),
            None => Ok(html),
        }
    }

    /// Generates the plain-text variant of the email, for old clients and
    /// multipart fallbacks. No styles, no markup; data tables are rendered
    /// as bordered text grids.
    pub fn generate_plain_text(&self, email: &Email) -> Result<String, RenderError> {
        let body = prepare_body(email);
        let product = self.product.with_defaults();

        let plain_tables = body
            .tables
            .iter()
            .map(text_table::render_table)
            .filter(|rendered| !rendered.is_empty())
            .collect();
        let context = serde_json::to_value(PlainTextContext {
            product: &product,
            body: &body,
            plain_tables,
        })?;

        let mut engine = MiniJinjaEngine::new();
        engine.add_template(PLAIN_TEMPLATE_NAME, self.theme.plain_text_template())?;
        engine.render_named(PLAIN_TEMPLATE_NAME, &context)
    }
}

// Applies content defaults and folds the deprecated `table` field into
// `tables` so templates only deal with the list form.
fn prepare_body(email: &Email) -> Body {
    let mut body = email.body.with_defaults();
    if !body.table.data.is_empty() {
        warn!("Email body `table` field is deprecated, use `tables` instead");
        let table = std::mem::take(&mut body.table);
        body.tables.push(table);
    }
    body
}
