//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait which lets herald work
//! with different template backends. The default implementation is
//! [`MiniJinjaEngine`]. Templates registered under a name ending in `.html`
//! get HTML auto-escaping; raw-HTML values (markdown output, unsafe fields,
//! the serialized stylesheet) are marked `| safe` in the built-in templates.

use minijinja::{Environment, Value};

use crate::error::RenderError;
use crate::markdown::Markdown;

/// A template engine that can render named templates with data.
///
/// Engines compile and cache templates added via
/// [`add_template`](Self::add_template) and render them later via
/// [`render_named`](Self::render_named) with a serialized context.
pub trait TemplateEngine: Send + Sync {
    /// Adds a named template to the engine.
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError>;

    /// Renders a previously registered template.
    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError>;

    /// Checks if a template with the given name exists.
    fn has_template(&self, name: &str) -> bool;
}

/// MiniJinja-based template engine with herald's filters registered.
///
/// # Example
///
/// ```rust
/// use herald::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let mut engine = MiniJinjaEngine::new();
/// engine.add_template("greeting.txt", "Hello, {{ name }}!").unwrap();
/// let output = engine
///     .render_named("greeting.txt", &json!({"name": "World"}))
///     .unwrap();
/// assert_eq!(output, "Hello, World!");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates a new engine with herald's filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        register_filters(&mut env);
        Self { env }
    }

    /// Returns a reference to the underlying MiniJinja environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Returns a mutable reference to the underlying MiniJinja environment,
    /// for registering custom filters or functions.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        let value = Value::from_serialize(data);
        Ok(tmpl.render(value)?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }
}

/// Registers herald's custom filters with a MiniJinja environment.
///
/// Called automatically by [`MiniJinjaEngine::new`]. If you're driving an
/// environment directly, call this to get herald's filters.
pub fn register_filters(env: &mut Environment<'static>) {
    // Markdown source to an HTML fragment. The result is raw HTML, so
    // templates pair it with `| safe`.
    env.add_filter("markdown", |source: String| -> String {
        Markdown::new(source).to_html()
    });
}
