//! CSS inlining seam.
//!
//! Many email clients ignore `<style>` blocks, so production senders inline
//! the stylesheet into each element's `style` attribute before sending.
//! Herald treats that step as a black-box post-processor: configure an
//! implementation on [`Herald`](crate::Herald) and generated HTML is passed
//! through it. Without one, the document keeps its `<style>` block.

/// Error type reported by a CSS inliner implementation.
pub type InlineError = Box<dyn std::error::Error + Send + Sync>;

/// Copies stylesheet rules into matching elements' inline `style` attributes.
///
/// Implementations receive a complete HTML document with a `<style>` block
/// and return an equivalent document with styles inlined.
///
/// # Example
///
/// ```rust
/// use herald::{CssInliner, InlineError};
///
/// struct Passthrough;
///
/// impl CssInliner for Passthrough {
///     fn inline(&self, html: &str) -> Result<String, InlineError> {
///         Ok(html.to_string())
///     }
/// }
/// ```
pub trait CssInliner: Send + Sync {
    /// Transforms an HTML document by inlining its stylesheet.
    fn inline(&self, html: &str) -> Result<String, InlineError>;
}

impl<F> CssInliner for F
where
    F: Fn(&str) -> Result<String, InlineError> + Send + Sync,
{
    fn inline(&self, html: &str) -> Result<String, InlineError> {
        self(html)
    }
}
