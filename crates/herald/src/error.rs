//! Error types for email generation.
//!
//! This module provides [`RenderError`], the error type for the generation
//! entry points. It abstracts over the underlying template engine's errors,
//! providing a stable public API. Style resolution itself never fails — only
//! templating, context serialization and CSS inlining can.

use std::fmt;

/// Error type for email generation operations.
#[derive(Debug)]
pub enum RenderError {
    /// Template syntax error, unknown template, or render failure.
    Template(String),

    /// Context data serialization error.
    Serialization(String),

    /// Failure reported by a configured CSS inliner.
    Inlining(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Template(msg) => write!(f, "template error: {}", msg),
            RenderError::Serialization(msg) => write!(f, "serialization error: {}", msg),
            RenderError::Inlining(msg) => write!(f, "css inlining error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::BadSerialization => RenderError::Serialization(err.to_string()),
            _ => RenderError::Template(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}
