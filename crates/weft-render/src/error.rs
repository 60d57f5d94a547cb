//! Render error types.

use thiserror::Error;

/// Errors surfaced while composing or delivering a page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A deferred fragment's computation failed.
    #[error("fragment failed: {0}")]
    Fragment(#[from] anyhow::Error),

    /// The output sink rejected a chunk.
    #[error("sink error: {0}")]
    Sink(String),
}
