//! Error types for tileguide-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from page rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error (parse, missing variable, context build).
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Filesystem error while loading override templates.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}
