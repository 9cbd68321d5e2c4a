//! Error types for tileguide-publish.

use std::path::PathBuf;

use thiserror::Error;

use tileguide_renderer::RenderError;

/// All errors that can arise while publishing the rendered page.
#[derive(Debug, Error)]
pub enum PublishError {
    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`PublishError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> PublishError {
    PublishError::Io {
        path: path.into(),
        source,
    }
}
