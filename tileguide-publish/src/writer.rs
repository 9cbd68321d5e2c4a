//! Hash-gated atomic writer.
//!
//! ## `write_page` protocol
//!
//! 1. Normalise line endings to LF.
//! 2. SHA-256 the rendered content.
//! 3. SHA-256 the file currently on disk (if any).
//! 4. Identical digests → skip.
//! 5. Write to `<path>.tileguide.tmp`.
//! 6. Rename to final path (atomic on POSIX).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use tileguide_core::guide;
use tileguide_renderer::Renderer;

use crate::error::{io_err, PublishError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of publishing the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — on-disk content already matches.
    Unchanged { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path }
            | WriteResult::Unchanged { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// Hashing
// ---------------------------------------------------------------------------

pub(crate) fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}

/// Byte-level CRLF to LF, for files on disk that may not be UTF-8.
fn normalize_line_ending_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter().peekable();
    while let Some(&b) = iter.next() {
        if b == b'\r' && iter.peek() == Some(&&b'\n') {
            continue;
        }
        out.push(b);
    }
    out
}

fn digest(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

/// Digest of the normalised file at `path`, or `None` when it does not exist.
///
/// Hashed as raw bytes so a non-UTF-8 leftover is simply replaced.
fn existing_digest(path: &Path) -> Result<Option<String>, PublishError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(digest(&normalize_line_ending_bytes(&bytes)))),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_err(path, err)),
    }
}

// ---------------------------------------------------------------------------
// write_page
// ---------------------------------------------------------------------------

/// Atomically write `content` to `path` unless the file already holds it.
pub fn write_page(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, PublishError> {
    let tmp = PathBuf::from(format!("{}.tileguide.tmp", path.display()));
    write_page_with_tmp(path, content, dry_run, &tmp)
}

fn write_page_with_tmp(
    path: &Path,
    content: &str,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, PublishError> {
    let normalized = normalize_line_endings(content);
    let content = normalized.as_str();

    if existing_digest(path)?.as_deref() == Some(digest(content.as_bytes()).as_str()) {
        tracing::debug!("unchanged: {}", path.display());
        return Ok(WriteResult::Unchanged {
            path: path.to_path_buf(),
        });
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if let Some(tmp_parent) = tmp.parent() {
        std::fs::create_dir_all(tmp_parent).map_err(|e| io_err(tmp_parent, e))?;
    }
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// publish_guide
// ---------------------------------------------------------------------------

/// Render the embedded guide and write it to `path`.
///
/// `templates` optionally points at a directory of override templates.
pub fn publish_guide(
    path: &Path,
    templates: Option<&Path>,
    dry_run: bool,
) -> Result<WriteResult, PublishError> {
    let renderer = Renderer::with_overrides(templates)?;
    let html = renderer.render(guide())?;
    write_page(path, &html, dry_run)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
