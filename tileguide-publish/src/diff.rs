//! Unified diff between the published page and a fresh render.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use tileguide_core::guide;
use tileguide_renderer::Renderer;

use crate::{error::io_err, writer::normalize_line_endings, PublishError};

/// Diff of a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Compare `rendered` with the file at `path` (a missing file counts as empty).
///
/// Returns `None` when they match. No files are written.
pub fn diff_page(path: &Path, rendered: &str) -> Result<Option<PageDiff>, PublishError> {
    let rendered = normalize_line_endings(rendered);
    let existing = read_existing_or_empty(path)?;
    if existing == rendered {
        return Ok(None);
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let old_header = format!("a/{name}");
    let new_header = format!("b/{name}");
    let unified = TextDiff::from_lines(&existing, &rendered)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();

    Ok(Some(PageDiff {
        path: path.to_path_buf(),
        unified_diff: unified,
    }))
}

/// Render the embedded guide and diff it against `path`.
pub fn diff_guide(path: &Path, templates: Option<&Path>) -> Result<Option<PageDiff>, PublishError> {
    let renderer = Renderer::with_overrides(templates)?;
    let html = renderer.render(guide())?;
    diff_page(path, &html)
}

fn read_existing_or_empty(path: &Path) -> Result<String, PublishError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(normalize_line_endings(&String::from_utf8_lossy(&bytes))),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(io_err(path, err)),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::publish_guide;

    use super::*;

    #[test]
    fn no_diff_after_clean_publish() {
        let dir = TempDir::new().expect("dir");
        let path = dir.path().join("index.html");
        publish_guide(&path, None, false).expect("publish");

        let diff = diff_guide(&path, None).expect("diff");
        assert!(diff.is_none(), "published page should have no diff");
    }

    #[test]
    fn local_edit_produces_unified_diff() {
        let dir = TempDir::new().expect("dir");
        let path = dir.path().join("index.html");
        publish_guide(&path, None, false).expect("publish");

        let edited = fs::read_to_string(&path)
            .expect("read")
            .replace("Transport sequencing", "Transport order");
        fs::write(&path, edited).expect("write");

        let diff = diff_guide(&path, None).expect("diff").expect("expected a diff");
        assert!(diff.unified_diff.contains("--- a/index.html"));
        assert!(diff.unified_diff.contains("+++ b/index.html"));
        assert!(diff.unified_diff.contains("@@"));
        assert!(diff.unified_diff.contains("-          <h3>Transport order</h3>"));
        assert!(diff.unified_diff.contains("+          <h3>Transport sequencing</h3>"));
    }

    #[test]
    fn missing_file_diffs_against_empty() {
        let dir = TempDir::new().expect("dir");
        let path = dir.path().join("absent.html");
        let diff = diff_page(&path, "<p>new</p>\n").expect("diff").expect("some");
        assert!(diff.unified_diff.contains("+<p>new</p>"));
        assert!(!path.exists(), "diff must not create files");
    }

    #[test]
    fn non_utf8_file_still_diffs() {
        let dir = TempDir::new().expect("dir");
        let path = dir.path().join("index.html");
        fs::write(&path, [0xff, 0xfe, 0x00]).expect("write");

        let diff = diff_page(&path, "<p>new</p>\n").expect("diff").expect("some");
        assert!(diff.unified_diff.contains("+<p>new</p>"));
    }

    #[test]
    fn crlf_on_disk_is_not_a_difference() {
        let dir = TempDir::new().expect("dir");
        let path = dir.path().join("page.html");
        fs::write(&path, "a\r\nb\r\n").expect("write");
        assert!(diff_page(&path, "a\nb\n").expect("diff").is_none());
    }
}
