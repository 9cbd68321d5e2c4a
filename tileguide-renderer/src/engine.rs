//! Tera rendering engine — [`Renderer`].
//!
//! # Template layout
//!
//! | Template                      | Block                              |
//! |-------------------------------|------------------------------------|
//! | `page.html`                   | document shell and head metadata   |
//! | `partials/header.html`        | eyebrow, heading, lede             |
//! | `partials/prerequisites.html` | prerequisites checklist            |
//! | `partials/overview.html`      | procedure overview                 |
//! | `partials/steps.html`         | one card per step                  |
//! | `partials/validation.html`    | validation tips                    |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use tileguide_core::types::Guide;

use crate::context::PageContext;
use crate::error::RenderError;

/// Entry template rendered for the page.
pub const PAGE_TEMPLATE: &str = "page.html";

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    (PAGE_TEMPLATE, include_str!("templates/page.html")),
    ("partials/header.html", include_str!("templates/partials/header.html")),
    (
        "partials/prerequisites.html",
        include_str!("templates/partials/prerequisites.html"),
    ),
    ("partials/overview.html", include_str!("templates/partials/overview.html")),
    ("partials/steps.html", include_str!("templates/partials/steps.html")),
    (
        "partials/validation.html",
        include_str!("templates/partials/validation.html"),
    ),
];

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

/// HTML escape used for every `{{ }}` expression.
///
/// Unlike Tera's default this leaves `/` alone, so transaction paths such as
/// `/UI2/FLPD_CUST` stay readable in the generated source.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy()
        .replace('\\', "/")
        .to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

/// Read every `.html` file below `dir`, keyed by its lowercased relative path.
///
/// Both the name and the extension match case-insensitively.
fn load_override_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    files.sort();
    let mut templates = Vec::new();
    for path in files {
        let is_html = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("html"));
        if !is_html {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(override_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert((*name).to_string(), (*content).to_string());
    }
    if let Some(dir) = override_dir {
        for (name, content) in load_override_templates(dir)? {
            tracing::debug!("template override: {name}");
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    tera.add_raw_templates(templates.into_iter().collect::<Vec<_>>())?;
    tera.set_escape_fn(escape_text);
    Ok(tera)
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders a [`Guide`] into a complete HTML document.
///
/// Holds only the compiled templates; create once and reuse. Rendering is
/// pure, so the same guide always yields byte-identical output.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a [`Renderer`] with the embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_overrides(None)
    }

    /// Construct a [`Renderer`], replacing embedded templates with any `.html`
    /// files found under `override_dir` (matched by relative path, e.g.
    /// `partials/steps.html`).
    pub fn with_overrides(override_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(override_dir)?;
        Ok(Renderer { tera })
    }

    /// Render the page for `guide`.
    pub fn render(&self, guide: &Guide) -> Result<String, RenderError> {
        let ctx = PageContext::from_guide(guide);
        self.render_with_context(&ctx)
    }

    /// Render the page from a caller-provided [`PageContext`].
    ///
    /// Line endings are normalised to LF.
    pub fn render_with_context(&self, ctx: &PageContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let html = self.tera.render(PAGE_TEMPLATE, &tera_ctx)?;
        tracing::debug!(steps = ctx.steps.len(), bytes = html.len(), "rendered page");
        Ok(html.replace("\r\n", "\n"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
