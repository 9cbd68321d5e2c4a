//! `tileguide render` — render the guide page to stdout or a file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tileguide_core::guide;
use tileguide_publish::{publish_guide, WriteResult};
use tileguide_renderer::Renderer;

/// Arguments for `tileguide render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Write the page to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Show whether the file would change without writing it.
    #[arg(long, requires = "out")]
    pub dry_run: bool,

    /// Directory of `.html` templates overriding the embedded ones.
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let Some(out) = self.out else {
            let renderer = Renderer::with_overrides(self.templates.as_deref())
                .context("failed to load templates")?;
            let html = renderer.render(guide()).context("failed to render page")?;
            tracing::debug!("writing {} bytes to stdout", html.len());
            std::io::stdout()
                .write_all(html.as_bytes())
                .context("failed to write page to stdout")?;
            return Ok(());
        };

        let result = publish_guide(&out, self.templates.as_deref(), self.dry_run)
            .with_context(|| format!("failed to publish '{}'", out.display()))?;
        print_result(&result, self.dry_run);
        Ok(())
    }
}

fn print_result(result: &WriteResult, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    match result {
        WriteResult::Written { path } => println!("{prefix}✎  {}", path.display()),
        WriteResult::WouldWrite { path } => println!("{prefix}~  {}", path.display()),
        WriteResult::Unchanged { path } => println!("{prefix}·  {} (unchanged)", path.display()),
    }
}
