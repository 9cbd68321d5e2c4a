//! `tileguide diff --out <path>` — show what `render --out` would change.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tileguide_publish::diff_guide;

/// Arguments for `tileguide diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Published page to compare against.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub out: PathBuf,

    /// Directory of `.html` templates overriding the embedded ones.
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let diff = diff_guide(&self.out, self.templates.as_deref())
            .with_context(|| format!("diff failed for '{}'", self.out.display()))?;

        let Some(diff) = diff else {
            println!("No differences for '{}'.", self.out.display());
            return Ok(());
        };

        print!("{}", diff.unified_diff);
        if !diff.unified_diff.ends_with('\n') {
            println!();
        }
        Ok(())
    }
}
