//! Tileguide — render the SAP Fiori tile to t-code guide page.
//!
//! # Usage
//!
//! ```text
//! tileguide render [--out <path>] [--dry-run] [--templates <dir>]
//! tileguide outline [--json]
//! tileguide diff --out <path> [--templates <dir>]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{diff::DiffArgs, outline::OutlineArgs, render::RenderArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "tileguide",
    version,
    about = "Render the SAP Fiori tile to transaction code guide as a static HTML page",
    long_about = None,
)]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the guide page to stdout or to a file.
    Render(RenderArgs),

    /// List the procedure steps and prerequisites.
    Outline(OutlineArgs),

    /// Show a unified diff between a published page and a fresh render.
    Diff(DiffArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Render(args) => args.run(),
        Commands::Outline(args) => args.run(),
        Commands::Diff(args) => args.run(),
    }
}
