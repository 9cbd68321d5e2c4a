//! `tileguide outline` — summary of the embedded guide.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use tileguide_core::{guide, Guide, ProcedureStep};

/// Arguments for `tileguide outline`.
#[derive(Args, Debug)]
pub struct OutlineArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl OutlineArgs {
    pub fn run(self) -> Result<()> {
        let outline = build_outline(guide());
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&outline).context("failed to serialize outline JSON")?
            );
            return Ok(());
        }

        print_table(outline);
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct Outline {
    title: &'static str,
    prerequisite_count: usize,
    step_count: usize,
    prerequisites: Vec<&'static str>,
    steps: Vec<StepOutline>,
}

#[derive(Debug, Serialize)]
struct StepOutline {
    badge: String,
    title: &'static str,
    highlights: usize,
    screenshot: &'static str,
}

#[derive(Tabled)]
struct StepTableRow {
    #[tabled(rename = "step")]
    badge: String,
    #[tabled(rename = "title")]
    title: &'static str,
    #[tabled(rename = "tips")]
    highlights: usize,
    #[tabled(rename = "screenshot")]
    screenshot: &'static str,
}

fn build_outline(guide: &'static Guide) -> Outline {
    Outline {
        title: guide.meta.title,
        prerequisite_count: guide.prerequisites.len(),
        step_count: guide.steps.len(),
        prerequisites: guide.prerequisites.iter().map(|p| p.as_str()).collect(),
        steps: guide
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| StepOutline {
                badge: ProcedureStep::badge(i),
                title: step.title,
                highlights: step.highlights.len(),
                screenshot: step.screenshot.path,
            })
            .collect(),
    }
}

fn print_table(outline: Outline) {
    println!("{}", outline.title.bold());
    println!(
        "{} prerequisites | {} steps",
        outline.prerequisite_count, outline.step_count
    );

    for item in &outline.prerequisites {
        println!("  {} {item}", "■".green());
    }

    let rows: Vec<StepTableRow> = outline
        .steps
        .into_iter()
        .map(|s| StepTableRow {
            badge: s.badge,
            title: s.title,
            highlights: s.highlights,
            screenshot: s.screenshot,
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_mirrors_guide() {
        let outline = build_outline(guide());
        assert_eq!(outline.steps.len(), 6);
        assert_eq!(outline.prerequisites.len(), 4);
        assert_eq!(outline.steps[0].badge, "Step 1");
        assert_eq!(outline.steps[0].title, "Launch SAP Fiori Launchpad Designer");
        assert_eq!(outline.steps[3].highlights, 3);
        assert_eq!(outline.prerequisite_count, outline.prerequisites.len());
        assert_eq!(outline.step_count, outline.steps.len());
    }
}
