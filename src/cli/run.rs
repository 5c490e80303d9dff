//! Per-project pipeline: discover → extract → assess → generate.

use anyhow::Result;
use console::{style, Emoji};
use std::fs;

use super::Args;
use crate::discover::discover_projects;
use crate::extract::{
    assess_complexity, extract_changelog_updates, extract_metadata, extract_principles,
    extract_readme_content,
};
use crate::generate::write_project_docs;
use crate::types::ReadmeContent;

static ANALYZING: Emoji<'_, '_> = Emoji("🔍 ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");
static ERROR: Emoji<'_, '_> = Emoji("❌ ", "");

/// Run the full analysis over every discovered project.
///
/// Discovery failures are fatal; anything after that is best-effort. A
/// project whose documents fail to write is reported and skipped, and files
/// already written for it stay on disk.
pub fn run(args: &Args) -> Result<()> {
    let projects = discover_projects(&args.project_dir, args.project.as_deref())?;

    if projects.is_empty() {
        println!("No projects found under {}", args.project_dir.display());
        return Ok(());
    }

    println!(
        "{}Analyzing {} project(s) in {}\n",
        ANALYZING,
        projects.len(),
        args.project_dir.display()
    );

    let mut generated = 0usize;
    let mut failed = 0usize;

    for project in &projects {
        let metadata = extract_metadata(project);
        let (complexity, _signals) = assess_complexity(project, &metadata);

        let readme = if metadata.has_readme {
            fs::read_to_string(project.join("README.md"))
                .map(|text| extract_readme_content(&text))
                .unwrap_or_default()
        } else {
            ReadmeContent::default()
        };
        let principles = extract_principles(project, &metadata);
        let updates = extract_changelog_updates(project);

        match write_project_docs(
            &args.output_dir,
            &metadata,
            &principles,
            &readme,
            &updates,
            complexity,
        ) {
            Ok(written) => {
                println!(
                    "  {} [{}] {} document(s)",
                    style(&metadata.name).green(),
                    complexity.as_str(),
                    written.len()
                );
                generated += written.len();
            }
            Err(e) => {
                eprintln!("  {}{}: {:#}", ERROR, style(&metadata.name).red(), e);
                failed += 1;
            }
        }
    }

    println!(
        "\n{}Done: {} document(s) written to {}",
        SUCCESS,
        style(generated).green(),
        args.output_dir.display()
    );
    if failed > 0 {
        println!("  {} project(s) had write failures", style(failed).red());
    }

    Ok(())
}
