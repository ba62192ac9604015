// crates/scaffold_project/src/lib.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use check_required_documents::check_required_documents;
use extract_labeled_block::{
    extract_all_labeled_blocks, extract_block_in_section, extract_labeled_block,
};
use write_extracted_file::write_extracted_file;

pub mod plan;
pub mod report;

use plan::{DocRole, ExtractionStep, Selector, EXTRACTION_PLAN};
use report::{SetupReport, StepOutcome};

/// Runs the whole scaffold against `root`: verifies the required markdown
/// documents, reads them, then drives the extraction plan step by step.
/// A label miss skips that step only; any I/O fault aborts the run.
///
/// Returns the per-step report on completion.
pub fn run_setup(root: &Path) -> Result<SetupReport> {
    // 1. Hard precondition: all three documents must be present.
    let required: Vec<&str> = DocRole::ALL.iter().map(|role| role.filename()).collect();
    let missing = check_required_documents(root, &required);
    if !missing.is_empty() {
        println!("Missing markdown files:");
        for name in &missing {
            println!("   - {}", name);
        }
        println!();
        println!("Place the {} markdown files in this directory:", required.len());
        println!("   {}", root.display());
        anyhow::bail!("required markdown documents are missing");
    }
    println!("All markdown files found");
    println!("--------------------------------------------------");

    // 2. Read every document up front; they are small and never mutated.
    println!("Reading markdown files...");
    let setup_md = read_document(root, DocRole::Setup)?;
    let mcp_md = read_document(root, DocRole::McpServers)?;
    let agents_md = read_document(root, DocRole::Agents)?;
    println!("Files read");
    println!("--------------------------------------------------");

    // 3. One generic extract-and-write pass over the plan.
    println!("Creating project files...");
    let mut report = SetupReport::default();
    for step in EXTRACTION_PLAN {
        let document = match step.doc {
            DocRole::Setup => &setup_md,
            DocRole::McpServers => &mcp_md,
            DocRole::Agents => &agents_md,
        };
        let outcome = run_step(root, step, document)?;
        report.record(outcome);
    }

    Ok(report)
}

fn read_document(root: &Path, role: DocRole) -> Result<String> {
    let path = root.join(role.filename());
    fs::read_to_string(&path).with_context(|| format!("Error reading file {}", path.display()))
}

/// Executes one plan step: selects the block body per the step's selector
/// and writes it. A miss is a recorded outcome, not an error.
fn run_step(root: &Path, step: &ExtractionStep, document: &str) -> Result<StepOutcome> {
    let language = Some(step.language);
    let body = match step.selector {
        Selector::First => extract_labeled_block(document, step.label, language),
        Selector::Nth(index) => extract_all_labeled_blocks(document, step.label, language)
            .into_iter()
            .nth(index),
        Selector::InSection(heading) => {
            extract_block_in_section(document, heading, step.label, language)
        }
    };

    match body {
        Some(content) => {
            let destination = root.join(step.destination);
            write_extracted_file(&destination, &content)?;
            println!("Created: {}", step.destination);
            Ok(StepOutcome::Written(destination))
        }
        None => {
            debug!(
                "no `{}` block in {}; skipping {}",
                step.label,
                step.doc.filename(),
                step.destination
            );
            Ok(StepOutcome::LabelNotFound {
                document: step.doc.filename(),
                label: step.label,
            })
        }
    }
}
