//! Command-line interface for the preprocessor.

use std::path::PathBuf;

use clap::Parser;
use console::style;

use crate::config::{validate_date, DEFAULT_INPUT};
use crate::error::Result;
use crate::json::{save_dataset, save_law};
use crate::pipeline::preprocess_document;
use crate::types::LawDescriptor;

/// Verkehrsrecht Preprocessor - Extract structured law data from Swiss
/// traffic-law documents.
///
/// All flags are optional; a zero-argument run processes the default
/// source document into the default data directory.
#[derive(Parser)]
#[command(name = "verkehrsrecht-preprocessor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Source .docx document
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Base output directory (files go to <output>/processed and <output>/bundled)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Law identifier (e.g., SR_741.01)
    #[arg(long)]
    pub law_id: Option<String>,

    /// Short citation title (e.g., SVG)
    #[arg(long)]
    pub short_title: Option<String>,

    /// Full law title
    #[arg(long)]
    pub full_title: Option<String>,

    /// Category tag
    #[arg(long)]
    pub category: Option<String>,

    /// Source language code (e.g., de)
    #[arg(long)]
    pub language: Option<String>,

    /// Consolidation date of the source document (YYYY-MM-DD)
    #[arg(long)]
    pub last_updated: Option<String>,
}

impl Cli {
    /// Build the law descriptor from defaults plus overrides.
    fn descriptor(&self) -> LawDescriptor {
        let mut descriptor = LawDescriptor::road_traffic_act();
        if let Some(id) = &self.law_id {
            descriptor.id = id.clone();
        }
        if let Some(short) = &self.short_title {
            descriptor.short_title = short.clone();
        }
        if let Some(full) = &self.full_title {
            descriptor.full_title = full.clone();
        }
        if let Some(category) = &self.category {
            descriptor.category = category.clone();
        }
        if let Some(language) = &self.language {
            descriptor.language = language.clone();
        }
        if let Some(date) = &self.last_updated {
            descriptor.last_updated = date.clone();
        }
        descriptor
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    preprocess_command(&cli)
}

/// Execute the preprocessing run.
fn preprocess_command(cli: &Cli) -> Result<()> {
    let descriptor = cli.descriptor();
    validate_date(&descriptor.last_updated)?;

    println!(
        "{} {} ({})",
        style("Processing").bold(),
        style(&descriptor.full_title).cyan(),
        style(cli.input.display()).dim()
    );
    println!();

    let outcome = preprocess_document(&cli.input, descriptor.clone())?;
    let stats = outcome.statistics();

    println!("  Chapters: {}", stats.chapters);
    for chapter in &outcome.law.chapters {
        println!(
            "    - {} ({} articles)",
            chapter.title,
            chapter.articles.len()
        );
    }
    println!("  Articles: {}", stats.articles);

    if !outcome.warnings.is_empty() {
        println!();
        for warning in &outcome.warnings {
            println!("  {} {}", style("Warning:").yellow().bold(), warning);
        }
    }
    println!();

    let output = cli.output.as_deref();
    let law_path = save_law(&outcome.law, &descriptor.file_stem(), output)?;
    let dataset_path = save_dataset(&outcome.dataset, output)?;

    println!(
        "{} {}",
        style("Saved law to:").green().bold(),
        law_path.display()
    );
    println!(
        "{} {}",
        style("Saved bundle to:").green().bold(),
        dataset_path.display()
    );
    println!();
    println!("  Articles with penalties: {}", stats.with_penalties);
    println!("  Articles with subsections: {}", stats.with_subsections);

    Ok(())
}
