use clap::Args;

use crate::cli::{InputArgs, OutputFormat, ThresholdArgs};
use crate::core::types::QualityCategory;
use crate::pipeline::engine::IntegrationEngine;
use crate::pipeline::summary::TableSummary;

#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

/// Execute summary subcommand
///
/// # Errors
///
/// Returns an error if any input cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SummaryArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let paths = args.inputs.input_paths()?;
    let engine = IntegrationEngine::new(args.thresholds.classifier_config());
    let table = engine.run(&paths)?;
    let summary = TableSummary::from_table(&table);

    if verbose {
        eprintln!("Summarizing {} contig rows", summary.rows);
    }

    match format {
        OutputFormat::Text => print_text_summary(&summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Tsv => print_tsv_summary(&summary),
    }

    Ok(())
}

fn print_text_summary(summary: &TableSummary) {
    println!("Number of rows: {}", summary.rows);

    println!("\nCounts based on quality categories:");
    for category in [QualityCategory::High, QualityCategory::Medium, QualityCategory::Low] {
        println!(
            "  {:<8} {}",
            category.to_string(),
            summary.quality_count(category)
        );
    }

    println!("\nCounts based on assembler:");
    for (assembler, count) in &summary.by_assembler {
        println!("  {:<10} {count}", assembler.to_string());
    }

    println!("\nNumber of circular contigs: {}", summary.circular);
    println!("\nLarge circular contigs by assembler:");
    for (assembler, counts) in &summary.large_circular_by_assembler {
        println!(
            "  {:<10} {} large circular, {} other",
            assembler.to_string(),
            counts.large_circular,
            counts.other
        );
    }

    println!("\nCounts based on phylum:");
    for (phylum, count) in &summary.by_phylum {
        println!("  {phylum:<24} {count}");
    }
}

fn print_tsv_summary(summary: &TableSummary) {
    println!("group\tkey\tcount");
    println!("rows\tall\t{}", summary.rows);
    println!("circular\tall\t{}", summary.circular);
    for (category, count) in &summary.by_quality {
        println!("quality_category\t{category}\t{count}");
    }
    for (assembler, count) in &summary.by_assembler {
        println!("assembler\t{assembler}\t{count}");
    }
    for (assembler, counts) in &summary.large_circular_by_assembler {
        println!("large_circular\t{assembler}\t{}", counts.large_circular);
    }
    for (phylum, count) in &summary.by_phylum {
        println!("Phylum\t{phylum}\t{count}");
    }
}
