use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;

use crate::cli::{InputArgs, OutputFormat, ThresholdArgs};
use crate::core::record::ContigRecord;
use crate::core::table::{ContigTable, COLUMNS};
use crate::pipeline::engine::IntegrationEngine;

#[derive(Args)]
pub struct CompileArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,

    /// Write the table to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only show the first N rows (text format)
    #[arg(long)]
    pub head: Option<usize>,
}

/// Execute compile subcommand
///
/// # Errors
///
/// Returns an error if any input cannot be read or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CompileArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let paths = args.inputs.input_paths()?;
    let engine = IntegrationEngine::new(args.thresholds.classifier_config());
    let table = engine.run(&paths)?;

    if verbose {
        eprintln!("Compiled {} contig rows", table.len());
    }

    let rendered = match format {
        OutputFormat::Text => render_text(&table, args.head),
        OutputFormat::Json => serde_json::to_string_pretty(&table)? + "\n",
        OutputFormat::Tsv => table.to_tsv(),
    };

    match &args.output {
        Some(path) => std::fs::write(path, rendered)
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}

fn render_text(table: &ContigTable, head: Option<usize>) -> String {
    let shown = head.unwrap_or(table.len()).min(table.len());
    let rows: Vec<[String; 10]> = table.records[..shown].iter().map(text_cells).collect();

    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let header = COLUMNS.map(str::to_string);
    for row in std::iter::once(&header).chain(&rows) {
        let line: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    }

    if shown < table.len() {
        let _ = writeln!(out, "... {} more rows", table.len() - shown);
    }
    let _ = writeln!(out, "\nNumber of rows: {}", table.len());
    out
}

fn text_cells(r: &ContigRecord) -> [String; 10] {
    let missing = || "NA".to_string();
    [
        r.contig_id.clone().unwrap_or_else(missing),
        r.assembler.to_string(),
        r.length.map_or_else(missing, |v| v.to_string()),
        r.coverage.map_or_else(missing, |v| format!("{v:.2}")),
        r.is_circular.to_string(),
        r.completeness.map_or_else(missing, |v| format!("{v:.2}")),
        r.contamination.map_or_else(missing, |v| format!("{v:.2}")),
        r.phylum.clone(),
        r.quality_category.to_string(),
        r.is_large_circular.to_string(),
    ]
}
