//! Command-line interface for contig-census.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **compile**: Build the classified contig table and print it
//! - **summary**: Build the table and print distribution counts
//!
//! ## Usage
//!
//! ```text
//! # Conventional results layout
//! contig-census compile --results-dir results
//!
//! # Explicit file locations, TSV for downstream plotting
//! contig-census compile --manifest inputs.json --format tsv --output contigs.tsv
//!
//! # Quick sanity check of a run
//! contig-census summary --results-dir results
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::InputPaths;
use crate::core::types::QualityCategory;
use crate::pipeline::classify::{ClassifierConfig, QualityRule, DEFAULT_LARGE_CONTIG_LENGTH};

pub mod compile;
pub mod summary;

#[derive(Parser)]
#[command(name = "contig-census")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Merge assembler headers, CheckM2 and GTDB-Tk reports into one contig table")]
#[command(
    long_about = "contig-census combines myloasm and metaMDBG assembly headers with CheckM2 quality reports and GTDB-Tk classifications.\n\nEvery contig from the headers is kept and labelled with:\n- A quality tier (High, Medium, Low) from completeness and contamination\n- Its phylum, or Unknown when unclassified\n- Whether it is a large circular contig"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the classified contig table
    Compile(compile::CompileArgs),

    /// Summarize the classified contig table
    Summary(summary::SummaryArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Where to find the input files
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Results directory with the standard assembly workflow layout
    #[arg(long)]
    pub results_dir: Option<PathBuf>,

    /// JSON manifest listing every input file
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

impl InputArgs {
    /// Resolve the input paths from whichever option was given
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be loaded.
    pub fn input_paths(&self) -> anyhow::Result<InputPaths> {
        match (&self.manifest, &self.results_dir) {
            (Some(manifest), _) => Ok(InputPaths::load_manifest(manifest)?),
            (None, Some(dir)) => Ok(InputPaths::from_results_dir(dir)),
            (None, None) => anyhow::bail!("Either --results-dir or --manifest is required"),
        }
    }
}

/// Classification thresholds
#[derive(Args)]
pub struct ThresholdArgs {
    /// Completeness a High contig must exceed
    #[arg(long, default_value = "90")]
    pub high_min_completeness: f64,

    /// Contamination a High contig must stay below
    #[arg(long, default_value = "5")]
    pub high_max_contamination: f64,

    /// Completeness a Medium contig must exceed
    #[arg(long, default_value = "50")]
    pub medium_min_completeness: f64,

    /// Contamination a Medium contig must stay below
    #[arg(long, default_value = "10")]
    pub medium_max_contamination: f64,

    /// Length a circular contig must exceed to count as large
    #[arg(long, default_value_t = DEFAULT_LARGE_CONTIG_LENGTH)]
    pub large_contig_length: u64,
}

impl ThresholdArgs {
    #[must_use]
    pub fn classifier_config(&self) -> ClassifierConfig {
        ClassifierConfig {
            quality_rules: vec![
                QualityRule {
                    category: QualityCategory::High,
                    min_completeness: self.high_min_completeness,
                    max_contamination: self.high_max_contamination,
                },
                QualityRule {
                    category: QualityCategory::Medium,
                    min_completeness: self.medium_min_completeness,
                    max_contamination: self.medium_max_contamination,
                },
            ],
            fallback: QualityCategory::Low,
            large_contig_length: self.large_contig_length,
        }
    }
}
