//! # contig-census
//!
//! A library for combining metagenome assembly outputs into one classified
//! per-contig table.
//!
//! Long-read metagenome assemblers describe their contigs in FASTA headers, each in
//! its own format. Quality (CheckM2) and taxonomy (GTDB-Tk) are reported in
//! separate tables keyed by contig name. `contig-census` reads all of them, joins
//! them on the contig identifier without dropping any contig, and labels each
//! contig with a quality tier and a large-circular flag.
//!
//! ## Features
//!
//! - **Header extraction**: myloasm and metaMDBG header formats
//! - **Report loading**: CheckM2 quality reports, GTDB-Tk bacterial and archaeal summaries
//! - **Left-join merge**: every header row is kept; duplicate report rows fan out
//! - **Classification**: ordered High/Medium/Low rules and a large-circular flag
//! - **Explicit missing values**: absent scores stay `None` until classification
//!
//! ## Example
//!
//! ```rust,no_run
//! use contig_census::{compile_data, InputPaths};
//! use std::path::Path;
//!
//! let table = compile_data(&InputPaths::from_results_dir(Path::new("results"))).unwrap();
//!
//! for record in &table {
//!     println!("{:?}\t{}\t{}", record.contig_id, record.quality_category, record.phylum);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Input file locations
//! - [`core`]: Record and table types
//! - [`parsing`]: Header extractors and report loaders
//! - [`pipeline`]: Aggregation, merge, classification and summaries
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod parsing;
pub mod pipeline;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::InputPaths;
pub use core::record::ContigRecord;
pub use core::table::ContigTable;
pub use core::types::*;
pub use pipeline::classify::{Classifier, ClassifierConfig};
pub use pipeline::engine::{compile_data, IntegrationEngine};
