//! Aggregation, merge and classification of contig sources.
//!
//! - [`SourceTables`]: one concatenated table per source kind
//! - [`merge`]: headers ⟕ quality ⟕ taxonomy on `contig_id`
//! - [`Classifier`]: quality tiers and large-circular flags
//! - [`IntegrationEngine`]: the whole run, from input paths to [`ContigTable`]
//! - [`TableSummary`]: distribution counts over a finished table
//!
//! ## Quality tiers
//!
//! Rules are checked in order and the first match wins:
//!
//! | Tier | Completeness | Contamination |
//! |------|--------------|---------------|
//! | High | > 90 | < 5 |
//! | Medium | > 50 | < 10 |
//! | Low | otherwise | |
//!
//! Contigs missing from the CheckM2 report are scored as completeness 0 and
//! contamination 100.
//!
//! ## Example
//!
//! ```rust,no_run
//! use contig_census::config::InputPaths;
//! use contig_census::pipeline::engine::compile_data;
//! use std::path::Path;
//!
//! let table = compile_data(&InputPaths::from_results_dir(Path::new("results"))).unwrap();
//! for record in table.large_circular() {
//!     println!("{:?} {} {}", record.contig_id, record.assembler, record.phylum);
//! }
//! ```
//!
//! [`SourceTables`]: aggregate::SourceTables
//! [`merge`]: merge::merge
//! [`Classifier`]: classify::Classifier
//! [`IntegrationEngine`]: engine::IntegrationEngine
//! [`TableSummary`]: summary::TableSummary
//! [`ContigTable`]: crate::core::table::ContigTable

pub mod aggregate;
pub mod classify;
pub mod engine;
pub mod merge;
pub mod summary;
