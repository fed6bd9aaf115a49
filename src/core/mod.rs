//! Core data types for contig integration.
//!
//! - [`HeaderRecord`]: fields extracted from one assembler header line
//! - [`QualityRecord`], [`TaxonomyRecord`]: rows of the CheckM2 and GTDB-Tk reports
//! - [`MergedRecord`]: a header row after the left joins, right-hand fields optional
//! - [`ContigRecord`]: a classified row of the final [`ContigTable`]
//! - [`Assembler`], [`QualityCategory`]: enumerations shared by all stages
//!
//! ## Missing values
//!
//! Values that are absent or unparsable are carried as `None` from extraction through
//! the merge. Only the classifier substitutes placeholders, and only for deciding the
//! derived columns (plus `Phylum`, which reads `"Unknown"` in the final table).
//!
//! [`HeaderRecord`]: record::HeaderRecord
//! [`QualityRecord`]: record::QualityRecord
//! [`TaxonomyRecord`]: record::TaxonomyRecord
//! [`MergedRecord`]: record::MergedRecord
//! [`ContigRecord`]: record::ContigRecord
//! [`ContigTable`]: table::ContigTable
//! [`Assembler`]: types::Assembler
//! [`QualityCategory`]: types::QualityCategory

pub mod record;
pub mod table;
pub mod types;
