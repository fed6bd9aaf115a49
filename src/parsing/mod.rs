//! Parsers for the assembler and report files that feed the contig table.
//!
//! This module provides parsers for:
//!
//! - **Assembler headers**: `>` lines from myloasm and metaMDBG assemblies
//! - **CheckM2 quality reports**: `quality_report.tsv`
//! - **GTDB-Tk summaries**: `gtdbtk.bac120.summary.tsv` and `gtdbtk.ar53.summary.tsv`
//!
//! All inputs may be gzip or bgzip compressed (`.gz`, `.bgz`).
//!
//! ## Example
//!
//! ```rust,no_run
//! use contig_census::core::types::Assembler;
//! use contig_census::parsing::headers::extractor_for;
//! use std::path::Path;
//!
//! let headers = extractor_for(Assembler::Myloasm)
//!     .extract_file(Path::new("myloasm_assembly_headers.txt"))
//!     .unwrap();
//! ```
//!
//! ## Consumed columns
//!
//! | Report | Column | Becomes |
//! |--------|--------|---------|
//! | CheckM2 | Name | `contig_id` |
//! | CheckM2 | Completeness | `Completeness` |
//! | CheckM2 | Contamination | `Contamination` |
//! | GTDB-Tk | user_genome | `contig_id` |
//! | GTDB-Tk | classification | `Phylum` (the `p__` rank) |

use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod checkm2;
pub mod gtdbtk;
pub mod headers;
pub mod tsv;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Attach the offending file to a content error. I/O errors already carry it.
    #[must_use]
    pub fn in_file(self, path: &Path) -> Self {
        match self {
            Self::Io { .. } | Self::InFile { .. } => self,
            other => Self::InFile {
                path: path.to_path_buf(),
                source: Box::new(other),
            },
        }
    }
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read a whole input file into memory, decompressing gzip/bgzip transparently.
///
/// # Errors
///
/// Returns `ParseError::Io` naming the file if it cannot be opened or decoded.
pub fn read_text(path: &Path) -> Result<String, ParseError> {
    let io_err = |source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::open(path).map_err(io_err)?;
    let mut text = String::new();

    if is_gzipped(path) {
        // Multi-member decoder so bgzip blocks are read past the first one
        MultiGzDecoder::new(file)
            .read_to_string(&mut text)
            .map_err(io_err)?;
    } else {
        std::io::BufReader::new(file)
            .read_to_string(&mut text)
            .map_err(io_err)?;
    }

    Ok(text)
}
