use serde::{Deserialize, Serialize};

use crate::core::types::{Assembler, QualityCategory};

/// Fields extracted from a single assembler header line
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderRecord {
    /// Contig identifier; `None` when the line did not match the producer's shape
    pub contig_id: Option<String>,

    pub assembler: Assembler,

    /// Length in base pairs
    pub length: Option<u64>,

    /// Mean read depth
    pub coverage: Option<f64>,

    pub is_circular: bool,
}

impl HeaderRecord {
    /// A row for a header line that could not be parsed at all
    #[must_use]
    pub fn unparsed(assembler: Assembler) -> Self {
        Self {
            contig_id: None,
            assembler,
            length: None,
            coverage: None,
            is_circular: false,
        }
    }
}

/// One row of a CheckM2 quality report
#[derive(Debug, Clone, PartialEq)]
pub struct QualityRecord {
    pub contig_id: String,
    pub completeness: Option<f64>,
    pub contamination: Option<f64>,
}

/// One classified row of a GTDB-Tk summary report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyRecord {
    pub contig_id: String,
    pub phylum: String,
}

/// A header row after joining quality and taxonomy data.
///
/// Right-hand fields stay `None` when no report row matched. Defaults are only
/// applied by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    pub header: HeaderRecord,
    pub completeness: Option<f64>,
    pub contamination: Option<f64>,
    pub phylum: Option<String>,
}

impl MergedRecord {
    #[must_use]
    pub fn from_header(header: HeaderRecord) -> Self {
        Self {
            header,
            completeness: None,
            contamination: None,
            phylum: None,
        }
    }

    pub fn contig_id(&self) -> Option<&str> {
        self.header.contig_id.as_deref()
    }
}

/// A fully classified contig, one row of the final table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContigRecord {
    pub contig_id: Option<String>,

    pub assembler: Assembler,

    pub length: Option<u64>,

    pub coverage: Option<f64>,

    pub is_circular: bool,

    /// Completeness as reported; absent contigs are not back-filled
    #[serde(rename = "Completeness")]
    pub completeness: Option<f64>,

    /// Contamination as reported; absent contigs are not back-filled
    #[serde(rename = "Contamination")]
    pub contamination: Option<f64>,

    /// Phylum, or `"Unknown"` when no classified taxonomy row matched
    #[serde(rename = "Phylum")]
    pub phylum: String,

    pub quality_category: QualityCategory,

    pub is_large_circular: bool,
}
