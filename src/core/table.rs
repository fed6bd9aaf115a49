use serde::Serialize;

use crate::core::record::ContigRecord;
use crate::core::types::Assembler;

/// Column names of the final table, in output order
pub const COLUMNS: [&str; 10] = [
    "contig_id",
    "assembler",
    "length",
    "coverage",
    "is_circular",
    "Completeness",
    "Contamination",
    "Phylum",
    "quality_category",
    "is_large_circular",
];

/// The integrated, classified per-contig table.
///
/// Row order is header aggregation order (myloasm rows first, then metaMDBG),
/// with fanned-out rows adjacent to each other.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ContigTable {
    pub records: Vec<ContigRecord>,
}

impl ContigTable {
    #[must_use]
    pub fn new(records: Vec<ContigRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContigRecord> {
        self.records.iter()
    }

    /// Rows produced by one assembler
    pub fn filter_by_assembler(&self, assembler: Assembler) -> impl Iterator<Item = &ContigRecord> {
        self.records
            .iter()
            .filter(move |r| r.assembler == assembler)
    }

    /// Rows flagged as large circular contigs
    pub fn large_circular(&self) -> impl Iterator<Item = &ContigRecord> {
        self.records.iter().filter(|r| r.is_large_circular)
    }

    /// Rows carrying the given contig identifier (more than one after fan-out)
    pub fn rows_for<'a>(&'a self, contig_id: &'a str) -> impl Iterator<Item = &'a ContigRecord> {
        self.records
            .iter()
            .filter(move |r| r.contig_id.as_deref() == Some(contig_id))
    }

    /// Render as tab-separated text with a header line. Missing values are empty cells.
    #[must_use]
    pub fn to_tsv(&self) -> String {
        let mut out = COLUMNS.join("\t");
        out.push('\n');
        for record in &self.records {
            out.push_str(&tsv_row(record));
            out.push('\n');
        }
        out
    }
}

impl<'a> IntoIterator for &'a ContigTable {
    type Item = &'a ContigRecord;
    type IntoIter = std::slice::Iter<'a, ContigRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn opt<T: ToString>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

fn tsv_row(r: &ContigRecord) -> String {
    [
        r.contig_id.clone().unwrap_or_default(),
        r.assembler.to_string(),
        opt(r.length.as_ref()),
        opt(r.coverage.as_ref()),
        r.is_circular.to_string(),
        opt(r.completeness.as_ref()),
        opt(r.contamination.as_ref()),
        r.phylum.clone(),
        r.quality_category.to_string(),
        r.is_large_circular.to_string(),
    ]
    .join("\t")
}
