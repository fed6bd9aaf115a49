//! Parser for GTDB-Tk `*.summary.tsv` classification reports.
//!
//! Only the phylum rank is kept. It is read from the `classification` lineage
//! string, e.g. `d__Bacteria;p__Bacillota;c__Bacilli;...` gives `Bacillota`.
//! Rows whose lineage has no phylum, or whose phylum is an `Unclassified`
//! placeholder, are dropped here; contigs without a taxonomy row are later
//! reported with the `"Unknown"` phylum.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::core::record::TaxonomyRecord;
use crate::parsing::tsv::{parse_tsv_text, TsvTable};
use crate::parsing::{read_text, ParseError};

/// Substring marking a phylum that GTDB-Tk could not resolve
pub const UNCLASSIFIED_MARKER: &str = "Unclassified";

static PHYLUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"p__([^;]+)").expect("phylum pattern is valid"));

/// Extract the phylum from a GTDB lineage string
///
/// # Examples
///
/// ```
/// use contig_census::parsing::gtdbtk::extract_phylum;
///
/// assert_eq!(extract_phylum("d__Archaea;p__Thermoproteota;c__Nitrososphaeria"), Some("Thermoproteota"));
/// assert_eq!(extract_phylum("Unclassified Bacteria"), None);
/// ```
#[must_use]
pub fn extract_phylum(classification: &str) -> Option<&str> {
    PHYLUM
        .captures(classification)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse the bacterial and archaeal summaries of one assembly.
///
/// Rows are concatenated bacterial first, then archaeal, before filtering.
///
/// # Errors
///
/// Returns the first error from either file.
pub fn parse_taxonomy_reports(
    bacterial: &Path,
    archaeal: &Path,
) -> Result<Vec<TaxonomyRecord>, ParseError> {
    let mut records = parse_taxonomy_report_file(bacterial)?;
    records.extend(parse_taxonomy_report_file(archaeal)?);
    Ok(records)
}

/// Parse a single GTDB-Tk summary file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or a content error naming
/// the file if a required column is missing.
pub fn parse_taxonomy_report_file(path: &Path) -> Result<Vec<TaxonomyRecord>, ParseError> {
    let text = read_text(path)?;
    let records = parse_taxonomy_report_text(&text).map_err(|e| e.in_file(path))?;
    debug!(
        "Loaded {} classified taxonomy rows from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parse GTDB-Tk summary text into (`contig_id`, `Phylum`) rows.
///
/// `user_genome` becomes `contig_id`.
///
/// # Errors
///
/// Returns `ParseError::MissingColumn` if `user_genome` or `classification` is
/// absent, or `ParseError::InvalidFormat` if there is no header line.
pub fn parse_taxonomy_report_text(text: &str) -> Result<Vec<TaxonomyRecord>, ParseError> {
    let table = parse_tsv_text(text)?;
    let genome = table.column("user_genome")?;
    let classification = table.column("classification")?;

    let records = table
        .rows
        .iter()
        .filter_map(|row| {
            let contig_id = TsvTable::cell(row, genome)?;
            let phylum = extract_phylum(TsvTable::cell(row, classification)?)?;
            if phylum.contains(UNCLASSIFIED_MARKER) {
                return None;
            }
            Some(TaxonomyRecord {
                contig_id: contig_id.to_string(),
                phylum: phylum.to_string(),
            })
        })
        .collect();

    Ok(records)
}
