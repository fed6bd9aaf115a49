//! Parser for CheckM2 `quality_report.tsv` files.

use std::path::Path;

use tracing::debug;

use crate::core::record::QualityRecord;
use crate::parsing::tsv::{parse_tsv_text, TsvTable};
use crate::parsing::{read_text, ParseError};
use crate::utils::validation::parse_measure;

/// Parse a CheckM2 quality report file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or a content error naming
/// the file if a required column is missing.
pub fn parse_quality_report_file(path: &Path) -> Result<Vec<QualityRecord>, ParseError> {
    let text = read_text(path)?;
    let records = parse_quality_report_text(&text).map_err(|e| e.in_file(path))?;
    debug!("Loaded {} quality rows from {}", records.len(), path.display());
    Ok(records)
}

/// Parse CheckM2 report text, keeping `Name`, `Completeness` and `Contamination`.
///
/// `Name` becomes `contig_id`. Empty or unparsable scores are kept as missing.
/// Rows without a name cannot be joined and are skipped.
///
/// # Errors
///
/// Returns `ParseError::MissingColumn` if any of the three columns is absent, or
/// `ParseError::InvalidFormat` if there is no header line.
pub fn parse_quality_report_text(text: &str) -> Result<Vec<QualityRecord>, ParseError> {
    let table = parse_tsv_text(text)?;
    let name = table.column("Name")?;
    let completeness = table.column("Completeness")?;
    let contamination = table.column("Contamination")?;

    let records = table
        .rows
        .iter()
        .filter_map(|row| {
            let contig_id = TsvTable::cell(row, name)?.to_string();
            Some(QualityRecord {
                contig_id,
                completeness: TsvTable::cell(row, completeness).and_then(parse_measure),
                contamination: TsvTable::cell(row, contamination).and_then(parse_measure),
            })
        })
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "Name\tCompleteness\tContamination\tCompleteness_Model_Used\tTranslation_Table_Used\n\
u1\t98.52\t0.31\tNeural Network (Specific Model)\t11\n\
u2\t55.1\t7.9\tGradient Boost (General Model)\t11\n\
u3\t\tn/a\tNeural Network (Specific Model)\t11\n";

    #[test]
    fn test_parse_quality_report() {
        let records = parse_quality_report_text(REPORT).unwrap();
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].contig_id, "u1");
        assert_eq!(records[0].completeness, Some(98.52));
        assert_eq!(records[0].contamination, Some(0.31));

        assert_eq!(records[2].contig_id, "u3");
        assert_eq!(records[2].completeness, None);
        assert_eq!(records[2].contamination, None);
    }

    #[test]
    fn test_missing_required_column() {
        let err = parse_quality_report_text("Name\tCompleteness\nu1\t90\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingColumn(ref c) if c == "Contamination"));
    }

    #[test]
    fn test_missing_column_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quality_report.tsv");
        std::fs::write(&path, "bin\tCompleteness\tContamination\n").unwrap();

        let err = parse_quality_report_file(&path).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("quality_report.tsv"));
        assert!(message.contains("'Name'"));
    }

    #[test]
    fn test_header_only_report_is_empty() {
        let records = parse_quality_report_text("Name\tCompleteness\tContamination\n").unwrap();
        assert!(records.is_empty());
    }
}
