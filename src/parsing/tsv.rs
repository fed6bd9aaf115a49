use std::collections::HashMap;

use crate::parsing::ParseError;

/// A tab-separated table with a header line, held as raw text cells
#[derive(Debug, Clone, Default)]
pub struct TsvTable {
    /// Column name -> index
    columns: HashMap<String, usize>,

    /// Data rows; may be shorter than the header
    pub rows: Vec<Vec<String>>,
}

impl TsvTable {
    /// Index of a required column
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingColumn` if the header does not contain `name`.
    pub fn column(&self, name: &str) -> Result<usize, ParseError> {
        self.columns
            .get(name)
            .copied()
            .ok_or_else(|| ParseError::MissingColumn(name.to_string()))
    }

    /// Cell value, or `None` when the row is short or the cell is empty
    pub fn cell(row: &[String], idx: usize) -> Option<&str> {
        row.get(idx)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }
}

/// Parse tab-separated text whose first non-blank line names the columns.
///
/// Column names are matched exactly (after trimming surrounding whitespace).
/// Blank lines are skipped; there is no comment syntax.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the text has no header line.
pub fn parse_tsv_text(text: &str) -> Result<TsvTable, ParseError> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header = lines
        .next()
        .ok_or_else(|| ParseError::InvalidFormat("No header line found".to_string()))?;

    let columns = header
        .split('\t')
        .enumerate()
        .map(|(idx, col)| (col.trim().to_string(), idx))
        .collect();

    let rows = lines
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect();

    Ok(TsvTable { columns, rows })
}
