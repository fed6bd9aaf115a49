use tracing::{debug, info};

use crate::config::InputPaths;
use crate::core::record::{HeaderRecord, QualityRecord, TaxonomyRecord};
use crate::core::types::Assembler;
use crate::parsing::checkm2::parse_quality_report_file;
use crate::parsing::gtdbtk::parse_taxonomy_reports;
use crate::parsing::headers::extractor_for;
use crate::parsing::ParseError;

/// Concatenate per-producer tables of the same kind, preserving order
pub fn concat<T>(parts: impl IntoIterator<Item = Vec<T>>) -> Vec<T> {
    parts.into_iter().flatten().collect()
}

/// One aggregated table per source kind
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub headers: Vec<HeaderRecord>,
    pub quality: Vec<QualityRecord>,
    pub taxonomy: Vec<TaxonomyRecord>,
}

impl SourceTables {
    /// Read every input and aggregate by kind, myloasm rows before metaMDBG rows.
    ///
    /// # Errors
    ///
    /// Returns the first `ParseError` encountered; nothing is aggregated on failure.
    pub fn load(paths: &InputPaths) -> Result<Self, ParseError> {
        info!("Parsing assembler headers...");
        let headers = Assembler::ALL
            .iter()
            .map(|&a| extractor_for(a).extract_file(&paths.get(a).headers))
            .collect::<Result<Vec<_>, _>>()?;

        info!("Parsing CheckM2 reports...");
        let quality = Assembler::ALL
            .iter()
            .map(|&a| parse_quality_report_file(&paths.get(a).checkm2))
            .collect::<Result<Vec<_>, _>>()?;

        info!("Parsing GTDB-Tk reports...");
        let taxonomy = Assembler::ALL
            .iter()
            .map(|&a| {
                let inputs = paths.get(a);
                parse_taxonomy_reports(&inputs.gtdbtk_bacterial, &inputs.gtdbtk_archaeal)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let tables = Self {
            headers: concat(headers),
            quality: concat(quality),
            taxonomy: concat(taxonomy),
        };
        debug!(
            "Aggregated {} header rows, {} quality rows, {} taxonomy rows",
            tables.headers.len(),
            tables.quality.len(),
            tables.taxonomy.len()
        );
        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_keeps_producer_order_and_duplicates() {
        let merged = concat(vec![vec![1, 2, 2], vec![], vec![2, 3]]);
        assert_eq!(merged, vec![1, 2, 2, 2, 3]);
    }
}
