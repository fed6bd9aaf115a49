use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::table::ContigTable;
use crate::core::types::{Assembler, QualityCategory};

/// Large-circular tally for one assembler
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CircularCounts {
    pub large_circular: usize,
    pub other: usize,
}

/// Distribution counts over a finished table, for sanity-checking a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub rows: usize,
    pub circular: usize,
    pub by_quality: BTreeMap<QualityCategory, usize>,
    pub by_assembler: BTreeMap<Assembler, usize>,
    pub large_circular_by_assembler: BTreeMap<Assembler, CircularCounts>,
    /// Sorted by descending count, then name
    pub by_phylum: Vec<(String, usize)>,
}

impl TableSummary {
    #[must_use]
    pub fn from_table(table: &ContigTable) -> Self {
        let mut summary = Self {
            rows: table.len(),
            ..Self::default()
        };
        let mut phyla: BTreeMap<&str, usize> = BTreeMap::new();

        for record in table {
            if record.is_circular {
                summary.circular += 1;
            }
            *summary.by_quality.entry(record.quality_category).or_default() += 1;
            *summary.by_assembler.entry(record.assembler).or_default() += 1;

            let circular = summary
                .large_circular_by_assembler
                .entry(record.assembler)
                .or_default();
            if record.is_large_circular {
                circular.large_circular += 1;
            } else {
                circular.other += 1;
            }

            *phyla.entry(record.phylum.as_str()).or_default() += 1;
        }

        let mut by_phylum: Vec<(String, usize)> = phyla
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        // Stable sort keeps the alphabetical order from the BTreeMap among ties
        by_phylum.sort_by(|a, b| b.1.cmp(&a.1));
        summary.by_phylum = by_phylum;

        summary
    }

    pub fn quality_count(&self, category: QualityCategory) -> usize {
        self.by_quality.get(&category).copied().unwrap_or(0)
    }
}
