use serde::{Deserialize, Serialize};

use crate::core::record::{ContigRecord, MergedRecord};
use crate::core::table::ContigTable;
use crate::core::types::QualityCategory;

/// Completeness assumed for contigs without a quality report row
pub const MISSING_COMPLETENESS: f64 = 0.0;

/// Contamination assumed for contigs without a quality report row
pub const MISSING_CONTAMINATION: f64 = 100.0;

/// Phylum reported for contigs without a classified taxonomy row
pub const UNKNOWN_PHYLUM: &str = "Unknown";

/// Contigs must be strictly longer than this to count as large
pub const DEFAULT_LARGE_CONTIG_LENGTH: u64 = 500_000;

/// One quality band: completeness strictly above and contamination strictly below
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityRule {
    pub category: QualityCategory,
    pub min_completeness: f64,
    pub max_contamination: f64,
}

impl QualityRule {
    #[must_use]
    pub fn matches(&self, completeness: f64, contamination: f64) -> bool {
        completeness > self.min_completeness && contamination < self.max_contamination
    }
}

/// Thresholds used by the [`Classifier`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Evaluated top-down; the first matching rule wins
    pub quality_rules: Vec<QualityRule>,
    /// Category when no rule matches
    pub fallback: QualityCategory,
    /// Length a circular contig must exceed to be flagged as large
    pub large_contig_length: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            quality_rules: vec![
                QualityRule {
                    category: QualityCategory::High,
                    min_completeness: 90.0,
                    max_contamination: 5.0,
                },
                QualityRule {
                    category: QualityCategory::Medium,
                    min_completeness: 50.0,
                    max_contamination: 10.0,
                },
            ],
            fallback: QualityCategory::Low,
            large_contig_length: DEFAULT_LARGE_CONTIG_LENGTH,
        }
    }
}

/// Derives `quality_category` and `is_large_circular` from merged rows
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    #[must_use]
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Quality tier, with missing scores read as the worst case
    #[must_use]
    pub fn quality_category(
        &self,
        completeness: Option<f64>,
        contamination: Option<f64>,
    ) -> QualityCategory {
        let completeness = completeness.unwrap_or(MISSING_COMPLETENESS);
        let contamination = contamination.unwrap_or(MISSING_CONTAMINATION);

        self.config
            .quality_rules
            .iter()
            .find(|rule| rule.matches(completeness, contamination))
            .map_or(self.config.fallback, |rule| rule.category)
    }

    /// A contig of unknown length is never large
    #[must_use]
    pub fn is_large_circular(&self, length: Option<u64>, is_circular: bool) -> bool {
        is_circular && length.is_some_and(|len| len > self.config.large_contig_length)
    }

    #[must_use]
    pub fn classify(&self, record: &MergedRecord) -> ContigRecord {
        let header = &record.header;
        ContigRecord {
            contig_id: header.contig_id.clone(),
            assembler: header.assembler,
            length: header.length,
            coverage: header.coverage,
            is_circular: header.is_circular,
            completeness: record.completeness,
            contamination: record.contamination,
            phylum: record
                .phylum
                .clone()
                .unwrap_or_else(|| UNKNOWN_PHYLUM.to_string()),
            quality_category: self.quality_category(record.completeness, record.contamination),
            is_large_circular: self.is_large_circular(header.length, header.is_circular),
        }
    }

    #[must_use]
    pub fn classify_all(&self, records: &[MergedRecord]) -> ContigTable {
        ContigTable::new(records.iter().map(|r| self.classify(r)).collect())
    }
}
