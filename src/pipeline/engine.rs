use tracing::info;

use crate::config::InputPaths;
use crate::core::table::ContigTable;
use crate::parsing::ParseError;
use crate::pipeline::aggregate::SourceTables;
use crate::pipeline::classify::{Classifier, ClassifierConfig};
use crate::pipeline::merge::merge;

/// Runs extraction, aggregation, merge and classification end to end
#[derive(Debug, Clone, Default)]
pub struct IntegrationEngine {
    classifier: Classifier,
}

impl IntegrationEngine {
    #[must_use]
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            classifier: Classifier::new(config),
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Read every input and build the classified table.
    ///
    /// # Errors
    ///
    /// Fails on the first input that cannot be read or lacks a required column.
    pub fn run(&self, paths: &InputPaths) -> Result<ContigTable, ParseError> {
        let sources = SourceTables::load(paths)?;
        Ok(self.integrate(sources))
    }

    /// Merge and classify already aggregated tables
    #[must_use]
    pub fn integrate(&self, sources: SourceTables) -> ContigTable {
        info!("Merging data into a single table...");
        let merged = merge(sources.headers, &sources.quality, &sources.taxonomy);

        info!("Classifying {} contigs...", merged.len());
        self.classifier.classify_all(&merged)
    }
}

/// Build the contig table with the default thresholds
///
/// # Errors
///
/// See [`IntegrationEngine::run`].
pub fn compile_data(paths: &InputPaths) -> Result<ContigTable, ParseError> {
    IntegrationEngine::default().run(paths)
}
