//! End-to-end tests of the integration pipeline on a staged results directory.

mod common;

use contig_census::core::types::{Assembler, QualityCategory};
use contig_census::parsing::headers::{extractor_for, HeaderExtractor};
use contig_census::pipeline::aggregate::SourceTables;
use contig_census::pipeline::summary::TableSummary;
use contig_census::{compile_data, ClassifierConfig, ContigTable, InputPaths, IntegrationEngine};

fn compile_fixture() -> ContigTable {
    let dir = tempfile::tempdir().unwrap();
    common::write_results_dir(dir.path());
    compile_data(&InputPaths::from_results_dir(dir.path())).unwrap()
}

#[test]
fn test_every_header_row_survives_the_merge() {
    let dir = tempfile::tempdir().unwrap();
    common::write_results_dir(dir.path());
    let paths = InputPaths::from_results_dir(dir.path());

    let headers: Vec<_> = Assembler::ALL
        .iter()
        .flat_map(|&a| extractor_for(a).extract_file(&paths.get(a).headers).unwrap())
        .collect();
    let table = compile_data(&paths).unwrap();

    for header in &headers {
        let Some(id) = header.contig_id.as_deref() else {
            continue;
        };
        assert!(table.rows_for(id).count() >= 1, "{id} was dropped");
    }
    // 6 identified headers + 1 malformed, plus 1 extra row from the u3 fan-out
    assert_eq!(headers.len(), 7);
    assert_eq!(table.len(), 8);
}

#[test]
fn test_rows_keep_aggregation_order() {
    let table = compile_fixture();
    let ids: Vec<Option<&str>> = table.iter().map(|r| r.contig_id.as_deref()).collect();
    assert_eq!(
        ids,
        vec![
            Some("u1"),
            Some("u2"),
            Some("u3"),
            Some("u3"),
            None,
            Some("ctg1"),
            Some("ctg2"),
            Some("ctg3"),
        ]
    );
    assert!(table.iter().take(5).all(|r| r.assembler == Assembler::Myloasm));
    assert!(table.iter().skip(5).all(|r| r.assembler == Assembler::MetaMdbg));
}

#[test]
fn test_high_quality_contig_without_taxonomy_is_unknown() {
    let dir = tempfile::tempdir().unwrap();
    common::write_results_dir(dir.path());
    // Drop u1 from the bacterial report so it has quality data only
    std::fs::write(
        dir.path()
            .join("gtdbtk/myloasm/classify/gtdbtk.bac120.summary.tsv"),
        "user_genome\tclassification\n",
    )
    .unwrap();

    let table = compile_data(&InputPaths::from_results_dir(dir.path())).unwrap();
    let u1 = table.rows_for("u1").next().unwrap();
    assert_eq!(u1.completeness, Some(95.0));
    assert_eq!(u1.contamination, Some(2.0));
    assert_eq!(u1.quality_category, QualityCategory::High);
    assert_eq!(u1.phylum, "Unknown");
}

#[test]
fn test_large_circular_contig_without_quality_is_low() {
    let table = compile_fixture();
    let ctg1 = table.rows_for("ctg1").next().unwrap();
    assert_eq!(ctg1.length, Some(600_000));
    assert!(ctg1.is_circular);
    assert_eq!(ctg1.completeness, None);
    assert_eq!(ctg1.contamination, None);
    assert_eq!(ctg1.quality_category, QualityCategory::Low);
    assert!(ctg1.is_large_circular);
}

#[test]
fn test_bacterial_and_archaeal_matches_fan_out() {
    let table = compile_fixture();
    let phyla: Vec<&str> = table.rows_for("u3").map(|r| r.phylum.as_str()).collect();
    assert_eq!(phyla, vec!["Pseudomonadota", "Thermoproteota"]);
}

#[test]
fn test_field_extraction_and_classification() {
    let table = compile_fixture();

    let u1 = table.rows_for("u1").next().unwrap();
    assert_eq!(u1.coverage, Some(35.2));
    assert_eq!(u1.phylum, "Bacillota");
    assert_eq!(u1.quality_category, QualityCategory::High);
    assert!(u1.is_large_circular);

    // "possible" is circular, but exactly 500000 bp is not large
    let u2 = table.rows_for("u2").next().unwrap();
    assert!(u2.is_circular);
    assert!(!u2.is_large_circular);
    assert_eq!(u2.quality_category, QualityCategory::Medium);
    // Its archaeal row is an Unclassified placeholder
    assert_eq!(u2.phylum, "Unknown");

    // Contamination 6 misses High but makes Medium
    let ctg2 = table.rows_for("ctg2").next().unwrap();
    assert_eq!(ctg2.quality_category, QualityCategory::Medium);
    assert_eq!(ctg2.phylum, "Actinomycetota");
    assert!(!ctg2.is_circular);

    // No length tag: circular but never large
    let ctg3 = table.rows_for("ctg3").next().unwrap();
    assert_eq!(ctg3.length, None);
    assert!(ctg3.is_circular);
    assert!(!ctg3.is_large_circular);
}

#[test]
fn test_malformed_header_row_is_kept_with_defaults() {
    let table = compile_fixture();
    let broken: Vec<_> = table.iter().filter(|r| r.contig_id.is_none()).collect();
    assert_eq!(broken.len(), 1);
    let row = broken[0];
    assert_eq!(row.assembler, Assembler::Myloasm);
    assert_eq!(row.length, None);
    assert_eq!(row.coverage, None);
    assert!(!row.is_circular);
    assert_eq!(row.phylum, "Unknown");
    assert_eq!(row.quality_category, QualityCategory::Low);
    assert!(!row.is_large_circular);
}

#[test]
fn test_unclassified_rows_never_reach_taxonomy_aggregate() {
    let dir = tempfile::tempdir().unwrap();
    common::write_results_dir(dir.path());
    let sources = SourceTables::load(&InputPaths::from_results_dir(dir.path())).unwrap();

    assert!(sources.taxonomy.iter().all(|t| !t.phylum.contains("Unclassified")));
    assert!(sources.taxonomy.iter().all(|t| t.contig_id != "ctg9"));
    assert_eq!(sources.taxonomy.len(), 4);
    assert_eq!(sources.quality.len(), 3);
}

#[test]
fn test_no_phylum_is_left_unresolved() {
    let table = compile_fixture();
    assert!(table
        .iter()
        .all(|r| !r.phylum.is_empty() && !r.phylum.contains("Unclassified")));
}

#[test]
fn test_reclassification_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    common::write_results_dir(dir.path());
    let paths = InputPaths::from_results_dir(dir.path());

    let engine = IntegrationEngine::new(ClassifierConfig::default());
    let first = engine.run(&paths).unwrap();
    let second = engine.run(&paths).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_summary_of_fixture() {
    let summary = TableSummary::from_table(&compile_fixture());
    assert_eq!(summary.rows, 8);
    assert_eq!(summary.quality_count(QualityCategory::High), 1);
    assert_eq!(summary.quality_count(QualityCategory::Medium), 2);
    assert_eq!(summary.quality_count(QualityCategory::Low), 5);
    assert_eq!(summary.by_assembler[&Assembler::Myloasm], 5);
    assert_eq!(summary.by_assembler[&Assembler::MetaMdbg], 3);
    assert_eq!(summary.circular, 4);
    assert_eq!(summary.by_phylum[0], ("Unknown".to_string(), 4));
}

#[test]
fn test_missing_input_is_fatal_and_named() {
    let dir = tempfile::tempdir().unwrap();
    common::write_results_dir(dir.path());
    std::fs::remove_file(dir.path().join("checkm2/metamdbg/quality_report.tsv")).unwrap();

    let err = compile_data(&InputPaths::from_results_dir(dir.path())).unwrap_err();
    assert!(err.to_string().contains("quality_report.tsv"));
    assert!(err.to_string().contains("metamdbg"));
}

#[test]
fn test_extractor_ignores_sequence_lines() {
    let records = extractor_for(Assembler::Myloasm).extract_text(common::MYLOASM_HEADERS);
    assert_eq!(records.len(), 4);
    let records = extractor_for(Assembler::MetaMdbg).extract_text(common::METAMDBG_HEADERS);
    assert_eq!(records.len(), 3);
}
