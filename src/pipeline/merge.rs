use std::collections::HashMap;

use crate::core::record::{HeaderRecord, MergedRecord, QualityRecord, TaxonomyRecord};

/// Left-join `right` onto `left` by contig identifier.
///
/// Every left row is kept. A row with no match passes through unchanged; a row
/// with several matches is emitted once per match, in `right` order. Rows
/// without an identifier never match.
pub fn left_join<R>(
    left: Vec<MergedRecord>,
    right: &[R],
    key: impl Fn(&R) -> &str,
    apply: impl Fn(&mut MergedRecord, &R),
) -> Vec<MergedRecord> {
    let mut index: HashMap<&str, Vec<&R>> = HashMap::new();
    for row in right {
        index.entry(key(row)).or_default().push(row);
    }

    let mut joined = Vec::with_capacity(left.len());
    for record in left {
        let matches = record.contig_id().and_then(|id| index.get(id));
        match matches {
            Some(rows) => {
                for &row in rows {
                    let mut fanned = record.clone();
                    apply(&mut fanned, row);
                    joined.push(fanned);
                }
            }
            None => joined.push(record),
        }
    }
    joined
}

/// Join headers with quality, then with taxonomy
#[must_use]
pub fn merge(
    headers: Vec<HeaderRecord>,
    quality: &[QualityRecord],
    taxonomy: &[TaxonomyRecord],
) -> Vec<MergedRecord> {
    let base = headers.into_iter().map(MergedRecord::from_header).collect();

    let with_quality = left_join(
        base,
        quality,
        |q| q.contig_id.as_str(),
        |record, q| {
            record.completeness = q.completeness;
            record.contamination = q.contamination;
        },
    );

    left_join(
        with_quality,
        taxonomy,
        |t| t.contig_id.as_str(),
        |record, t| record.phylum = Some(t.phylum.clone()),
    )
}
