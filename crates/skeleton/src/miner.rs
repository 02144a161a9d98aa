//! Feature-frequency mining over a bounded input prefix.
//!
//! The enhanced transform needs a fixed output column set before it can write
//! a single row, so it first scans a sample of the input and ranks feature
//! ids by how many records contain them. The frequency table lives only for
//! the duration of this pass; callers get back the ordered selection.

use crate::error::{PrepError, Result};
use crate::parser;
use crate::types::FeatureSelection;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Scan up to `sample_bound` valid records from the start of `input` and
/// return the `k` feature ids contained in the most records.
///
/// Each record contributes at most one count per feature id (the decoded
/// mapping de-duplicates ids within a record). Ties in count are broken by
/// first-seen order during the scan, so the selection is stable for a given
/// input prefix. Lines with fewer than five fields carry no features and do
/// not count toward the bound.
pub fn mine_top_features(input: &Path, sample_bound: usize, k: usize) -> Result<FeatureSelection> {
    let file = File::open(input).map_err(|source| PrepError::InputOpen {
        path: input.display().to_string(),
        source,
    })?;
    let reader = BufReader::new(file);

    // feature id -> (record count, first-seen rank)
    let mut counts: HashMap<String, (u64, usize)> = HashMap::new();
    let mut scanned = 0usize;

    for line in reader.lines() {
        if scanned >= sample_bound {
            break;
        }
        let line = line?;
        let Some(record) = parser::parse_record(&line) else {
            continue;
        };
        scanned += 1;

        for id in parser::decode_features(record.feature_blob).into_keys() {
            let rank = counts.len();
            let entry = counts.entry(id.to_string()).or_insert((0, rank));
            entry.0 += 1;
        }
    }

    let mut ranked: Vec<(String, (u64, usize))> = counts.into_iter().collect();
    ranked.sort_by(|(_, (count_a, rank_a)), (_, (count_b, rank_b))| {
        count_b.cmp(count_a).then(rank_a.cmp(rank_b))
    });

    let ids: Vec<String> = ranked.into_iter().take(k).map(|(id, _)| id).collect();
    tracing::info!(
        records_scanned = scanned,
        selected = ids.len(),
        "feature mining pass complete"
    );

    Ok(FeatureSelection::new(ids))
}
