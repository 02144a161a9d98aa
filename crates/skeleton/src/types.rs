//! Core types and constants for the Ali-CCP sample-skeleton format.

use serde::{Deserialize, Serialize};

// =============================================================================
// Format constants
// =============================================================================
// The skeleton format nests three levels of delimiters: commas between
// top-level fields, then two unit-separator-class control characters inside
// the trailing feature blob.

/// Top-level field separator in a raw record.
pub const FIELD_SEPARATOR: char = ',';

/// Separator between feature tokens inside the feature blob.
pub const FEATURE_SEPARATOR: char = '\u{0001}';

/// Separator between a token's feature id and the rest of the token.
pub const FEATURE_ID_SEPARATOR: char = '\u{0002}';

/// Separator between a token's feature value and its trailing weight.
pub const FEATURE_VALUE_SEPARATOR: char = '\u{0003}';

// =============================================================================
// Tuning constants
// =============================================================================

/// How many valid records the feature-frequency miner scans from the start
/// of the input before ranking.
pub const MINING_SAMPLE_BOUND: usize = 100_000;

/// How many feature ids the miner keeps.
pub const TOP_K_FEATURES: usize = 5;

/// A progress event is emitted every this many written rows.
pub const PROGRESS_INTERVAL: u64 = 100_000;

/// Output value for a selected feature that a record does not carry.
pub const MISSING_FEATURE_SENTINEL: &str = "0";

// =============================================================================
// Record view
// =============================================================================

/// Structured view of one valid raw record, borrowing from the input line.
///
/// Raw layout: `sample_id,conversion,click,user_id,item_id,features` with the
/// features field optional. Ids are opaque tokens in the output, so fields
/// stay as string slices instead of being parsed into numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRecord<'a> {
    /// Conversion flag, repurposed as the binary label in the output.
    pub conversion: &'a str,
    pub user_id: &'a str,
    pub item_id: &'a str,
    /// Raw feature blob; empty when the record had no sixth field.
    pub feature_blob: &'a str,
}

// =============================================================================
// Mining output
// =============================================================================

/// The ordered top-K feature-identifier set chosen by the miner.
///
/// Immutable once computed; the second transform pass uses it as the fixed
/// output column set. Ordering is by descending record count, ties broken by
/// first-seen order during the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSelection {
    ids: Vec<String>,
}

impl FeatureSelection {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }

    /// Selected feature ids, most frequent first.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Output header columns for the selected features (`f_<id>`).
    pub fn header_columns(&self) -> Vec<String> {
        self.ids.iter().map(|id| format!("f_{id}")).collect()
    }
}

// =============================================================================
// Run summary
// =============================================================================

/// Completion report for one transform run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformSummary {
    /// Count of valid records written (header row excluded).
    pub rows_written: u64,
    /// The selection used for the feature columns; `None` for the basic
    /// transform.
    pub selected_features: Option<FeatureSelection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_columns() {
        let selection = FeatureSelection::new(vec!["205".to_string(), "206".to_string()]);
        assert_eq!(selection.header_columns(), vec!["f_205", "f_206"]);
    }

    #[test]
    fn test_empty_selection() {
        let selection = FeatureSelection::new(Vec::new());
        assert!(selection.is_empty());
        assert!(selection.header_columns().is_empty());
    }
}
