//! The transform driver: streams a sample-skeleton file into a flat CSV.
//!
//! Two variants share one streaming loop:
//! - **basic** writes `label,user_id,item_id` per valid record;
//! - **enhanced** runs the feature miner first, then appends one column per
//!   selected feature id, defaulting to the missing-value sentinel.
//!
//! The loop reads line by line and writes through a buffered writer, so
//! memory stays flat regardless of input size. Invalid records are dropped
//! silently by policy; only I/O failures abort the run.

use crate::error::{PrepError, Result};
use crate::miner;
use crate::parser;
use crate::types::{
    FeatureSelection, MINING_SAMPLE_BOUND, MISSING_FEATURE_SENTINEL, PROGRESS_INTERVAL,
    SampleRecord, TOP_K_FEATURES, TransformSummary,
};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Basic transform: label, user id and item id only.
///
/// `cap` limits the number of output rows; `None` processes the whole input.
pub fn transform_basic(input: &Path, output: &Path, cap: Option<u64>) -> Result<TransformSummary> {
    run_transform(input, output, cap, None)
}

/// Enhanced transform: mines the most frequent feature ids over the first
/// [`MINING_SAMPLE_BOUND`] records, then performs a second full pass that
/// appends the [`TOP_K_FEATURES`] selected columns to every output row.
pub fn transform_enhanced(
    input: &Path,
    output: &Path,
    cap: Option<u64>,
) -> Result<TransformSummary> {
    let selection = miner::mine_top_features(input, MINING_SAMPLE_BOUND, TOP_K_FEATURES)?;
    run_transform(input, output, cap, Some(selection))
}

fn run_transform(
    input: &Path,
    output: &Path,
    cap: Option<u64>,
    selection: Option<FeatureSelection>,
) -> Result<TransformSummary> {
    let file = File::open(input).map_err(|source| PrepError::InputOpen {
        path: input.display().to_string(),
        source,
    })?;
    let reader = BufReader::new(file);

    let out = File::create(output).map_err(|source| PrepError::OutputCreate {
        path: output.display().to_string(),
        source,
    })?;
    let mut writer = BufWriter::new(out);

    write_header(&mut writer, selection.as_ref())?;

    let mut rows_written = 0u64;
    for line in reader.lines() {
        if let Some(cap) = cap {
            if rows_written >= cap {
                break;
            }
        }

        let line = line?;
        let Some(record) = parser::parse_record(&line) else {
            continue;
        };

        write_row(&mut writer, &record, selection.as_ref())?;
        rows_written += 1;

        if rows_written % PROGRESS_INTERVAL == 0 {
            tracing::info!(rows_written, "transform in progress");
        }
    }
    writer.flush()?;

    tracing::info!(
        rows_written,
        output = %output.display(),
        "transform complete"
    );

    Ok(TransformSummary {
        rows_written,
        selected_features: selection,
    })
}

fn write_header(writer: &mut impl Write, selection: Option<&FeatureSelection>) -> Result<()> {
    write!(writer, "label,user_id,item_id")?;
    if let Some(selection) = selection {
        for column in selection.header_columns() {
            write!(writer, ",{column}")?;
        }
    }
    writeln!(writer)?;
    Ok(())
}

fn write_row(
    writer: &mut impl Write,
    record: &SampleRecord<'_>,
    selection: Option<&FeatureSelection>,
) -> Result<()> {
    // Conversion is repurposed as the binary label.
    write!(
        writer,
        "{},{},{}",
        record.conversion, record.user_id, record.item_id
    )?;

    if let Some(selection) = selection {
        let features = parser::decode_features(record.feature_blob);
        for id in selection.ids() {
            let value = features
                .get(id.as_str())
                .copied()
                .unwrap_or(MISSING_FEATURE_SENTINEL);
            write!(writer, ",{value}")?;
        }
    }

    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_header_basic() {
        let mut buf = Vec::new();
        write_header(&mut buf, None).unwrap();
        assert_eq!(buf, b"label,user_id,item_id\n");
    }

    #[test]
    fn test_write_header_enhanced() {
        let selection = FeatureSelection::new(vec!["205".to_string(), "206".to_string()]);
        let mut buf = Vec::new();
        write_header(&mut buf, Some(&selection)).unwrap();
        assert_eq!(buf, b"label,user_id,item_id,f_205,f_206\n");
    }

    #[test]
    fn test_write_row_defaults_missing_features() {
        let selection = FeatureSelection::new(vec!["205".to_string(), "206".to_string()]);
        let record = SampleRecord {
            conversion: "1",
            user_id: "7",
            item_id: "8",
            feature_blob: "206\u{2}34\u{3}1.0",
        };

        let mut buf = Vec::new();
        write_row(&mut buf, &record, Some(&selection)).unwrap();
        assert_eq!(buf, b"1,7,8,0,34\n");
    }
}
