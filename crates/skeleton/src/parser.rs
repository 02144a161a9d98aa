//! Parser for the sample-skeleton record format.
//!
//! A raw record is one line of comma-separated fields:
//!
//! ```text
//! sample_id,conversion,click,user_id,item_id,features
//! ```
//!
//! The trailing `features` field is optional and is itself delimited: feature
//! tokens are separated by `\u{0001}`, and each token reads
//! `feature_id \u{0002} feature_value \u{0003} weight`.
//!
//! Parsing is best-effort by policy: a line with too few fields is an invalid
//! record (the caller drops it), and a malformed feature token is skipped
//! without failing the rest of the record.

use crate::types::{
    FEATURE_ID_SEPARATOR, FEATURE_SEPARATOR, FEATURE_VALUE_SEPARATOR, FIELD_SEPARATOR,
    SampleRecord,
};
use std::collections::HashMap;

/// Split a raw line into the fields the transform cares about.
///
/// Returns `None` for an invalid record (fewer than five top-level fields).
/// A record without a sixth field gets an empty feature blob. The split stops
/// at six fields, so commas inside the blob stay part of the blob.
pub fn parse_record(line: &str) -> Option<SampleRecord<'_>> {
    let mut fields = line.trim().splitn(6, FIELD_SEPARATOR);

    let _sample_id = fields.next()?;
    let conversion = fields.next()?;
    let _click = fields.next()?;
    let user_id = fields.next()?;
    let item_id = fields.next()?;
    let feature_blob = fields.next().unwrap_or("");

    Some(SampleRecord {
        conversion,
        user_id,
        item_id,
        feature_blob,
    })
}

/// Decode a feature blob into a feature_id -> feature_value mapping.
///
/// Each token must contain the id separator and then the value separator, in
/// that order; tokens failing either check are skipped individually. A later
/// duplicate of a feature id overwrites the earlier one. Decoding is a pure
/// function of the blob string, so decoding twice yields the same mapping.
pub fn decode_features(blob: &str) -> HashMap<&str, &str> {
    let mut features = HashMap::new();

    for token in blob.split(FEATURE_SEPARATOR) {
        let Some((id, rest)) = token.split_once(FEATURE_ID_SEPARATOR) else {
            continue;
        };
        let Some((value, _weight)) = rest.split_once(FEATURE_VALUE_SEPARATOR) else {
            continue;
        };
        features.insert(id, value);
    }

    features
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_record() {
        let record = parse_record("1,0,1,42,99,blob").unwrap();
        assert_eq!(record.conversion, "0");
        assert_eq!(record.user_id, "42");
        assert_eq!(record.item_id, "99");
        assert_eq!(record.feature_blob, "blob");
    }

    #[test]
    fn test_parse_record_without_features() {
        let record = parse_record("2,1,0,7,8").unwrap();
        assert_eq!(record.conversion, "1");
        assert_eq!(record.user_id, "7");
        assert_eq!(record.item_id, "8");
        assert_eq!(record.feature_blob, "");
    }

    #[test]
    fn test_parse_too_few_fields() {
        assert!(parse_record("1,0,1").is_none());
        assert!(parse_record("").is_none());
    }

    #[test]
    fn test_blob_keeps_stray_commas() {
        let record = parse_record("1,0,1,42,99,a,b,c").unwrap();
        assert_eq!(record.feature_blob, "a,b,c");
    }

    #[test]
    fn test_decode_features() {
        let blob = "205\u{2}12\u{3}0.5\u{1}206\u{2}34\u{3}1.0";
        let features = decode_features(blob);
        assert_eq!(features.len(), 2);
        assert_eq!(features["205"], "12");
        assert_eq!(features["206"], "34");
    }

    #[test]
    fn test_decode_skips_malformed_tokens() {
        // Second token has no value separator, third has no id separator.
        let blob = "205\u{2}12\u{3}0.5\u{1}206\u{2}34\u{1}garbage";
        let features = decode_features(blob);
        assert_eq!(features.len(), 1);
        assert_eq!(features["205"], "12");
    }

    #[test]
    fn test_decode_last_write_wins() {
        let blob = "205\u{2}12\u{3}0.5\u{1}205\u{2}99\u{3}1.0";
        let features = decode_features(blob);
        assert_eq!(features.len(), 1);
        assert_eq!(features["205"], "99");
    }

    #[test]
    fn test_decode_empty_blob() {
        assert!(decode_features("").is_empty());
    }

    #[test]
    fn test_decode_is_pure() {
        let blob = "205\u{2}12\u{3}0.5\u{1}206\u{2}34\u{3}1.0";
        assert_eq!(decode_features(blob), decode_features(blob));
    }
}
