//! Batch scan building
//!
//! Packages ranges into parallel scan specifications: either one span
//! range derived from a pair of decimal timestamp strings, or a
//! caller-supplied range list wrapped unchanged.

use crate::codec;
use crate::error::{QueryError, Result};
use crate::span::{span_range, SpanEnd};
use rowplan_core::types::{BatchScanSpec, Range};

/// Build a batch scan spec covering the time span `[start_time, end_time)`.
///
/// Both bounds are decimal strings naming non-negative 64-bit timestamps.
/// Parsing happens before any range is built: a bad bound fails the whole
/// request with no partial result.
///
/// # Errors
///
/// Returns [`QueryError::Parse`] if either bound is not a valid
/// non-negative decimal integer, or [`QueryError::Range`] if the bounds
/// are inverted.
pub fn from_time_span(start_time: &str, end_time: &str) -> Result<BatchScanSpec> {
    from_time_span_with_end(start_time, end_time, SpanEnd::default())
}

/// [`from_time_span`] with an explicit end-bound inclusivity.
///
/// # Errors
///
/// Same as [`from_time_span`].
pub fn from_time_span_with_end(
    start_time: &str,
    end_time: &str,
    end_bound: SpanEnd,
) -> Result<BatchScanSpec> {
    let start = parse_time_bound(start_time)?;
    let end = parse_time_bound(end_time)?;
    let range = span_range(
        codec::encode(start).to_vec(),
        codec::encode(end).to_vec(),
        end_bound,
    )?;
    Ok(BatchScanSpec::new(vec![range]))
}

/// Wrap a caller-supplied range list into a batch scan spec.
///
/// Order and count are preserved exactly; no deduplication, merging, or
/// well-formedness validation happens here — ranges built through this
/// crate's constructors already hold their invariants, and anything else
/// is the caller's responsibility.
pub fn from_ranges(ranges: Vec<Range>) -> BatchScanSpec {
    BatchScanSpec::new(ranges)
}

fn parse_time_bound(input: &str) -> Result<u64> {
    input.parse::<u64>().map_err(|source| QueryError::Parse {
        input: input.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowplan_core::types::DEFAULT_PARALLELISM;

    #[test]
    fn test_time_span_builds_one_half_open_range() {
        let spec = from_time_span("100", "200").unwrap();
        assert_eq!(spec.ranges.len(), 1);
        assert_eq!(spec.parallelism, DEFAULT_PARALLELISM);

        let range = &spec.ranges[0];
        assert_eq!(range.start_key(), &codec::encode(100));
        assert_eq!(range.end_key(), Some(&codec::encode(200)[..]));
        assert!(range.contains(&codec::encode(100)));
        assert!(range.contains(&codec::encode(199)));
        assert!(!range.contains(&codec::encode(200)));
    }

    #[test]
    fn test_time_span_with_inclusive_end() {
        let spec = from_time_span_with_end("100", "200", SpanEnd::Inclusive).unwrap();
        assert!(spec.ranges[0].contains(&codec::encode(200)));
    }

    #[test]
    fn test_bad_start_bound_is_a_parse_error() {
        let result = from_time_span("abc", "200");
        let Err(QueryError::Parse { input, .. }) = result else {
            panic!("expected parse error");
        };
        assert_eq!(input, "abc");
    }

    #[test]
    fn test_negative_bound_is_a_parse_error() {
        assert!(matches!(
            from_time_span("100", "-5"),
            Err(QueryError::Parse { .. })
        ));
    }

    #[test]
    fn test_inverted_span_is_a_range_error() {
        assert!(matches!(
            from_time_span("200", "100"),
            Err(QueryError::Range(_))
        ));
    }

    #[test]
    fn test_from_ranges_preserves_order_and_count() {
        let r1 = Range::single(b"a".to_vec());
        let r2 = Range::single(b"c".to_vec());
        let r3 = Range::single(b"b".to_vec());
        let spec = from_ranges(vec![r1.clone(), r2.clone(), r3.clone()]);
        assert_eq!(spec.ranges, vec![r1, r2, r3]);
        assert_eq!(spec.parallelism, DEFAULT_PARALLELISM);
    }
}
