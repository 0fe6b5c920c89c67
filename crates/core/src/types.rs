//! Scan specification value types
//!
//! This module defines the value objects a translated query is made of:
//! - Range: byte-key range with per-bound inclusivity
//! - SubstringFilter: server-side substring predicate directive
//! - BatchScanSpec: ordered range list plus parallelism degree
//! - ScanRequest: the closed set of scan modes
//! - Entry: opaque (key, value) pair yielded by scanners
//!
//! All of these are constructed per request and consumed immediately by a
//! `StoreConnector`; none are persisted or mutated after construction.

use crate::field::Field;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Logical table holding raw records, keyed by encoded timestamp.
pub const RAW_RECORD_TABLE: &str = "RawRecords";

/// Logical table holding the term index, keyed by token and partitioned
/// by field (column family).
pub const TERM_INDEX_TABLE: &str = "TermIndex";

/// Default number of concurrent sub-scans a batch scan may run.
pub const DEFAULT_PARALLELISM: usize = 5;

/// Default server-side priority for substring filters.
///
/// Lower priorities run earlier in the store's filter chain. The default
/// leaves room for system-level filters below it.
pub const DEFAULT_FILTER_PRIORITY: u32 = 5;

// ============================================================================
// Range
// ============================================================================

/// A byte-key range with a defined inclusivity on each bound.
///
/// Keys are compared as unsigned lexicographic byte sequences. The end
/// bound is optional: `None` means unbounded above, which is required for
/// prefix ranges whose prefix is all `0xFF` bytes (no strict upper bound
/// exists for those).
///
/// ## Invariant
///
/// When both bounds are present, the start key sorts at or before the end
/// key. Constructors enforce this; an inverted pair is a [`RangeError`],
/// never silently reordered. A range with `start == end` and both bounds
/// inclusive denotes a single-key match.
///
/// # Examples
///
/// ```
/// use rowplan_core::types::Range;
///
/// let range = Range::half_open(b"abc".to_vec(), b"abd".to_vec()).unwrap();
/// assert!(range.contains(b"abc"));
/// assert!(range.contains(b"abcd"));
/// assert!(!range.contains(b"abd"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    start: Vec<u8>,
    start_inclusive: bool,
    end: Option<Vec<u8>>,
    end_inclusive: bool,
}

impl Range {
    /// Range matching exactly one key (both bounds inclusive).
    pub fn single(key: impl Into<Vec<u8>>) -> Self {
        let key = key.into();
        Range {
            start: key.clone(),
            start_inclusive: true,
            end: Some(key),
            end_inclusive: true,
        }
    }

    /// Half-open range `[start, end)`: inclusive start, exclusive end.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Inverted`] if `start` sorts after `end`.
    pub fn half_open(start: Vec<u8>, end: Vec<u8>) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Range {
            start,
            start_inclusive: true,
            end: Some(end),
            end_inclusive: false,
        })
    }

    /// Closed range `[start, end]`: inclusive on both bounds.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Inverted`] if `start` sorts after `end`.
    pub fn closed(start: Vec<u8>, end: Vec<u8>) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Range {
            start,
            start_inclusive: true,
            end: Some(end),
            end_inclusive: true,
        })
    }

    /// Range from `start` (inclusive) with no upper bound.
    pub fn from_start(start: impl Into<Vec<u8>>) -> Self {
        Range {
            start: start.into(),
            start_inclusive: true,
            end: None,
            end_inclusive: false,
        }
    }

    /// Range covering exactly the keys that start with `prefix`.
    ///
    /// Built as `[prefix, increment(prefix))` where `increment` yields the
    /// lexicographically smallest sequence strictly greater than every
    /// sequence prefixed by `prefix`: increment the last non-`0xFF` byte
    /// and truncate. A prefix of all `0xFF` bytes (or an empty prefix) has
    /// no such bound, so the range is unbounded above.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowplan_core::types::Range;
    ///
    /// let range = Range::prefix(b"abc");
    /// assert!(range.contains(b"abc"));
    /// assert!(range.contains(b"abcd"));
    /// assert!(!range.contains(b"abd"));
    /// ```
    pub fn prefix(prefix: impl AsRef<[u8]>) -> Self {
        let prefix = prefix.as_ref();
        match prefix_upper_bound(prefix) {
            Some(end) => Range {
                start: prefix.to_vec(),
                start_inclusive: true,
                end: Some(end),
                end_inclusive: false,
            },
            None => Range::from_start(prefix),
        }
    }

    /// Start key bytes.
    pub fn start_key(&self) -> &[u8] {
        &self.start
    }

    /// End key bytes, or `None` if the range is unbounded above.
    pub fn end_key(&self) -> Option<&[u8]> {
        self.end.as_deref()
    }

    /// Whether the start bound is inclusive.
    pub fn is_start_inclusive(&self) -> bool {
        self.start_inclusive
    }

    /// Whether the end bound is inclusive.
    pub fn is_end_inclusive(&self) -> bool {
        self.end_inclusive
    }

    /// Whether `key` falls inside the range.
    ///
    /// Comparison is unsigned lexicographic on raw bytes, matching the
    /// sort order of the underlying store.
    pub fn contains(&self, key: &[u8]) -> bool {
        let above_start = if self.start_inclusive {
            key >= self.start.as_slice()
        } else {
            key > self.start.as_slice()
        };
        let below_end = match &self.end {
            None => true,
            Some(end) => {
                if self.end_inclusive {
                    key <= end.as_slice()
                } else {
                    key < end.as_slice()
                }
            }
        };
        above_start && below_end
    }
}

/// Smallest byte sequence strictly greater than every sequence starting
/// with `prefix`, or `None` when no finite bound exists (all-`0xFF` or
/// empty prefix).
fn prefix_upper_bound(prefix: &[u8]) -> Option<Vec<u8>> {
    let last_incrementable = prefix.iter().rposition(|&b| b != 0xFF)?;
    let mut bound = prefix[..=last_incrementable].to_vec();
    bound[last_incrementable] += 1;
    Some(bound)
}

/// Range construction errors.
///
/// An inverted range is an invariant violation on the caller's side; it is
/// surfaced, never silently corrected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    /// Start key sorts after end key.
    #[error("range start key sorts after end key ({start:02x?} > {end:02x?})")]
    Inverted {
        /// Offending start key
        start: Vec<u8>,
        /// Offending end key
        end: Vec<u8>,
    },
}

// ============================================================================
// SubstringFilter
// ============================================================================

/// Server-side substring predicate directive.
///
/// Instructs the store to keep only entries whose value contains `term` as
/// a substring. The store runs it inside the tablet server, so filtered
/// entries never cross the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstringFilter {
    /// Term to match as a substring of the scanned value.
    pub term: Vec<u8>,
    /// Priority in the store's server-side filter chain.
    pub priority: u32,
}

impl SubstringFilter {
    /// Create a filter for `term` at the default priority.
    pub fn new(term: impl Into<Vec<u8>>) -> Self {
        SubstringFilter {
            term: term.into(),
            priority: DEFAULT_FILTER_PRIORITY,
        }
    }

    /// Builder: set the server-side priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }
}

// ============================================================================
// BatchScanSpec
// ============================================================================

/// A parallel scan specification: an ordered list of ranges plus the
/// number of concurrent sub-scans the store may run across them.
///
/// Range order is preserved exactly as supplied; no deduplication or
/// merging is performed. The parallelism degree is a declaration consumed
/// by the store connector — this layer spawns nothing itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchScanSpec {
    /// Ranges to scan, in caller order.
    pub ranges: Vec<Range>,
    /// Number of concurrent sub-scans the store may run.
    pub parallelism: usize,
}

impl BatchScanSpec {
    /// Wrap `ranges` with the default parallelism degree.
    pub fn new(ranges: Vec<Range>) -> Self {
        BatchScanSpec {
            ranges,
            parallelism: DEFAULT_PARALLELISM,
        }
    }

    /// Builder: set the parallelism degree.
    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism;
        self
    }
}

// ============================================================================
// ScanRequest
// ============================================================================

/// The closed set of scan modes a translated query can produce.
///
/// Dispatching on this enum is a single total `match`; adding a scan mode
/// is a localized extension rather than a change to branching scattered
/// through the translation logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanRequest {
    /// Prefix scan over a field: every indexed key starting with the
    /// stripped token. No server-side filter.
    Prefix {
        /// Column-family restriction for the scan.
        field: Field,
        /// Prefix range over the stripped token bytes.
        range: Range,
    },
    /// Exact-key scan over a field, with a substring filter on the same
    /// term. The filter is redundant with the exact range when index keys
    /// are bare tokens; it narrows within the row when they are composite.
    Exact {
        /// Column-family restriction for the scan.
        field: Field,
        /// Single-key range over the token bytes.
        range: Range,
        /// Server-side substring predicate carrying the same term.
        filter: SubstringFilter,
    },
    /// Multi-range parallel scan with a bounded fan-out.
    Batch(BatchScanSpec),
}

// ============================================================================
// Entry
// ============================================================================

/// Opaque (key, value) pair yielded by a scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Row key bytes.
    pub key: Vec<u8>,
    /// Value bytes.
    pub value: Vec<u8>,
}

impl Entry {
    /// Create an entry from key and value bytes.
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Entry {
            key: key.into(),
            value: value.into(),
        }
    }
}
