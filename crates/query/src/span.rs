//! Time-span range construction
//!
//! Builds the range a time-span query scans: `[start, end)` over encoded
//! timestamp keys. The end bound is exclusive by default — a record whose
//! timestamp equals the end bound exactly is not returned. That asymmetry
//! is deliberate; [`SpanEnd`] is the single switch that widens the bound
//! without touching the encoding logic.

use rowplan_core::types::{Range, RangeError};
use tracing::warn;

/// Inclusivity of a time span's end bound.
///
/// The start bound is always inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanEnd {
    /// `[start, end)` — a record timestamped exactly `end` is excluded.
    #[default]
    Exclusive,
    /// `[start, end]` — the end timestamp's own key is included.
    Inclusive,
}

/// Build a span range from two encoded timestamp keys.
///
/// # Errors
///
/// Returns [`RangeError::Inverted`] if `start_key` sorts after `end_key`.
/// That is an invariant violation on the caller's side: it is logged and
/// surfaced, never silently reordered.
pub fn span_range(
    start_key: Vec<u8>,
    end_key: Vec<u8>,
    end_bound: SpanEnd,
) -> Result<Range, RangeError> {
    let built = match end_bound {
        SpanEnd::Exclusive => Range::half_open(start_key, end_key),
        SpanEnd::Inclusive => Range::closed(start_key, end_key),
    };
    if let Err(err) = &built {
        warn!(%err, "rejecting inverted time-span range");
    }
    built
}
