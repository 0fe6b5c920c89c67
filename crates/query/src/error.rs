//! Error types for query translation
//!
//! Crate-level aggregate over the module error types, via `thiserror`.
//! Every variant except `Connector` is a local-computation failure with no
//! side effects to unwind; `Connector` is pass-through from the store.

use crate::codec::EncodingError;
use rowplan_core::traits::ConnectorError;
use rowplan_core::types::RangeError;
use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias for query translation operations.
pub type Result<T> = std::result::Result<T, QueryError>;

/// Errors surfaced by query translation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A timestamp key failed to encode or decode.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// A time-span bound is not a valid non-negative decimal integer.
    #[error("invalid time bound {input:?}: {source}")]
    Parse {
        /// The rejected input string
        input: String,
        /// Underlying integer parse failure
        source: ParseIntError,
    },

    /// A constructed range violated the start ≤ end invariant.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// The store connector failed to open a scanner; propagated unchanged.
    #[error(transparent)]
    Connector(#[from] ConnectorError),
}
