//! Core types and traits for rowplan
//!
//! This crate defines the foundational pieces of the query translation
//! layer:
//! - Range, SubstringFilter, BatchScanSpec, ScanRequest: the value objects
//!   a translated query is made of
//! - Field: validated column-family restriction name
//! - StoreConnector: the consumed capability for opening scanners
//! - StoreConfig: explicit connection parameters, no implicit state
//! - Table constants: the two fixed logical tables queries address
//!
//! Translation logic itself (codec, range construction, term translation,
//! batch building) lives in `rowplan-query`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod field;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use config::StoreConfig;
pub use field::{Field, FieldError};
pub use traits::{ConnectorError, Scanner, StoreConnector};
pub use types::{
    BatchScanSpec, Entry, Range, RangeError, ScanRequest, SubstringFilter,
    DEFAULT_FILTER_PRIORITY, DEFAULT_PARALLELISM, RAW_RECORD_TABLE, TERM_INDEX_TABLE,
};
