//! rowplan — query translation for sorted, column-partitioned KV stores
//!
//! rowplan translates high-level search requests — a term against an
//! indexed field, a time span over raw records, or a pre-built range list
//! — into byte-exact range queries, server-side filter directives, and
//! parallel scan specifications. Executing them is the job of a
//! [`StoreConnector`] implementation supplied by the caller; this crate
//! never manages credentials, sockets, or result post-processing.
//!
//! # Quick Start
//!
//! ```
//! use rowplan::{term, Field, ScanRequest};
//!
//! let field = Field::new("text")?;
//!
//! // Trailing wildcard: prefix scan, no filter.
//! match term::translate("storm*", field.clone()) {
//!     ScanRequest::Prefix { range, .. } => {
//!         assert!(range.contains(b"stormy"));
//!         assert!(!range.contains(b"stern"));
//!     }
//!     _ => unreachable!(),
//! }
//!
//! // Plain token: exact scan plus a substring filter on the same term.
//! match term::translate("storm", field) {
//!     ScanRequest::Exact { filter, .. } => assert_eq!(filter.term, b"storm"),
//!     _ => unreachable!(),
//! }
//! # Ok::<(), rowplan::FieldError>(())
//! ```
//!
//! # Architecture
//!
//! - `rowplan-core` — value types (`Range`, `BatchScanSpec`, …), the
//!   `StoreConnector` capability trait, and connection configuration
//! - `rowplan-query` — the translation logic (timestamp key codec, range
//!   construction, term translation, batch building) and the scanner
//!   façade

// Re-export the public API of both crates
pub use rowplan_core::*;
pub use rowplan_query::*;
