//! Query translation for sorted, column-partitioned key-value stores
//!
//! This crate turns high-level search requests into byte-exact scan
//! specifications:
//! - codec: order-preserving 8-byte big-endian timestamp keys
//! - span: half-open (or optionally closed) time-span ranges
//! - term: token/field pairs → prefix scans or exact scans with a
//!   server-side substring filter
//! - batch: parallel scan specs from a time span or a pre-built range list
//! - scan: one-step translate-and-open against a `StoreConnector`
//!
//! Everything here is synchronous, pure, and free of shared mutable
//! state; any number of callers may translate concurrently. Store access
//! happens only through the connector capability the caller injects.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod codec;
pub mod error;
pub mod scan;
pub mod span;
pub mod term;

pub use error::{QueryError, Result};
pub use span::SpanEnd;
