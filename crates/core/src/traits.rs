//! Store connector abstraction
//!
//! This module defines the `StoreConnector` trait consumed by the
//! translation layer. Implementations hold the authenticated session with
//! the sorted, column-partitioned store and open scanners over named
//! tables; the translation layer only produces the specifications they
//! consume.

use crate::field::Field;
use crate::types::{BatchScanSpec, Entry, Range, SubstringFilter};
use thiserror::Error;

/// A scanner over store entries.
///
/// Scanners own store-side cursor state. Implementations must release
/// that state when the scanner is dropped, so every exit path — including
/// early returns on error — closes the cursor.
pub type Scanner = Box<dyn Iterator<Item = Entry> + Send>;

/// Errors raised while opening a scanner.
///
/// These originate in the connector implementation. The translation layer
/// neither catches nor retries them; they propagate unchanged to the
/// caller, which decides on retry or user-facing reporting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectorError {
    /// The store or its coordination service is unreachable.
    #[error("store connection failed: {0}")]
    Connectivity(String),

    /// The store rejected the principal's credentials.
    #[error("authentication rejected for principal '{0}'")]
    Auth(String),

    /// The named table does not exist in the store.
    #[error("table not found: {0}")]
    TableNotFound(String),
}

/// Capability for opening scanners over named tables.
///
/// Implementations are expected to be authenticated handles. Any
/// authorization scoping the store requires is the implementor's concern;
/// holders of this capability cannot mutate global authorization through
/// it.
///
/// Thread safety: connectors are shared across request handlers, so
/// implementations must be `Send + Sync`.
pub trait StoreConnector: Send + Sync {
    /// Open a scanner over one range of `table`, restricted to `field`,
    /// with an optional server-side substring filter.
    ///
    /// # Errors
    ///
    /// Returns a [`ConnectorError`] if the store is unreachable, the
    /// principal is rejected, or `table` does not exist.
    fn open_scanner(
        &self,
        table: &str,
        field: &Field,
        range: &Range,
        filter: Option<&SubstringFilter>,
    ) -> Result<Scanner, ConnectorError>;

    /// Open a batch scanner over `table` running up to `spec.parallelism`
    /// concurrent sub-scans across `spec.ranges`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConnectorError`] if the store is unreachable, the
    /// principal is rejected, or `table` does not exist.
    fn open_batch_scanner(&self, table: &str, spec: &BatchScanSpec)
        -> Result<Scanner, ConnectorError>;
}
