//! Scanner opening façade
//!
//! Free functions that translate a high-level request and hand the result
//! to a [`StoreConnector`] in one step. All state lives in the connector;
//! these functions are pure dispatch. Connector errors propagate unchanged
//! — no retry, no catch.

use crate::batch;
use crate::error::Result;
use crate::term;
use rowplan_core::field::Field;
use rowplan_core::traits::{ConnectorError, Scanner, StoreConnector};
use rowplan_core::types::{Range, ScanRequest, RAW_RECORD_TABLE, TERM_INDEX_TABLE};

/// Open a scanner for any [`ScanRequest`] against a named table.
///
/// One total dispatch over the closed set of scan modes: a prefix request
/// opens a filterless single-range scanner, an exact request attaches its
/// substring filter, a batch request opens a batch scanner.
///
/// # Errors
///
/// Whatever the connector raises, unchanged.
pub fn open(
    conn: &dyn StoreConnector,
    table: &str,
    request: &ScanRequest,
) -> std::result::Result<Scanner, ConnectorError> {
    match request {
        ScanRequest::Prefix { field, range } => conn.open_scanner(table, field, range, None),
        ScanRequest::Exact {
            field,
            range,
            filter,
        } => conn.open_scanner(table, field, range, Some(filter)),
        ScanRequest::Batch(spec) => conn.open_batch_scanner(table, spec),
    }
}

/// Translate a token/field search and open it against the term index.
///
/// # Errors
///
/// Connector errors, unchanged.
pub fn open_term_scanner(
    conn: &dyn StoreConnector,
    token: &str,
    field: Field,
) -> Result<Scanner> {
    let request = term::translate(token, field);
    Ok(open(conn, TERM_INDEX_TABLE, &request)?)
}

/// Build a time-span batch scan and open it against the raw-record table.
///
/// # Errors
///
/// [`crate::QueryError::Parse`] or [`crate::QueryError::Range`] before the
/// connector is touched; connector errors unchanged after.
pub fn open_span_scanner(
    conn: &dyn StoreConnector,
    start_time: &str,
    end_time: &str,
) -> Result<Scanner> {
    let spec = batch::from_time_span(start_time, end_time)?;
    Ok(open(conn, RAW_RECORD_TABLE, &ScanRequest::Batch(spec))?)
}

/// Wrap pre-built ranges into a batch scan and open it against the
/// raw-record table.
///
/// # Errors
///
/// Connector errors, unchanged.
pub fn open_range_scanner(conn: &dyn StoreConnector, ranges: Vec<Range>) -> Result<Scanner> {
    let spec = batch::from_ranges(ranges);
    Ok(open(conn, RAW_RECORD_TABLE, &ScanRequest::Batch(spec))?)
}
