//! Term query translation
//!
//! Turns a token/field pair into a scan request against the term index.
//! A token ending in the wildcard marker becomes a prefix scan over the
//! stripped token; anything else becomes an exact-key scan with a
//! server-side substring filter on the same term.

use rowplan_core::field::Field;
use rowplan_core::types::{Range, ScanRequest, SubstringFilter};

/// Trailing marker that turns a token into a prefix search.
pub const WILDCARD_MARKER: char = '*';

/// Translate a search token bound to an indexed field.
///
/// Only a trailing [`WILDCARD_MARKER`] is recognized; a `*` anywhere else
/// in the token is an ordinary literal byte. The translation is a pure
/// function of its inputs: equal token/field pairs yield structurally
/// equal requests.
///
/// The non-wildcard path constrains the scan twice — an exact-key range
/// and a substring filter on the same term. With bare-token index keys the
/// filter is redundant; with composite keys it narrows within the row.
///
/// # Examples
///
/// ```
/// use rowplan_core::{Field, ScanRequest};
/// use rowplan_query::term::translate;
///
/// let field = Field::new("text").unwrap();
/// let request = translate("storm*", field);
/// assert!(matches!(request, ScanRequest::Prefix { .. }));
/// ```
pub fn translate(token: &str, field: Field) -> ScanRequest {
    match token.strip_suffix(WILDCARD_MARKER) {
        Some(stripped) => ScanRequest::Prefix {
            field,
            range: Range::prefix(stripped.as_bytes()),
        },
        None => ScanRequest::Exact {
            field,
            range: Range::single(token.as_bytes()),
            filter: SubstringFilter::new(token.as_bytes()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_field() -> Field {
        Field::new("text").unwrap()
    }

    #[test]
    fn test_wildcard_token_becomes_prefix_scan_without_filter() {
        let request = translate("abc*", text_field());
        let ScanRequest::Prefix { field, range } = request else {
            panic!("expected prefix scan");
        };
        assert_eq!(field.as_str(), "text");
        assert!(range.contains(b"abcd"));
        assert!(range.contains(b"abc"));
        assert!(!range.contains(b"abd"));
    }

    #[test]
    fn test_plain_token_becomes_exact_scan_with_filter() {
        let request = translate("abc", text_field());
        let ScanRequest::Exact { field, range, filter } = request else {
            panic!("expected exact scan");
        };
        assert_eq!(field.as_str(), "text");
        assert!(range.contains(b"abc"));
        assert!(!range.contains(b"abcd"));
        assert_eq!(filter.term, b"abc");
    }

    #[test]
    fn test_embedded_asterisk_is_a_literal() {
        let request = translate("a*b", text_field());
        let ScanRequest::Exact { range, filter, .. } = request else {
            panic!("expected exact scan");
        };
        assert!(range.contains(b"a*b"));
        assert_eq!(filter.term, b"a*b");
    }

    #[test]
    fn test_only_the_trailing_marker_is_stripped() {
        // "a*b*" prefix-scans "a*b"; the inner asterisk stays literal.
        let request = translate("a*b*", text_field());
        let ScanRequest::Prefix { range, .. } = request else {
            panic!("expected prefix scan");
        };
        assert!(range.contains(b"a*b"));
        assert!(range.contains(b"a*bc"));
        assert!(!range.contains(b"ab"));
    }

    #[test]
    fn test_bare_wildcard_scans_the_whole_field() {
        let request = translate("*", text_field());
        let ScanRequest::Prefix { range, .. } = request else {
            panic!("expected prefix scan");
        };
        assert!(range.contains(b""));
        assert!(range.contains(b"anything"));
        assert_eq!(range.end_key(), None);
    }

    #[test]
    fn test_translation_is_idempotent() {
        let first = translate("storm*", text_field());
        let second = translate("storm*", text_field());
        assert_eq!(first, second);

        let first = translate("storm", text_field());
        let second = translate("storm", text_field());
        assert_eq!(first, second);
    }
}
