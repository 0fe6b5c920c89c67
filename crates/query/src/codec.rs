//! Timestamp key codec
//!
//! Encodes 64-bit timestamps as fixed-width, order-preserving byte keys.
//! Big-endian byte order makes unsigned lexicographic comparison of the
//! encoded keys agree with numeric comparison of the timestamps, so the
//! store's sort order is time order.

use byteorder::{BigEndian, ByteOrder};
use thiserror::Error;

/// Width of an encoded timestamp key in bytes.
pub const TIMESTAMP_KEY_LEN: usize = 8;

/// Encode a timestamp as an 8-byte big-endian key.
///
/// Strictly monotonic: for any `a < b`, `encode(a)` sorts before
/// `encode(b)` under unsigned lexicographic byte comparison. The unsigned
/// domain makes negative inputs unrepresentable; rejecting negative
/// decimal strings is the parser's job.
pub fn encode(value: u64) -> [u8; TIMESTAMP_KEY_LEN] {
    let mut key = [0u8; TIMESTAMP_KEY_LEN];
    BigEndian::write_u64(&mut key, value);
    key
}

/// Decode an 8-byte big-endian key back to a timestamp.
///
/// # Errors
///
/// Returns [`EncodingError::InvalidLength`] unless `bytes` is exactly
/// [`TIMESTAMP_KEY_LEN`] bytes.
pub fn decode(bytes: &[u8]) -> Result<u64, EncodingError> {
    if bytes.len() != TIMESTAMP_KEY_LEN {
        return Err(EncodingError::InvalidLength {
            actual: bytes.len(),
        });
    }
    Ok(BigEndian::read_u64(bytes))
}

/// Timestamp key codec errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// Key is not exactly [`TIMESTAMP_KEY_LEN`] bytes.
    #[error("timestamp key must be exactly {TIMESTAMP_KEY_LEN} bytes, got {actual}")]
    InvalidLength {
        /// Actual key length in bytes
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_is_big_endian() {
        assert_eq!(encode(0), [0; 8]);
        assert_eq!(encode(1), [0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(encode(0x0102_0304_0506_0708), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(encode(u64::MAX), [0xFF; 8]);
    }

    #[test]
    fn test_decode_inverts_encode_at_boundaries() {
        for value in [0, 1, 255, 256, u64::MAX - 1, u64::MAX] {
            assert_eq!(decode(&encode(value)).unwrap(), value);
        }
    }

    #[test]
    fn test_decode_rejects_short_key() {
        let result = decode(&[0, 1, 2]);
        assert_eq!(result, Err(EncodingError::InvalidLength { actual: 3 }));
    }

    #[test]
    fn test_decode_rejects_long_key() {
        let result = decode(&[0; 9]);
        assert_eq!(result, Err(EncodingError::InvalidLength { actual: 9 }));
    }

    #[test]
    fn test_decode_rejects_empty_key() {
        assert_eq!(decode(&[]), Err(EncodingError::InvalidLength { actual: 0 }));
    }

    #[test]
    fn test_ordering_across_byte_boundary() {
        // 255 -> 256 flips a full byte; lexicographic order must survive it.
        assert!(encode(255) < encode(256));
        assert!(encode(0xFFFF_FFFF) < encode(0x1_0000_0000));
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(value: u64) {
            prop_assert_eq!(decode(&encode(value)).unwrap(), value);
        }

        #[test]
        fn prop_encoding_preserves_order(a: u64, b: u64) {
            // Lexicographic comparison of keys must agree with numeric
            // comparison of values, in both directions.
            prop_assert_eq!(a.cmp(&b), encode(a).cmp(&encode(b)));
        }
    }
}
