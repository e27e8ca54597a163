// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hex decoding for published test vectors.

use alloc::vec::Vec;

/// Errors produced while decoding a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    #[error("odd number of hex digits: {0}")]
    OddLength(usize),

    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },

    #[error("decoded {actual} bytes, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

fn nibble(digit: u8, position: usize) -> Result<u8, HexError> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(HexError::InvalidDigit {
            digit: digit as char,
            position,
        }),
    }
}

/// Parses a hexadecimal string into bytes.
///
/// ASCII whitespace is skipped so long vectors can be wrapped across lines.
///
/// # Example
///
/// ```
/// use ctk_util::try_hex_to_bytes;
///
/// assert_eq!(try_hex_to_bytes("dead beef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
/// assert!(try_hex_to_bytes("abc").is_err());
/// ```
pub fn try_hex_to_bytes(hex: &str) -> Result<Vec<u8>, HexError> {
    let digits: Vec<(usize, u8)> = hex
        .bytes()
        .enumerate()
        .filter(|(_, b)| !b.is_ascii_whitespace())
        .collect();

    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength(digits.len()));
    }

    digits
        .chunks_exact(2)
        .map(|pair| {
            let (hi_pos, hi) = pair[0];
            let (lo_pos, lo) = pair[1];
            Ok((nibble(hi, hi_pos)? << 4) | nibble(lo, lo_pos)?)
        })
        .collect()
}

/// Parses a hexadecimal string into bytes.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use ctk_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    match try_hex_to_bytes(hex) {
        Ok(bytes) => bytes,
        Err(e) => panic!("malformed hex test vector: {e}"),
    }
}

/// Parses a hexadecimal string into a fixed-size array.
///
/// # Panics
///
/// Panics if the string is malformed or does not decode to exactly `N` bytes.
///
/// # Example
///
/// ```
/// use ctk_util::hex_to_array;
///
/// let nonce: [u8; 4] = hex_to_array("00000009");
/// assert_eq!(nonce, [0, 0, 0, 9]);
/// ```
pub fn hex_to_array<const N: usize>(hex: &str) -> [u8; N] {
    let bytes = hex_to_bytes(hex);
    match <[u8; N]>::try_from(bytes.as_slice()) {
        Ok(array) => array,
        Err(_) => panic!(
            "malformed hex test vector: {}",
            HexError::LengthMismatch {
                expected: N,
                actual: bytes.len(),
            }
        ),
    }
}
