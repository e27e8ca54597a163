// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte utilities shared by the ctk primitives.
//!
//! Word conversions follow the little-endian layout every ChaCha20 and
//! Poly1305 structure uses. Slice comparison is constant-time.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[cfg(test)]
mod tests;

#[cfg(any(test, feature = "test-utils"))]
mod hex;

#[cfg(any(test, feature = "test-utils"))]
pub use hex::{HexError, hex_to_array, hex_to_bytes, try_hex_to_bytes};

use subtle::ConstantTimeEq;

/// Loads consecutive little-endian `u32` words from `bytes` into `words`.
///
/// Reads `words.len()` words; `bytes` must hold at least `4 * words.len()`
/// bytes. Trailing bytes are ignored.
///
/// # Example
///
/// ```
/// use ctk_util::words_from_le;
///
/// let mut words = [0u32; 2];
/// words_from_le(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08], &mut words);
/// assert_eq!(words, [0x04030201, 0x08070605]);
/// ```
#[inline(always)]
pub fn words_from_le(bytes: &[u8], words: &mut [u32]) {
    debug_assert!(bytes.len() >= words.len() * 4);

    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Stores `words` into `bytes` as consecutive little-endian `u32` values.
///
/// Writes `4 * words.len()` bytes; any remaining bytes are left untouched.
///
/// # Example
///
/// ```
/// use ctk_util::words_to_le;
///
/// let mut bytes = [0u8; 8];
/// words_to_le(&[0x04030201, 0x08070605], &mut bytes);
/// assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
/// ```
#[inline(always)]
pub fn words_to_le(words: &[u32], bytes: &mut [u8]) {
    debug_assert!(bytes.len() >= words.len() * 4);

    for (word, chunk) in words.iter().zip(bytes.chunks_exact_mut(4)) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}

/// Constant-time equality comparison for byte slices.
///
/// Every byte of equally sized slices is compared, regardless of where the
/// first difference occurs. Slices of different lengths compare unequal.
///
/// # Example
///
/// ```
/// use ctk_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 4]));
/// assert!(!constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 5]));
/// assert!(!constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Number of zero bytes needed to pad `len` up to a multiple of `block`.
///
/// # Example
///
/// ```
/// use ctk_util::pad_len;
///
/// assert_eq!(pad_len(0, 16), 0);
/// assert_eq!(pad_len(12, 16), 4);
/// assert_eq!(pad_len(32, 16), 0);
/// ```
#[inline(always)]
pub fn pad_len(len: usize, block: usize) -> usize {
    (block - len % block) % block
}
