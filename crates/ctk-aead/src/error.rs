// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types shared by every primitive.

/// Errors returned by the stream ciphers, Poly1305 and the AEAD constructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("invalid nonce length: expected {expected} bytes, got {actual}")]
    InvalidNonceLength { expected: usize, actual: usize },

    #[error("invalid tag length: expected {expected} bytes, got {actual}")]
    InvalidTagLength { expected: usize, actual: usize },

    #[error("authentication failed: tag mismatch")]
    AuthenticationFailed,

    #[error("block counter exhausted")]
    CounterOverflow,
}

/// Copies `bytes` into a fixed-size array, failing with the error built by `err`.
pub(crate) fn to_array<const N: usize>(
    bytes: &[u8],
    err: fn(usize, usize) -> CryptoError,
) -> Result<[u8; N], CryptoError> {
    <[u8; N]>::try_from(bytes).map_err(|_| {
        let e = err(N, bytes.len());
        log::debug!("rejected input: {e}");
        e
    })
}

pub(crate) fn key_length(expected: usize, actual: usize) -> CryptoError {
    CryptoError::InvalidKeyLength { expected, actual }
}

pub(crate) fn nonce_length(expected: usize, actual: usize) -> CryptoError {
    CryptoError::InvalidNonceLength { expected, actual }
}

pub(crate) fn tag_length(expected: usize, actual: usize) -> CryptoError {
    CryptoError::InvalidTagLength { expected, actual }
}
