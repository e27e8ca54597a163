// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Stream cipher trait used by the AEAD composer.

use crate::CryptoError;
use crate::types::{Block, Key};

/// Keystream generator that can key a ChaCha20-Poly1305 style AEAD.
///
/// Implemented by [`ChaCha20`](crate::ChaCha20) and [`XChaCha20`](crate::XChaCha20).
pub trait StreamCipher: Sized {
    type Nonce;

    const NONCE_SIZE: usize;

    /// Parses an untyped nonce, failing on a size mismatch.
    fn nonce_from_slice(nonce: &[u8]) -> Result<Self::Nonce, CryptoError>;

    /// Creates an instance whose first block is `counter`.
    fn with_counter(key: &Key, nonce: &Self::Nonce, counter: u32) -> Self;

    /// Produces the next keystream block and advances the counter.
    fn produce_block(&mut self) -> Result<Block, CryptoError>;

    /// XORs `data` in place with the keystream, advancing the counter.
    fn apply_keystream(&mut self, data: &mut [u8]) -> Result<(), CryptoError>;
}
