// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20-Poly1305 AEAD (RFC 8439 Section 2.8), 96-bit nonce.

use alloc::vec::Vec;

use zeroize::{Zeroize, Zeroizing};

use super::composer::AeadCipher;
use crate::CryptoError;
use crate::chacha20::{ChaCha20, chacha20_block};
use crate::consts::POLY1305_KEY_SIZE;
use crate::types::{Key, Nonce, Poly1305Key, Tag};

pub type ChaCha20Poly1305 = AeadCipher<ChaCha20>;

/// Poly1305 key generation (RFC 8439 Section 2.6): first 32 bytes of the block at counter 0.
pub fn poly1305_key_gen(key: &Key, nonce: &Nonce) -> Zeroizing<Poly1305Key> {
    let mut block = chacha20_block(key, nonce, 0);

    let mut poly_key = Zeroizing::new([0u8; POLY1305_KEY_SIZE]);
    poly_key.copy_from_slice(&block[..POLY1305_KEY_SIZE]);
    block.zeroize();

    poly_key
}

/// Encrypts `plaintext` under a 32-byte key and 12-byte nonce.
pub fn encrypt(
    key: &[u8],
    nonce: &[u8],
    plaintext: &[u8],
    aad: &[u8],
) -> Result<(Vec<u8>, Tag), CryptoError> {
    ChaCha20Poly1305::new(key)?.encrypt(nonce, plaintext, aad)
}

/// Verifies `tag` and decrypts `ciphertext` under a 32-byte key and 12-byte nonce.
pub fn decrypt(
    key: &[u8],
    nonce: &[u8],
    ciphertext: &[u8],
    aad: &[u8],
    tag: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    ChaCha20Poly1305::new(key)?.decrypt(nonce, ciphertext, aad, tag)
}
