// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! XChaCha20-Poly1305 AEAD (draft-irtf-cfrg-xchacha), 192-bit nonce.
//!
//! Same framing as ChaCha20-Poly1305; only the stream cipher differs.

use alloc::vec::Vec;

use zeroize::Zeroizing;

use super::chacha20poly1305;
use super::composer::AeadCipher;
use crate::CryptoError;
use crate::chacha20::{XChaCha20, hchacha20, split_nonce};
use crate::types::{Key, Poly1305Key, Tag, XNonce};

pub type XChaCha20Poly1305 = AeadCipher<XChaCha20>;

/// One-time Poly1305 key for `(key, nonce)`: the subkeyed ChaCha20 block at counter 0.
pub fn poly1305_key_gen(key: &Key, nonce: &XNonce) -> Zeroizing<Poly1305Key> {
    let (hnonce, chacha_nonce) = split_nonce(nonce);
    let subkey = hchacha20(key, &hnonce);

    chacha20poly1305::poly1305_key_gen(&subkey, &chacha_nonce)
}

/// Encrypts `plaintext` under a 32-byte key and 24-byte nonce.
pub fn encrypt(
    key: &[u8],
    nonce: &[u8],
    plaintext: &[u8],
    aad: &[u8],
) -> Result<(Vec<u8>, Tag), CryptoError> {
    XChaCha20Poly1305::new(key)?.encrypt(nonce, plaintext, aad)
}

/// Verifies `tag` and decrypts `ciphertext` under a 32-byte key and 24-byte nonce.
pub fn decrypt(
    key: &[u8],
    nonce: &[u8],
    ciphertext: &[u8],
    aad: &[u8],
    tag: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    XChaCha20Poly1305::new(key)?.decrypt(nonce, ciphertext, aad, tag)
}
