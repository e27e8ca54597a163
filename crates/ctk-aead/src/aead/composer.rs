// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Generic stream cipher + Poly1305 composition.
//!
//! Per message:
//! 1. the block at counter 0 keys Poly1305 (first 32 bytes, rest discarded)
//! 2. the message is XORed with the keystream from counter 1
//! 3. the tag covers `aad || pad16 || ciphertext || pad16 || len(aad) || len(ciphertext)`
//!
//! Decryption verifies the tag before any keystream touches the buffer.

use alloc::vec::Vec;
use core::marker::PhantomData;

use zeroize::{Zeroize, Zeroizing};

use ctk_util::{constant_time_eq, pad_len};

use crate::consts::{KEY_SIZE, POLY1305_BLOCK_SIZE, POLY1305_KEY_SIZE, TAG_SIZE};
use crate::error::{CryptoError, key_length, tag_length, to_array};
use crate::poly1305::Poly1305;
use crate::traits::StreamCipher;
use crate::types::{Key, Poly1305Key, Tag};

/// Takes the one-time Poly1305 key from the cipher's next block.
///
/// Called on a fresh instance at counter 0; leaves the counter at 1.
pub(crate) fn one_time_key<C: StreamCipher>(
    cipher: &mut C,
) -> Result<Zeroizing<Poly1305Key>, CryptoError> {
    let mut block = cipher.produce_block()?;

    let mut poly_key = Zeroizing::new([0u8; POLY1305_KEY_SIZE]);
    poly_key.copy_from_slice(&block[..POLY1305_KEY_SIZE]);
    block.zeroize();

    log::trace!("derived one-time Poly1305 key");

    Ok(poly_key)
}

fn lengths_block(aad: &[u8], ciphertext: &[u8]) -> [u8; 16] {
    let mut lengths = [0u8; 16];
    lengths[..8].copy_from_slice(&(aad.len() as u64).to_le_bytes());
    lengths[8..].copy_from_slice(&(ciphertext.len() as u64).to_le_bytes());

    lengths
}

/// Tag over the AEAD input layout, streamed so the input is never materialized.
pub(crate) fn compute_tag(poly_key: &Poly1305Key, aad: &[u8], ciphertext: &[u8]) -> Tag {
    let mut mac = Poly1305::from_key(poly_key);

    mac.update_padded(aad);
    mac.update_padded(ciphertext);
    mac.update(&lengths_block(aad, ciphertext));

    log::trace!(
        "computed tag over {} aad bytes and {} ciphertext bytes",
        aad.len(),
        ciphertext.len()
    );

    mac.finalize()
}

/// The exact byte string Poly1305 authenticates for `(aad, ciphertext)`.
///
/// `aad || zero pad || ciphertext || zero pad || len(aad) as u64 LE || len(ciphertext) as u64 LE`
pub fn authenticated_input(aad: &[u8], ciphertext: &[u8]) -> Vec<u8> {
    let aad_pad = pad_len(aad.len(), POLY1305_BLOCK_SIZE);
    let ct_pad = pad_len(ciphertext.len(), POLY1305_BLOCK_SIZE);

    let mut input = Vec::with_capacity(aad.len() + aad_pad + ciphertext.len() + ct_pad + 16);
    input.extend_from_slice(aad);
    input.resize(input.len() + aad_pad, 0);
    input.extend_from_slice(ciphertext);
    input.resize(input.len() + ct_pad, 0);
    input.extend_from_slice(&lengths_block(aad, ciphertext));

    input
}

/// AEAD built from a [`StreamCipher`] and Poly1305.
///
/// Holds only the key; every call builds a fresh cipher instance for its
/// message, so no keystream state is shared between messages. Nonce
/// uniqueness per key is the caller's responsibility.
pub struct AeadCipher<C: StreamCipher> {
    key: Zeroizing<Key>,
    _cipher: PhantomData<fn() -> C>,
}

impl<C: StreamCipher> AeadCipher<C> {
    /// Creates the AEAD from an untyped key, validating its size.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        let key = Zeroizing::new(to_array::<KEY_SIZE>(key, key_length)?);

        Ok(Self {
            key,
            _cipher: PhantomData,
        })
    }

    pub fn from_key(key: &Key) -> Self {
        Self {
            key: Zeroizing::new(*key),
            _cipher: PhantomData,
        }
    }

    /// Encrypts `buffer` in place and returns the tag.
    pub fn encrypt_in_place_detached(
        &self,
        nonce: &C::Nonce,
        aad: &[u8],
        buffer: &mut [u8],
    ) -> Result<Tag, CryptoError> {
        let mut cipher = C::with_counter(&self.key, nonce, 0);
        let poly_key = one_time_key(&mut cipher)?;

        cipher.apply_keystream(buffer)?;

        Ok(compute_tag(&poly_key, aad, buffer))
    }

    /// Verifies `tag` over `(aad, buffer)`, then decrypts `buffer` in place.
    ///
    /// On [`CryptoError::AuthenticationFailed`] the buffer still holds the
    /// untouched ciphertext.
    pub fn decrypt_in_place_detached(
        &self,
        nonce: &C::Nonce,
        aad: &[u8],
        buffer: &mut [u8],
        tag: &Tag,
    ) -> Result<(), CryptoError> {
        let mut cipher = C::with_counter(&self.key, nonce, 0);
        let poly_key = one_time_key(&mut cipher)?;

        let mut expected = compute_tag(&poly_key, aad, buffer);
        let authentic = constant_time_eq(&expected, tag);
        expected.zeroize();

        if !authentic {
            log::debug!(
                "authentication failed for {} ciphertext bytes",
                buffer.len()
            );
            return Err(CryptoError::AuthenticationFailed);
        }

        cipher.apply_keystream(buffer)
    }

    /// Encrypts `plaintext`, returning the ciphertext (same length) and the tag.
    pub fn encrypt(
        &self,
        nonce: &[u8],
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<(Vec<u8>, Tag), CryptoError> {
        let nonce = C::nonce_from_slice(nonce)?;

        let mut ciphertext = plaintext.to_vec();
        let tag = self.encrypt_in_place_detached(&nonce, aad, &mut ciphertext)?;

        Ok((ciphertext, tag))
    }

    /// Decrypts `ciphertext` after verifying `tag`. No plaintext is produced on failure.
    pub fn decrypt(
        &self,
        nonce: &[u8],
        ciphertext: &[u8],
        aad: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let nonce = C::nonce_from_slice(nonce)?;
        let tag = to_array::<TAG_SIZE>(tag, tag_length)?;

        let mut plaintext = ciphertext.to_vec();
        self.decrypt_in_place_detached(&nonce, aad, &mut plaintext, &tag)?;

        Ok(plaintext)
    }
}

impl<C: StreamCipher> core::fmt::Debug for AeadCipher<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "AeadCipher {{ [protected] }}")
    }
}
