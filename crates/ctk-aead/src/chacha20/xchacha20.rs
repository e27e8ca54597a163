// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! XChaCha20 stream cipher (draft-irtf-cfrg-xchacha Section 2.3)

use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::cipher::ChaCha20;
use super::hchacha20::hchacha20;
use crate::consts::{COUNTER_SIZE, HNONCE_SIZE, KEY_SIZE, NONCE_SIZE, XNONCE_SIZE};
use crate::error::{CryptoError, key_length, nonce_length, to_array};
use crate::traits::StreamCipher;
use crate::types::{Block, HNonce, Key, Nonce, XNonce};

/// ChaCha20 keyed with an HChaCha20 subkey, accepting a 192-bit nonce.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct XChaCha20 {
    inner: ChaCha20,
}

/// Splits an extended nonce into the HChaCha20 input and the ChaCha20 nonce
/// (four zero bytes followed by the last eight bytes).
pub(crate) fn split_nonce(nonce: &XNonce) -> (HNonce, Nonce) {
    let mut hnonce = [0u8; HNONCE_SIZE];
    hnonce.copy_from_slice(&nonce[..HNONCE_SIZE]);

    let mut chacha_nonce = [0u8; NONCE_SIZE];
    chacha_nonce[4..].copy_from_slice(&nonce[HNONCE_SIZE..]);

    (hnonce, chacha_nonce)
}

impl XChaCha20 {
    /// Creates an instance from untyped buffers, validating their sizes.
    pub fn new(
        key: &[u8],
        nonce: &[u8],
        initial_counter: [u8; COUNTER_SIZE],
    ) -> Result<Self, CryptoError> {
        let key = Zeroizing::new(to_array::<KEY_SIZE>(key, key_length)?);
        let nonce = to_array::<XNONCE_SIZE>(nonce, nonce_length)?;

        Ok(Self::with_counter(
            &key,
            &nonce,
            u32::from_le_bytes(initial_counter),
        ))
    }

    pub fn with_counter(key: &Key, nonce: &XNonce, counter: u32) -> Self {
        let (hnonce, chacha_nonce) = split_nonce(nonce);
        let subkey = hchacha20(key, &hnonce);

        Self {
            inner: ChaCha20::with_counter(&subkey, &chacha_nonce, counter),
        }
    }

    /// Index of the next block to be produced.
    pub fn counter(&self) -> u64 {
        self.inner.counter()
    }

    pub fn produce_block(&mut self) -> Result<Block, CryptoError> {
        self.inner.produce_block()
    }

    pub fn apply_keystream(&mut self, data: &mut [u8]) -> Result<(), CryptoError> {
        self.inner.apply_keystream(data)
    }

    pub fn xor_with_keystream(&mut self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.inner.xor_with_keystream(data)
    }
}

impl StreamCipher for XChaCha20 {
    type Nonce = XNonce;

    const NONCE_SIZE: usize = XNONCE_SIZE;

    fn nonce_from_slice(nonce: &[u8]) -> Result<Self::Nonce, CryptoError> {
        to_array::<XNONCE_SIZE>(nonce, nonce_length)
    }

    fn with_counter(key: &Key, nonce: &Self::Nonce, counter: u32) -> Self {
        XChaCha20::with_counter(key, nonce, counter)
    }

    fn produce_block(&mut self) -> Result<Block, CryptoError> {
        self.inner.produce_block()
    }

    fn apply_keystream(&mut self, data: &mut [u8]) -> Result<(), CryptoError> {
        self.inner.apply_keystream(data)
    }
}

impl core::fmt::Debug for XChaCha20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "XChaCha20 {{ [protected] }}")
    }
}
