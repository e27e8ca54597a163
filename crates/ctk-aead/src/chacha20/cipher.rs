// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20 stream cipher (RFC 8439 Section 2.4)
//!
//! Key material is zeroized on drop.

use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::core::chacha20_block;
use crate::consts::{BLOCK_SIZE, COUNTER_SIZE, KEY_SIZE, MAX_BLOCKS, NONCE_SIZE};
use crate::error::{CryptoError, key_length, nonce_length, to_array};
use crate::traits::StreamCipher;
use crate::types::{Block, Key, Nonce};

/// ChaCha20 keystream generator with a 32-bit block counter.
///
/// Every block advances the counter by one. Once the block at `u32::MAX` has
/// been produced the instance is exhausted and further requests fail with
/// [`CryptoError::CounterOverflow`] instead of wrapping around.
///
/// Not `Clone`: a cloned instance would hand out the same keystream twice.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    key: Key,
    nonce: Nonce,
    // Index of the next block; reaches MAX_BLOCKS when exhausted.
    counter: u64,
}

impl ChaCha20 {
    /// Creates an instance from untyped buffers, validating their sizes.
    ///
    /// `initial_counter` is the little-endian encoding of the first block index.
    pub fn new(
        key: &[u8],
        nonce: &[u8],
        initial_counter: [u8; COUNTER_SIZE],
    ) -> Result<Self, CryptoError> {
        let key = Zeroizing::new(to_array::<KEY_SIZE>(key, key_length)?);
        let nonce = to_array::<NONCE_SIZE>(nonce, nonce_length)?;

        Ok(Self::with_counter(
            &key,
            &nonce,
            u32::from_le_bytes(initial_counter),
        ))
    }

    pub fn with_counter(key: &Key, nonce: &Nonce, counter: u32) -> Self {
        Self {
            key: *key,
            nonce: *nonce,
            counter: u64::from(counter),
        }
    }

    /// Index of the next block to be produced.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Claims `blocks` consecutive counter values and returns the first one.
    fn reserve(&mut self, blocks: u64) -> Result<u32, CryptoError> {
        if blocks > MAX_BLOCKS - self.counter {
            log::debug!(
                "keystream exhausted: {blocks} blocks requested at counter {}",
                self.counter
            );
            return Err(CryptoError::CounterOverflow);
        }

        let first = self.counter as u32;
        self.counter += blocks;

        Ok(first)
    }

    /// Produces the next keystream block and advances the counter.
    pub fn produce_block(&mut self) -> Result<Block, CryptoError> {
        let counter = self.reserve(1)?;

        Ok(chacha20_block(&self.key, &self.nonce, counter))
    }

    /// XORs `data` in place with the keystream. Encryption and decryption are the same call.
    ///
    /// A trailing partial block consumes a whole counter value; the unused
    /// keystream bytes are discarded. Fails without touching `data` if the
    /// counter cannot cover the whole buffer.
    pub fn apply_keystream(&mut self, data: &mut [u8]) -> Result<(), CryptoError> {
        let blocks = data.len().div_ceil(BLOCK_SIZE) as u64;
        let first = self.reserve(blocks)?;

        for (i, chunk) in data.chunks_mut(BLOCK_SIZE).enumerate() {
            let mut keystream = chacha20_block(&self.key, &self.nonce, first + i as u32);

            for (byte, ks_byte) in chunk.iter_mut().zip(keystream.iter()) {
                *byte ^= ks_byte;
            }

            keystream.zeroize();
        }

        Ok(())
    }

    /// Returns `data` XORed with the keystream, leaving the input untouched.
    pub fn xor_with_keystream(&mut self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut output = data.to_vec();
        self.apply_keystream(&mut output)?;

        Ok(output)
    }
}

impl StreamCipher for ChaCha20 {
    type Nonce = Nonce;

    const NONCE_SIZE: usize = NONCE_SIZE;

    fn nonce_from_slice(nonce: &[u8]) -> Result<Self::Nonce, CryptoError> {
        to_array::<NONCE_SIZE>(nonce, nonce_length)
    }

    fn with_counter(key: &Key, nonce: &Self::Nonce, counter: u32) -> Self {
        ChaCha20::with_counter(key, nonce, counter)
    }

    fn produce_block(&mut self) -> Result<Block, CryptoError> {
        ChaCha20::produce_block(self)
    }

    fn apply_keystream(&mut self, data: &mut [u8]) -> Result<(), CryptoError> {
        ChaCha20::apply_keystream(self, data)
    }
}

impl core::fmt::Debug for ChaCha20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ChaCha20 {{ [protected] }}")
    }
}
