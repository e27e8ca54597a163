// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HChaCha20 subkey derivation (draft-irtf-cfrg-xchacha Section 2.2)

use zeroize::{Zeroize, Zeroizing};

use ctk_util::{words_from_le, words_to_le};

use super::core::{init_state, permute};
use crate::consts::{HNONCE_SIZE, KEY_SIZE};
use crate::error::{CryptoError, key_length, nonce_length, to_array};
use crate::types::{HNonce, Key};

/// Derives a 256-bit subkey from `key` and a 128-bit nonce.
///
/// The nonce fills row 3 of the state directly. After 20 rounds, with no
/// feed-forward, rows 0 and 3 form the subkey.
pub fn hchacha20(key: &Key, nonce: &HNonce) -> Zeroizing<Key> {
    let mut row3 = [0u32; 4];
    words_from_le(nonce, &mut row3);

    let mut state = init_state(key, &row3);
    permute(&mut state);

    let mut subkey = Zeroizing::new([0u8; KEY_SIZE]);
    words_to_le(&state[0..4], &mut subkey[0..16]);
    words_to_le(&state[12..16], &mut subkey[16..32]);

    state.zeroize();

    subkey
}

/// [`hchacha20`] over untyped buffers, validating their sizes.
pub fn derive_subkey(key: &[u8], nonce: &[u8]) -> Result<Zeroizing<Key>, CryptoError> {
    let key = Zeroizing::new(to_array::<KEY_SIZE>(key, key_length)?);
    let nonce = to_array::<HNONCE_SIZE>(nonce, nonce_length)?;

    Ok(hchacha20(&key, &nonce))
}
