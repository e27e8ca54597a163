// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-size byte array aliases.

use crate::consts::{
    BLOCK_SIZE, HNONCE_SIZE, KEY_SIZE, NONCE_SIZE, POLY1305_KEY_SIZE, TAG_SIZE, XNONCE_SIZE,
};

/// 256-bit key
pub type Key = [u8; KEY_SIZE];

/// ChaCha20 nonce
pub type Nonce = [u8; NONCE_SIZE];

/// XChaCha20 nonce
pub type XNonce = [u8; XNONCE_SIZE];

/// HChaCha20 nonce
pub type HNonce = [u8; HNONCE_SIZE];

/// Poly1305 tag
pub type Tag = [u8; TAG_SIZE];

/// One ChaCha20 keystream block
pub type Block = [u8; BLOCK_SIZE];

/// Poly1305 one-time key (`r || s`)
pub type Poly1305Key = [u8; POLY1305_KEY_SIZE];
