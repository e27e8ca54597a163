// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared constants for ChaCha20, Poly1305 and the AEAD constructions.

/// Key size in bytes (ChaCha20, XChaCha20, HChaCha20, AEAD)
pub const KEY_SIZE: usize = 32;

/// Nonce size in bytes (ChaCha20, ChaCha20-Poly1305)
pub const NONCE_SIZE: usize = 12;

/// Nonce size in bytes (XChaCha20 extended nonce)
pub const XNONCE_SIZE: usize = 24;

/// Nonce size in bytes (HChaCha20 input)
pub const HNONCE_SIZE: usize = 16;

/// Authentication tag size in bytes
pub const TAG_SIZE: usize = 16;

/// ChaCha20 keystream block size in bytes
pub const BLOCK_SIZE: usize = 64;

/// Poly1305 block size in bytes (also the AEAD padding boundary)
pub const POLY1305_BLOCK_SIZE: usize = 16;

/// Poly1305 one-time key size in bytes (`r || s`)
pub const POLY1305_KEY_SIZE: usize = 32;

/// Block counter size in bytes
pub const COUNTER_SIZE: usize = 4;

/// "expand 32-byte k" as four little-endian words.
pub const CHACHA20_CONSTANTS: [u32; 4] = [0x61707865, 0x3320646e, 0x79622d32, 0x6b206574];

/// 20 rounds, run as 10 column/diagonal pairs.
pub const DOUBLE_ROUNDS: usize = 10;

/// Number of keystream blocks one (key, nonce) pair can produce.
pub const MAX_BLOCKS: u64 = 1 << 32;

/// Clamp masks applied to `r`, byte by byte (little-endian).
pub const POLY1305_CLAMP: [u8; 16] = [
    0xff, 0xff, 0xff, 0x0f, 0xfc, 0xff, 0xff, 0x0f, 0xfc, 0xff, 0xff, 0x0f, 0xfc, 0xff, 0xff, 0x0f,
];

/// The prime 2^130 - 5 as five 26-bit limbs (least significant first).
pub const POLY1305_PRIME: [u32; 5] = [0x3fffffb, 0x3ffffff, 0x3ffffff, 0x3ffffff, 0x3ffffff];
