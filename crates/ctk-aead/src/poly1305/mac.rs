// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Poly1305 over five 26-bit limbs.
//!
//! The accumulator is kept partially reduced modulo 2^130 - 5 between blocks
//! and fully reduced only when the tag is produced. All state is zeroized on
//! drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

use ctk_util::{pad_len, words_from_le};

use crate::consts::{POLY1305_BLOCK_SIZE, POLY1305_CLAMP, POLY1305_KEY_SIZE, POLY1305_PRIME};
use crate::error::{CryptoError, key_length, to_array};
use crate::types::{Poly1305Key, Tag};

const MASK26: u32 = 0x3ff_ffff;

/// Clamps `r` in place: clears the top four bits of bytes 3, 7, 11, 15 and
/// the bottom two bits of bytes 4, 8, 12.
pub fn clamp(r: &mut [u8; 16]) {
    for (byte, mask) in r.iter_mut().zip(POLY1305_CLAMP.iter()) {
        *byte &= mask;
    }
}

/// Splits 128 little-endian bits into five 26-bit limbs.
#[inline(always)]
fn to_limbs(t: &[u32; 4]) -> [u32; 5] {
    [
        t[0] & MASK26,
        ((t[0] >> 26) | (t[1] << 6)) & MASK26,
        ((t[1] >> 20) | (t[2] << 12)) & MASK26,
        ((t[2] >> 14) | (t[3] << 18)) & MASK26,
        t[3] >> 8,
    ]
}

/// One carry pass over the limbs, folding bits above 2^130 back in as `* 5`.
#[inline(always)]
fn carry(h: &mut [u32; 5]) {
    for i in 0..4 {
        h[i + 1] += h[i] >> 26;
        h[i] &= MASK26;
    }

    let overflow = h[4] >> 26;
    h[4] &= MASK26;
    h[0] += overflow * 5;
}

/// Subtracts the prime once if `h >= p`. Requires every limb below 2^26.
#[inline(always)]
fn reduce(h: &mut [u32; 5]) {
    let mut g = [0u32; 5];
    let mut borrow = 0u32;

    for i in 0..5 {
        let t = h[i].wrapping_sub(POLY1305_PRIME[i]).wrapping_sub(borrow);
        borrow = t >> 31;
        g[i] = t & MASK26;
    }

    // all ones when h >= p
    let mask = borrow.wrapping_sub(1);
    for i in 0..5 {
        h[i] = (h[i] & !mask) | (g[i] & mask);
    }

    g.zeroize();
}

/// Poly1305 authenticator state.
///
/// A one-time authenticator: producing the tag consumes the instance, so a
/// key can never authenticate a second message through the same state.
/// Input may be fed in pieces with [`update`](Self::update); the result is
/// the same as authenticating the concatenation in one call.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Poly1305 {
    r: [u32; 5],
    s: [u8; 16],
    acc: [u32; 5],
    buffer: [u8; POLY1305_BLOCK_SIZE],
    buffer_len: usize,
}

impl Poly1305 {
    /// Creates an authenticator from an untyped 32-byte key.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        let mut key = to_array::<POLY1305_KEY_SIZE>(key, key_length)?;
        let mac = Self::from_key(&key);
        key.zeroize();

        Ok(mac)
    }

    /// Creates an authenticator from `r || s`, clamping `r`.
    pub fn from_key(key: &Poly1305Key) -> Self {
        let mut r_bytes = [0u8; 16];
        r_bytes.copy_from_slice(&key[0..16]);
        clamp(&mut r_bytes);

        let mut t = [0u32; 4];
        words_from_le(&r_bytes, &mut t);

        let mut s = [0u8; 16];
        s.copy_from_slice(&key[16..32]);

        let mac = Self {
            r: to_limbs(&t),
            s,
            acc: [0; 5],
            buffer: [0; POLY1305_BLOCK_SIZE],
            buffer_len: 0,
        };

        r_bytes.zeroize();
        t.zeroize();

        mac
    }

    /// `acc = ((acc + block + hibit * 2^128) * r) mod 2^130 - 5`, partially reduced.
    fn process_block(&mut self, block: &[u8], hibit: u32) {
        debug_assert_eq!(block.len(), POLY1305_BLOCK_SIZE);

        let mut t = [0u32; 4];
        words_from_le(block, &mut t);
        let m = to_limbs(&t);
        t.zeroize();

        let h0 = u64::from(self.acc[0] + m[0]);
        let h1 = u64::from(self.acc[1] + m[1]);
        let h2 = u64::from(self.acc[2] + m[2]);
        let h3 = u64::from(self.acc[3] + m[3]);
        let h4 = u64::from(self.acc[4] + (m[4] | (hibit << 24)));

        let r0 = u64::from(self.r[0]);
        let r1 = u64::from(self.r[1]);
        let r2 = u64::from(self.r[2]);
        let r3 = u64::from(self.r[3]);
        let r4 = u64::from(self.r[4]);

        // 2^130 = 5 (mod p), so limbs that land above 2^130 come back times five.
        let s1 = r1 * 5;
        let s2 = r2 * 5;
        let s3 = r3 * 5;
        let s4 = r4 * 5;

        let d0 = h0 * r0 + h1 * s4 + h2 * s3 + h3 * s2 + h4 * s1;
        let mut d1 = h0 * r1 + h1 * r0 + h2 * s4 + h3 * s3 + h4 * s2;
        let mut d2 = h0 * r2 + h1 * r1 + h2 * r0 + h3 * s4 + h4 * s3;
        let mut d3 = h0 * r3 + h1 * r2 + h2 * r1 + h3 * r0 + h4 * s4;
        let mut d4 = h0 * r4 + h1 * r3 + h2 * r2 + h3 * r1 + h4 * r0;

        d1 += d0 >> 26;
        d2 += d1 >> 26;
        d3 += d2 >> 26;
        d4 += d3 >> 26;

        let mut a0 = (d0 & u64::from(MASK26)) + (d4 >> 26) * 5;
        let a1 = (d1 & u64::from(MASK26)) + (a0 >> 26);
        a0 &= u64::from(MASK26);

        self.acc = [
            a0 as u32,
            a1 as u32,
            (d2 & u64::from(MASK26)) as u32,
            (d3 & u64::from(MASK26)) as u32,
            (d4 & u64::from(MASK26)) as u32,
        ];
    }

    /// Absorbs `data`, buffering any trailing partial block.
    pub fn update(&mut self, mut data: &[u8]) {
        if self.buffer_len > 0 {
            let take = core::cmp::min(POLY1305_BLOCK_SIZE - self.buffer_len, data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len < POLY1305_BLOCK_SIZE {
                return;
            }

            let mut block = self.buffer;
            self.process_block(&block, 1);
            block.zeroize();
            self.buffer.zeroize();
            self.buffer_len = 0;
        }

        let mut blocks = data.chunks_exact(POLY1305_BLOCK_SIZE);
        for block in &mut blocks {
            self.process_block(block, 1);
        }

        let remainder = blocks.remainder();
        self.buffer[..remainder.len()].copy_from_slice(remainder);
        self.buffer_len = remainder.len();
    }

    /// Absorbs `data` followed by zeros up to the next 16-byte boundary.
    ///
    /// Padding is relative to `data` alone, as the AEAD layout requires;
    /// callers start each padded segment on a block boundary.
    pub fn update_padded(&mut self, data: &[u8]) {
        self.update(data);

        let pad = pad_len(data.len(), POLY1305_BLOCK_SIZE);
        if pad > 0 {
            self.update(&[0u8; POLY1305_BLOCK_SIZE][..pad]);
        }
    }

    /// Produces the tag `(acc + s) mod 2^128`, consuming the authenticator.
    pub fn finalize(mut self) -> Tag {
        if self.buffer_len > 0 {
            // Short final block: 0x01 right after the data, zeros above it, no 2^128 bit.
            let mut block = [0u8; POLY1305_BLOCK_SIZE];
            block[..self.buffer_len].copy_from_slice(&self.buffer[..self.buffer_len]);
            block[self.buffer_len] = 0x01;
            self.process_block(&block, 0);
            block.zeroize();
        }

        let mut h = self.acc;
        carry(&mut h);
        carry(&mut h);
        reduce(&mut h);

        // Bits at and above 2^128 fall off the shift: the sum is taken mod 2^128.
        let mut acc = u128::from(h[0])
            | (u128::from(h[1]) << 26)
            | (u128::from(h[2]) << 52)
            | (u128::from(h[3]) << 78)
            | (u128::from(h[4]) << 104);
        let mut s = u128::from_le_bytes(self.s);

        let tag = acc.wrapping_add(s).to_le_bytes();

        h.zeroize();
        acc.zeroize();
        s.zeroize();

        tag
    }

    /// Authenticates `message` in one call, consuming the authenticator.
    pub fn generate_tag(mut self, message: &[u8]) -> Tag {
        self.update(message);
        self.finalize()
    }
}

impl core::fmt::Debug for Poly1305 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Poly1305 {{ [protected] }}")
    }
}

/// One-shot Poly1305 tag of `message` under `key`.
pub fn poly1305_tag(key: &Poly1305Key, message: &[u8]) -> Tag {
    Poly1305::from_key(key).generate_tag(message)
}
