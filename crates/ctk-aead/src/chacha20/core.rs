// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The ChaCha permutation and the block function (RFC 8439 Section 2.1 - 2.3)

use zeroize::Zeroize;

use ctk_util::{words_from_le, words_to_le};

use crate::consts::{BLOCK_SIZE, CHACHA20_CONSTANTS, DOUBLE_ROUNDS};
use crate::types::{Block, Key, Nonce};

/// ChaCha state matrix: constants, key, then counter and nonce (or the HChaCha20 nonce).
pub type State = [u32; 16];

/// Applies the quarter round to the state words at `a`, `b`, `c` and `d`.
#[inline(always)]
pub fn quarter_round(state: &mut State, a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// One column round followed by one diagonal round.
#[inline(always)]
pub fn double_round(state: &mut State) {
    quarter_round(state, 0, 4, 8, 12);
    quarter_round(state, 1, 5, 9, 13);
    quarter_round(state, 2, 6, 10, 14);
    quarter_round(state, 3, 7, 11, 15);

    quarter_round(state, 0, 5, 10, 15);
    quarter_round(state, 1, 6, 11, 12);
    quarter_round(state, 2, 7, 8, 13);
    quarter_round(state, 3, 4, 9, 14);
}

/// Runs all 20 rounds in place. No feed-forward.
#[inline(always)]
pub fn permute(state: &mut State) {
    for _ in 0..DOUBLE_ROUNDS {
        double_round(state);
    }
}

/// Builds the state matrix from the key and the four words of row 3.
#[inline(always)]
pub(crate) fn init_state(key: &Key, row3: &[u32; 4]) -> State {
    let mut state = [0u32; 16];

    state[0..4].copy_from_slice(&CHACHA20_CONSTANTS);
    words_from_le(key, &mut state[4..12]);
    state[12..16].copy_from_slice(row3);

    state
}

/// Produces the keystream block at `counter`.
///
/// A pure function of `(key, nonce, counter)`; callers that want an explicit
/// block index instead of an advancing instance use this directly.
pub fn chacha20_block(key: &Key, nonce: &Nonce, counter: u32) -> Block {
    let mut row3 = [counter, 0, 0, 0];
    words_from_le(nonce, &mut row3[1..]);

    let mut initial = init_state(key, &row3);
    let mut working = initial;

    permute(&mut working);

    for (word, original) in working.iter_mut().zip(initial.iter()) {
        *word = word.wrapping_add(*original);
    }

    let mut block = [0u8; BLOCK_SIZE];
    words_to_le(&working, &mut block);

    initial.zeroize();
    working.zeroize();

    block
}
