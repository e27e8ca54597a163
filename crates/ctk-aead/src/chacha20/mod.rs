// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20 stream cipher family (RFC 8439 + draft-irtf-cfrg-xchacha)

#[cfg(test)]
mod tests;

mod cipher;
mod core;
mod hchacha20;
mod xchacha20;

pub use self::core::{State, chacha20_block, double_round, permute, quarter_round};
pub use cipher::ChaCha20;
pub use hchacha20::{derive_subkey, hchacha20};
pub use xchacha20::XChaCha20;

pub(crate) use xchacha20::split_nonce;
