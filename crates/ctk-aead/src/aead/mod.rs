// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20-Poly1305 and XChaCha20-Poly1305 AEAD (RFC 8439 Section 2.8 + draft-irtf-cfrg-xchacha)

#[cfg(test)]
mod tests;

pub mod chacha20poly1305;
mod composer;
pub mod xchacha20poly1305;

pub use self::chacha20poly1305::ChaCha20Poly1305;
pub use composer::{AeadCipher, authenticated_input};
pub use xchacha20poly1305::XChaCha20Poly1305;
