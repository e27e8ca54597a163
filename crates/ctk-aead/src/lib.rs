// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20, XChaCha20 and Poly1305, composed into the ChaCha20-Poly1305 and
//! XChaCha20-Poly1305 AEAD constructions.
//!
//! ```
//! use ctk_aead::XChaCha20Poly1305;
//!
//! let aead = XChaCha20Poly1305::new(&[0x42; 32]).unwrap();
//! let nonce = [0x24; 24];
//!
//! let (ciphertext, tag) = aead.encrypt(&nonce, b"attack at dawn", b"header").unwrap();
//! let plaintext = aead.decrypt(&nonce, &ciphertext, b"header", &tag).unwrap();
//!
//! assert_eq!(plaintext, b"attack at dawn");
//! ```
//!
//! Secret-holding state is zeroized on drop. Execution is not hardened
//! against timing side channels beyond the constant-time tag comparison.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod aead;
pub mod chacha20;
pub mod consts;
pub mod poly1305;

mod error;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use aead::{AeadCipher, ChaCha20Poly1305, XChaCha20Poly1305, authenticated_input};
pub use chacha20::{ChaCha20, XChaCha20, chacha20_block, derive_subkey, hchacha20};
pub use error::CryptoError;
pub use self::poly1305::{Poly1305, poly1305_tag};
pub use traits::StreamCipher;
pub use types::{Block, HNonce, Key, Nonce, Poly1305Key, Tag, XNonce};
