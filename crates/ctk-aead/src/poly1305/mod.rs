// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Poly1305 one-time authenticator (RFC 8439 Section 2.5)

#[cfg(test)]
mod tests;

mod mac;

pub use mac::{Poly1305, clamp, poly1305_tag};
