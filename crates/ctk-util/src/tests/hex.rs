// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{HexError, hex_to_array, try_hex_to_bytes};

#[test]
fn test_decodes_mixed_case() {
    assert_eq!(try_hex_to_bytes("DeAdBeEf"), Ok(vec![0xde, 0xad, 0xbe, 0xef]));
}

#[test]
fn test_skips_whitespace() {
    let bytes = try_hex_to_bytes(
        "00 01 02
         03",
    );

    assert_eq!(bytes, Ok(vec![0x00, 0x01, 0x02, 0x03]));
}

#[test]
fn test_empty_string() {
    assert_eq!(try_hex_to_bytes(""), Ok(vec![]));
}

#[test]
fn test_odd_length() {
    assert_eq!(try_hex_to_bytes("abc"), Err(HexError::OddLength(3)));
}

#[test]
fn test_invalid_digit_reports_position() {
    assert_eq!(
        try_hex_to_bytes("00zz"),
        Err(HexError::InvalidDigit {
            digit: 'z',
            position: 2
        })
    );
}

#[test]
fn test_hex_to_array() {
    let array: [u8; 3] = hex_to_array("0a0b0c");
    assert_eq!(array, [0x0a, 0x0b, 0x0c]);
}

#[test]
#[should_panic(expected = "decoded 2 bytes, expected 3")]
fn test_hex_to_array_length_mismatch() {
    let _: [u8; 3] = hex_to_array("0a0b");
}
