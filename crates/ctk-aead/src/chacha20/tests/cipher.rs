// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20 stream cipher tests (RFC 8439 Section 2.4).

use proptest::prelude::*;

use ctk_util::{hex_to_array, hex_to_bytes};

use crate::CryptoError;
use crate::chacha20::{ChaCha20, chacha20_block};

const KEY: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

const SUNSCREEN: &[u8] = b"Ladies and Gentlemen of the class of '99: If I could offer you only one tip for the future, sunscreen would be it.";

#[test]
fn test_new_rejects_short_key() {
    let result = ChaCha20::new(&[0u8; 31], &[0u8; 12], [0; 4]);

    assert_eq!(
        result.unwrap_err(),
        CryptoError::InvalidKeyLength {
            expected: 32,
            actual: 31
        }
    );
}

#[test]
fn test_new_rejects_long_nonce() {
    let result = ChaCha20::new(&[0u8; 32], &[0u8; 24], [0; 4]);

    assert_eq!(
        result.unwrap_err(),
        CryptoError::InvalidNonceLength {
            expected: 12,
            actual: 24
        }
    );
}

#[test]
fn test_new_reads_counter_little_endian() {
    let chacha = ChaCha20::new(&[0u8; 32], &[0u8; 12], [0x01, 0x02, 0x00, 0x00])
        .expect("Failed to create ChaCha20");

    assert_eq!(chacha.counter(), 0x0201);
}

/// RFC 8439 Section 2.4.2
#[test]
fn test_encrypt_rfc8439_2_4_2() {
    let key = hex_to_bytes(KEY);
    let nonce = hex_to_bytes("000000000000004a00000000");

    let mut chacha =
        ChaCha20::new(&key, &nonce, 1u32.to_le_bytes()).expect("Failed to create ChaCha20");
    let ciphertext = chacha
        .xor_with_keystream(SUNSCREEN)
        .expect("Failed to xor_with_keystream(..)");

    let expected = hex_to_bytes(
        "6e2e359a2568f98041ba0728dd0d6981e97e7aec1d4360c20a27afccfd9fae0b
         f91b65c5524733ab8f593dabcd62b3571639d624e65152ab8f530c359f0861d8
         07ca0dbf500d6a6156a38e088a22b65e52bc514d16ccf806818ce91ab7793736
         5af90bbf74a35be6b40b8eedf2785e42874d",
    );
    assert_eq!(ciphertext, expected);

    // 114 bytes = one full block plus a partial one
    assert_eq!(chacha.counter(), 3);
}

#[test]
fn test_decrypt_is_encrypt() {
    let key = hex_to_array::<32>(KEY);
    let nonce = [0x11; 12];

    let ciphertext = ChaCha20::with_counter(&key, &nonce, 1)
        .xor_with_keystream(SUNSCREEN)
        .expect("Failed to encrypt");
    let plaintext = ChaCha20::with_counter(&key, &nonce, 1)
        .xor_with_keystream(&ciphertext)
        .expect("Failed to decrypt");

    assert_eq!(plaintext, SUNSCREEN);
}

#[test]
fn test_produce_block_advances_counter() {
    let key = hex_to_array::<32>(KEY);
    let nonce = [0x22; 12];
    let mut chacha = ChaCha20::with_counter(&key, &nonce, 5);

    let first = chacha.produce_block().expect("Failed to produce_block()");
    let second = chacha.produce_block().expect("Failed to produce_block()");

    assert_eq!(first, chacha20_block(&key, &nonce, 5));
    assert_eq!(second, chacha20_block(&key, &nonce, 6));
    assert_ne!(first, second);
    assert_eq!(chacha.counter(), 7);
}

#[test]
fn test_empty_input_consumes_no_block() {
    let mut chacha = ChaCha20::with_counter(&[0u8; 32], &[0u8; 12], 9);

    let output = chacha
        .xor_with_keystream(&[])
        .expect("Failed to xor_with_keystream(..)");

    assert!(output.is_empty());
    assert_eq!(chacha.counter(), 9);
}

#[test]
fn test_partial_block_consumes_whole_counter() {
    let mut chacha = ChaCha20::with_counter(&[0u8; 32], &[0u8; 12], 0);
    let mut data = [0u8; 65];

    chacha
        .apply_keystream(&mut data)
        .expect("Failed to apply_keystream(..)");

    assert_eq!(chacha.counter(), 2);
    // zero input exposes the raw keystream
    assert_eq!(data[..64], chacha20_block(&[0u8; 32], &[0u8; 12], 0));
    assert_eq!(data[64], chacha20_block(&[0u8; 32], &[0u8; 12], 1)[0]);
}

#[test]
fn test_last_counter_value_is_usable() {
    let mut chacha = ChaCha20::with_counter(&[0u8; 32], &[0u8; 12], u32::MAX);

    let block = chacha.produce_block().expect("Failed to produce_block()");

    assert_eq!(block, chacha20_block(&[0u8; 32], &[0u8; 12], u32::MAX));
    assert_eq!(chacha.counter(), 1 << 32);
}

#[test]
fn test_counter_does_not_wrap() {
    let mut chacha = ChaCha20::with_counter(&[0u8; 32], &[0u8; 12], u32::MAX);

    chacha.produce_block().expect("Failed to produce_block()");

    assert_eq!(chacha.produce_block(), Err(CryptoError::CounterOverflow));
    assert_eq!(
        chacha.xor_with_keystream(&[0u8; 1]),
        Err(CryptoError::CounterOverflow)
    );
}

#[test]
fn test_overflow_leaves_data_untouched() {
    let mut chacha = ChaCha20::with_counter(&[0u8; 32], &[0u8; 12], u32::MAX);
    let mut data = [0xab; 65];

    let result = chacha.apply_keystream(&mut data);

    assert_eq!(result, Err(CryptoError::CounterOverflow));
    assert!(data.iter().all(|b| *b == 0xab));
    assert_eq!(chacha.counter(), u64::from(u32::MAX));

    // a single block still fits
    chacha
        .apply_keystream(&mut data[..64])
        .expect("Failed to apply_keystream(..)");
}

#[test]
fn test_debug_is_redacted() {
    let chacha = ChaCha20::with_counter(&[0x42; 32], &[0u8; 12], 0);

    assert_eq!(format!("{chacha:?}"), "ChaCha20 { [protected] }");
}

proptest! {
    #[test]
    fn split_keystream_matches_one_shot(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        data in proptest::collection::vec(any::<u8>(), 0..512),
        blocks_first in 0usize..8,
    ) {
        let split = data.len().min(blocks_first * 64);

        let one_shot = ChaCha20::with_counter(&key, &nonce, 1)
            .xor_with_keystream(&data)
            .expect("Failed to encrypt");

        let mut chacha = ChaCha20::with_counter(&key, &nonce, 1);
        let mut pieces = chacha.xor_with_keystream(&data[..split]).expect("Failed to encrypt");
        pieces.extend(chacha.xor_with_keystream(&data[split..]).expect("Failed to encrypt"));

        prop_assert_eq!(pieces, one_shot);
    }

    #[test]
    fn keystream_is_its_own_inverse(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        counter in any::<u16>(),
        data in proptest::collection::vec(any::<u8>(), 0..300),
    ) {
        let counter = u32::from(counter);

        let ciphertext = ChaCha20::with_counter(&key, &nonce, counter)
            .xor_with_keystream(&data)
            .expect("Failed to encrypt");
        let plaintext = ChaCha20::with_counter(&key, &nonce, counter)
            .xor_with_keystream(&ciphertext)
            .expect("Failed to decrypt");

        prop_assert_eq!(plaintext, data);
    }
}
