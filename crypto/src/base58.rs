//! Base58 and Base58Check codec.
//!
//! The input bytes are treated as one big-endian unsigned integer and
//! rewritten in base 58. Leading `0x00` bytes carry no numeric weight, so
//! each one is preserved as a leading `'1'` (the zero digit) instead.
//!
//! Alphabet: `123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz`
//! (no `0`, `O`, `I` or `l`).

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::hash::double_sha256_checksum;
use crate::CryptoError;

const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Reverse lookup table: ASCII byte → digit value (0xFF = invalid).
const BASE58_DECODE: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let alpha = BASE58_ALPHABET;
    let mut i = 0;
    while i < 58 {
        table[alpha[i] as usize] = i as u8;
        i += 1;
    }
    table
};

const ZERO_DIGIT: char = '1';

/// Encode bytes as Base58.
///
/// An all-zero input of length N encodes to N copies of `'1'`; the empty
/// input encodes to the empty string.
pub fn encode(bytes: &[u8]) -> String {
    let base = BigUint::from(58u32);
    let mut value = BigUint::from_bytes_be(bytes);

    // Digits come out least significant first.
    let mut digits = Vec::new();
    while !value.is_zero() {
        let remainder = &value % &base;
        value /= &base;
        let idx = remainder.to_usize().unwrap_or_default();
        digits.push(BASE58_ALPHABET[idx]);
    }

    let pad = bytes.iter().take_while(|&&b| b == 0x00).count();
    let mut result = String::with_capacity(pad + digits.len());
    result.extend(std::iter::repeat(ZERO_DIGIT).take(pad));
    result.extend(digits.iter().rev().map(|&d| d as char));
    result
}

/// Decode a Base58 string back into bytes.
///
/// Fails with [`CryptoError::InvalidCharacter`] on the first character that
/// is not in the alphabet.
pub fn decode(encoded: &str) -> Result<Vec<u8>, CryptoError> {
    let mut value = BigUint::zero();
    for (position, character) in encoded.chars().enumerate() {
        let digit = digit_value(character)
            .ok_or(CryptoError::InvalidCharacter { character, position })?;
        value = value * 58u32 + digit;
    }

    let pad = encoded.chars().take_while(|&c| c == ZERO_DIGIT).count();
    let mut bytes = vec![0u8; pad];
    if !value.is_zero() {
        bytes.extend(value.to_bytes_be());
    }
    Ok(bytes)
}

/// Base58Check: `encode(payload ∥ checksum4(payload))`.
pub fn encode_check(payload: &[u8]) -> String {
    let mut framed = Vec::with_capacity(payload.len() + 4);
    framed.extend_from_slice(payload);
    framed.extend_from_slice(&double_sha256_checksum(payload));
    encode(&framed)
}

/// Decode a Base58Check string and verify its trailing 4-byte checksum.
///
/// Returns the payload without the checksum.
pub fn decode_check(encoded: &str) -> Result<Vec<u8>, CryptoError> {
    let mut framed = decode(encoded)?;
    if framed.len() < 4 {
        return Err(CryptoError::ChecksumMismatch);
    }
    let checksum = framed.split_off(framed.len() - 4);
    if checksum != double_sha256_checksum(&framed) {
        return Err(CryptoError::ChecksumMismatch);
    }
    Ok(framed)
}

fn digit_value(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    match BASE58_DECODE[c as usize] {
        0xFF => None,
        v => Some(v as u32),
    }
}
