//! Hex string ⇄ byte conversion.

use crate::CryptoError;

/// Parse a hex string (either case) into bytes.
///
/// Fails with [`CryptoError::Format`] on odd length or non-hex characters.
pub fn hex_to_bytes(hex_str: &str) -> Result<Vec<u8>, CryptoError> {
    hex::decode(hex_str).map_err(|e| CryptoError::Format(e.to_string()))
}

/// Parse a hex string into a fixed-size array; the string must encode exactly `N` bytes.
pub fn hex_to_array<const N: usize>(hex_str: &str) -> Result<[u8; N], CryptoError> {
    let mut out = [0u8; N];
    hex::decode_to_slice(hex_str, &mut out).map_err(|e| CryptoError::Format(e.to_string()))?;
    Ok(out)
}

/// Lowercase hex encoding; always of even length.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
