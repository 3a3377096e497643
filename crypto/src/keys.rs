//! secp256k1 key derivation from a passphrase or a raw debug secret.
//!
//! Normal mode hashes the seed material with SHA-256, takes the lowercase
//! hex digest, and parses that hex back into the 32 key bytes. Debug mode
//! skips hashing: the secret itself must already be the key's hex.

use bertocoin_types::{CompressedPublicKey, PrivateKey, PublicKeyPoint};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use zeroize::Zeroizing;

use crate::codec::hex_to_array;
use crate::hash::sha256_hex;
use crate::CryptoError;

/// Length of a debug secret: 32 bytes as hex.
pub const DEBUG_SECRET_LEN: usize = 64;

/// Hex digest of the seed material; this string is the private key's hex.
pub fn private_key_hex_from_passphrase(seed_material: &str) -> String {
    sha256_hex(seed_material.as_bytes())
}

/// Whether `secret` has the shape accepted in debug mode.
///
/// Exactly 64 characters from the ASCII class `[0-9A-fz]`. The `A-f` range
/// runs 0x41..=0x66, so it admits upper-case letters, `[\]^_` and backtick
/// as well as `a-f`; the extra `z` is accepted too. Anything that passes
/// here but is not hex is rejected later when the key is parsed. The
/// length is exact: a trailing newline makes the secret invalid.
pub fn is_debug_secret(secret: &str) -> bool {
    secret.len() == DEBUG_SECRET_LEN
        && secret
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'f' | b'z'))
}

/// Derive the 32-byte private key from seed material.
pub fn derive_private_key(seed_material: &str, debug_mode: bool) -> Result<PrivateKey, CryptoError> {
    let key_hex = if debug_mode {
        if !is_debug_secret(seed_material) {
            return Err(CryptoError::InvalidDebugSecret);
        }
        Zeroizing::new(seed_material.to_owned())
    } else {
        Zeroizing::new(private_key_hex_from_passphrase(seed_material))
    };

    let bytes = Zeroizing::new(hex_to_array::<32>(&key_hex)?);
    Ok(PrivateKey(*bytes))
}

/// Multiply the curve's base point by the private key.
///
/// Fails with [`CryptoError::InvalidPrivateKey`] when the scalar is zero or
/// not below the group order.
pub fn derive_public_key(private_key: &PrivateKey) -> Result<PublicKeyPoint, CryptoError> {
    let secret =
        SecretKey::from_slice(private_key.as_bytes()).map_err(|_| CryptoError::InvalidPrivateKey)?;
    let encoded = secret.public_key().to_encoded_point(false);

    // Drop the SEC1 0x04 tag, keep X ∥ Y.
    let mut coords = [0u8; 64];
    coords.copy_from_slice(&encoded.as_bytes()[1..]);
    Ok(PublicKeyPoint(coords))
}

/// Compress a public key to `prefix ∥ X`.
///
/// The prefix is `0x03` when the integer value of the whole `X ∥ Y` string
/// is odd and `0x02` otherwise. That integer's lowest bit is the lowest bit
/// of its final byte, which is also the lowest bit of Y.
pub fn compress_public_key(point: &PublicKeyPoint) -> CompressedPublicKey {
    let full = point.as_bytes();
    let odd = full[full.len() - 1] & 1 == 1;

    let mut compressed = [0u8; 33];
    compressed[0] = if odd {
        CompressedPublicKey::ODD_PREFIX
    } else {
        CompressedPublicKey::EVEN_PREFIX
    };
    compressed[1..].copy_from_slice(point.x());
    CompressedPublicKey(compressed)
}
