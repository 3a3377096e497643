//! SHA-256 and RIPEMD-160 digests, and the fixed compositions built from them.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let result = Sha256::digest(data);
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Lowercase hex of the SHA-256 digest.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// Compute the RIPEMD-160 digest of arbitrary data.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let result = Ripemd160::digest(data);
    let mut output = [0u8; 20];
    output.copy_from_slice(&result);
    output
}

/// `RIPEMD160(SHA-256(data))`, the address hash of a public key.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// `SHA-256(SHA-256(data))`.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// First four bytes of `SHA-256(SHA-256(data))`.
///
/// Appended to both the extended private key and the versioned public-key
/// hash before Base58 encoding.
pub fn double_sha256_checksum(data: &[u8]) -> [u8; 4] {
    let digest = double_sha256(data);
    let mut checksum = [0u8; 4];
    checksum.copy_from_slice(&digest[..4]);
    checksum
}
