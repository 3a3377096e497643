//! secp256k1 key material.
//!
//! The private key is a raw 32-byte big-endian scalar. The public key is
//! kept as its 64-byte `X ∥ Y` coordinate string (no SEC1 `0x04` tag), which
//! is the representation the compression rule operates on.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 32-byte secp256k1 private key.
///
/// This type intentionally does not implement `Debug`, `Serialize`, or `Clone`
/// to prevent accidental exposure. Key bytes are zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(pub [u8; 32]);

impl PrivateKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex encoding of the key (64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

/// An uncompressed public key as the concatenated affine coordinates `X ∥ Y`.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKeyPoint(pub [u8; 64]);

impl PublicKeyPoint {
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    pub fn x(&self) -> &[u8] {
        &self.0[..32]
    }

    pub fn y(&self) -> &[u8] {
        &self.0[32..]
    }

    /// Hex of the coordinate string, without the SEC1 tag.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// SEC1 uncompressed encoding (`04 ∥ X ∥ Y`) in hex.
    pub fn to_sec1_hex(&self) -> String {
        format!("04{}", hex::encode(&self.0))
    }
}

impl fmt::Debug for PublicKeyPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKeyPoint({})", hex::encode(&self.0[..4]))
    }
}

/// A 33-byte compressed public key: parity prefix (`0x02`/`0x03`) followed by X.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompressedPublicKey(pub [u8; 33]);

impl CompressedPublicKey {
    pub const EVEN_PREFIX: u8 = 0x02;
    pub const ODD_PREFIX: u8 = 0x03;

    pub fn as_bytes(&self) -> &[u8; 33] {
        &self.0
    }

    pub fn prefix(&self) -> u8 {
        self.0[0]
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Debug for CompressedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompressedPublicKey({})", hex::encode(&self.0[..5]))
    }
}

impl fmt::Display for CompressedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

// Inline hex encoding to avoid adding the `hex` crate as a dependency of types.
mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
