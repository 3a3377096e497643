use thiserror::Error;

/// Errors raised by the derivation pipeline.
///
/// None of these are recoverable: the derivation is deterministic, so the
/// same input always fails the same way.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("malformed hex input: {0}")]
    Format(String),

    #[error("invalid base58 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("debug secret must be exactly 64 characters from [0-9A-fz] (a hex private key)")]
    InvalidDebugSecret,

    #[error("private key is zero or not below the secp256k1 group order")]
    InvalidPrivateKey,

    #[error("base58check checksum mismatch")]
    ChecksumMismatch,
}
