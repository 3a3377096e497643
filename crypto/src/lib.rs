//! Key derivation and address encoding for bertocoin.
//!
//! - **SHA-256** turns the passphrase (plus serial) into the private key
//! - **secp256k1** scalar multiplication yields the public key
//! - **Hash160** (`RIPEMD160(SHA-256(x))`) of the compressed key is the address payload
//! - **Base58Check** frames both the WIF and the address with a double-SHA-256 checksum

pub mod address;
pub mod base58;
pub mod codec;
pub mod error;
pub mod hash;
pub mod keys;

pub use address::AddressBuilder;
pub use codec::{bytes_to_hex, hex_to_array, hex_to_bytes};
pub use error::CryptoError;
pub use hash::{double_sha256, double_sha256_checksum, hash160, ripemd160, sha256, sha256_hex};
pub use keys::{
    compress_public_key, derive_private_key, derive_public_key, is_debug_secret,
    private_key_hex_from_passphrase,
};
