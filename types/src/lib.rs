//! Fundamental types for bertocoin.
//!
//! This crate defines the values that flow through the minting pipeline:
//! private and public keys, the two Base58Check strings printed on a coin
//! (WIF and public address), the serial number and face value, and the
//! network version bytes.

pub mod address;
pub mod coin;
pub mod error;
pub mod keys;
pub mod network;

pub use address::{PublicAddress, Wif};
pub use coin::{CoinFraction, MintedCoin, SerialNumber};
pub use error::CoinError;
pub use keys::{CompressedPublicKey, PrivateKey, PublicKeyPoint};
pub use network::{NetworkId, NetworkParams};
