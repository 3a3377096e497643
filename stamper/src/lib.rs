//! Everything around the key derivation that turns a minted coin into paper.
//!
//! - [`passphrase`]: generating, reading, and strength-checking the secret
//! - [`template`]: filling the SVG template and writing the QR codes
//! - [`terminator`]: print instructions, countdown, and secure deletion
//! - [`config`]: TOML configuration for paths, timeout, network, and logging

pub mod config;
pub mod error;
pub mod passphrase;
pub mod qr;
pub mod splits;
pub mod template;
pub mod terminator;

pub use config::MintConfig;
pub use error::StampError;
pub use passphrase::{passphrase_is_robust, read_entropy_file, secure_random_passphrase};
pub use splits::similar_splits;
pub use template::CoinStamper;
pub use terminator::CoinTerminator;
