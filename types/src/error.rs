//! Errors raised when constructing coin values.

use thiserror::Error;

/// Validation errors for the values printed on a coin.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoinError {
    #[error("invalid serial number {0}: must be between 0 and {max}", max = crate::SerialNumber::MAX)]
    InvalidSerial(u32),

    #[error("invalid fraction {numerator}:{denominator}: both terms must be between 1 and 1000")]
    InvalidFraction { numerator: u32, denominator: u32 },
}
