//! Values printed on the face of a coin.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::{CoinError, PublicAddress, Wif};

/// The coin's serial number, 0 through 9999.
///
/// Rendered as four zero-padded digits. In normal mode it is mixed into the
/// hashed seed, so two coins minted from the same passphrase with different
/// serials get unrelated keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SerialNumber(u16);

impl SerialNumber {
    pub const MAX: u16 = 9999;

    pub fn new(value: u32) -> Result<Self, CoinError> {
        if value > Self::MAX as u32 {
            return Err(CoinError::InvalidSerial(value));
        }
        Ok(Self(value as u16))
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    /// The seed prefix `Coin_NNNN_`.
    pub fn coin_prefix(&self) -> String {
        format!("Coin_{}_", self)
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl Serialize for SerialNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Face value of a coin as a fraction of one unit, e.g. `1:1000`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoinFraction {
    numerator: u16,
    denominator: u16,
}

impl CoinFraction {
    pub const MIN_TERM: u32 = 1;
    pub const MAX_TERM: u32 = 1000;

    pub fn new(numerator: u32, denominator: u32) -> Result<Self, CoinError> {
        let valid = |t: u32| (Self::MIN_TERM..=Self::MAX_TERM).contains(&t);
        if !valid(numerator) || !valid(denominator) {
            return Err(CoinError::InvalidFraction {
                numerator,
                denominator,
            });
        }
        Ok(Self {
            numerator: numerator as u16,
            denominator: denominator as u16,
        })
    }

    pub fn numerator(&self) -> u16 {
        self.numerator
    }

    pub fn denominator(&self) -> u16 {
        self.denominator
    }
}

impl Default for CoinFraction {
    fn default() -> Self {
        Self {
            numerator: 1,
            denominator: 1000,
        }
    }
}

impl fmt::Display for CoinFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator, self.denominator)
    }
}

/// Everything the stamping layer needs to print one coin.
///
/// The stamper treats every field as an opaque display string; it has no
/// knowledge of how the WIF or the address were derived.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MintedCoin {
    pub serial_number: SerialNumber,
    pub numerator: u16,
    pub denominator: u16,
    #[serde(rename = "WIF")]
    pub wif: Wif,
    pub address: PublicAddress,
}

impl MintedCoin {
    pub fn new(
        serial_number: SerialNumber,
        fraction: CoinFraction,
        wif: Wif,
        address: PublicAddress,
    ) -> Self {
        Self {
            serial_number,
            numerator: fraction.numerator(),
            denominator: fraction.denominator(),
            wif,
            address,
        }
    }

    pub fn fraction(&self) -> CoinFraction {
        CoinFraction {
            numerator: self.numerator,
            denominator: self.denominator,
        }
    }
}
