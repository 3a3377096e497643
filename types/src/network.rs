//! Network identifier and the version bytes it implies.

use serde::{Deserialize, Serialize};

/// Identifies which chain the minted keys are encoded for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// The production network.
    #[default]
    Mainnet,
    /// The public test network.
    Testnet,
}

impl NetworkId {
    /// Version bytes used when encoding keys for this network.
    pub fn params(&self) -> NetworkParams {
        match self {
            Self::Mainnet => NetworkParams::MAINNET,
            Self::Testnet => NetworkParams::TESTNET,
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl std::str::FromStr for NetworkId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" | "live" => Ok(Self::Mainnet),
            "testnet" | "test" => Ok(Self::Testnet),
            other => Err(format!("unknown network: {other}")),
        }
    }
}

/// Immutable version bytes bound into an address builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkParams {
    /// Prefix of the extended private key before Base58Check (WIF).
    pub wif_version: u8,
    /// Prefix of the Hash160 before Base58Check (P2PKH address).
    pub address_version: u8,
}

impl NetworkParams {
    pub const MAINNET: Self = Self {
        wif_version: 0x80,
        address_version: 0x00,
    };

    pub const TESTNET: Self = Self {
        wif_version: 0xEF,
        address_version: 0x6F,
    };
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self::MAINNET
    }
}
