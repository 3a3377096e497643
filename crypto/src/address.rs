//! Coin minting: passphrase + serial → WIF and public address.
//!
//! Pipeline:
//! 1. Seed material = `"Coin_" + serial + "_" + passphrase` (normal) or the
//!    raw secret (debug)
//! 2. Private key from the seed material (see [`crate::keys`])
//! 3. WIF = Base58Check(`wif_version ∥ private_key`)
//! 4. Public key = private key × G, compressed to `prefix ∥ X`
//! 5. Address = Base58Check(`address_version ∥ Hash160(compressed)`)

use bertocoin_types::{
    CoinFraction, CompressedPublicKey, MintedCoin, NetworkId, NetworkParams, PrivateKey,
    PublicAddress, SerialNumber, Wif,
};
use zeroize::Zeroizing;

use crate::base58::encode_check;
use crate::hash::hash160;
use crate::keys::{compress_public_key, derive_private_key, derive_public_key};
use crate::CryptoError;

/// Builds the key strings for a coin with fixed network version bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddressBuilder {
    params: NetworkParams,
}

impl AddressBuilder {
    pub fn new(params: NetworkParams) -> Self {
        Self { params }
    }

    pub fn for_network(network: NetworkId) -> Self {
        Self::new(network.params())
    }

    pub fn params(&self) -> NetworkParams {
        self.params
    }

    /// The exact string hashed into the private key.
    ///
    /// In debug mode the serial is ignored and the passphrase is returned as is.
    pub fn seed_material(
        passphrase: &str,
        serial: SerialNumber,
        debug_mode: bool,
    ) -> Zeroizing<String> {
        if debug_mode {
            Zeroizing::new(passphrase.to_owned())
        } else {
            Zeroizing::new(format!("{}{}", serial.coin_prefix(), passphrase))
        }
    }

    /// Base58Check of the extended key `wif_version ∥ private_key`.
    pub fn wif(&self, private_key: &PrivateKey) -> Wif {
        let mut extended = Zeroizing::new(Vec::with_capacity(33));
        extended.push(self.params.wif_version);
        extended.extend_from_slice(private_key.as_bytes());
        Wif::new(encode_check(&extended))
    }

    /// Base58Check of `address_version ∥ Hash160(compressed_key)`.
    pub fn public_address(&self, public_key: &CompressedPublicKey) -> PublicAddress {
        let mut payload = Vec::with_capacity(21);
        payload.push(self.params.address_version);
        payload.extend_from_slice(&hash160(public_key.as_bytes()));
        PublicAddress::new(encode_check(&payload))
    }

    /// Derive the WIF and public address for one coin.
    ///
    /// Any failure aborts the whole derivation; no partial result is returned.
    pub fn derive(
        &self,
        passphrase: &str,
        serial: SerialNumber,
        debug_mode: bool,
    ) -> Result<(Wif, PublicAddress), CryptoError> {
        let seed = Self::seed_material(passphrase, serial, debug_mode);
        let private_key = derive_private_key(&seed, debug_mode)?;
        let wif = self.wif(&private_key);

        let point = derive_public_key(&private_key)?;
        let compressed = compress_public_key(&point);
        let address = self.public_address(&compressed);

        if debug_mode {
            tracing::warn!(
                target: "bertocoin::debug",
                coin_prefix = %serial.coin_prefix(),
                seed = %seed.as_str(),
                private_key = %private_key.to_hex(),
                wif = %wif,
                public_key_uncompressed = %point.to_sec1_hex(),
                public_key_compressed = %compressed,
                address = %address,
                "debug mode: derived coin keys"
            );
        } else {
            tracing::debug!(serial = %serial, address = %address, "derived coin keys");
        }

        Ok((wif, address))
    }

    /// Derive the keys and package them with the coin's face values.
    pub fn build_coin(
        &self,
        passphrase: &str,
        serial: SerialNumber,
        fraction: CoinFraction,
        debug_mode: bool,
    ) -> Result<MintedCoin, CryptoError> {
        let (wif, address) = self.derive(passphrase, serial, debug_mode)?;
        Ok(MintedCoin::new(serial, fraction, wif, address))
    }
}
