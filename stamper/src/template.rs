//! Filling the printable SVG template with a coin's values.
//!
//! Template variables:
//! - `::serial::` → the padded serial, e.g. `0021`
//! - `::f::` → the face value, e.g. `1:1000`
//! - `::address.0001::` .. `::address.0003::` → the public address in three pieces
//! - `::secret.0001::` .. `::secret.0003::` → the WIF in three pieces
//!
//! The stamper knows nothing about keys; every value is an opaque string.

use bertocoin_types::MintedCoin;
use std::path::{Path, PathBuf};

use crate::{qr, similar_splits, MintConfig, StampError};

/// Number of pieces the address and WIF are split into on the printed coin.
const KEY_PIECES: usize = 3;

pub const PRIVATE_QR_FILENAME: &str = "coin_private_qr.svg";
pub const PUBLIC_QR_FILENAME: &str = "coin_public_qr.svg";

/// Produces the printable file and the QR codes for a minted coin.
#[derive(Clone, Debug)]
pub struct CoinStamper {
    temp_folder: PathBuf,
    template_input_path: PathBuf,
    template_output_path: PathBuf,
}

impl CoinStamper {
    pub fn new(config: &MintConfig) -> Self {
        Self {
            temp_folder: config.temp_folder.clone(),
            template_input_path: config.template_input_path(),
            template_output_path: config.template_output_path(),
        }
    }

    pub fn temp_folder(&self) -> &Path {
        &self.temp_folder
    }

    pub fn private_qr_path(&self) -> PathBuf {
        self.temp_folder.join(PRIVATE_QR_FILENAME)
    }

    pub fn public_qr_path(&self) -> PathBuf {
        self.temp_folder.join(PUBLIC_QR_FILENAME)
    }

    /// Replace every template variable in `template` with the coin's values.
    pub fn render(template: &str, coin: &MintedCoin) -> Result<String, StampError> {
        let wif = similar_splits(coin.wif.as_str(), KEY_PIECES)?;
        let address = similar_splits(coin.address.as_str(), KEY_PIECES)?;

        let mut rendered = template
            .replace("::serial::", &coin.serial_number.to_string())
            .replace("::f::", &coin.fraction().to_string());
        for (i, piece) in address.iter().enumerate() {
            rendered = rendered.replace(&format!("::address.{:04}::", i + 1), piece);
        }
        for (i, piece) in wif.iter().enumerate() {
            rendered = rendered.replace(&format!("::secret.{:04}::", i + 1), piece);
        }
        Ok(rendered)
    }

    /// Stamp the template for `coin` into the temp folder, write both QR codes
    /// next to it, and return the path of the printable file.
    pub fn process_template(&self, coin: &MintedCoin) -> Result<PathBuf, StampError> {
        self.create_temp_folder()?;

        let template = std::fs::read_to_string(&self.template_input_path)
            .map_err(|e| StampError::io(&self.template_input_path, e))?;
        let rendered = Self::render(&template, coin)?;
        std::fs::write(&self.template_output_path, rendered)
            .map_err(|e| StampError::io(&self.template_output_path, e))?;

        qr::write_svg(coin.wif.as_str(), &self.private_qr_path())?;
        qr::write_svg(coin.address.as_str(), &self.public_qr_path())?;

        tracing::info!(
            output = %self.template_output_path.display(),
            serial = %coin.serial_number,
            "stamped printable coin"
        );
        Ok(self.template_output_path.clone())
    }

    fn create_temp_folder(&self) -> Result<(), StampError> {
        std::fs::create_dir_all(&self.temp_folder).map_err(|e| StampError::io(&self.temp_folder, e))
    }
}
