//! Mint configuration with TOML file support.

use bertocoin_types::NetworkId;
use bertocoin_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::StampError;

/// Configuration for one minting run.
///
/// Can be loaded from a TOML file via [`MintConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). Every field has a default, so
/// an empty file is a valid configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MintConfig {
    /// Which network's version bytes to encode the keys with.
    #[serde(default)]
    pub network: NetworkId,

    /// Directory holding the SVG template.
    #[serde(default = "default_resources_path")]
    pub resources_path: PathBuf,

    /// Template file name inside `resources_path`.
    #[serde(default = "default_template_input")]
    pub template_input: String,

    /// Name of the stamped file written inside `temp_folder`.
    #[serde(default = "default_template_output")]
    pub template_output: String,

    /// Folder for the printable file and QR codes; destroyed after the timeout.
    #[serde(default = "default_temp_folder")]
    pub temp_folder: PathBuf,

    /// File the passphrase is read from when none is given inline.
    #[serde(default = "default_entropy_file")]
    pub entropy_file: PathBuf,

    /// Seconds the user has to print before the files are destroyed.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_resources_path() -> PathBuf {
    PathBuf::from("./resources")
}

fn default_template_input() -> String {
    "bertocoin.svg".to_string()
}

fn default_template_output() -> String {
    "print-me.svg".to_string()
}

fn default_temp_folder() -> PathBuf {
    PathBuf::from("delete-me")
}

fn default_entropy_file() -> PathBuf {
    PathBuf::from("entropy.txt")
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl MintConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, StampError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| StampError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, StampError> {
        toml::from_str(s).map_err(|e| StampError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, StampError> {
        toml::to_string_pretty(self).map_err(|e| StampError::Config(e.to_string()))
    }

    pub fn template_input_path(&self) -> PathBuf {
        self.resources_path.join(&self.template_input)
    }

    pub fn template_output_path(&self) -> PathBuf {
        self.temp_folder.join(&self.template_output)
    }
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            network: NetworkId::default(),
            resources_path: default_resources_path(),
            template_input: default_template_input(),
            template_output: default_template_output(),
            temp_folder: default_temp_folder(),
            entropy_file: default_entropy_file(),
            timeout_secs: default_timeout_secs(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
