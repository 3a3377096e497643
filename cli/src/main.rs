//! bertocoin — mint a printable physical coin from a passphrase and a serial.

use anyhow::{bail, Context};
use bertocoin_crypto::{
    compress_public_key, derive_private_key, derive_public_key, AddressBuilder,
};
use bertocoin_stamper::passphrase::{DEFAULT_CHARSET, DEFAULT_PASSPHRASE_LENGTH};
use bertocoin_stamper::{
    passphrase_is_robust, read_entropy_file, secure_random_passphrase, CoinStamper,
    CoinTerminator, MintConfig,
};
use bertocoin_types::{CoinFraction, MintedCoin, NetworkId, SerialNumber};
use bertocoin_utils::LogFormat;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bertocoin",
    version,
    about = "Mint a physical coin: a deterministic key pair stamped on a printable template"
)]
struct Cli {
    /// Serial number of the coin (0-9999). Part of the key seed.
    #[arg(
        short,
        long,
        default_value_t = 0,
        value_parser = clap::value_parser!(u32).range(0..=9999),
        env = "BERTOCOIN_SERIAL"
    )]
    serial: u32,

    /// Use the passphrase as the raw 64-hex-digit private key and print
    /// every intermediate value. Never use for real coins.
    #[arg(long)]
    debug: bool,

    /// Passphrase to derive the coin from. When absent, the entropy file is read.
    #[arg(short, long, env = "BERTOCOIN_PASSPHRASE", hide_env_values = true)]
    passphrase: Option<String>,

    /// Print a freshly generated random passphrase and exit.
    #[arg(long)]
    generate_pass: bool,

    /// Numerator of the coin's face value.
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=1000)
    )]
    numerator: u32,

    /// Denominator of the coin's face value.
    #[arg(
        short,
        long,
        default_value_t = 1000,
        value_parser = clap::value_parser!(u32).range(1..=1000)
    )]
    denominator: u32,

    /// Seconds to print the template before the files are destroyed.
    #[arg(short, long, env = "BERTOCOIN_TIMEOUT")]
    timeout: Option<u64>,

    /// Network whose version bytes encode the keys: "mainnet" or "testnet".
    #[arg(long, env = "BERTOCOIN_NETWORK")]
    network: Option<NetworkId>,

    /// File the passphrase is read from when none is given inline.
    #[arg(long, env = "BERTOCOIN_ENTROPY_FILE")]
    entropy_file: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "BERTOCOIN_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "BERTOCOIN_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// File settings (or defaults) overridden by whatever was given on the
    /// command line.
    fn mint_config(&self) -> anyhow::Result<MintConfig> {
        let file_config = match &self.config {
            Some(path) => MintConfig::from_toml_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => MintConfig::default(),
        };

        Ok(MintConfig {
            network: self.network.unwrap_or(file_config.network),
            entropy_file: self
                .entropy_file
                .clone()
                .unwrap_or_else(|| file_config.entropy_file.clone()),
            timeout_secs: self.timeout.unwrap_or(file_config.timeout_secs),
            log_format: self.log_format.unwrap_or(file_config.log_format),
            log_level: self
                .log_level
                .clone()
                .unwrap_or_else(|| file_config.log_level.clone()),
            ..file_config
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.mint_config()?;
    bertocoin_utils::init_logging(config.log_format, &config.log_level);

    if cli.generate_pass {
        let passphrase = secure_random_passphrase(DEFAULT_PASSPHRASE_LENGTH, DEFAULT_CHARSET)?;
        println!("{passphrase}");
        return Ok(());
    }

    let passphrase = match cli.passphrase.as_deref().filter(|p| !p.is_empty()) {
        Some(p) => p.to_owned(),
        None => read_entropy_file(&config.entropy_file).context(
            "you must provide either an entropy file or a passphrase as inline argument",
        )?,
    };

    if cli.debug {
        println!("Attention: running in debug mode, the passphrase entropy was not checked.");
    } else if !passphrase_is_robust(&passphrase) {
        bail!(
            "the passphrase you entered is not sufficiently robust, \
             please choose a different one with greater entropy"
        );
    }

    let serial = SerialNumber::new(cli.serial)?;
    let fraction = CoinFraction::new(cli.numerator, cli.denominator)?;

    tracing::info!(
        network = config.network.as_str(),
        serial = %serial,
        numerator = fraction.numerator(),
        denominator = fraction.denominator(),
        "minting coin"
    );

    let coin = AddressBuilder::for_network(config.network)
        .build_coin(&passphrase, serial, fraction, cli.debug)
        .context("failed to derive the coin keys")?;

    if cli.debug {
        println!("{}", serde_json::to_string_pretty(&coin)?);
        let (uncompressed, compressed) = debug_public_keys(&passphrase)?;
        println!("Public key (uncompressed): {uncompressed}");
        println!("Public key (compressed):   {compressed}");
    }

    let stamper = CoinStamper::new(&config);
    let terminator = CoinTerminator::new(&config.template_output_path(), &config.entropy_file);
    let mut stdout = std::io::stdout().lock();
    let clean = stamp_and_destroy(
        &stamper,
        &terminator,
        &coin,
        &mut stdout,
        config.timeout_secs,
    )?;
    if !clean {
        tracing::warn!(
            folder = %terminator.dying_folder().display(),
            "coin files were not fully destroyed"
        );
    }

    Ok(())
}

/// Public keys of a debug secret, uncompressed (SEC1 hex) and compressed.
///
/// Printed next to the coin record so they survive any log filter.
fn debug_public_keys(secret: &str) -> anyhow::Result<(String, String)> {
    let private_key = derive_private_key(secret, true)?;
    let point = derive_public_key(&private_key)?;
    Ok((point.to_sec1_hex(), compress_public_key(&point).to_hex()))
}

/// Stamp the printable coin, show the instructions, then destroy the files.
///
/// The coin files are destroyed whichever step fails, and the first error
/// is returned only after that. Returns whether everything was removed.
fn stamp_and_destroy(
    stamper: &CoinStamper,
    terminator: &CoinTerminator,
    coin: &MintedCoin,
    out: &mut impl Write,
    timeout_secs: u64,
) -> anyhow::Result<bool> {
    if let Err(e) = stamper.process_template(coin) {
        if let Err(report_err) = terminator.destroy_temp_folder(out) {
            tracing::warn!(error = %report_err, "cannot report file destruction");
        }
        return Err(anyhow::Error::new(e).context("failed to stamp the coin template"));
    }

    terminator
        .show_and_destroy(out, timeout_secs)
        .context("failed to show the print instructions")
}
