use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StampError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read entropy file {}: {source}", .path.display())]
    EntropyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{parts} equal splits requested, when a string of length {len} was provided")]
    SplitSize { parts: usize, len: usize },

    #[error("splits don't add up to the whole string")]
    SplitMismatch,

    #[error("QR code error: {0}")]
    Qr(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("OS random source failed: {0}")]
    Random(String),

    #[error("passphrase charset is empty")]
    EmptyCharset,
}

impl StampError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
