//! Obtaining the secret: generate it, read it from a file, and judge its strength.

use num_bigint::BigUint;
use num_traits::One;
use std::collections::HashSet;
use std::path::Path;

use crate::StampError;

/// Length of a generated passphrase.
pub const DEFAULT_PASSPHRASE_LENGTH: usize = 64;

/// Symbols a generated passphrase is drawn from.
pub const DEFAULT_CHARSET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789@()./+-";

/// A robust passphrase must allow more than 2^128 combinations...
const MINIMUM_STRENGTH_BITS: usize = 128;
/// ...and use more than this many distinct symbols.
const MINIMUM_ENTROPY_SET_SIZE: usize = 32;

/// Draw `length` symbols from `charset` using the OS random source.
///
/// Each random byte picks `charset[byte % charset.len()]`.
pub fn secure_random_passphrase(length: usize, charset: &str) -> Result<String, StampError> {
    let symbols: Vec<char> = charset.chars().collect();
    if symbols.is_empty() {
        return Err(StampError::EmptyCharset);
    }

    let mut random_bytes = vec![0u8; length];
    getrandom::getrandom(&mut random_bytes).map_err(|e| StampError::Random(e.to_string()))?;

    let passphrase = random_bytes
        .iter()
        .map(|&b| symbols[b as usize % symbols.len()])
        .collect();
    random_bytes.fill(0);
    Ok(passphrase)
}

/// Whether a passphrase is strong enough to seed a coin.
///
/// With `k` distinct symbols and `n` characters, robust iff `k^n > 2^128`
/// and `k > 32`.
pub fn passphrase_is_robust(passphrase: &str) -> bool {
    let symbols: HashSet<char> = passphrase.chars().collect();
    let entropy_set_size = symbols.len();
    if entropy_set_size <= MINIMUM_ENTROPY_SET_SIZE {
        return false;
    }

    let length = passphrase.chars().count() as u32;
    let combinations = BigUint::from(entropy_set_size).pow(length);
    combinations > (BigUint::one() << MINIMUM_STRENGTH_BITS)
}

/// Read the whole entropy file as the passphrase.
///
/// The content is returned verbatim, trailing newline included; it is
/// part of the seed.
pub fn read_entropy_file(path: &Path) -> Result<String, StampError> {
    tracing::info!(path = %path.display(), "reading entropy file");
    std::fs::read_to_string(path).map_err(|source| StampError::EntropyFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_passphrase_has_requested_shape() {
        let p = secure_random_passphrase(DEFAULT_PASSPHRASE_LENGTH, DEFAULT_CHARSET).unwrap();
        assert_eq!(p.chars().count(), 64);
        assert!(p.chars().all(|c| DEFAULT_CHARSET.contains(c)));
    }

    #[test]
    fn generated_passphrases_differ() {
        let a = secure_random_passphrase(64, DEFAULT_CHARSET).unwrap();
        let b = secure_random_passphrase(64, DEFAULT_CHARSET).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn empty_charset_rejected() {
        assert!(matches!(
            secure_random_passphrase(8, ""),
            Err(StampError::EmptyCharset)
        ));
    }

    #[test]
    fn known_passphrase_is_robust() {
        assert!(passphrase_is_robust(
            "D46M9vCkKHHhiFsHK1-MC2G8O9Y4UCemx2U9sFPljy/)rlg-nFT5IH64l3uldFXb"
        ));
    }

    #[test]
    fn small_symbol_set_is_weak() {
        // 16 distinct symbols, however long
        assert!(!passphrase_is_robust(&"0123456789abcdef".repeat(20)));
        assert!(!passphrase_is_robust(""));
    }

    #[test]
    fn symbol_set_threshold() {
        let thirty_two: String = DEFAULT_CHARSET.chars().take(32).collect();
        assert!(!passphrase_is_robust(&thirty_two.repeat(8)));
        let thirty_three: String = DEFAULT_CHARSET.chars().take(33).collect();
        assert!(passphrase_is_robust(&thirty_three));
    }

    #[test]
    fn missing_entropy_file() {
        let result = read_entropy_file(Path::new("/nonexistent/entropy.txt"));
        assert!(matches!(result, Err(StampError::EntropyFile { .. })));
    }

    #[test]
    fn entropy_file_read_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entropy.txt");
        std::fs::write(&path, "secret words\n").unwrap();
        assert_eq!(read_entropy_file(&path).unwrap(), "secret words\n");
    }
}
