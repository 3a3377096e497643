//! Known coins that must be reproduced bit for bit.

use bertocoin_crypto::{private_key_hex_from_passphrase, sha256_hex, AddressBuilder, CryptoError};
use bertocoin_types::{CoinFraction, SerialNumber};

fn derive(passphrase: &str, serial: u32, debug: bool) -> (String, String) {
    let builder = AddressBuilder::default();
    let (wif, address) = builder
        .derive(passphrase, SerialNumber::new(serial).unwrap(), debug)
        .unwrap();
    (wif.to_string(), address.to_string())
}

#[test]
fn debug_secret_vector() {
    let (wif, address) = derive(
        "60cf347dbc59d31c1358c8e5cf5e45b822ab85b79cb32a9f3d98184779a9efc2",
        123,
        true,
    );
    assert_eq!(wif, "5JYvSurww2jTxmCeoN8T9QgRMWp45rre7WgFS76ae6Rgd1BnkC6");
    assert_eq!(address, "17JsmEygbbEUEpvt4PFtYaTeSqfb9ki1F1");
}

#[test]
fn upper_case_debug_secret_vector() {
    let (wif, address) = derive(
        "F273F81F4F7696F704964367815E4A641C5D80B468B1601F5EE6F2AB9F3A4188",
        123,
        true,
    );
    assert_eq!(wif, "5Kf4ibycbXZQJPRFNprACLNn4i2WapFLXPq397ZYLSYKuic6cqH");
    assert_eq!(address, "1GB79Up5834H5GYMunBhMRxUxgz7rF82FT");
}

#[test]
fn lower_case_debug_secret_matches_upper_case() {
    let lower = derive(
        "f273f81f4f7696f704964367815e4a641c5d80b468b1601f5ee6f2ab9f3a4188",
        123,
        true,
    );
    let upper = derive(
        "F273F81F4F7696F704964367815E4A641C5D80B468B1601F5EE6F2AB9F3A4188",
        123,
        true,
    );
    assert_eq!(lower, upper);
}

#[test]
fn normal_mode_vector() {
    let (wif, address) = derive(
        "D46M9vCkKHHhiFsHK1-MC2G8O9Y4UCemx2U9sFPljy/)rlg-nFT5IH64l3uldFXb",
        1234,
        false,
    );
    assert_eq!(wif, "5J3btiKckkMpV9Ttm4epAt7Z8U3L8k3S8VsQm1rizSQ6DxE5gLi");
    assert_eq!(address, "1BnrLSLhaZv1vTQ3z5yidteZ8CDfMJCXRL");
}

#[test]
fn normal_mode_equals_debug_mode_on_hashed_seed() {
    let passphrase = "D46M9vCkKHHhiFsHK1-MC2G8O9Y4UCemx2U9sFPljy/)rlg-nFT5IH64l3uldFXb";
    let key_hex = private_key_hex_from_passphrase(&format!("Coin_1234_{passphrase}"));
    assert_eq!(
        key_hex,
        "1e3c24dea238b9cfb8b14468709394d6cde24a51771ba5e85643afe8664410f7"
    );
    assert_eq!(derive(passphrase, 1234, false), derive(&key_hex, 1234, true));
}

#[test]
fn debug_mode_ignores_serial() {
    let secret = "60cf347dbc59d31c1358c8e5cf5e45b822ab85b79cb32a9f3d98184779a9efc2";
    assert_eq!(derive(secret, 0, true), derive(secret, 9999, true));
}

#[test]
fn derivation_is_deterministic() {
    let builder = AddressBuilder::default();
    let serial = SerialNumber::new(77).unwrap();
    let fraction = CoinFraction::default();
    let first = builder.build_coin("same input", serial, fraction, false).unwrap();
    let second = builder.build_coin("same input", serial, fraction, false).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_string_digest() {
    assert_eq!(
        sha256_hex(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn debug_secret_of_wrong_length_fails() {
    let builder = AddressBuilder::default();
    let secret = "60cf347dbc59d31c1358c8e5cf5e45b822ab85b79cb32a9f3d98184779a9efc";
    let err = builder
        .derive(secret, SerialNumber::default(), true)
        .unwrap_err();
    assert_eq!(err, CryptoError::InvalidDebugSecret);
}
