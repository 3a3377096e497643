#![no_main]

use bertocoin_crypto::AddressBuilder;
use bertocoin_types::SerialNumber;
use libfuzzer_sys::fuzz_target;

// Any raw secret either yields a full key pair or a clean error.
fuzz_target!(|data: &[u8]| {
    let Ok(secret) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(serial) = SerialNumber::new(0) else {
        return;
    };

    let builder = AddressBuilder::default();
    if let Ok((wif, address)) = builder.derive(secret, serial, true) {
        assert!(wif.as_str().starts_with('5'));
        assert!(address.as_str().starts_with('1'));
    }
    let _ = builder.derive(secret, serial, false);
});
