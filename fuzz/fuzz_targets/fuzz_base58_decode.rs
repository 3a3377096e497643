#![no_main]

use bertocoin_crypto::base58;
use libfuzzer_sys::fuzz_target;

// Decoding arbitrary text never panics; whatever decodes re-encodes to the
// same string, and Base58Check accepts what it produced.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(bytes) = base58::decode(text) {
        assert_eq!(base58::encode(&bytes), text);
    }
    let _ = base58::decode_check(text);

    let checked = base58::encode_check(data);
    assert_eq!(base58::decode_check(&checked).unwrap(), data);
});
