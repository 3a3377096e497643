#![no_main]

use bertocoin_crypto::{bytes_to_hex, hex_to_array, hex_to_bytes};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(bytes) = hex_to_bytes(text) {
        assert_eq!(bytes.len() * 2, text.len());
        assert_eq!(bytes_to_hex(&bytes), text.to_lowercase());
    }
    let _ = hex_to_array::<32>(text);

    assert_eq!(hex_to_bytes(&bytes_to_hex(data)).unwrap(), data);
});
