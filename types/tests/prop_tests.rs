use proptest::prelude::*;

use bertocoin_types::{CoinFraction, SerialNumber};

proptest! {
    /// Every valid serial renders as exactly four digits that parse back to itself.
    #[test]
    fn serial_renders_four_digits(value in 0u32..=9999) {
        let serial = SerialNumber::new(value).unwrap();
        let rendered = serial.to_string();
        prop_assert_eq!(rendered.len(), 4);
        prop_assert_eq!(rendered.parse::<u32>().unwrap(), value);
    }

    /// The seed prefix always wraps the padded serial.
    #[test]
    fn serial_prefix_shape(value in 0u32..=9999) {
        let prefix = SerialNumber::new(value).unwrap().coin_prefix();
        prop_assert!(prefix.starts_with("Coin_"));
        prop_assert!(prefix.ends_with('_'));
        prop_assert_eq!(prefix.len(), 10);
    }

    /// Serials above 9999 are always rejected.
    #[test]
    fn serial_rejects_out_of_range(value in 10_000u32..) {
        prop_assert!(SerialNumber::new(value).is_err());
    }

    /// A fraction is accepted iff both terms lie in 1..=1000.
    #[test]
    fn fraction_validation(n in 0u32..1200, d in 0u32..1200) {
        let ok = (1..=1000).contains(&n) && (1..=1000).contains(&d);
        prop_assert_eq!(CoinFraction::new(n, d).is_ok(), ok);
    }
}
