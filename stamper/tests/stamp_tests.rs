use bertocoin_stamper::template::{PRIVATE_QR_FILENAME, PUBLIC_QR_FILENAME};
use bertocoin_stamper::{CoinStamper, MintConfig};
use bertocoin_types::{CoinFraction, MintedCoin, PublicAddress, SerialNumber, Wif};
use std::fs;

fn sample_coin() -> MintedCoin {
    MintedCoin::new(
        SerialNumber::new(21).unwrap(),
        CoinFraction::new(1, 1000).unwrap(),
        Wif::new("5J3btiKckkMpV9Ttm4epAt7Z8U3L8k3S8VsQm1rizSQ6DxE5gLi"),
        PublicAddress::new("1BnrLSLhaZv1vTQ3z5yidteZ8CDfMJCXRL"),
    )
}

#[test]
fn render_replaces_every_variable() {
    let template = "::serial:: | ::f:: | ::address.0001::-::address.0002::-::address.0003:: | \
                    ::secret.0001::-::secret.0002::-::secret.0003::";
    let rendered = CoinStamper::render(template, &sample_coin()).unwrap();
    assert_eq!(
        rendered,
        "0021 | 1:1000 | 1BnrLSLhaZv1-vTQ3z5yidte-Z8CDfMJCXRL | \
         5J3btiKckkMpV9Ttm-4epAt7Z8U3L8k3S8V-sQm1rizSQ6DxE5gLi"
    );
    assert!(!rendered.contains("::"));
}

#[test]
fn render_leaves_other_text_alone() {
    let template = "<text>no variables here</text>\n";
    assert_eq!(
        CoinStamper::render(template, &sample_coin()).unwrap(),
        template
    );
}

#[test]
fn process_template_writes_printable_and_qr_codes() {
    let dir = tempfile::tempdir().unwrap();
    let resources = dir.path().join("resources");
    fs::create_dir_all(&resources).unwrap();
    fs::write(
        resources.join("bertocoin.svg"),
        "<svg>::serial:: ::address.0001::::address.0002::::address.0003::</svg>\n",
    )
    .unwrap();

    let config = MintConfig {
        resources_path: resources,
        temp_folder: dir.path().join("delete-me"),
        ..MintConfig::default()
    };
    let stamper = CoinStamper::new(&config);
    let output = stamper.process_template(&sample_coin()).unwrap();

    assert_eq!(output, dir.path().join("delete-me/print-me.svg"));
    let printable = fs::read_to_string(&output).unwrap();
    assert_eq!(printable, "<svg>0021 1BnrLSLhaZv1vTQ3z5yidteZ8CDfMJCXRL</svg>\n");
    assert!(dir.path().join("delete-me").join(PRIVATE_QR_FILENAME).is_file());
    assert!(dir.path().join("delete-me").join(PUBLIC_QR_FILENAME).is_file());
}

#[test]
fn shipped_template_has_all_variables() {
    let template = include_str!("../../resources/bertocoin.svg");
    let rendered = CoinStamper::render(template, &sample_coin()).unwrap();
    assert!(!rendered.contains("::"));
    assert!(rendered.contains("1BnrLSLhaZv1"));
}

#[test]
fn missing_template_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = MintConfig {
        resources_path: dir.path().join("nowhere"),
        temp_folder: dir.path().join("delete-me"),
        ..MintConfig::default()
    };
    let result = CoinStamper::new(&config).process_template(&sample_coin());
    assert!(matches!(
        result,
        Err(bertocoin_stamper::StampError::Io { .. })
    ));
}
