use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &str| {
            if let Ok((hrp, groups)) = lnurl::bech32::decode(data) {
                let encoded = lnurl::bech32::encode(&hrp, &groups).unwrap();
                assert_eq!(encoded, data.to_ascii_lowercase());
            }
        });
    }
}
