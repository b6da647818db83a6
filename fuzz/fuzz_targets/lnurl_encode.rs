use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &str| {
            match lnurl::encode(data) {
                Ok(token) => assert_eq!(lnurl::decode(&token).unwrap(), data),
                Err(e) => assert_eq!(e, lnurl::Error::LengthExceeded),
            }
        });
    }
}
