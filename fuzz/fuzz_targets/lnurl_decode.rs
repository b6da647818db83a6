use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &str| {
            lnurl::decode(data).ok();
        });
    }
}
