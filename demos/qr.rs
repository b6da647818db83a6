use qrcode::{EcLevel, QrCode};

use std::io::Write;

fn main() {
    let Some(url) = std::env::args().nth(1) else {
        eprintln!("usage: qr <url>");
        std::process::exit(1);
    };
    let token = match lnurl::encode(&url) {
        Ok(token) => token,
        Err(e) => {
            eprintln!("cannot encode {url}: {e}");
            std::process::exit(1);
        }
    };
    let code = QrCode::with_error_correction_level(&token, EcLevel::L).unwrap();
    let string = code
        .render::<char>()
        .quiet_zone(false)
        .module_dimensions(2, 1)
        .build();
    let mut stdout = std::io::stdout();
    stdout
        .write_all(format!("{string}\n\n{token}\n").as_bytes())
        .unwrap();
    stdout.flush().unwrap();
}
