//! Turn URLs into uppercase bech32 tokens tagged `lnurl`, and back.
//!
//! Tokens are uppercase so that QR codes can use the compact alphanumeric
//! mode. Decoding accepts either case.

extern crate alloc;
use alloc::string::String;

use crate::Error;

/// The human-readable part every token starts with.
pub const HRP: &str = "lnurl";

/// Encodes `url` into an uppercase token.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     lnurl::encode("https://example.com").unwrap(),
///     "LNURL1DP68GURN8GHJ7ETCV9KHQMR99E3K7MGMQGN24"
/// );
/// ```
///
/// # Errors
///
/// Fails with [`Error::LengthExceeded`] if the token would be longer than
/// [`MAX_LENGTH`](crate::constants::MAX_LENGTH) characters.
pub fn encode(url: impl AsRef<str>) -> Result<String, Error> {
    let url = url.as_ref();
    log::trace!("encoding {} byte url", url.len());
    if crate::bech32::encoded_len(HRP, url.len()) > crate::constants::MAX_LENGTH {
        return Err(Error::LengthExceeded);
    }
    let data = crate::convert::convert_bits(url.as_bytes(), 8, 5, true)?;
    Ok(crate::bech32::encode(HRP, &data)?.to_ascii_uppercase())
}

/// Decodes a token back into the URL it carries.
///
/// The HRP isn't required to be [`HRP`]; use [`crate::bech32::decode`] to
/// inspect it.
///
/// # Examples
///
/// ```
/// let token = "lnurl1dp68gurn8ghj7etcv9khqmr99e3k7mgmqgn24";
/// assert_eq!(lnurl::decode(token).unwrap(), "https://example.com");
/// ```
///
/// # Errors
///
/// Fails if the token isn't valid bech32, if its padding bits aren't zero, or
/// if the payload isn't UTF-8.
pub fn decode(token: &str) -> Result<String, Error> {
    log::trace!("decoding {} character token", token.len());
    let (hrp, data) = crate::bech32::decode(token)?;
    if hrp != HRP {
        log::debug!("decoding token with unexpected hrp {hrp:?}");
    }
    let bytes = crate::convert::convert_bits(&data, 5, 8, false).map_err(|e| {
        log::debug!("rejecting token payload: {e}");
        e
    })?;
    String::from_utf8(bytes).map_err(|e| {
        log::debug!("token payload is not UTF-8");
        Error::InvalidUtf8(e.utf8_error())
    })
}
