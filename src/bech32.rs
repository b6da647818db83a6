//! Encode and decode [`bech32`](https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki) strings.
//!
//! A bech32 string is a human-readable part (HRP), the separator `1`, the data
//! groups mapped through a 32-symbol charset and a six-symbol checksum
//! covering both HRP and data.
//!
//! ```
//! use lnurl::bech32::{decode, encode};
//! let encoded = encode("a", &[]).unwrap();
//! assert_eq!(encoded, "a12uel5l");
//! assert_eq!(decode("A12UEL5L").unwrap(), ("a".to_string(), vec![]));
//! ```

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::constants::{
    CHARSET, CHARSET_REV, CHECKSUM_LENGTH, MAX_HRP_LENGTH, MAX_LENGTH, SEPARATOR,
};
use crate::Error;

/// Number of 5-bit groups needed for `len` bytes.
///
/// Doesn't include the HRP, the separator or the checksum.
#[must_use]
pub const fn base32_len(len: usize) -> usize {
    let bits = len * 8;
    if bits % 5 == 0 {
        bits / 5
    } else {
        (bits / 5) + 1
    }
}

/// Length of the bech32 string that encodes `len` bytes under `hrp`.
///
/// # Examples
///
/// ```
/// assert_eq!(lnurl::bech32::encoded_len("lnurl", 19), 43);
/// ```
#[must_use]
pub const fn encoded_len(hrp: &str, len: usize) -> usize {
    hrp.len() + 1 + base32_len(len) + CHECKSUM_LENGTH
}

fn check_hrp(hrp: &str) -> Result<(), Error> {
    if hrp.is_empty() {
        return Err(Error::InvalidHrp);
    }
    if hrp.len() > MAX_HRP_LENGTH {
        return Err(Error::LengthExceeded);
    }
    if hrp
        .bytes()
        .any(|b| !(33..=126).contains(&b) || b.is_ascii_uppercase())
    {
        return Err(Error::InvalidHrp);
    }
    Ok(())
}

/// Encodes 5-bit `data` groups under `hrp` into a lowercase bech32 string.
///
/// Callers wanting the uppercase form convert the whole result; the two cases
/// are never mixed.
///
/// # Examples
///
/// ```
/// use lnurl::bech32::encode;
/// assert_eq!(encode("lnurl", &[12, 4]).unwrap(), "lnurl1vy3e5p6k");
/// ```
///
/// # Errors
///
/// Fails if `hrp` is empty, not lowercase printable ASCII or too long, if the
/// result would exceed the maximum length, or if a group doesn't fit 5 bits.
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, Error> {
    check_hrp(hrp)?;
    if hrp.len() + 1 + data.len() + CHECKSUM_LENGTH > MAX_LENGTH {
        return Err(Error::LengthExceeded);
    }
    let checksum = crate::checksum::create(hrp, data);
    let mut encoded = String::with_capacity(hrp.len() + 1 + data.len() + CHECKSUM_LENGTH);
    encoded.push_str(hrp);
    encoded.push(SEPARATOR);
    for &group in data.iter().chain(checksum.iter()) {
        let c = CHARSET
            .get(usize::from(group))
            .ok_or(Error::EncodingInvariantViolation)?;
        encoded.push(*c);
    }
    Ok(encoded)
}

/// Decodes a bech32 string into its lowercase HRP and its data groups, with
/// the checksum stripped.
///
/// The input may be all lowercase or all uppercase.
///
/// # Examples
///
/// ```
/// use lnurl::bech32::decode;
/// use lnurl::Error;
/// assert_eq!(
///     decode("LNURL1VY3E5P6K").unwrap(),
///     ("lnurl".to_string(), vec![12, 4])
/// );
/// assert_eq!(decode("lnurl1VY3E5P6K").unwrap_err(), Error::MixedCase);
/// ```
///
/// # Errors
///
/// Fails on characters outside printable ASCII, mixed case, excessive length,
/// a missing or misplaced separator, data symbols outside the charset, or a
/// checksum that doesn't validate.
pub fn decode(encoded: &str) -> Result<(String, Vec<u8>), Error> {
    if let Some(c) = encoded.chars().find(|c| !(33..=126).contains(&u32::from(*c))) {
        return Err(Error::InvalidCharset(c));
    }
    let has_lower = encoded.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = encoded.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(Error::MixedCase);
    }
    if encoded.len() > MAX_LENGTH {
        return Err(Error::LengthExceeded);
    }
    let encoded = encoded.to_ascii_lowercase();
    let pos = encoded.rfind(SEPARATOR).ok_or(Error::MissingSeparator)?;
    if pos < 1 || pos + CHECKSUM_LENGTH + 1 > encoded.len() {
        return Err(Error::MissingSeparator);
    }
    let (hrp, rest) = encoded.split_at(pos);
    let data = rest[1..]
        .chars()
        .map(|c| CHARSET_REV.get(&c).copied().ok_or(Error::InvalidCharset(c)))
        .collect::<Result<Vec<u8>, Error>>()?;
    if !crate::checksum::verify(hrp, &data) {
        log::debug!("checksum mismatch for bech32 string with hrp {hrp:?}");
        return Err(Error::ChecksumMismatch);
    }
    let mut data = data;
    data.truncate(data.len() - CHECKSUM_LENGTH);
    Ok((hrp.into(), data))
}
