//! The BCH checksum protecting a token's HRP and data groups.

use crate::constants::{BECH32_CONST, CHECKSUM_LENGTH, GENERATORS};

/// Runs the checksum polynomial over a sequence of 5-bit values and returns the
/// 30-bit residual.
#[must_use]
pub fn polymod(values: impl IntoIterator<Item = u8>) -> u32 {
    let mut chk: u32 = 1;
    for value in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ u32::from(value);
        for (i, generator) in GENERATORS.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

/// High bits of every HRP byte, a zero, then the low bits of every byte.
fn hrp_expand(hrp: &str) -> impl Iterator<Item = u8> + '_ {
    hrp.bytes()
        .map(|b| b >> 5)
        .chain(core::iter::once(0))
        .chain(hrp.bytes().map(|b| b & 0x1f))
}

/// Computes the six checksum groups for `hrp` and `data`.
///
/// `hrp` must already be lowercase; `data` must hold 5-bit values.
///
/// # Examples
///
/// ```
/// assert_eq!(lnurl::checksum::create("a", &[]), [10, 28, 25, 31, 20, 31]);
/// ```
#[must_use]
pub fn create(hrp: &str, data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let residual = polymod(
        hrp_expand(hrp)
            .chain(data.iter().copied())
            .chain([0; CHECKSUM_LENGTH]),
    ) ^ BECH32_CONST;
    let mut checksum = [0; CHECKSUM_LENGTH];
    for (i, group) in checksum.iter_mut().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let value = ((residual >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
        *group = value;
    }
    checksum
}

/// Checks `data`, whose last six groups are the checksum, against `hrp`.
#[must_use]
pub fn verify(hrp: &str, data: &[u8]) -> bool {
    polymod(hrp_expand(hrp).chain(data.iter().copied())) == BECH32_CONST
}
