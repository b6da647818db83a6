//! Regroup a sequence of fixed-width integers into a different width.

extern crate alloc;
use alloc::vec::Vec;

use crate::Error;

/// Regroups `data`, whose values are `from` bits wide, into values `to` bits wide.
///
/// Groups are taken most-significant first. With `pad` set, a trailing partial
/// group is filled up with zero bits. Without it, leftover bits must be fewer
/// than `from` and all zero, otherwise the input isn't a canonical encoding.
///
/// # Examples
///
/// ```
/// use lnurl::convert::convert_bits;
/// assert_eq!(convert_bits(&[0xff], 8, 5, true).unwrap(), vec![31, 28]);
/// assert_eq!(convert_bits(&[31, 28], 5, 8, false).unwrap(), vec![0xff]);
/// ```
///
/// # Errors
///
/// Fails if a bit width is outside `1..=8`, if a value doesn't fit into
/// `from` bits, or, without `pad`, if the discarded tail is not canonical.
pub fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Result<Vec<u8>, Error> {
    if !(1..=8).contains(&from) || !(1..=8).contains(&to) {
        return Err(Error::InvalidBitWidth);
    }
    let max_value: u32 = (1 << to) - 1;
    let max_acc: u32 = (1 << (from + to - 1)) - 1;
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut out = Vec::with_capacity(data.len() * from as usize / to as usize + 1);
    for &value in data {
        if u32::from(value) >> from != 0 {
            return Err(Error::InvalidValue { value, bits: from });
        }
        acc = ((acc << from) | u32::from(value)) & max_acc;
        bits += from;
        while bits >= to {
            bits -= to;
            #[allow(clippy::cast_possible_truncation)]
            out.push(((acc >> bits) & max_value) as u8);
        }
    }
    if pad {
        if bits > 0 {
            #[allow(clippy::cast_possible_truncation)]
            out.push(((acc << (to - bits)) & max_value) as u8);
        }
    } else if bits >= from || (acc << (to - bits)) & max_value != 0 {
        return Err(Error::NonCanonicalPadding);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_groups() {
        assert_eq!(
            convert_bits(&[0, 1, 2, 128, 255], 8, 5, true).unwrap(),
            vec![0, 0, 0, 16, 5, 0, 7, 31]
        );
        assert_eq!(convert_bits(b"a", 8, 5, true).unwrap(), vec![12, 4]);
        assert_eq!(
            convert_bits(b"https://example.com", 8, 5, true).unwrap(),
            vec![
                13, 1, 26, 7, 8, 28, 3, 19, 7, 8, 23, 18, 30, 25, 11, 24, 12, 5, 22, 23, 0, 27, 3,
                5, 5, 25, 17, 22, 30, 27, 8
            ]
        );
        assert!(convert_bits(&[], 8, 5, true).unwrap().is_empty());
    }

    #[test]
    fn test_groups_to_bytes() {
        assert_eq!(
            convert_bits(&[0, 0, 0, 16, 5, 0, 7, 31], 5, 8, false).unwrap(),
            vec![0, 1, 2, 128, 255]
        );
        assert_eq!(convert_bits(&[31; 8], 5, 8, false).unwrap(), vec![0xff; 5]);
        assert_eq!(convert_bits(&[12, 4], 5, 8, false).unwrap(), b"a".to_vec());
    }

    #[test]
    fn test_random_bytes_survive() {
        let data = crate::test_utils::make_bytes("convert", 257);
        let groups = convert_bits(&data, 8, 5, true).unwrap();
        assert!(groups.iter().all(|&g| g < 32));
        assert_eq!(convert_bits(&groups, 5, 8, false).unwrap(), data);
    }

    #[test]
    fn test_non_canonical_padding() {
        // 12, 5 leaves a set bit in the two discarded bits
        assert_eq!(
            convert_bits(&[12, 5], 5, 8, false).unwrap_err(),
            Error::NonCanonicalPadding
        );
        // a whole surplus group
        assert_eq!(
            convert_bits(&[0; 9], 5, 8, false).unwrap_err(),
            Error::NonCanonicalPadding
        );
        // not enough bits for a byte, but non-zero
        assert_eq!(
            convert_bits(&[1], 5, 8, false).unwrap_err(),
            Error::NonCanonicalPadding
        );
        // a lone group can never be completed, even when zero
        assert_eq!(
            convert_bits(&[0], 5, 8, false).unwrap_err(),
            Error::NonCanonicalPadding
        );
        // zero leftovers shorter than a group are fine
        assert_eq!(convert_bits(&[0, 0], 5, 8, false).unwrap(), vec![0]);
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            convert_bits(&[32], 5, 8, false).unwrap_err(),
            Error::InvalidValue { value: 32, bits: 5 }
        );
        assert_eq!(
            convert_bits(&[1], 0, 5, true).unwrap_err(),
            Error::InvalidBitWidth
        );
        assert_eq!(
            convert_bits(&[1], 8, 9, true).unwrap_err(),
            Error::InvalidBitWidth
        );
    }
}
