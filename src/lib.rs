//! `lnurl` turns URLs into short, checksummed [`bech32`](crate::bech32) tokens
//! that survive QR codes, printing and being read out loud.
//!
//! # Encode a URL
//! ```
//! let token = lnurl::encode("https://example.com").unwrap();
//! assert_eq!(token, "LNURL1DP68GURN8GHJ7ETCV9KHQMR99E3K7MGMQGN24");
//! ```
//!
//! # Decode a token
//!
//! Tokens are accepted in either case, but never in a mix of both.
//! ```
//! use lnurl::Error;
//! let url = lnurl::decode("lnurl1dp68gurn8ghj7etcv9khqmr99e3k7mgmqgn24").unwrap();
//! assert_eq!(url, "https://example.com");
//! assert_eq!(
//!     lnurl::decode("LNURL1DP68GURN8GHJ7ETCV9KHQMR99E3K7MGMQGN25").unwrap_err(),
//!     Error::ChecksumMismatch
//! );
//! ```

pub mod bech32;
pub mod checksum;
pub mod constants;
pub mod convert;
mod error;
pub mod lnurl;

pub use self::error::Error;
pub use self::lnurl::decode;
pub use self::lnurl::encode;

#[cfg(test)]
pub(crate) mod test_utils {
    use rand_xoshiro::rand_core::{RngCore, SeedableRng};
    use rand_xoshiro::Xoshiro256StarStar;

    fn rng(seed: &str) -> Xoshiro256StarStar {
        let mut bytes = [0u8; 32];
        for (idx, b) in seed.bytes().enumerate() {
            bytes[idx % 32] ^= b;
        }
        Xoshiro256StarStar::from_seed(bytes)
    }

    pub fn make_bytes(seed: &str, len: usize) -> Vec<u8> {
        let mut bytes = vec![0; len];
        rng(seed).fill_bytes(&mut bytes);
        bytes
    }

    pub fn make_groups(seed: &str, len: usize) -> Vec<u8> {
        make_bytes(seed, len).into_iter().map(|b| b & 0x1f).collect()
    }

    /// A string of exactly `len` UTF-8 bytes, mixing ASCII and multi-byte characters.
    pub fn make_url(seed: &str, len: usize) -> String {
        const POOL: [char; 12] = ['h', 't', 'p', ':', '/', '.', '?', '=', '7', 'é', '€', '𝄞'];
        let mut rng = rng(seed);
        let mut url = String::with_capacity(len);
        while url.len() < len {
            let c = POOL[(rng.next_u32() as usize) % POOL.len()];
            if url.len() + c.len_utf8() <= len {
                url.push(c);
            } else {
                url.push('a');
            }
        }
        url
    }
}
