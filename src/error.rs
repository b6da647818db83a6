/// Everything that can go wrong while encoding or decoding a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A character is outside the 32-symbol alphabet (or outside printable ASCII).
    InvalidCharset(char),
    /// The token contains both uppercase and lowercase letters.
    MixedCase,
    /// No `1` separator with a non-empty HRP before it and room for the checksum after it.
    MissingSeparator,
    /// The checksum doesn't validate.
    ChecksumMismatch,
    /// The token or its HRP is too long.
    LengthExceeded,
    /// Bits dropped when regrouping back into bytes are not zero.
    NonCanonicalPadding,
    /// The recovered bytes are not UTF-8.
    InvalidUtf8(core::str::Utf8Error),
    /// The HRP passed to the encoder is empty, not printable ASCII, or not lowercase.
    InvalidHrp,
    /// An input value doesn't fit into the declared bit width.
    InvalidValue { value: u8, bits: u32 },
    /// A bit width outside `1..=8` was requested.
    InvalidBitWidth,
    /// The encoder produced something it cannot represent. Indicates a bug.
    EncodingInvariantViolation,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidCharset(c) => write!(f, "invalid character {c:?}"),
            Self::MixedCase => write!(f, "mixed-case token"),
            Self::MissingSeparator => write!(f, "missing or misplaced separator"),
            Self::ChecksumMismatch => write!(f, "invalid checksum"),
            Self::LengthExceeded => write!(f, "length exceeded"),
            Self::NonCanonicalPadding => write!(f, "non-zero padding bits"),
            Self::InvalidUtf8(e) => write!(f, "payload is not valid UTF-8: {e}"),
            Self::InvalidHrp => write!(f, "invalid human-readable part"),
            Self::InvalidValue { value, bits } => {
                write!(f, "value {value} does not fit into {bits} bits")
            }
            Self::InvalidBitWidth => write!(f, "bit width must be between 1 and 8"),
            Self::EncodingInvariantViolation => write!(f, "internal encoding error"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidUtf8(e) => Some(e),
            _ => None,
        }
    }
}

impl From<core::str::Utf8Error> for Error {
    fn from(e: core::str::Utf8Error) -> Self {
        Self::InvalidUtf8(e)
    }
}
