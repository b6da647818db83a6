/// The 32 symbols a data group maps to, indexed by group value.
pub const CHARSET: [char; 32] = [
    'q', 'p', 'z', 'r', 'y', '9', 'x', '8', 'g', 'f', '2', 't', 'v', 'd', 'w', '0', 's', '3', 'j',
    'n', '5', '4', 'k', 'h', 'c', 'e', '6', 'm', 'u', 'a', '7', 'l',
];

/// Inverse of [`CHARSET`]. Only lowercase keys; callers fold case first.
pub static CHARSET_REV: phf::Map<char, u8> = phf::phf_map! {
    'q' => 0,
    'p' => 1,
    'z' => 2,
    'r' => 3,
    'y' => 4,
    '9' => 5,
    'x' => 6,
    '8' => 7,
    'g' => 8,
    'f' => 9,
    '2' => 10,
    't' => 11,
    'v' => 12,
    'd' => 13,
    'w' => 14,
    '0' => 15,
    's' => 16,
    '3' => 17,
    'j' => 18,
    'n' => 19,
    '5' => 20,
    '4' => 21,
    'k' => 22,
    'h' => 23,
    'c' => 24,
    'e' => 25,
    '6' => 26,
    'm' => 27,
    'u' => 28,
    'a' => 29,
    '7' => 30,
    'l' => 31,
};

/// Feedback terms of the checksum polynomial, one per bit of the top group.
pub const GENERATORS: [u32; 5] = [0x3b6a_57b2, 0x2650_8e6d, 0x1ea1_19fa, 0x3d42_33dd, 0x2a14_62b3];

/// Residual a valid (non-extended) checksum leaves behind.
pub const BECH32_CONST: u32 = 1;

pub const SEPARATOR: char = '1';

pub const CHECKSUM_LENGTH: usize = 6;

/// Upper bound on a whole token, HRP and separator included.
pub const MAX_LENGTH: usize = 90;

pub const MAX_HRP_LENGTH: usize = MAX_LENGTH - CHECKSUM_LENGTH - 1;
