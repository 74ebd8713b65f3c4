//! Hex-prefix normalization between the two dialects, and the canonical integer encoding clients
//! expect.
//!
//! Clients send and receive `0x`-prefixed hex. The qtum node takes and returns hashes and addresses
//! without the prefix, and integers as plain JSON numbers.

use std::fmt::Display;

use serde::Serialize;

/// Strips a single leading `0x` or `0X`, leaving unprefixed input untouched.
pub fn strip_hex_prefix(hex: &str) -> &str {
    hex.strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex)
}

pub fn has_hex_prefix(hex: &str) -> bool {
    hex.starts_with("0x") || hex.starts_with("0X")
}

/// Prepends `0x` unless the value already carries a prefix.
pub fn add_hex_prefix(hex: &str) -> String {
    if has_hex_prefix(hex) {
        hex.to_string()
    } else {
        format!("0x{hex}")
    }
}

/// Lowercase, `0x`-prefixed, no zero padding. Zero encodes as `0x0`.
pub fn encode_u64(num: u64) -> String {
    format!("{num:#x}")
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(into = "String")]
pub struct HexU64(pub u64);

impl Display for HexU64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let HexU64(num) = self;
        write!(f, "{}", encode_u64(*num))
    }
}

impl From<HexU64> for String {
    fn from(HexU64(num): HexU64) -> Self {
        encode_u64(num)
    }
}

impl From<u64> for HexU64 {
    fn from(num: u64) -> Self {
        HexU64(num)
    }
}

impl From<usize> for HexU64 {
    fn from(num: usize) -> Self {
        HexU64(num as u64)
    }
}
