//! Conversions between raw bytes and the textual forms identifiers show up in.
//!
//! Explorers and `solana` CLI output render discriminators and account data
//! as Base58, IDL dumps and debugging output use hex, and RPC account data
//! comes back as Base64. [`Encoding`] lets callers pick one at runtime.

use std::fmt;
use std::str::FromStr;

use base64::Engine;

use crate::types::CodecError;

/// Decode a hex string into bytes.
///
/// Accepts an optional `0x`/`0X` prefix and digits in either case. The
/// remaining digit count must be even; an empty string decodes to no bytes.
pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>, CodecError> {
    let normalized = input.to_ascii_lowercase();
    let digits = normalized.strip_prefix("0x").unwrap_or(&normalized);
    hex::decode(digits).map_err(|e| CodecError::InvalidEncoding(format!("hex '{}': {}", input, e)))
}

/// Encode bytes as lowercase hex without a prefix
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Encode bytes as Base58 (Bitcoin alphabet).
///
/// Each leading zero byte becomes a leading `'1'`, so `[0, 0, 1]` encodes
/// as `"112"`. Empty input encodes to the empty string.
pub fn bytes_to_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode a Base58 (Bitcoin alphabet) string into bytes
pub fn base58_to_bytes(input: &str) -> Result<Vec<u8>, CodecError> {
    bs58::decode(input)
        .into_vec()
        .map_err(|e| CodecError::InvalidEncoding(format!("base58 '{}': {}", input, e)))
}

/// Re-render a hex identifier in Base58
pub fn hex_to_base58(input: &str) -> Result<String, CodecError> {
    Ok(bytes_to_base58(&hex_to_bytes(input)?))
}

/// Textual encodings an identifier may be given in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Hex,
    Base58,
    Base64,
}

impl Encoding {
    /// Decode `input` according to this encoding
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, CodecError> {
        match self {
            Encoding::Hex => hex_to_bytes(input),
            Encoding::Base58 => base58_to_bytes(input),
            Encoding::Base64 => base64::engine::general_purpose::STANDARD
                .decode(input)
                .map_err(|e| CodecError::InvalidEncoding(format!("base64 '{}': {}", input, e))),
        }
    }

    /// Encode `bytes` according to this encoding
    pub fn encode(&self, bytes: &[u8]) -> String {
        match self {
            Encoding::Hex => bytes_to_hex(bytes),
            Encoding::Base58 => bytes_to_base58(bytes),
            Encoding::Base64 => base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }
}

impl FromStr for Encoding {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(Encoding::Hex),
            "base58" | "bs58" => Ok(Encoding::Base58),
            "base64" => Ok(Encoding::Base64),
            _ => Err(CodecError::UnknownEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::Hex => "hex",
            Encoding::Base58 => "base58",
            Encoding::Base64 => "base64",
        };
        f.write_str(name)
    }
}
