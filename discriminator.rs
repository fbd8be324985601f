//! Anchor discriminator utilities.
//!
//! Anchor tags every account, instruction and event with the first 8 bytes of
//! `sha256("<namespace>:<Name>")`. The namespace is `account` for account
//! structs, `global` for instruction handlers and `event` for events.

use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256};

use crate::{
    codec::{base58_to_bytes, bytes_to_base58, bytes_to_hex, hex_to_bytes},
    constants::{ACCOUNT_NAMESPACE, DISCRIMINATOR_LEN, EVENT_NAMESPACE, INSTRUCTION_NAMESPACE},
    types::CodecError,
};

/// Compute a discriminator: sha256(name)[0..8]
///
/// `name` is hashed as given. The `"<namespace>:<Name>"` convention is the
/// caller's to follow; see [`namespaced_discriminator`] for the helper that
/// builds the preimage.
///
/// # Example
///
/// ```
/// use anchor_disc::derive_discriminator;
///
/// let disc = derive_discriminator("account:PoolState");
/// assert_eq!(disc, [0xf7, 0xed, 0xe3, 0xf5, 0xd7, 0xc3, 0xde, 0x46]);
/// ```
pub fn derive_discriminator(name: &str) -> [u8; 8] {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    let hash_result = hasher.finalize();
    let mut discriminator = [0u8; DISCRIMINATOR_LEN];
    discriminator.copy_from_slice(&hash_result[..DISCRIMINATOR_LEN]);
    discriminator
}

/// Compute sha256("<namespace>:<name>")[0..8]
pub fn namespaced_discriminator(namespace: &str, name: &str) -> [u8; 8] {
    derive_discriminator(&format!("{}:{}", namespace, name))
}

/// Account discriminator: sha256("account:<name>")[0..8]
///
/// `name` is the account struct name as written in the program, e.g. `PoolState`.
pub fn account_discriminator(name: &str) -> [u8; 8] {
    namespaced_discriminator(ACCOUNT_NAMESPACE, name)
}

/// Instruction discriminator: sha256("global:<name>")[0..8]
///
/// `name` is the snake_case handler name, e.g. `swap_base_input`.
pub fn instruction_discriminator(name: &str) -> [u8; 8] {
    namespaced_discriminator(INSTRUCTION_NAMESPACE, name)
}

/// Event discriminator: sha256("event:<name>")[0..8]
pub fn event_discriminator(name: &str) -> [u8; 8] {
    namespaced_discriminator(EVENT_NAMESPACE, name)
}

/// Return the first candidate preimage whose discriminator equals `target`.
///
/// Candidates are hashed as given, so they should already carry their namespace.
pub fn find_matching_name<'a, I>(target: &[u8; 8], candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .find(|candidate| derive_discriminator(candidate) == *target)
}

/// An 8-byte discriminator value.
///
/// Displays as lowercase hex. Parses from hex (optionally `0x`-prefixed) or
/// Base58; anything that does not decode to exactly 8 bytes is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Discriminator([u8; 8]);

impl Discriminator {
    /// Derive from a full preimage such as `"account:PoolState"`
    pub fn derive(name: &str) -> Self {
        Self(derive_discriminator(name))
    }

    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    pub fn to_base58(&self) -> String {
        bytes_to_base58(&self.0)
    }

    /// Whether `data` starts with this discriminator
    pub fn is_prefix_of(&self, data: &[u8]) -> bool {
        data.len() >= DISCRIMINATOR_LEN && data[..DISCRIMINATOR_LEN] == self.0
    }
}

impl From<[u8; 8]> for Discriminator {
    fn from(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }
}

impl From<Discriminator> for [u8; 8] {
    fn from(disc: Discriminator) -> Self {
        disc.0
    }
}

impl TryFrom<&[u8]> for Discriminator {
    type Error = CodecError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; 8] = bytes.try_into().map_err(|_| CodecError::InvalidLength {
            expected: DISCRIMINATOR_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(array))
    }
}

impl FromStr for Discriminator {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 16 hex digits and 11 Base58 characters never collide, so try hex first
        if let Ok(bytes) = hex_to_bytes(s) {
            if bytes.len() == DISCRIMINATOR_LEN {
                return Self::try_from(bytes.as_slice());
            }
        }
        let bytes = base58_to_bytes(s)?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FILL_DISCRIMINATOR, POOL_STATE_DISCRIMINATOR};

    #[test]
    fn test_derive_is_deterministic() {
        for name in ["account:PoolState", "global:fill", "", "event:SwapEvent", "ünïcödé"] {
            assert_eq!(derive_discriminator(name), derive_discriminator(name));
            assert_eq!(derive_discriminator(name).len(), 8);
        }
    }

    #[test]
    fn test_derive_is_sensitive() {
        assert_ne!(
            derive_discriminator("account:PoolState"),
            derive_discriminator("account:PoolState2")
        );
        assert_ne!(
            derive_discriminator("account:PoolState"),
            derive_discriminator("account:poolstate")
        );
    }

    #[test]
    fn test_known_values() {
        assert_eq!(derive_discriminator("account:PoolState"), POOL_STATE_DISCRIMINATOR);
        assert_eq!(derive_discriminator("global:fill"), FILL_DISCRIMINATOR);
        assert_eq!(
            derive_discriminator("account:AmmConfig"),
            [0xda, 0xf4, 0x21, 0x68, 0xcb, 0xcb, 0x2b, 0x6f]
        );
    }

    #[test]
    fn test_namespace_helpers() {
        assert_eq!(account_discriminator("PoolState"), derive_discriminator("account:PoolState"));
        assert_eq!(instruction_discriminator("fill"), FILL_DISCRIMINATOR);
        assert_eq!(
            instruction_discriminator("swap_base_input"),
            [0x8f, 0xbe, 0x5a, 0xda, 0xc4, 0x1e, 0x33, 0xde]
        );
        assert_eq!(
            event_discriminator("SwapEvent"),
            [0x40, 0xc6, 0xcd, 0xe8, 0x26, 0x08, 0x71, 0xe2]
        );
    }

    #[test]
    fn test_find_matching_name() {
        let candidates = ["global:fill_v2", "global:fillOrder", "global:fill", "fill"];
        assert_eq!(find_matching_name(&FILL_DISCRIMINATOR, candidates), Some("global:fill"));
        assert_eq!(find_matching_name(&FILL_DISCRIMINATOR, ["fill", "fill_order"]), None);
    }

    #[test]
    fn test_discriminator_renderings() {
        let disc = Discriminator::derive("account:PoolState");
        assert_eq!(disc.to_hex(), "f7ede3f5d7c3de46");
        assert_eq!(disc.to_string(), "f7ede3f5d7c3de46");
        assert_eq!(disc.to_base58(), "iUE1qg7KXeV");
        assert_eq!(<[u8; 8]>::from(disc), POOL_STATE_DISCRIMINATOR);
    }

    #[test]
    fn test_discriminator_parse() {
        let expected = Discriminator::from_bytes(POOL_STATE_DISCRIMINATOR);
        assert_eq!("f7ede3f5d7c3de46".parse::<Discriminator>().unwrap(), expected);
        assert_eq!("0xF7EDE3F5D7C3DE46".parse::<Discriminator>().unwrap(), expected);
        assert_eq!("iUE1qg7KXeV".parse::<Discriminator>().unwrap(), expected);
    }

    #[test]
    fn test_discriminator_parse_wrong_length() {
        assert!(matches!(
            "0xf7ede3f5".parse::<Discriminator>(),
            Err(CodecError::InvalidEncoding(_))
        ));
        assert!(matches!(
            "abcd".parse::<Discriminator>(),
            Err(CodecError::InvalidLength { expected: 8, .. })
        ));
        assert!(matches!(
            Discriminator::try_from(&[1u8, 2, 3][..]),
            Err(CodecError::InvalidLength { expected: 8, actual: 3 })
        ));
    }

    #[test]
    fn test_is_prefix_of() {
        let disc = Discriminator::from_bytes(FILL_DISCRIMINATOR);
        let mut data = FILL_DISCRIMINATOR.to_vec();
        data.extend_from_slice(&7_000_000u64.to_le_bytes());
        assert!(disc.is_prefix_of(&data));
        assert!(disc.is_prefix_of(&FILL_DISCRIMINATOR));
        assert!(!disc.is_prefix_of(&data[..7]));
        assert!(!disc.is_prefix_of(&POOL_STATE_DISCRIMINATOR));
    }
}
