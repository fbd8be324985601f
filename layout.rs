//! Reading and writing discriminator-tagged payloads.
//!
//! Anchor account data and instruction data share one layout:
//!
//! ```text
//! discriminator (8) | borsh(body)
//! ```
//!
//! Account data may carry trailing bytes past the body (reserved padding,
//! realloc'd space), so decoding does not require the slice to be consumed.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::{
    codec::bytes_to_hex,
    constants::DISCRIMINATOR_LEN,
    types::LayoutError,
};

/// Check whether `data` begins with `discriminator`.
///
/// Returns false for anything shorter than 8 bytes.
pub fn has_discriminator(data: &[u8], discriminator: &[u8; 8]) -> bool {
    data.len() >= DISCRIMINATOR_LEN && data[..DISCRIMINATOR_LEN] == discriminator[..]
}

/// Serialize `body` with Borsh and prefix it with `discriminator`
pub fn encode_tagged<T: BorshSerialize>(
    discriminator: &[u8; 8],
    body: &T,
) -> Result<Vec<u8>, LayoutError> {
    let mut data = discriminator.to_vec();
    body.serialize(&mut data)
        .map_err(|e| LayoutError::Borsh(e.to_string()))?;
    Ok(data)
}

/// Check the discriminator prefix of `data` and Borsh-decode the rest as `T`
pub fn decode_tagged<T: BorshDeserialize>(
    discriminator: &[u8; 8],
    data: &[u8],
) -> Result<T, LayoutError> {
    if data.len() < DISCRIMINATOR_LEN {
        return Err(LayoutError::TooShort(data.len()));
    }

    let (prefix, mut body) = data.split_at(DISCRIMINATOR_LEN);
    if prefix != discriminator {
        return Err(LayoutError::DiscriminatorMismatch {
            expected: bytes_to_hex(discriminator),
            found: bytes_to_hex(prefix),
        });
    }

    T::deserialize(&mut body).map_err(|e| LayoutError::Borsh(e.to_string()))
}
