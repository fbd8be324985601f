//! # Anchor Discriminator
//!
//! Derive the 8-byte discriminators Anchor programs use to tag accounts,
//! instructions and events, and render them the way on-chain tooling does.
//!
//! ## Derivation
//!
//! A discriminator is the first 8 bytes of `sha256("<namespace>:<Name>")`:
//!
//! | Kind        | Preimage                     |
//! |-------------|------------------------------|
//! | Account     | `account:PoolState`          |
//! | Instruction | `global:swap_base_input`     |
//! | Event       | `event:SwapEvent`            |
//!
//! ## Usage
//!
//! ```
//! use anchor_disc::{bytes_to_base58, derive_discriminator, hex_to_bytes};
//!
//! let disc = derive_discriminator("account:PoolState");
//! assert_eq!(bytes_to_base58(&disc), "iUE1qg7KXeV");
//!
//! // Same value, given as hex the way IDL dumps print it
//! let bytes = hex_to_bytes("0xF7EDE3F5D7C3DE46").unwrap();
//! assert_eq!(bytes, disc);
//! ```
//!
//! The Base58 form is what `getProgramAccounts` memcmp filters take, so the
//! string above finds every CP-swap `PoolState` account at offset 0.
//!
//! ## Fetching transactions
//!
//! [`HttpTransactionFetcher`] looks up a transaction by signature through an
//! endpoint supplied in [`RpcConfig`]. Code that only needs the lookup should
//! depend on the [`TransactionFetcher`] trait.
//!
//! ## Important Notes
//!
//! - The derivation hashes its input as given; it does not check the
//!   `namespace:Name` shape.
//! - Discriminators are 64-bit truncations of SHA-256. Collisions between
//!   different names are possible in principle and are not detected.

pub mod codec;
pub mod config;
pub mod constants;
pub mod discriminator;
pub mod layout;
pub mod rpc;
pub mod telemetry;
pub mod types;

// Re-export main public API
pub use codec::{
    base58_to_bytes, bytes_to_base58, bytes_to_hex, hex_to_base58, hex_to_bytes, Encoding,
};
pub use config::RpcConfig;
pub use constants::{
    ACCOUNT_NAMESPACE, DEFAULT_RPC_URL, DISCRIMINATOR_LEN, EVENT_NAMESPACE, FILL_DISCRIMINATOR,
    INSTRUCTION_NAMESPACE, POOL_STATE_DISCRIMINATOR,
};
pub use discriminator::{
    account_discriminator, derive_discriminator, event_discriminator, find_matching_name,
    instruction_discriminator, namespaced_discriminator, Discriminator,
};
pub use layout::{decode_tagged, encode_tagged, has_discriminator};
pub use rpc::{HttpTransactionFetcher, TransactionFetcher};
pub use types::{CodecError, FetchError, LayoutError, TransactionRecord};
