//! Error and record types shared across the crate.

use serde::Serialize;
use thiserror::Error;

/// Errors from converting identifiers between textual and byte form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Unknown encoding '{0}' (expected hex, base58 or base64)")]
    UnknownEncoding(String),
}

/// Errors from reading or writing discriminator-tagged payloads
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Data too short: expected at least 8 bytes, got {0}")]
    TooShort(usize),

    #[error("Discriminator mismatch: expected {expected}, found {found}")]
    DiscriminatorMismatch { expected: String, found: String },

    #[error("Borsh (de)serialization failed: {0}")]
    Borsh(String),
}

/// Errors from fetching a transaction over RPC
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid transaction signature '{0}'")]
    InvalidSignature(String),

    #[error("RPC request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Transaction {0} not found")]
    NotFound(String),

    #[error("Malformed RPC response: {0}")]
    MalformedResponse(String),
}

/// A transaction as returned by `getTransaction`.
///
/// Only the slot and block time are lifted out; everything else stays in
/// `raw` untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    /// Signature the record was fetched by
    pub signature: String,
    /// Slot the transaction landed in
    pub slot: u64,
    /// Unix timestamp of the block, when the node reports one
    pub block_time: Option<i64>,
    /// The full `result` object from the RPC response
    pub raw: serde_json::Value,
}
