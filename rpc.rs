//! Fetching a single transaction by signature over JSON-RPC.
//!
//! Only `getTransaction` is issued. The response is kept as raw JSON apart
//! from the slot and block time; decoding instructions is left to callers.

use std::str::FromStr;

use serde_json::{json, Value};
use solana_sdk::signature::Signature;
use tracing::{debug, info, warn};

use crate::{
    config::RpcConfig,
    types::{FetchError, TransactionRecord},
};

/// Anything that can look up a transaction by its Base58 signature
pub trait TransactionFetcher {
    fn fetch_transaction(&self, signature: &str) -> Result<TransactionRecord, FetchError>;
}

/// [`TransactionFetcher`] backed by a blocking HTTP JSON-RPC client
#[derive(Debug, Clone)]
pub struct HttpTransactionFetcher {
    config: RpcConfig,
    client: reqwest::blocking::Client,
}

impl HttpTransactionFetcher {
    pub fn new(config: RpcConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &RpcConfig {
        &self.config
    }
}

impl TransactionFetcher for HttpTransactionFetcher {
    fn fetch_transaction(&self, signature: &str) -> Result<TransactionRecord, FetchError> {
        validate_signature(signature)?;

        let request = build_get_transaction_request(signature, &self.config);
        debug!(url = %self.config.url, %signature, "sending getTransaction");

        let response = self
            .client
            .post(&self.config.url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()?
            .error_for_status()?;
        let text = response.text()?;

        let body: Value = serde_json::from_str(&text).map_err(|e| {
            warn!(%signature, error = %e, "RPC response is not JSON");
            FetchError::MalformedResponse(e.to_string())
        })?;

        let record = parse_get_transaction_response(signature, body)?;
        info!(%signature, slot = record.slot, "fetched transaction");
        Ok(record)
    }
}

/// Reject anything that is not a 64-byte Base58 signature
pub fn validate_signature(signature: &str) -> Result<Signature, FetchError> {
    Signature::from_str(signature).map_err(|_| FetchError::InvalidSignature(signature.to_string()))
}

/// Build the JSON-RPC body for `getTransaction`
pub fn build_get_transaction_request(signature: &str, config: &RpcConfig) -> Value {
    let mut options = json!({
        "encoding": "json",
        "commitment": config.commitment,
    });
    if let Some(version) = config.max_supported_transaction_version {
        options["maxSupportedTransactionVersion"] = json!(version);
    }

    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "getTransaction",
        "params": [signature, options],
    })
}

/// Turn a `getTransaction` response body into a record.
///
/// A `null` result means the node does not know the signature (or it is not
/// yet at the requested commitment).
pub fn parse_get_transaction_response(
    signature: &str,
    body: Value,
) -> Result<TransactionRecord, FetchError> {
    if let Some(error) = body.get("error").filter(|e| !e.is_null()) {
        return Err(FetchError::Rpc {
            code: error.get("code").and_then(Value::as_i64).unwrap_or_default(),
            message: error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string(),
        });
    }

    let result = match body {
        Value::Object(mut map) => map
            .remove("result")
            .ok_or_else(|| FetchError::MalformedResponse("missing `result` field".to_string()))?,
        _ => {
            return Err(FetchError::MalformedResponse(
                "response is not a JSON object".to_string(),
            ))
        }
    };

    if result.is_null() {
        return Err(FetchError::NotFound(signature.to_string()));
    }

    let slot = result
        .get("slot")
        .and_then(Value::as_u64)
        .ok_or_else(|| FetchError::MalformedResponse("missing or invalid `slot`".to_string()))?;
    let block_time = result.get("blockTime").and_then(Value::as_i64);

    Ok(TransactionRecord {
        signature: signature.to_string(),
        slot,
        block_time,
        raw: result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNATURE: &str =
        "3S3Vi7miE7vhxqVTer6gVqAyU219DQGmEE9zz9df8TjSoVQjYDWkRzcoKXr6Hm6UBrURT9BTqpTiw5zv7dZLLN9Y";

    #[test]
    fn test_validate_signature() {
        assert!(validate_signature(SIGNATURE).is_ok());
        assert!(matches!(
            validate_signature("not-a-signature"),
            Err(FetchError::InvalidSignature(_))
        ));
        // valid Base58, wrong length
        assert!(matches!(
            validate_signature("iUE1qg7KXeV"),
            Err(FetchError::InvalidSignature(_))
        ));
    }

    #[test]
    fn test_build_request() {
        let request = build_get_transaction_request(SIGNATURE, &RpcConfig::default());
        assert_eq!(request["method"], "getTransaction");
        assert_eq!(request["params"][0], SIGNATURE);
        assert_eq!(request["params"][1]["commitment"], "confirmed");
        assert_eq!(request["params"][1]["maxSupportedTransactionVersion"], 0);

        let mut legacy_only = RpcConfig::default();
        legacy_only.max_supported_transaction_version = None;
        let request = build_get_transaction_request(SIGNATURE, &legacy_only);
        assert!(request["params"][1].get("maxSupportedTransactionVersion").is_none());
    }

    #[test]
    fn test_parse_result() {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "slot": 297_000_123u64,
                "blockTime": 1_729_000_000i64,
                "meta": { "err": null },
                "transaction": { "signatures": [SIGNATURE] }
            }
        });
        let record = parse_get_transaction_response(SIGNATURE, body).unwrap();
        assert_eq!(record.signature, SIGNATURE);
        assert_eq!(record.slot, 297_000_123);
        assert_eq!(record.block_time, Some(1_729_000_000));
        assert_eq!(record.raw["transaction"]["signatures"][0], SIGNATURE);
    }

    #[test]
    fn test_parse_null_result() {
        let body = json!({ "jsonrpc": "2.0", "id": 1, "result": null });
        assert!(matches!(
            parse_get_transaction_response(SIGNATURE, body),
            Err(FetchError::NotFound(sig)) if sig == SIGNATURE
        ));
    }

    #[test]
    fn test_parse_rpc_error() {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32602, "message": "Invalid param: WrongSize" }
        });
        match parse_get_transaction_response(SIGNATURE, body) {
            Err(FetchError::Rpc { code, message }) => {
                assert_eq!(code, -32602);
                assert_eq!(message, "Invalid param: WrongSize");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            parse_get_transaction_response(SIGNATURE, json!({ "jsonrpc": "2.0", "id": 1 })),
            Err(FetchError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_get_transaction_response(SIGNATURE, json!({ "result": { "blockTime": 1 } })),
            Err(FetchError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_get_transaction_response(SIGNATURE, json!([1, 2, 3])),
            Err(FetchError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_fetch_rejects_bad_signature_before_network() {
        // Unroutable endpoint: any network attempt would fail with Network, not InvalidSignature
        let fetcher = HttpTransactionFetcher::new(RpcConfig::new("http://127.0.0.1:1")).unwrap();
        assert!(matches!(
            fetcher.fetch_transaction("0OIl"),
            Err(FetchError::InvalidSignature(_))
        ));
    }
}
