//! JSON-RPC envelope types exchanged with the dispatcher.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Malformed params, reported to the client as a request error rather than an internal one.
pub const INVALID_INPUT: i32 = -32602;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INTERNAL_ERROR: i32 = -32603;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Value,
    pub method: String,
    // Absent params come through as null.
    #[serde(default)]
    pub params: Value,
}

impl JsonRpcRequest {
    pub fn new(id: impl Into<Value>, method: &str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: id.into(),
            method: method.to_string(),
            params,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl Display for JsonRpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "json-rpc error {}: {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserialize_request_test() {
        let src = r#"{ "jsonrpc": "2.0", "id": 1, "method": "eth_getTransactionReceipt", "params": ["0xabc"] }"#;
        let actual = serde_json::from_str::<JsonRpcRequest>(src).unwrap();
        let expected = JsonRpcRequest::new(1, "eth_getTransactionReceipt", json!(["0xabc"]));
        assert_eq!(actual, expected);
    }

    #[test]
    fn deserialize_request_without_params_test() {
        let src = r#"{ "jsonrpc": "2.0", "id": "a", "method": "eth_getTransactionReceipt" }"#;
        let actual = serde_json::from_str::<JsonRpcRequest>(src).unwrap();
        assert_eq!(actual.params, Value::Null);
        assert_eq!(actual.id, json!("a"));
    }

    #[test]
    fn serialize_error_test() {
        let error = JsonRpcError {
            code: INVALID_INPUT,
            message: "invalid input".to_string(),
        };
        let actual = serde_json::to_string(&error).unwrap();
        assert_eq!(actual, r#"{"code":-32602,"message":"invalid input"}"#);
    }
}
