//! Client-facing types, shaped the way Ethereum JSON-RPC clients expect them.

use serde::Serialize;

use crate::hex::HexU64;

pub const METHOD_GET_TRANSACTION_RECEIPT: &str = "eth_getTransactionReceipt";

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum ReceiptStatus {
    #[serde(rename = "0x1")]
    Success,
    #[serde(rename = "0x0")]
    Failure,
}

impl ReceiptStatus {
    /// The node reports a clean execution with the literal `"None"`. Anything else, including an
    /// empty string, is a failure.
    pub fn from_excepted(excepted: &str) -> Self {
        if excepted == "None" {
            Self::Success
        } else {
            Self::Failure
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    pub transaction_hash: String,
    pub transaction_index: HexU64,
    pub block_hash: String,
    pub block_number: HexU64,
    pub data: String,
    pub address: String,
    pub topics: Vec<String>,
    pub log_index: HexU64,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    pub transaction_index: HexU64,
    pub block_hash: String,
    pub block_number: HexU64,
    pub contract_address: String,
    pub cumulative_gas_used: HexU64,
    pub gas_used: HexU64,
    pub logs: Vec<Log>,
    pub status: ReceiptStatus,
    // The node exposes no bloom filter and we don't synthesize one.
    pub logs_bloom: String,
}
