//! Types in the qtum node's own RPC dialect.

use serde::Deserialize;

/// `gettransactionreceipt "hash"`, requires the node to run with `-logevents`.
pub const METHOD_GET_TRANSACTION_RECEIPT: &str = "gettransactionreceipt";

/// One entry of the array `gettransactionreceipt` returns. Hashes and addresses come without a
/// hex prefix, integers as plain JSON numbers.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    pub block_hash: String,
    pub contract_address: String,
    pub transaction_index: u64,
    pub cumulative_gas_used: u64,
    pub gas_used: u64,
    pub block_number: u64,
    /// `"None"` when execution did not raise, otherwise the exception name.
    pub excepted: String,
    pub log: Vec<Log>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Log {
    pub address: String,
    pub data: String,
    pub topics: Vec<String>,
}
