use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::{
    eth::{self, ReceiptStatus},
    hex::{add_hex_prefix, strip_hex_prefix, HexU64},
    qtum,
    rpc::JsonRpcRequest,
};

use super::{TransformError, Transformer};

/// `eth_getTransactionReceipt` on top of qtum's `gettransactionreceipt`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GetTransactionReceipt;

fn params_from_value(params: Value) -> Result<Vec<String>, TransformError> {
    match params {
        Value::Null => Ok(Vec::new()),
        params => serde_json::from_value::<Vec<String>>(params)
            .map_err(|_| TransformError::InvalidInput),
    }
}

/// Maps a parsed backend receipt to what clients expect. Every derived field is computed here:
/// hex prefixes, canonical integers, status, per-log parent fields and log index.
pub fn receipt_from_qtum(receipt: &qtum::TransactionReceipt) -> eth::TransactionReceipt {
    let transaction_hash = add_hex_prefix(&receipt.transaction_hash);
    let block_hash = add_hex_prefix(&receipt.block_hash);
    let transaction_index = HexU64(receipt.transaction_index);
    let block_number = HexU64(receipt.block_number);

    let logs = receipt
        .log
        .iter()
        .enumerate()
        .map(|(index, log)| eth::Log {
            transaction_hash: transaction_hash.clone(),
            transaction_index,
            block_hash: block_hash.clone(),
            block_number,
            data: add_hex_prefix(&log.data),
            address: add_hex_prefix(&log.address),
            topics: log
                .topics
                .iter()
                .map(|topic| add_hex_prefix(topic))
                .collect(),
            log_index: index.into(),
        })
        .collect();

    eth::TransactionReceipt {
        transaction_hash,
        transaction_index,
        block_hash,
        block_number,
        contract_address: add_hex_prefix(&receipt.contract_address),
        cumulative_gas_used: HexU64(receipt.cumulative_gas_used),
        gas_used: HexU64(receipt.gas_used),
        logs,
        status: ReceiptStatus::from_excepted(&receipt.excepted),
        logs_bloom: String::new(),
    }
}

impl GetTransactionReceipt {
    /// Parses the raw `gettransactionreceipt` result. The node answers with an array, the receipt
    /// is its first element.
    pub fn parse_result(raw_result: &[u8]) -> Result<qtum::TransactionReceipt, TransformError> {
        let value =
            serde_json::from_slice::<Value>(raw_result).map_err(TransformError::MalformedPayload)?;

        let entry = value.get(0).ok_or_else(|| {
            TransformError::FieldExtraction("expected a receipt at index 0".to_string())
        })?;

        qtum::TransactionReceipt::deserialize(entry)
            .map_err(|err| TransformError::FieldExtraction(err.to_string()))
    }

    pub fn decode_receipt(raw_result: &[u8]) -> Result<eth::TransactionReceipt, TransformError> {
        let receipt = Self::parse_result(raw_result)?;
        debug!(
            tx_hash = %receipt.transaction_hash,
            logs_count = receipt.log.len(),
            "decoded transaction receipt"
        );
        Ok(receipt_from_qtum(&receipt))
    }
}

impl Transformer for GetTransactionReceipt {
    fn method(&self) -> &'static str {
        eth::METHOD_GET_TRANSACTION_RECEIPT
    }

    fn rewrite(&self, mut request: JsonRpcRequest) -> Result<JsonRpcRequest, TransformError> {
        let params = params_from_value(request.params.take())?;
        let tx_hash = params.first().ok_or(TransformError::MissingParameter)?;

        debug!(tx_hash = %tx_hash, "rewriting transaction receipt request");

        request.params = json!([strip_hex_prefix(tx_hash)]);
        request.method = qtum::METHOD_GET_TRANSACTION_RECEIPT.to_string();

        Ok(request)
    }

    fn decode(&self, raw_result: &[u8]) -> Result<Value, TransformError> {
        let receipt = Self::decode_receipt(raw_result)?;
        serde_json::to_value(receipt).map_err(TransformError::Encode)
    }
}
