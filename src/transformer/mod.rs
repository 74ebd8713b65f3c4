//! Per-method translation between the Ethereum dialect clients speak and the qtum node's dialect.
//!
//! A dispatcher asks the [`Manager`] for the transformer registered under the client's method
//! name. `rewrite` turns the client request into the backend request, the dispatcher performs the
//! network call, then hands the raw result to `decode` on the same transformer. Transformers are
//! pure and hold no state, so one `Manager` serves any number of concurrent requests.

mod errors;
mod get_transaction_receipt;

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::rpc::JsonRpcRequest;

pub use errors::TransformError;
pub use get_transaction_receipt::{receipt_from_qtum, GetTransactionReceipt};

pub trait Transformer: Send + Sync {
    /// Client-facing method name this transformer handles.
    fn method(&self) -> &'static str;

    /// Rewrites a client request into the request the backend node expects. No I/O happens here.
    fn rewrite(&self, request: JsonRpcRequest) -> Result<JsonRpcRequest, TransformError>;

    /// Turns the raw backend result into the client-facing response object. All or nothing.
    fn decode(&self, raw_result: &[u8]) -> Result<Value, TransformError>;
}

pub struct Manager {
    transformers: HashMap<&'static str, Box<dyn Transformer>>,
}

impl Manager {
    pub fn new() -> Self {
        let mut manager = Self {
            transformers: HashMap::new(),
        };
        manager.register(Box::new(GetTransactionReceipt));
        manager
    }

    fn register(&mut self, transformer: Box<dyn Transformer>) {
        self.transformers.insert(transformer.method(), transformer);
    }

    pub fn get(&self, method: &str) -> Result<&dyn Transformer, TransformError> {
        self.transformers
            .get(method)
            .map(|transformer| transformer.as_ref())
            .ok_or_else(|| TransformError::MethodNotSupported(method.to_string()))
    }

    /// Rewrites the request and returns the transformer whose `decode` the dispatcher should call
    /// once the backend answers.
    pub fn transform(
        &self,
        request: JsonRpcRequest,
    ) -> Result<(JsonRpcRequest, &dyn Transformer), TransformError> {
        let transformer = self.get(&request.method)?;
        debug!(method = %request.method, "transforming request");
        let rewritten = transformer.rewrite(request)?;
        Ok((rewritten, transformer))
    }

    pub fn methods(&self) -> Vec<&'static str> {
        let mut methods: Vec<_> = self.transformers.keys().copied().collect();
        methods.sort_unstable();
        methods
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}
