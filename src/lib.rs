pub mod env;
pub mod eth;
pub mod hex;
pub mod log;
pub mod qtum;
pub mod rpc;
pub mod transformer;

pub use rpc::{JsonRpcError, JsonRpcRequest};
pub use transformer::{Manager, TransformError, Transformer};
