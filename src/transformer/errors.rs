use thiserror::Error;

use crate::rpc::{JsonRpcError, INTERNAL_ERROR, INVALID_INPUT, METHOD_NOT_FOUND};

/// Every variant is terminal for the request it came from.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Client params could not be read as the shape the method expects.
    #[error("invalid input")]
    InvalidInput,
    #[error("params must be set")]
    MissingParameter,
    #[error("backend result is not valid json: {0}")]
    MalformedPayload(#[source] serde_json::Error),
    #[error("failed to extract field from backend result: {0}")]
    FieldExtraction(String),
    #[error("method not supported: {0}")]
    MethodNotSupported(String),
    #[error("failed to encode client response: {0}")]
    Encode(#[source] serde_json::Error),
}

impl TransformError {
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidInput => INVALID_INPUT,
            Self::MethodNotSupported(_) => METHOD_NOT_FOUND,
            Self::MissingParameter
            | Self::MalformedPayload(_)
            | Self::FieldExtraction(_)
            | Self::Encode(_) => INTERNAL_ERROR,
        }
    }

    /// True when the client caused the error and should see it as a request error.
    pub fn is_client_error(&self) -> bool {
        self.code() != INTERNAL_ERROR
    }
}

impl From<&TransformError> for JsonRpcError {
    fn from(error: &TransformError) -> Self {
        JsonRpcError {
            code: error.code(),
            message: error.to_string(),
        }
    }
}

impl From<TransformError> for JsonRpcError {
    fn from(error: TransformError) -> Self {
        JsonRpcError::from(&error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_is_protocol_coded_test() {
        let error = JsonRpcError::from(TransformError::InvalidInput);
        assert_eq!(
            error,
            JsonRpcError {
                code: INVALID_INPUT,
                message: "invalid input".to_string(),
            }
        );
        assert!(TransformError::InvalidInput.is_client_error());
    }

    #[test]
    fn missing_parameter_is_generic_test() {
        let error = TransformError::MissingParameter;
        assert_eq!(error.code(), INTERNAL_ERROR);
        assert_eq!(error.to_string(), "params must be set");
        assert!(!error.is_client_error());
    }

    #[test]
    fn backend_shape_errors_are_internal_test() {
        let malformed = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            TransformError::MalformedPayload(malformed).code(),
            INTERNAL_ERROR
        );
        assert_eq!(
            TransformError::FieldExtraction("missing field `blockHash`".to_string()).code(),
            INTERNAL_ERROR
        );
    }

    #[test]
    fn method_not_supported_code_test() {
        let error = TransformError::MethodNotSupported("eth_mining".to_string());
        assert_eq!(error.code(), METHOD_NOT_FOUND);
        assert_eq!(error.to_string(), "method not supported: eth_mining");
    }
}
