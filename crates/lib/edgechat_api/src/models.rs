//! Wire envelopes.

use edgechat_core::protocol::OperationData;
use serde::Serialize;

/// `{"data": {<resultKey>: payload}}`
#[derive(Debug, Serialize)]
pub struct DataEnvelope {
    pub data: OperationData,
}

/// `{"errors": [{"message": ...}]}`
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<ErrorItem>,
}

#[derive(Debug, Serialize)]
pub struct ErrorItem {
    pub message: String,
}

impl ErrorEnvelope {
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            errors: vec![ErrorItem {
                message: message.into(),
            }],
        }
    }
}
