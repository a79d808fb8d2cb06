//! Pseudo-GraphQL request pipeline.
//!
//! A request body is decoded into an [`Envelope`] by [`payload::parse`],
//! resolved once into an [`Operation`] against the instance's [`Variant`],
//! and executed by the [`OperationRouter`]. Transport concerns (status
//! codes, the JSON envelope, HTTP methods) live in `edgechat_api`.

pub mod operation;
pub mod payload;
pub mod router;

use serde::Serialize;
use thiserror::Error;

use crate::models::{AskQuestionResult, ChatMessage};
use crate::store::StoreError;

pub use operation::{Operation, Variant, VariantParseError};
pub use payload::Envelope;
pub use router::OperationRouter;

/// Everything a request can fail with. Each maps to one error envelope.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Invalid JSON body")]
    InvalidPayload,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Unsupported operation")]
    UnsupportedOperation,
}

impl From<StoreError> for ProtocolError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::MissingField(field) => ProtocolError::MissingField(field),
        }
    }
}

/// Successful operation result, keyed by the field name the client selects.
///
/// Serializes externally tagged, e.g. `{"sendMessage": {...}}`, which is
/// exactly the object placed under `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OperationData {
    #[serde(rename = "messages")]
    Messages(Vec<ChatMessage>),

    #[serde(rename = "sendMessage")]
    SendMessage(ChatMessage),

    #[serde(rename = "askQuestion")]
    AskQuestion(AskQuestionResult),
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn error_messages_match_wire_contract() {
        assert_eq!(ProtocolError::InvalidPayload.to_string(), "Invalid JSON body");
        assert_eq!(
            ProtocolError::MissingField("question").to_string(),
            "question is required"
        );
        assert_eq!(
            ProtocolError::UnsupportedOperation.to_string(),
            "Unsupported operation"
        );
    }

    #[test]
    fn store_error_converts_to_missing_field() {
        let e: ProtocolError = StoreError::MissingField("text").into();
        assert_eq!(e, ProtocolError::MissingField("text"));
    }

    #[test]
    fn operation_data_is_keyed_by_result_field() {
        let data = OperationData::AskQuestion(AskQuestionResult {
            answer: "a".into(),
            asked_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        });
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["askQuestion"]["answer"], "a");

        let json = serde_json::to_value(OperationData::Messages(Vec::new())).unwrap();
        assert_eq!(json, serde_json::json!({ "messages": [] }));
    }
}
