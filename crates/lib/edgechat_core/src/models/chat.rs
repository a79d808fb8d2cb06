//! Chat log domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted chat entry. Immutable once created by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Store-generated identifier, unique for the process lifetime.
    pub id: String,
    /// Trimmed, never empty.
    pub text: String,
    /// Trimmed; `"anonymous"` when the caller sent none.
    pub sender: String,
    /// Creation instant.
    #[serde(with = "super::iso8601")]
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_with_iso_timestamp() {
        let msg = ChatMessage {
            id: "m-1".into(),
            text: "hello".into(),
            sender: "browser-demo".into(),
            timestamp: Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap(),
        };
        let value = serde_json::to_value(&msg).expect("serialize");
        assert_eq!(
            value,
            json!({
                "id": "m-1",
                "text": "hello",
                "sender": "browser-demo",
                "timestamp": "2026-10-16T08:00:00.000Z"
            })
        );
    }
}
