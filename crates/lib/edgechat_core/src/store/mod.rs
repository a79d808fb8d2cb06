//! Chat message storage.
//!
//! An ordered, append-only log of [`ChatMessage`]s behind the
//! [`MessageStore`] trait. The built-in [`memory::InMemoryMessageStore`]
//! lives for the lifetime of the process; a durable backend can implement
//! the same trait without touching the router.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::ChatMessage;

pub use memory::InMemoryMessageStore;

/// Sender recorded when the caller supplies none.
pub const DEFAULT_SENDER: &str = "anonymous";

/// Errors raised by a message store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Append-only message log.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// All entries in insertion order.
    async fn list(&self) -> Vec<ChatMessage>;

    /// Validate, stamp and append a new entry, returning it.
    ///
    /// `text` must be non-blank after trimming. A blank or absent `sender`
    /// becomes [`DEFAULT_SENDER`].
    async fn append(&self, text: &str, sender: Option<&str>) -> Result<ChatMessage, StoreError>;

    /// Number of stored entries.
    async fn len(&self) -> usize {
        self.list().await.len()
    }

    /// True when nothing has been appended.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Trim `text` and `sender`, rejecting blank text and defaulting the sender.
pub fn normalize_entry(
    text: &str,
    sender: Option<&str>,
) -> Result<(String, String), StoreError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(StoreError::MissingField("text"));
    }
    let sender = sender
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SENDER);
    Ok((text.to_string(), sender.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_both_fields() {
        let (text, sender) = normalize_entry("  hi  ", Some(" bob ")).unwrap();
        assert_eq!(text, "hi");
        assert_eq!(sender, "bob");
    }

    #[test]
    fn normalize_defaults_blank_sender() {
        assert_eq!(normalize_entry("hi", None).unwrap().1, DEFAULT_SENDER);
        assert_eq!(normalize_entry("hi", Some("   ")).unwrap().1, DEFAULT_SENDER);
    }

    #[test]
    fn normalize_rejects_blank_text() {
        assert_eq!(
            normalize_entry(" \t\n", Some("bob")),
            Err(StoreError::MissingField("text"))
        );
        assert_eq!(normalize_entry("", None), Err(StoreError::MissingField("text")));
    }

    #[test]
    fn missing_field_message() {
        assert_eq!(StoreError::MissingField("text").to_string(), "text is required");
    }
}
