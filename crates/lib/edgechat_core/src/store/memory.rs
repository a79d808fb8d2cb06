//! Process-scoped in-memory message log.
//!
//! Every process starts empty and nothing survives a restart. Two processes
//! serving the same endpoint keep independent histories.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use super::{MessageStore, StoreError, normalize_entry};
use crate::models::ChatMessage;
use crate::uuid::uuidv7;

/// In-memory [`MessageStore`] backed by a `Vec` under a `RwLock`.
#[derive(Debug, Default)]
pub struct InMemoryMessageStore {
    messages: RwLock<Vec<ChatMessage>>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn list(&self) -> Vec<ChatMessage> {
        self.messages.read().await.clone()
    }

    async fn append(&self, text: &str, sender: Option<&str>) -> Result<ChatMessage, StoreError> {
        let (text, sender) = normalize_entry(text, sender)?;
        let message = ChatMessage {
            id: uuidv7().to_string(),
            text,
            sender,
            timestamp: Utc::now(),
        };

        let mut messages = self.messages.write().await;
        messages.push(message.clone());
        info!(id = %message.id, sender = %message.sender, total = messages.len(), "message appended");

        Ok(message)
    }

    async fn len(&self) -> usize {
        self.messages.read().await.len()
    }
}
