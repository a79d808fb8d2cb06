//! Operation dispatch.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use super::{Envelope, Operation, OperationData, ProtocolError, Variant, payload};
use crate::answers::{AnswerResolver, KeywordResolver};
use crate::models::{AskQuestionResult, iso8601};
use crate::store::{InMemoryMessageStore, MessageStore};

/// Resolves each request to an [`Operation`] and runs it against the store
/// or the resolver.
#[derive(Clone)]
pub struct OperationRouter {
    variant: Variant,
    store: Arc<dyn MessageStore>,
    resolver: Arc<dyn AnswerResolver>,
}

impl OperationRouter {
    pub fn new(
        variant: Variant,
        store: Arc<dyn MessageStore>,
        resolver: Arc<dyn AnswerResolver>,
    ) -> Self {
        Self {
            variant,
            store,
            resolver,
        }
    }

    /// Router with an empty in-memory store and the built-in answer templates.
    pub fn in_memory(variant: Variant) -> Self {
        Self::new(
            variant,
            Arc::new(InMemoryMessageStore::new()),
            Arc::new(KeywordResolver::default()),
        )
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn store(&self) -> &Arc<dyn MessageStore> {
        &self.store
    }

    /// Decode a raw body and execute it.
    pub async fn handle(&self, body: &[u8]) -> Result<OperationData, ProtocolError> {
        let envelope = payload::parse(body).inspect_err(|_| warn!("rejecting malformed body"))?;
        self.execute(&envelope).await
    }

    /// Execute an already-decoded envelope.
    pub async fn execute(&self, envelope: &Envelope) -> Result<OperationData, ProtocolError> {
        let operation = self
            .variant
            .resolve(envelope)
            .inspect_err(|_| warn!(variant = %self.variant, "no supported operation in query"))?;

        match operation {
            Operation::ListMessages => Ok(OperationData::Messages(self.store.list().await)),
            Operation::AppendMessage => {
                let text = envelope.variable_text("text").unwrap_or_default();
                let sender = envelope.variable_text("sender");
                let message = self.store.append(&text, sender.as_deref()).await?;
                Ok(OperationData::SendMessage(message))
            }
            Operation::AskQuestion => self.ask(envelope).map(OperationData::AskQuestion),
        }
    }

    fn ask(&self, envelope: &Envelope) -> Result<AskQuestionResult, ProtocolError> {
        let question = envelope.variable_text("question").unwrap_or_default();
        let question = question.trim();
        if question.is_empty() {
            return Err(ProtocolError::MissingField("question"));
        }

        let asked_at = envelope
            .variable_text("askedAt")
            .and_then(|raw| iso8601::parse(&raw))
            .unwrap_or_else(Utc::now);
        debug!(chars = question.chars().count(), "resolving question");

        Ok(AskQuestionResult {
            answer: self.resolver.resolve(question),
            asked_at,
        })
    }
}
