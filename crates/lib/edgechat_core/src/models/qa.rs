//! Question/answer domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Static keyword → answer lookup entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerTemplate {
    /// Case-insensitive match strings, in priority order.
    pub keywords: Vec<String>,
    pub answer: String,
}

impl AnswerTemplate {
    pub fn new<K, S>(keywords: K, answer: impl Into<String>) -> Self
    where
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }

    /// True when any keyword is a substring of the already-lowercased question.
    pub fn matches(&self, normalized_question: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| normalized_question.contains(&k.to_lowercase()))
    }
}

/// Payload of the `askQuestion` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskQuestionResult {
    pub answer: String,
    #[serde(with = "super::iso8601")]
    pub asked_at: DateTime<Utc>,
}

/// One question/answer exchange as the client keeps it. Never stored by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(with = "super::iso8601")]
    pub asked_at: DateTime<Utc>,
}

impl QaItem {
    /// Build a client-side history item from an `askQuestion` result.
    pub fn from_result(question: impl Into<String>, result: AskQuestionResult) -> Self {
        Self {
            id: crate::uuid::uuidv7().to_string(),
            question: question.into(),
            answer: result.answer,
            asked_at: result.asked_at,
        }
    }
}
