//! Operation identification.
//!
//! Each [`Variant`] owns a lookup table of `(marker, Operation)` pairs. A
//! request is resolved once: an explicit `operationName` that names a marker
//! wins outright, otherwise the query text is scanned for markers in table
//! order.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use super::{Envelope, ProtocolError};

/// The closed set of operations the handler understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `GetMessages`: list the chat log.
    ListMessages,
    /// `SendMessage`: append to the chat log.
    AppendMessage,
    /// `askQuestion`: single-turn Q&A.
    AskQuestion,
}

impl Operation {
    /// Literal marker identifying this operation in query text.
    pub fn marker(self) -> &'static str {
        match self {
            Operation::ListMessages => "GetMessages",
            Operation::AppendMessage => "SendMessage",
            Operation::AskQuestion => "askQuestion",
        }
    }
}

/// Which operation set a running instance serves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Chat log: `GetMessages`, `SendMessage`.
    #[default]
    Chat,
    /// Single-turn Q&A: `askQuestion`.
    Qa,
}

const CHAT_TABLE: &[(&str, Operation)] = &[
    ("GetMessages", Operation::ListMessages),
    ("SendMessage", Operation::AppendMessage),
];

const QA_TABLE: &[(&str, Operation)] = &[("askQuestion", Operation::AskQuestion)];

impl Variant {
    /// Marker table in match priority order.
    pub fn operations(self) -> &'static [(&'static str, Operation)] {
        match self {
            Variant::Chat => CHAT_TABLE,
            Variant::Qa => QA_TABLE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Chat => "chat",
            Variant::Qa => "qa",
        }
    }

    /// Resolve the operation a request asks for.
    pub fn resolve(self, envelope: &Envelope) -> Result<Operation, ProtocolError> {
        let table = self.operations();

        if let Some(name) = envelope.operation_name.as_deref()
            && let Some((_, op)) = table.iter().find(|(marker, _)| *marker == name)
        {
            debug!(variant = self.as_str(), operation = name, "resolved by operationName");
            return Ok(*op);
        }

        table
            .iter()
            .find(|(marker, _)| envelope.query.contains(marker))
            .map(|(marker, op)| {
                debug!(variant = self.as_str(), operation = *marker, "resolved by query marker");
                *op
            })
            .ok_or(ProtocolError::UnsupportedOperation)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown variant '{0}' (expected 'chat' or 'qa')")]
pub struct VariantParseError(String);

impl FromStr for Variant {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chat" => Ok(Variant::Chat),
            "qa" => Ok(Variant::Qa),
            other => Err(VariantParseError(other.to_string())),
        }
    }
}
