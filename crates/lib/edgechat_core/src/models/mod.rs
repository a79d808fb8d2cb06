//! Domain models shared by the store, the resolver and the wire envelope.
//!
//! Wire field names follow the browser client (`askedAt`, camelCase).

pub mod chat;
pub mod qa;

pub use chat::ChatMessage;
pub use qa::{AnswerTemplate, AskQuestionResult, QaItem};

/// RFC 3339 timestamps as produced by `Date.prototype.toISOString()`:
/// UTC, millisecond precision, `Z` suffix.
pub mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Render a timestamp in the wire format.
    pub fn format(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Parse any RFC 3339 timestamp into UTC.
    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::iso8601;

    #[test]
    fn format_uses_millis_and_z_suffix() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 16, 8, 30, 0).unwrap();
        assert_eq!(iso8601::format(&ts), "2026-10-16T08:30:00.000Z");
    }

    #[test]
    fn parse_normalizes_offsets_to_utc() {
        let ts = iso8601::parse("2026-10-16T10:30:00+02:00").expect("valid");
        assert_eq!(iso8601::format(&ts), "2026-10-16T08:30:00.000Z");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(iso8601::parse("yesterday").is_none());
        assert!(iso8601::parse("").is_none());
    }
}
