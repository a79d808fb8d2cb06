//! Request envelope decoding.

use serde_json::{Map, Value};

use super::ProtocolError;

/// Decoded `{query, variables, operationName}` request body.
///
/// Absent or wrongly-typed fields fall back to empty values; only a body
/// that is not JSON at all is rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    pub query: String,
    pub variables: Map<String, Value>,
    pub operation_name: Option<String>,
}

impl Envelope {
    pub fn new(query: impl Into<String>, variables: Map<String, Value>) -> Self {
        Self {
            query: query.into(),
            variables,
            operation_name: None,
        }
    }

    /// Read a variable as text: strings verbatim, numbers and booleans via
    /// their JSON rendering, `null` or absent as `None`.
    pub fn variable_text(&self, name: &str) -> Option<String> {
        match self.variables.get(name)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Decode a raw request body.
pub fn parse(body: &[u8]) -> Result<Envelope, ProtocolError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ProtocolError::InvalidPayload)?;
    Ok(from_value(value))
}

/// Lenient extraction from an already-decoded JSON document.
pub fn from_value(value: Value) -> Envelope {
    let Value::Object(mut root) = value else {
        return Envelope::default();
    };

    let query = match root.remove("query") {
        Some(Value::String(q)) => q,
        _ => String::new(),
    };
    let variables = match root.remove("variables") {
        Some(Value::Object(vars)) => vars,
        _ => Map::new(),
    };
    let operation_name = match root.remove("operationName") {
        Some(Value::String(name)) if !name.is_empty() => Some(name),
        _ => None,
    };

    Envelope {
        query,
        variables,
        operation_name,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_full_envelope() {
        let body = br#"{"query":"query GetMessages { messages { id } }","variables":{"a":1},"operationName":"GetMessages"}"#;
        let env = parse(body).unwrap();
        assert!(env.query.contains("GetMessages"));
        assert_eq!(env.variables.get("a"), Some(&json!(1)));
        assert_eq!(env.operation_name.as_deref(), Some("GetMessages"));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let env = parse(b"{}").unwrap();
        assert_eq!(env, Envelope::default());
    }

    #[test]
    fn malformed_json_is_invalid_payload() {
        assert_eq!(parse(b"{not json"), Err(ProtocolError::InvalidPayload));
        assert_eq!(parse(b""), Err(ProtocolError::InvalidPayload));
    }

    #[test]
    fn wrongly_typed_fields_are_tolerated() {
        let env = from_value(json!({ "query": 7, "variables": [1, 2], "operationName": null }));
        assert_eq!(env, Envelope::default());

        let env = parse(b"[1,2,3]").unwrap();
        assert_eq!(env, Envelope::default());
    }

    #[test]
    fn variable_text_coerces_scalars() {
        let vars = json!({ "s": "hi", "n": 42, "b": true, "z": null });
        let Value::Object(vars) = vars else { unreachable!() };
        let env = Envelope::new("", vars);
        assert_eq!(env.variable_text("s").as_deref(), Some("hi"));
        assert_eq!(env.variable_text("n").as_deref(), Some("42"));
        assert_eq!(env.variable_text("b").as_deref(), Some("true"));
        assert_eq!(env.variable_text("z"), None);
        assert_eq!(env.variable_text("missing"), None);
    }
}
