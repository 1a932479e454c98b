//! Query extraction from heterogeneous caller payloads
//!
//! Chat platforms disagree on field names and on whether they send query
//! parameters or a JSON body. Everything is funneled into one flat JSON object
//! (see [`Payload`]) and the [`FieldExtractor`] picks the query out of it.

use serde_json::{Map, Value};

/// Flattened caller payload, in the order the fields arrived
pub type Payload = Map<String, Value>;

/// Candidate fields checked in order; the first non-empty one wins
pub const QUERY_FIELDS: &[&str] = &[
    "shop",
    "name",
    "query",
    "text",
    "message",
    "user_input",
    "user_message",
    "content",
];

/// Extracts a single normalized query string from a payload
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    fields: &'static [&'static str],
    scan_all_values: bool,
}

impl FieldExtractor {
    /// Extractor checking the standard field list only
    pub fn new() -> Self {
        Self {
            fields: QUERY_FIELDS,
            scan_all_values: false,
        }
    }

    /// Extractor for webhook endpoints: falls back to the first non-empty
    /// top-level string when no known field is present
    pub fn webhook() -> Self {
        Self {
            scan_all_values: true,
            ..Self::new()
        }
    }

    /// Trimmed, lowercased query or an empty string
    pub fn extract(&self, payload: &Payload) -> String {
        self.find(payload)
            .map(|value| value.trim().to_lowercase())
            .unwrap_or_default()
    }

    fn find<'a>(&self, payload: &'a Payload) -> Option<&'a str> {
        if let Some(value) = self
            .fields
            .iter()
            .find_map(|field| non_empty(payload.get(*field)))
        {
            return Some(value);
        }

        if let Some(Value::Object(message)) = payload.get("message") {
            if let Some(text) = non_empty(message.get("text")) {
                return Some(text);
            }
        }

        if self.scan_all_values {
            return payload.values().find_map(|value| non_empty(Some(value)));
        }

        None
    }

    /// Read one named field with the same non-empty rule, trimmed and lowercased
    pub fn field(payload: &Payload, name: &str) -> Option<String> {
        non_empty(payload.get(name)).map(|value| value.trim().to_lowercase())
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.as_str()),
        _ => None,
    }
}

/// Build a payload from a JSON value, treating anything but an object as empty
pub fn payload_from_value(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        _ => Payload::new(),
    }
}

/// Parse a raw body into a payload. Malformed input yields an empty payload.
pub fn payload_from_slice(body: &[u8]) -> Payload {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Payload::new();
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => payload_from_value(value),
        Err(err) => {
            tracing::debug!(error = %err, "Ignoring malformed request body");
            Payload::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        payload_from_value(value)
    }

    #[test]
    fn test_name_precedes_text() {
        let extractor = FieldExtractor::new();
        assert_eq!(
            extractor.extract(&payload(json!({"text": "a", "name": "b"}))),
            "b"
        );
    }

    #[test]
    fn test_empty_field_is_skipped() {
        let extractor = FieldExtractor::new();
        assert_eq!(
            extractor.extract(&payload(json!({"name": "", "query": "c"}))),
            "c"
        );
        assert_eq!(
            extractor.extract(&payload(json!({"shop": "   ", "content": "d"}))),
            "d"
        );
    }

    #[test]
    fn test_output_is_trimmed_and_lowercased() {
        let extractor = FieldExtractor::new();
        assert_eq!(
            extractor.extract(&payload(json!({"shop": "  UNIQLO "}))),
            "uniqlo"
        );
    }

    #[test]
    fn test_nested_message_text() {
        let extractor = FieldExtractor::new();
        assert_eq!(
            extractor.extract(&payload(json!({"message": {"text": "Muji"}}))),
            "muji"
        );
    }

    #[test]
    fn test_scan_only_for_webhook() {
        let body = payload(json!({"session": 42, "foo": "", "bar": "Zara", "baz": "x"}));
        assert_eq!(FieldExtractor::new().extract(&body), "");
        assert_eq!(FieldExtractor::webhook().extract(&body), "zara");
    }

    #[test]
    fn test_non_string_values_are_ignored() {
        let extractor = FieldExtractor::new();
        assert_eq!(
            extractor.extract(&payload(json!({"name": 12, "text": "h&m"}))),
            "h&m"
        );
    }

    #[test]
    fn test_malformed_body_yields_empty_payload() {
        assert!(payload_from_slice(b"{not json").is_empty());
        assert!(payload_from_slice(b"[1, 2]").is_empty());
        assert!(payload_from_slice(b"").is_empty());
        assert_eq!(payload_from_slice(br#"{"query": "parking rates"}"#).len(), 1);
    }

    #[test]
    fn test_named_field() {
        let body = payload(json!({"type": " Shop ", "value": ""}));
        assert_eq!(FieldExtractor::field(&body, "type").as_deref(), Some("shop"));
        assert_eq!(FieldExtractor::field(&body, "value"), None);
    }
}
