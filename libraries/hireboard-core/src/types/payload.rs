//! Backend error payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The body of a rejected request, kept verbatim.
///
/// The backend answers validation failures with field maps
/// (`{"email": ["Email already exists."]}`), auth failures with
/// `{"detail": ...}` and view-level failures with `{"error": ...}` or
/// `{"message": ...}`. Callers that only need a line of text use
/// [`ErrorPayload::message`]; callers that render per-field errors read
/// [`ErrorPayload::body`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorPayload(Value);

impl ErrorPayload {
    /// Wrap a parsed JSON body
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// A payload carrying only `{"message": msg}`
    pub fn from_message(msg: impl Into<String>) -> Self {
        Self(serde_json::json!({ "message": msg.into() }))
    }

    /// Build a payload from a raw response body.
    ///
    /// Non-JSON bodies are kept as a string. An empty body yields `None`.
    pub fn from_body(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match serde_json::from_str(trimmed) {
            Ok(value) => Self(value),
            Err(_) => Self(Value::String(trimmed.to_string())),
        })
    }

    /// The verbatim body
    pub fn body(&self) -> &Value {
        &self.0
    }

    /// Errors reported for a single field, if any
    pub fn field_errors(&self, field: &str) -> Vec<String> {
        match self.0.get(field) {
            Some(Value::String(s)) => vec![s.clone()],
            Some(Value::Array(items)) => items.iter().filter_map(text_of).collect(),
            _ => Vec::new(),
        }
    }

    /// Best-effort single line describing the failure
    pub fn message(&self) -> String {
        match &self.0 {
            Value::Object(map) => {
                for key in ["message", "detail", "error"] {
                    if let Some(text) = map.get(key).and_then(text_of) {
                        return text;
                    }
                }
                map.iter()
                    .find_map(|(field, value)| {
                        first_text(value).map(|text| {
                            if field == "non_field_errors" {
                                text
                            } else {
                                format!("{field}: {text}")
                            }
                        })
                    })
                    .unwrap_or_else(|| self.0.to_string())
            }
            other => first_text(other).unwrap_or_else(|| other.to_string()),
        }
    }
}

fn text_of(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(text_of),
        _ => None,
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl From<Value> for ErrorPayload {
    fn from(body: Value) -> Self {
        Self(body)
    }
}
