use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the authentication service.
///
/// The service reports failures as `{"detail": "..."}`, or as a list of
/// field errors (`{"detail": [{"msg": "..."}]}`) when request validation
/// fails. Any other shape carries no user-presentable detail.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ErrorResponse {
    /// Raw detail payload.
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    /// Creates an error response with a plain-text detail.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(Value::String(detail.into())),
        }
    }

    /// Extracts the detail message from a raw response body, if any.
    #[must_use]
    pub fn detail_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|response| response.detail_message())
    }

    /// Flattens the detail payload into a single human-readable message.
    #[must_use]
    pub fn detail_message(&self) -> Option<String> {
        self.detail.as_ref().and_then(message_from_value)
    }
}

fn message_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => non_empty(text),
        Value::Object(fields) => fields.get("msg").and_then(Value::as_str).and_then(non_empty),
        Value::Array(items) => {
            let messages: Vec<String> = items.iter().filter_map(message_from_value).collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.detail_message() {
            Some(message) => f.write_str(&message),
            None => f.write_str("unknown error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_detail_is_returned() {
        let body = json!({"detail": "Username already registered"}).to_string();
        assert_eq!(
            ErrorResponse::detail_from_body(&body).as_deref(),
            Some("Username already registered")
        );
    }

    #[test]
    fn validation_details_are_joined() {
        let body = json!({
            "detail": [
                {"loc": ["body", "password"], "msg": "Passwords do not match", "type": "value_error"},
                {"loc": ["body", "name"], "msg": "Field required", "type": "missing"},
            ]
        })
        .to_string();

        assert_eq!(
            ErrorResponse::detail_from_body(&body).as_deref(),
            Some("Passwords do not match; Field required")
        );
    }

    #[test]
    fn missing_or_blank_detail_yields_none() {
        assert_eq!(ErrorResponse::detail_from_body("{}"), None);
        assert_eq!(ErrorResponse::detail_from_body(r#"{"detail": "  "}"#), None);
        assert_eq!(ErrorResponse::detail_from_body(r#"{"detail": 42}"#), None);
        assert_eq!(ErrorResponse::detail_from_body("<html>502</html>"), None);
        assert_eq!(ErrorResponse::detail_from_body(""), None);
    }

    #[test]
    fn display_prefers_detail() {
        assert_eq!(ErrorResponse::new("nope").to_string(), "nope");
        assert_eq!(ErrorResponse::default().to_string(), "unknown error");
    }
}
