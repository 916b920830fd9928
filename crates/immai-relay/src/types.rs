//! Request and response bodies of the chat relay.

use serde::{Deserialize, Serialize};
use crate::error::RelayError;

/// `POST /api/chat` body. A missing or null `query` is treated as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatQuery {
    #[serde(default)]
    pub query: Option<String>,
}

impl ChatQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: Some(query.into()) }
    }

    pub fn text(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }
}

/// Successful relay result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
}

/// Either an answer or an error, never both.
pub type RelayOutcome = Result<ChatAnswer, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_query_field_is_empty() {
        let q: ChatQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.text(), "");

        let q: ChatQuery = serde_json::from_str(r#"{"query": null}"#).unwrap();
        assert_eq!(q.text(), "");
    }

    #[test]
    fn test_answer_wire_shape() {
        let json = serde_json::to_value(ChatAnswer { answer: "ok".into() }).unwrap();
        assert_eq!(json, serde_json::json!({ "answer": "ok" }));
    }
}
