//! Shared data models for the botdeck dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chatbot as served by the `/api/chatbots` collection.
///
/// The dashboard only reads these fields; the backend owns the lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Chatbot {
    pub id: String,
    pub name: String,
    /// Identifier of the language model backing this chatbot.
    pub model_id: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chatbot_uses_camel_case_wire_names() {
        let json = r#"{
            "id": "abc123",
            "name": "Support Bot",
            "modelId": "gpt-x",
            "createdAt": "2026-01-15T10:30:00Z"
        }"#;

        let bot: Chatbot = serde_json::from_str(json).unwrap();
        assert_eq!(bot.id, "abc123");
        assert_eq!(bot.name, "Support Bot");
        assert_eq!(bot.model_id, "gpt-x");

        let back = serde_json::to_value(&bot).unwrap();
        assert_eq!(back["modelId"], "gpt-x");
        assert_eq!(back["createdAt"], "2026-01-15T10:30:00Z");
    }
}
