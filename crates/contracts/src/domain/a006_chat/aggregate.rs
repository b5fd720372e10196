use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const FALLBACK_REPLY: &str =
    "I'm sorry, I'm having trouble connecting right now. Please try again later.";

pub const SUGGESTED_QUESTIONS: [&str; 5] = [
    "What are the cost optimization opportunities for this project?",
    "When should I place orders for critical materials?",
    "Are there any supply chain risks I should be aware of?",
    "Can you recommend alternative materials to reduce costs?",
    "What's the optimal procurement timeline for this project?",
];

/// Number of suggestions shown under the conversation
pub const SUGGESTIONS_SHOWN: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub message: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(id: impl Into<String>, message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            is_user: true,
            timestamp,
        }
    }

    pub fn assistant(id: impl Into<String>, message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            is_user: false,
            timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl ChatRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.message.trim().is_empty() {
            return Err("Message must not be empty".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_message_is_rejected() {
        let req = ChatRequest {
            message: "   ".into(),
            project_id: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn message_uses_camel_case_flag() {
        let msg = ChatMessage::user("7", "hi", Utc::now());
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["isUser"], true);
    }
}
