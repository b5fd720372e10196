use crate::domain::a006_chat::api;
use chrono::{DateTime, Utc};
use contracts::domain::a006_chat::aggregate::{
    ChatMessage, ChatRequest, ChatResponse, FALLBACK_REPLY, SUGGESTED_QUESTIONS,
    SUGGESTIONS_SHOWN,
};
use contracts::shared::fixtures;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

/// Trimmed message to send; `None` for blank input or while a reply is pending
pub fn accept_input(input: &str, in_flight: bool) -> Option<String> {
    if in_flight {
        return None;
    }
    Some(input.trim().to_string()).filter(|m| !m.is_empty())
}

/// Assistant message for a reply; failures become the apology text
pub fn reply_message(
    result: Result<ChatResponse, String>,
    id: String,
    now: DateTime<Utc>,
) -> ChatMessage {
    match result {
        Ok(response) if response.success => ChatMessage::assistant(id, response.message, now),
        Ok(_) => ChatMessage::assistant(id, FALLBACK_REPLY, now),
        Err(e) => {
            log::warn!("Assistant request failed: {}", e);
            ChatMessage::assistant(id, FALLBACK_REPLY, now)
        }
    }
}

/// Suggestions are offered until the conversation grows past the seed
pub fn suggestions(message_count: usize) -> &'static [&'static str] {
    if message_count <= fixtures::chat_messages().len() {
        &SUGGESTED_QUESTIONS[..SUGGESTIONS_SHOWN]
    } else {
        &[]
    }
}

#[derive(Clone, Copy)]
pub struct ChatPanelVm {
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub input: RwSignal<String>,
    pub is_sending: RwSignal<bool>,
    project_id: StoredValue<String>,
}

impl ChatPanelVm {
    pub fn new(project_id: String) -> Self {
        Self {
            messages: RwSignal::new(fixtures::chat_messages()),
            input: RwSignal::new(String::new()),
            is_sending: RwSignal::new(false),
            project_id: StoredValue::new(project_id),
        }
    }

    pub fn send_command(&self) {
        let Some(message) = accept_input(&self.input.get_untracked(), self.is_sending.get_untracked())
        else {
            return;
        };

        let now = Utc::now();
        self.messages
            .update(|list| list.push(ChatMessage::user(Uuid::new_v4().to_string(), message.clone(), now)));
        self.input.set(String::new());
        self.is_sending.set(true);

        let this = *self;
        let request = ChatRequest {
            message,
            project_id: Some(self.project_id.get_value()),
        };
        spawn_local(async move {
            let result = api::send_message(&request).await;
            let reply = reply_message(result, Uuid::new_v4().to_string(), Utc::now());
            this.messages.update(|list| list.push(reply));
            this.is_sending.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_in_flight_input_is_ignored() {
        assert_eq!(accept_input("   ", false), None);
        assert_eq!(accept_input("When to order steel?", true), None);
        assert_eq!(
            accept_input("  When to order steel? ", false).as_deref(),
            Some("When to order steel?")
        );
    }

    #[test]
    fn failures_become_the_apology() {
        let now = Utc::now();
        let failed = reply_message(Err("HTTP 502".into()), "2".into(), now);
        assert_eq!(failed.message, FALLBACK_REPLY);
        assert!(!failed.is_user);

        let declined = ChatResponse {
            success: false,
            message: "nope".into(),
            timestamp: now,
        };
        assert_eq!(reply_message(Ok(declined), "3".into(), now).message, FALLBACK_REPLY);
    }

    #[test]
    fn successful_reply_is_kept_verbatim() {
        let now = Utc::now();
        let ok = ChatResponse {
            success: true,
            message: "Order steel by next week.".into(),
            timestamp: now,
        };
        let reply = reply_message(Ok(ok), "4".into(), now);
        assert_eq!(reply.message, "Order steel by next week.");
        assert_eq!(reply.id, "4");
    }

    #[test]
    fn suggestions_disappear_once_the_chat_moves_on() {
        let seeded = fixtures::chat_messages().len();
        assert_eq!(suggestions(seeded).len(), SUGGESTIONS_SHOWN);
        assert_eq!(suggestions(seeded)[0], SUGGESTED_QUESTIONS[0]);
        assert!(suggestions(seeded + 2).is_empty());
    }
}
