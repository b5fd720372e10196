use super::{AssistantError, AssistantProvider};
use async_trait::async_trait;
use contracts::domain::a001_project::aggregate::Project;
use contracts::shared::fixtures::CANNED_REPLIES;
use rand::seq::SliceRandom;

/// Offline assistant picking one of the canned replies
#[derive(Debug, Default, Clone)]
pub struct CannedProvider;

#[async_trait]
impl AssistantProvider for CannedProvider {
    async fn reply(&self, message: &str, _project: Option<&Project>) -> Result<String, AssistantError> {
        if message.trim().is_empty() {
            return Err(AssistantError::InvalidRequest("Message is empty".into()));
        }
        let reply = CANNED_REPLIES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(CANNED_REPLIES[0]);
        Ok(reply.to_string())
    }

    fn provider_name(&self) -> &str {
        "canned"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn answers_with_a_canned_reply() {
        let reply = CannedProvider.reply("When to order cement?", None).await.unwrap();
        assert!(CANNED_REPLIES.contains(&reply.as_str()));
    }

    #[tokio::test]
    async fn empty_message_is_rejected() {
        let err = CannedProvider.reply("  ", None).await.unwrap_err();
        assert!(matches!(err, AssistantError::InvalidRequest(_)));
    }
}
