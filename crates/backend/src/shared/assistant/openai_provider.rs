use super::{system_prompt, AssistantError, AssistantProvider};
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use contracts::domain::a001_project::aggregate::Project;

/// OpenAI-compatible chat completion provider
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String, model: String, endpoint: Option<String>) -> Self {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(endpoint) = endpoint {
            config = config.with_api_base(endpoint);
        }
        Self {
            client: Client::with_config(config),
            model,
        }
    }

    fn messages(
        message: &str,
        project: Option<&Project>,
    ) -> Result<Vec<ChatCompletionRequestMessage>, AssistantError> {
        let system = ChatCompletionRequestSystemMessageArgs::default()
            .content(system_prompt(project))
            .build()
            .map_err(|e| AssistantError::InvalidRequest(e.to_string()))?;
        let user = ChatCompletionRequestUserMessageArgs::default()
            .content(message)
            .build()
            .map_err(|e| AssistantError::InvalidRequest(e.to_string()))?;
        Ok(vec![system.into(), user.into()])
    }
}

#[async_trait]
impl AssistantProvider for OpenAiProvider {
    async fn reply(&self, message: &str, project: Option<&Project>) -> Result<String, AssistantError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(Self::messages(message, project)?)
            .build()
            .map_err(|e| AssistantError::InvalidRequest(e.to_string()))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("401") || err_str.contains("authentication") {
                AssistantError::AuthError(err_str)
            } else if err_str.contains("429") || err_str.contains("rate limit") {
                AssistantError::RateLimitExceeded
            } else {
                AssistantError::ApiError(err_str)
            }
        })?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AssistantError::ApiError("No response from API".to_string()))?;

        if let Some(usage) = &response.usage {
            tracing::debug!("Assistant used {} tokens ({})", usage.total_tokens, response.model);
        }
        Ok(content)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::fixtures;

    #[test]
    fn request_carries_system_and_user_messages() {
        let project = fixtures::projects().remove(1);
        let messages = OpenAiProvider::messages("Which cement grade?", Some(&project)).unwrap();
        assert_eq!(messages.len(), 2);
        assert!(matches!(messages[0], ChatCompletionRequestMessage::System(_)));
        assert!(matches!(messages[1], ChatCompletionRequestMessage::User(_)));
    }
}
