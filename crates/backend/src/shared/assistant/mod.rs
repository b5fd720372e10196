pub mod canned_provider;
pub mod openai_provider;

use async_trait::async_trait;
use contracts::domain::a001_project::aggregate::Project;
use thiserror::Error;

pub use canned_provider::CannedProvider;
pub use openai_provider::OpenAiProvider;

/// Assistant provider errors
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Produces the assistant's answer to one chat message
#[async_trait]
pub trait AssistantProvider: Send + Sync {
    async fn reply(&self, message: &str, project: Option<&Project>) -> Result<String, AssistantError>;

    fn provider_name(&self) -> &str;
}

/// System prompt with the selected project as context
pub fn system_prompt(project: Option<&Project>) -> String {
    let mut prompt = String::from(
        "You are the Smart Buy procurement assistant for construction projects in India. \
         Answer briefly and practically about materials, vendors, delivery schedules and costs. \
         Amounts are in INR.",
    );
    if let Some(p) = project {
        prompt.push_str(&format!(
            "\nCurrent project: {} ({}, {}), located in {}. Volume: {:.1} Cr. Status: {}.",
            p.name(),
            p.project_type,
            p.size,
            p.location(),
            p.volume_crores(),
            p.status.as_str()
        ));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::fixtures;

    #[test]
    fn prompt_mentions_the_project() {
        let project = fixtures::projects().remove(0);
        let prompt = system_prompt(Some(&project));
        assert!(prompt.contains(project.name()));
        assert!(prompt.contains("Mumbai"));
    }

    #[test]
    fn prompt_without_project_is_generic() {
        assert!(!system_prompt(None).contains("Current project"));
    }
}
