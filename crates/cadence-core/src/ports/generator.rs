use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{LeadMagnetPrompt, PostPrompt};
use crate::error::GeneratorError;

/// One topic idea returned by the suggestion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicIdea {
    pub title: String,
    pub topic: String,
    pub tone: String,
}

/// The external AI endpoints that turn structured prompts into post text.
///
/// Calls are one-shot: no retry, no timeout layer, and nothing is persisted
/// by the generator itself.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate a social post from the prompt.
    async fn generate_post(&self, prompt: &PostPrompt) -> Result<String, GeneratorError>;

    /// Rework previously generated text according to `change_request`.
    async fn regenerate_post(
        &self,
        prompt: &PostPrompt,
        previous: &str,
        change_request: &str,
    ) -> Result<String, GeneratorError>;

    /// Generate a lead magnet post from the prompt.
    async fn generate_lead_magnet(&self, prompt: &LeadMagnetPrompt)
    -> Result<String, GeneratorError>;

    /// Refine a previously generated lead magnet post.
    async fn refine_lead_magnet(
        &self,
        prompt: &LeadMagnetPrompt,
        previous: &str,
        change_request: &str,
    ) -> Result<String, GeneratorError>;

    /// Ask for topic ideas within a category.
    async fn suggest_topics(
        &self,
        category: &str,
        description: &str,
    ) -> Result<Vec<TopicIdea>, GeneratorError>;
}
