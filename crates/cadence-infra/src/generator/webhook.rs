//! HTTP client for the content generation webhooks.
//!
//! Each operation posts a JSON payload to its configured endpoint and reads
//! a JSON body back. Calls are one-shot: no retry layer, and nothing is
//! persisted here.

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;

use cadence_core::domain::{LeadMagnetPrompt, PostPrompt, TopicType};
use cadence_core::error::GeneratorError;
use cadence_core::ports::{ContentGenerator, TopicIdea};

/// Webhook endpoint URLs, one per operation family.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub post_url: String,
    pub lead_magnet_url: String,
    pub idea_url: String,
}

#[derive(Debug, Error)]
pub enum GeneratorConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

impl GeneratorConfig {
    /// Build a config, requiring every endpoint. The error names the
    /// environment variable so startup failures point at the right setting.
    pub fn new(
        post_url: String,
        lead_magnet_url: String,
        idea_url: String,
    ) -> Result<Self, GeneratorConfigError> {
        if post_url.trim().is_empty() {
            return Err(GeneratorConfigError::Missing("POST_GENERATOR_URL"));
        }
        if lead_magnet_url.trim().is_empty() {
            return Err(GeneratorConfigError::Missing("LEAD_MAGNET_GENERATOR_URL"));
        }
        if idea_url.trim().is_empty() {
            return Err(GeneratorConfigError::Missing("IDEA_SUGGESTION_URL"));
        }
        Ok(Self {
            post_url,
            lead_magnet_url,
            idea_url,
        })
    }

    /// Read the endpoints from the environment. Fails at startup when any
    /// is missing rather than deferring the error to the first call.
    pub fn from_env() -> Result<Self, GeneratorConfigError> {
        Self::new(
            std::env::var("POST_GENERATOR_URL").unwrap_or_default(),
            std::env::var("LEAD_MAGNET_GENERATOR_URL").unwrap_or_default(),
            std::env::var("IDEA_SUGGESTION_URL").unwrap_or_default(),
        )
    }
}

/// Content generator backed by external webhook endpoints.
pub struct WebhookGenerator {
    client: reqwest::Client,
    config: GeneratorConfig,
}

impl WebhookGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        url: &str,
        payload: &Value,
    ) -> Result<T, GeneratorError> {
        tracing::debug!(url = %url, "Calling generation webhook");

        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| GeneratorError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeneratorError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GeneratorError::Decode(e.to_string()))
    }
}

/// The webhooks take ask-AI topics as plain text.
fn wire_topic_type(topic_type: TopicType) -> &'static str {
    match topic_type {
        TopicType::Url => "url",
        TopicType::Text | TopicType::AskAi => "text",
    }
}

fn post_request_fields(prompt: &PostPrompt) -> Value {
    json!({
        "category": prompt.category,
        "topic": prompt.topic,
        "topicType": wire_topic_type(prompt.topic_type),
        "tone": prompt.tone,
    })
}

fn generate_post_payload(prompt: &PostPrompt) -> Value {
    let mut payload = post_request_fields(prompt);
    payload["action"] = json!("generate");
    payload
}

fn regenerate_post_payload(prompt: &PostPrompt, previous: &str, change_request: &str) -> Value {
    json!({
        "action": "regenerate",
        "originalRequest": post_request_fields(prompt),
        "generatedContent": previous,
        "changeRequest": change_request,
    })
}

fn lead_magnet_payload(prompt: &LeadMagnetPrompt) -> Value {
    json!({
        "action": "generate_leadmagnet",
        "resourceType": prompt.resource_type,
        "resourceOutline": prompt.resource_outline,
        "engagementOptions": prompt.engagement_options,
    })
}

fn refine_lead_magnet_payload(
    prompt: &LeadMagnetPrompt,
    previous: &str,
    change_request: &str,
) -> Value {
    let mut payload = lead_magnet_payload(prompt);
    payload["action"] = json!("refine_leadmagnet");
    payload["originalPost"] = json!(previous);
    payload["changeRequest"] = json!(change_request);
    payload
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    content: String,
}

/// The idea endpoint may omit the list entirely; that reads as no ideas.
#[derive(Debug, Deserialize)]
struct IdeaList {
    #[serde(default)]
    ideas: Vec<TopicIdea>,
}

#[async_trait]
impl ContentGenerator for WebhookGenerator {
    async fn generate_post(&self, prompt: &PostPrompt) -> Result<String, GeneratorError> {
        let payload = generate_post_payload(prompt);
        let body: GeneratedText = self.call(&self.config.post_url, &payload).await?;
        Ok(body.content)
    }

    async fn regenerate_post(
        &self,
        prompt: &PostPrompt,
        previous: &str,
        change_request: &str,
    ) -> Result<String, GeneratorError> {
        let payload = regenerate_post_payload(prompt, previous, change_request);
        let body: GeneratedText = self.call(&self.config.post_url, &payload).await?;
        Ok(body.content)
    }

    async fn generate_lead_magnet(
        &self,
        prompt: &LeadMagnetPrompt,
    ) -> Result<String, GeneratorError> {
        let payload = lead_magnet_payload(prompt);
        let body: GeneratedText = self.call(&self.config.lead_magnet_url, &payload).await?;
        Ok(body.content)
    }

    async fn refine_lead_magnet(
        &self,
        prompt: &LeadMagnetPrompt,
        previous: &str,
        change_request: &str,
    ) -> Result<String, GeneratorError> {
        let payload = refine_lead_magnet_payload(prompt, previous, change_request);
        let body: GeneratedText = self.call(&self.config.lead_magnet_url, &payload).await?;
        Ok(body.content)
    }

    async fn suggest_topics(
        &self,
        category: &str,
        description: &str,
    ) -> Result<Vec<TopicIdea>, GeneratorError> {
        let payload = json!({
            "action": "suggest_topics",
            "category": category,
            "description": description,
        });
        let body: IdeaList = self.call(&self.config.idea_url, &payload).await?;
        Ok(body.ideas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::domain::EngagementOptions;

    fn prompt() -> PostPrompt {
        PostPrompt {
            category: "Storytelling".to_owned(),
            topic: "Why we ship weekly".to_owned(),
            topic_type: TopicType::AskAi,
            tone: "Casual".to_owned(),
        }
    }

    fn magnet() -> LeadMagnetPrompt {
        LeadMagnetPrompt {
            resource_type: "Info Document".to_owned(),
            resource_outline: "Ten-step onboarding checklist".to_owned(),
            engagement_options: EngagementOptions {
                connect: true,
                like: false,
                repost: false,
                comment: true,
                comment_keyword: Some("GUIDE".to_owned()),
            },
        }
    }

    #[test]
    fn test_generate_payload_shape() {
        let payload = generate_post_payload(&prompt());
        assert_eq!(payload["action"], "generate");
        assert_eq!(payload["category"], "Storytelling");
        // Ask-AI topics go over the wire as plain text.
        assert_eq!(payload["topicType"], "text");
    }

    #[test]
    fn test_regenerate_payload_nests_original_request() {
        let payload = regenerate_post_payload(&prompt(), "old text", "make it shorter");
        assert_eq!(payload["action"], "regenerate");
        assert_eq!(payload["originalRequest"]["tone"], "Casual");
        assert_eq!(payload["generatedContent"], "old text");
        assert_eq!(payload["changeRequest"], "make it shorter");
    }

    #[test]
    fn test_lead_magnet_payload_shape() {
        let payload = lead_magnet_payload(&magnet());
        assert_eq!(payload["action"], "generate_leadmagnet");
        assert_eq!(payload["resourceType"], "Info Document");
        assert_eq!(payload["engagementOptions"]["connect"], true);
        assert_eq!(payload["engagementOptions"]["commentKeyword"], "GUIDE");
    }

    #[test]
    fn test_lead_magnet_payload_omits_unset_keyword() {
        let mut magnet = magnet();
        magnet.engagement_options.comment = false;
        magnet.engagement_options.comment_keyword = None;

        let payload = lead_magnet_payload(&magnet);
        assert!(payload["engagementOptions"].get("commentKeyword").is_none());
    }

    #[test]
    fn test_refine_payload_carries_previous_text() {
        let payload = refine_lead_magnet_payload(&magnet(), "v1 text", "add a hook");
        assert_eq!(payload["action"], "refine_leadmagnet");
        assert_eq!(payload["originalPost"], "v1 text");
        assert_eq!(payload["changeRequest"], "add a hook");
        assert_eq!(payload["resourceType"], "Info Document");
    }

    #[test]
    fn test_idea_list_defaults_to_empty() {
        let body: IdeaList = serde_json::from_str("{}").unwrap();
        assert!(body.ideas.is_empty());

        let body: IdeaList =
            serde_json::from_str(r#"{"ideas":[{"title":"T","topic":"t","tone":"Casual"}]}"#)
                .unwrap();
        assert_eq!(body.ideas.len(), 1);
    }

    #[test]
    fn test_config_names_missing_endpoint() {
        let err = GeneratorConfig::new(String::new(), "b".into(), "c".into()).unwrap_err();
        assert_eq!(err.to_string(), "POST_GENERATOR_URL is not set");

        let err = GeneratorConfig::new("a".into(), "  ".into(), "c".into()).unwrap_err();
        assert_eq!(err.to_string(), "LEAD_MAGNET_GENERATOR_URL is not set");

        assert!(GeneratorConfig::new("a".into(), "b".into(), "c".into()).is_ok());
    }
}
