//! Generation parameters captured alongside each post.
//!
//! Every post records what it was generated from. The payload is typed per
//! content type and validated once at the boundary; after that it travels
//! with the post as an opaque value.

use serde::{Deserialize, Serialize};
use url::Url;

use super::post::ContentType;
use crate::error::ValidationError;

/// Minimum length of a lead magnet resource outline.
pub const MIN_OUTLINE_CHARS: usize = 10;

/// How the topic field of a post prompt is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicType {
    Text,
    Url,
    AskAi,
}

/// Parameters for generating a social post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPrompt {
    pub category: String,
    pub topic: String,
    pub topic_type: TopicType,
    pub tone: String,
}

impl PostPrompt {
    /// Trim and require every field; a URL topic additionally gets a scheme
    /// prepended when missing and must parse.
    pub fn normalized(mut self) -> Result<Self, ValidationError> {
        self.category = self.category.trim().to_owned();
        if self.category.is_empty() {
            return Err(ValidationError::MissingField("category"));
        }
        self.tone = self.tone.trim().to_owned();
        if self.tone.is_empty() {
            return Err(ValidationError::MissingField("tone"));
        }
        self.topic = match self.topic_type {
            TopicType::Url => normalize_url(&self.topic)?,
            _ => {
                let topic = self.topic.trim().to_owned();
                if topic.is_empty() {
                    return Err(ValidationError::MissingField("topic"));
                }
                topic
            }
        };
        Ok(self)
    }
}

/// Audience actions a lead magnet asks for in exchange for the resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementOptions {
    pub connect: bool,
    pub like: bool,
    pub repost: bool,
    pub comment: bool,
    /// The word readers must comment. Only meaningful when `comment` is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_keyword: Option<String>,
}

/// Parameters for generating a lead magnet post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadMagnetPrompt {
    pub resource_type: String,
    pub resource_outline: String,
    pub engagement_options: EngagementOptions,
}

impl LeadMagnetPrompt {
    /// Require a resource type and a meaningful outline; the comment keyword
    /// is required when comment engagement is on and cleared when it is off.
    pub fn normalized(mut self) -> Result<Self, ValidationError> {
        self.resource_type = self.resource_type.trim().to_owned();
        if self.resource_type.is_empty() {
            return Err(ValidationError::MissingField("resource type"));
        }
        self.resource_outline = self.resource_outline.trim().to_owned();
        if self.resource_outline.chars().count() < MIN_OUTLINE_CHARS {
            return Err(ValidationError::OutlineTooShort {
                min: MIN_OUTLINE_CHARS,
            });
        }
        if self.engagement_options.comment {
            let keyword = self
                .engagement_options
                .comment_keyword
                .as_deref()
                .map(str::trim)
                .unwrap_or_default();
            if keyword.is_empty() {
                return Err(ValidationError::MissingCommentKeyword);
            }
            self.engagement_options.comment_keyword = Some(keyword.to_owned());
        } else {
            self.engagement_options.comment_keyword = None;
        }
        Ok(self)
    }
}

/// The generation parameters a post was produced from, one variant per
/// content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceData {
    CreatePost(PostPrompt),
    LeadMagnet(LeadMagnetPrompt),
}

impl SourceData {
    pub fn normalized(self) -> Result<Self, ValidationError> {
        match self {
            SourceData::CreatePost(prompt) => Ok(SourceData::CreatePost(prompt.normalized()?)),
            SourceData::LeadMagnet(prompt) => Ok(SourceData::LeadMagnet(prompt.normalized()?)),
        }
    }

    /// Whether this payload belongs to the given content type.
    pub fn matches(&self, content_type: ContentType) -> bool {
        matches!(
            (self, content_type),
            (SourceData::CreatePost(_), ContentType::CreatePost)
                | (SourceData::LeadMagnet(_), ContentType::LeadMagnet)
        )
    }
}

/// Strip all whitespace, prepend `https://` when no scheme is present, and
/// require the result to parse as a URL.
pub fn normalize_url(raw: &str) -> Result<String, ValidationError> {
    let stripped: String = raw.split_whitespace().collect();
    if stripped.is_empty() {
        return Err(ValidationError::MissingField("topic"));
    }
    let lower = stripped.to_ascii_lowercase();
    let with_scheme = if lower.starts_with("http://") || lower.starts_with("https://") {
        stripped
    } else {
        format!("https://{stripped}")
    };
    Url::parse(&with_scheme).map_err(|_| ValidationError::InvalidUrl(raw.trim().to_owned()))?;
    Ok(with_scheme)
}
