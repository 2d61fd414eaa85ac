//! The content post entity and its building blocks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::source::SourceData;

/// Lifecycle state of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    #[default]
    Draft,
    Scheduled,
    Published,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Scheduled => "scheduled",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of content a post holds. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    CreatePost,
    LeadMagnet,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::CreatePost => "create_post",
            ContentType::LeadMagnet => "lead_magnet",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in a post's append-only revision trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditHistoryEntry {
    pub timestamp: DateTime<Utc>,
    /// What the user asked to change, in their own words.
    pub changes: String,
    /// The full post content after the change.
    pub content: String,
}

/// A unit of content tracked by the dashboard: a social post or a lead
/// magnet, carrying the parameters it was generated from, its revision
/// trail, and an optional publication schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPost {
    pub id: Uuid,
    pub title: Option<String>,
    pub content: String,
    pub content_type: ContentType,
    pub status: PostStatus,
    pub source_data: SourceData,
    /// Snapshot of the first generated text, before any edits.
    pub original_content: Option<String>,
    pub edit_history: Vec<EditHistoryEntry>,
    /// Required (and strictly future when set) while `status` is scheduled.
    pub scheduled_date: Option<DateTime<Utc>>,
    pub platform: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentPost {
    /// Assemble a new post from validated creation fields: fresh id, both
    /// timestamps set to now, empty edit history, tags de-duplicated.
    pub fn new(new_post: NewPost) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: new_post.title.filter(|t| !t.trim().is_empty()),
            content: new_post.content,
            content_type: new_post.content_type,
            status: new_post.status.unwrap_or_default(),
            source_data: new_post.source_data,
            original_content: new_post.original_content,
            edit_history: Vec::new(),
            scheduled_date: new_post.scheduled_date,
            platform: new_post.platform,
            tags: normalize_tags(new_post.tags.unwrap_or_default()),
            created_at: now,
            updated_at: now,
        }
    }

    /// The name shown in lists: the title if set, otherwise a line derived
    /// from the content, otherwise "Untitled".
    pub fn display_title(&self) -> String {
        if let Some(title) = &self.title {
            if !title.trim().is_empty() {
                return title.clone();
            }
        }
        let derived = derive_title(&self.content);
        if derived.is_empty() {
            "Untitled".to_owned()
        } else {
            derived
        }
    }
}

/// Fields accepted when creating a post. The store assigns `id` and both
/// timestamps; `status` defaults to draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: String,
    pub content_type: ContentType,
    pub status: Option<PostStatus>,
    pub source_data: SourceData,
    pub original_content: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub platform: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// A partial update. `None` fields are left untouched; `id`, `created_at`
/// and `content_type` are immutable and have no field here at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<PostStatus>,
    pub source_data: Option<SourceData>,
    pub original_content: Option<String>,
    /// Tri-state: `Some(None)` clears the schedule, `Some(Some(_))` replaces it.
    pub scheduled_date: Option<Option<DateTime<Utc>>>,
    pub platform: Option<String>,
    pub tags: Option<Vec<String>>,
    pub edit_history: Option<Vec<EditHistoryEntry>>,
}

impl PostPatch {
    /// Apply the patch to an in-memory post, refreshing `updated_at`.
    pub fn apply_to(&self, post: &mut ContentPost, now: DateTime<Utc>) {
        if let Some(title) = &self.title {
            post.title = Some(title.clone());
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
        if let Some(status) = self.status {
            post.status = status;
        }
        if let Some(source_data) = &self.source_data {
            post.source_data = source_data.clone();
        }
        if let Some(original) = &self.original_content {
            post.original_content = Some(original.clone());
        }
        if let Some(scheduled) = self.scheduled_date {
            post.scheduled_date = scheduled;
        }
        if let Some(platform) = &self.platform {
            post.platform = Some(platform.clone());
        }
        if let Some(tags) = &self.tags {
            post.tags = normalize_tags(tags.clone());
        }
        if let Some(history) = &self.edit_history {
            post.edit_history = history.clone();
        }
        post.updated_at = now;
    }
}

/// Trim tags, drop empties, and de-duplicate (exact match) while keeping
/// first-seen order.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_owned());
        }
    }
    out
}

/// Derive a display title from post content: the first sentence, or the
/// first 60 characters followed by "..." when that sentence runs long.
/// Newlines and whitespace runs collapse to single spaces.
pub fn derive_title(content: &str) -> String {
    let first_sentence = content.split(['.', '!', '?']).next().unwrap_or("");
    let raw = if first_sentence.chars().count() > 60 {
        let head: String = content.chars().take(60).collect();
        format!("{head}...")
    } else {
        first_sentence.to_owned()
    };
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
