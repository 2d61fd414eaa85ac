use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{ContentPost, ContentType, PostPatch, PostStatus};
use crate::error::RepoError;

/// Inclusive bounds for scheduled-post queries. `None` on either side means
/// unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScheduledRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl ScheduledRange {
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start.is_none_or(|s| instant >= s) && self.end.is_none_or(|e| instant <= e)
    }
}

/// The post record store. Implementations return rows in the order each
/// method documents.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a fully-assembled record and return the stored row.
    async fn insert(&self, post: ContentPost) -> Result<ContentPost, RepoError>;

    /// `Ok(None)` when no row matches; errors are reserved for store faults.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContentPost>, RepoError>;

    /// Every post, newest `created_at` first.
    async fn list(&self) -> Result<Vec<ContentPost>, RepoError>;

    async fn list_by_status(&self, status: PostStatus) -> Result<Vec<ContentPost>, RepoError>;

    async fn list_by_type(&self, content_type: ContentType) -> Result<Vec<ContentPost>, RepoError>;

    /// Case-insensitive substring match over title and content, newest
    /// `created_at` first.
    async fn search(&self, query: &str) -> Result<Vec<ContentPost>, RepoError>;

    /// Scheduled posts whose schedule falls inside `range`, ascending by
    /// `scheduled_date` then `created_at`.
    async fn list_scheduled(&self, range: ScheduledRange) -> Result<Vec<ContentPost>, RepoError>;

    /// Apply `patch` and refresh `updated_at`. `RepoError::NotFound` when no
    /// row matches.
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<ContentPost, RepoError>;

    /// Hard delete. `RepoError::NotFound` when no row matches.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}
