//! The post service - the sole mediator between callers and the record
//! store. Fills defaults on the way in and enforces lifecycle invariants
//! before anything is persisted.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{ContentPost, ContentType, EditHistoryEntry, NewPost, PostPatch, PostStatus};
use crate::error::{DomainError, RepoError, ValidationError};
use crate::ports::{PostRepository, ScheduledRange};
use crate::schedule;

/// Maps a store-level missing row to the domain's not-found for `id`.
fn row_missing(id: Uuid) -> impl Fn(RepoError) -> DomainError {
    move |err| match err {
        RepoError::NotFound => DomainError::NotFound(id),
        other => DomainError::Persistence(other),
    }
}

#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Create a post. Status defaults to draft, the edit history starts
    /// empty, tags are de-duplicated, and a scheduled post must carry a
    /// schedule strictly in the future.
    pub async fn create(&self, mut new_post: NewPost) -> Result<ContentPost, DomainError> {
        if new_post.content.trim().is_empty() {
            return Err(ValidationError::EmptyContent.into());
        }
        if !new_post.source_data.matches(new_post.content_type) {
            return Err(ValidationError::SourceDataMismatch.into());
        }
        let source_data = new_post.source_data.normalized()?;
        new_post.source_data = source_data;

        if new_post.status.unwrap_or_default() == PostStatus::Scheduled {
            let at = new_post
                .scheduled_date
                .ok_or(ValidationError::MissingSchedule)?;
            schedule::ensure_future(at, Utc::now())?;
        }

        let post = ContentPost::new(new_post);
        Ok(self.repo.insert(post).await?)
    }

    /// `Ok(None)` when the id is unknown.
    pub async fn get(&self, id: Uuid) -> Result<Option<ContentPost>, DomainError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<ContentPost>, DomainError> {
        Ok(self.repo.list().await?)
    }

    pub async fn list_by_status(
        &self,
        status: PostStatus,
    ) -> Result<Vec<ContentPost>, DomainError> {
        Ok(self.repo.list_by_status(status).await?)
    }

    pub async fn list_by_type(
        &self,
        content_type: ContentType,
    ) -> Result<Vec<ContentPost>, DomainError> {
        Ok(self.repo.list_by_type(content_type).await?)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<ContentPost>, DomainError> {
        Ok(self.repo.search(query).await?)
    }

    pub async fn list_scheduled(
        &self,
        range: ScheduledRange,
    ) -> Result<Vec<ContentPost>, DomainError> {
        Ok(self.repo.list_scheduled(range).await?)
    }

    /// Apply a partial update. The resulting record must still satisfy the
    /// lifecycle invariants: patched content non-empty, a scheduled result
    /// carries a schedule, and a schedule being set *by this patch* lies in
    /// the future. An existing schedule left untouched is not re-validated.
    pub async fn update(&self, id: Uuid, mut patch: PostPatch) -> Result<ContentPost, DomainError> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound(id))?;

        if let Some(content) = &patch.content {
            if content.trim().is_empty() {
                return Err(ValidationError::EmptyContent.into());
            }
        }
        if let Some(source_data) = patch.source_data {
            let source_data = source_data.normalized()?;
            if !source_data.matches(current.content_type) {
                return Err(ValidationError::SourceDataMismatch.into());
            }
            patch.source_data = Some(source_data);
        }

        let status = patch.status.unwrap_or(current.status);
        if status == PostStatus::Scheduled {
            let effective = match patch.scheduled_date {
                Some(inner) => inner,
                None => current.scheduled_date,
            };
            let at = effective.ok_or(ValidationError::MissingSchedule)?;
            if matches!(patch.scheduled_date, Some(Some(_))) {
                schedule::ensure_future(at, Utc::now())?;
            }
        }

        self.repo.update(id, patch).await.map_err(row_missing(id))
    }

    /// Hard delete. Deleting an unknown id is reported, not ignored.
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo.delete(id).await.map_err(row_missing(id))
    }

    /// Copy a post into a fresh draft: content, type, source data, original
    /// content, platform and tags carry over verbatim; status is forced to
    /// draft and the schedule does not carry. The title defaults to
    /// "<title> (Copy)".
    pub async fn duplicate(
        &self,
        id: Uuid,
        new_title: Option<String>,
    ) -> Result<ContentPost, DomainError> {
        let source = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound(id))?;

        let title = new_title.filter(|t| !t.trim().is_empty()).unwrap_or_else(|| {
            format!("{} (Copy)", source.title.as_deref().unwrap_or("Untitled"))
        });

        self.create(NewPost {
            title: Some(title),
            content: source.content,
            content_type: source.content_type,
            status: Some(PostStatus::Draft),
            source_data: source.source_data,
            original_content: source.original_content,
            scheduled_date: None,
            platform: source.platform,
            tags: Some(source.tags),
        })
        .await
    }

    /// Record a revision: append `{now, changes, content}` to the post's
    /// history and persist the new content in the same update.
    pub async fn append_edit_history(
        &self,
        id: Uuid,
        changes: String,
        new_content: String,
    ) -> Result<ContentPost, DomainError> {
        if new_content.trim().is_empty() {
            return Err(ValidationError::EmptyContent.into());
        }
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound(id))?;

        let mut history = current.edit_history;
        history.push(EditHistoryEntry {
            timestamp: Utc::now(),
            changes,
            content: new_content.clone(),
        });

        let patch = PostPatch {
            content: Some(new_content),
            edit_history: Some(history),
            ..Default::default()
        };
        self.repo.update(id, patch).await.map_err(row_missing(id))
    }
}
