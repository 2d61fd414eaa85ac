//! In-memory post repository - used as fallback when Postgres is unavailable.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use cadence_core::domain::{ContentPost, ContentType, PostPatch, PostStatus};
use cadence_core::error::RepoError;
use cadence_core::ports::{PostRepository, ScheduledRange};

/// In-memory post store using a HashMap with async RwLock.
///
/// This is the fallback implementation when Postgres is not available.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, ContentPost>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// All rows, newest first. Id breaks ties so equal timestamps still
    /// order deterministically.
    async fn snapshot_newest_first(&self) -> Vec<ContentPost> {
        let store = self.store.read().await;
        let mut rows: Vec<ContentPost> = store.values().cloned().collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        rows
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: ContentPost) -> Result<ContentPost, RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&post.id) {
            return Err(RepoError::Constraint("Record already exists".to_string()));
        }
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContentPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<ContentPost>, RepoError> {
        Ok(self.snapshot_newest_first().await)
    }

    async fn list_by_status(&self, status: PostStatus) -> Result<Vec<ContentPost>, RepoError> {
        let mut rows = self.snapshot_newest_first().await;
        rows.retain(|p| p.status == status);
        Ok(rows)
    }

    async fn list_by_type(&self, content_type: ContentType) -> Result<Vec<ContentPost>, RepoError> {
        let mut rows = self.snapshot_newest_first().await;
        rows.retain(|p| p.content_type == content_type);
        Ok(rows)
    }

    async fn search(&self, query: &str) -> Result<Vec<ContentPost>, RepoError> {
        let needle = query.trim().to_lowercase();
        let mut rows = self.snapshot_newest_first().await;
        rows.retain(|p| {
            p.title
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&needle)
                || p.content.to_lowercase().contains(&needle)
        });
        Ok(rows)
    }

    async fn list_scheduled(&self, range: ScheduledRange) -> Result<Vec<ContentPost>, RepoError> {
        let store = self.store.read().await;
        let mut rows: Vec<ContentPost> = store
            .values()
            .filter(|p| p.status == PostStatus::Scheduled)
            .filter(|p| p.scheduled_date.is_some_and(|at| range.contains(at)))
            .cloned()
            .collect();
        drop(store);
        rows.sort_by(|a, b| {
            a.scheduled_date
                .cmp(&b.scheduled_date)
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(rows)
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<ContentPost, RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or(RepoError::NotFound)?;
        patch.apply_to(post, chrono::Utc::now());
        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}
