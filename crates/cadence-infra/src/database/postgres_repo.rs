//! PostgreSQL implementation of the post record store.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, Unchanged,
};
use uuid::Uuid;

use cadence_core::domain::{ContentPost, ContentType, PostPatch, PostStatus, normalize_tags};
use cadence_core::error::RepoError;
use cadence_core::ports::{PostRepository, ScheduledRange};

use super::entity::content_post::{self, Entity as ContentPosts};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn query_err(e: DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

fn write_err(e: DbErr) -> RepoError {
    let err_str = e.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint("Record already exists".to_string())
    } else {
        RepoError::Query(err_str)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: ContentPost) -> Result<ContentPost, RepoError> {
        let model = content_post::ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(write_err)?;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContentPost>, RepoError> {
        let result = ContentPosts::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<ContentPost>, RepoError> {
        let rows = ContentPosts::find()
            .order_by_desc(content_post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_status(&self, status: PostStatus) -> Result<Vec<ContentPost>, RepoError> {
        let rows = ContentPosts::find()
            .filter(content_post::Column::Status.eq(content_post::Status::from(status)))
            .order_by_desc(content_post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_type(&self, content_type: ContentType) -> Result<Vec<ContentPost>, RepoError> {
        let rows = ContentPosts::find()
            .filter(content_post::Column::ContentType.eq(content_post::Kind::from(content_type)))
            .order_by_desc(content_post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<ContentPost>, RepoError> {
        tracing::debug!(query = %query.trim(), "Searching posts");

        let pattern = format!("%{}%", query.trim());
        let rows = ContentPosts::find()
            .filter(
                Condition::any()
                    .add(Expr::col(content_post::Column::Title).ilike(pattern.clone()))
                    .add(Expr::col(content_post::Column::Content).ilike(pattern)),
            )
            .order_by_desc(content_post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_scheduled(&self, range: ScheduledRange) -> Result<Vec<ContentPost>, RepoError> {
        let mut query = ContentPosts::find()
            .filter(content_post::Column::Status.eq(content_post::Status::Scheduled))
            .filter(content_post::Column::ScheduledDate.is_not_null());

        if let Some(start) = range.start {
            query = query.filter(content_post::Column::ScheduledDate.gte(start));
        }
        if let Some(end) = range.end {
            query = query.filter(content_post::Column::ScheduledDate.lte(end));
        }

        let rows = query
            .order_by_asc(content_post::Column::ScheduledDate)
            .order_by_asc(content_post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<ContentPost, RepoError> {
        let mut model = content_post::ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(title) = patch.title {
            model.title = Set(Some(title));
        }
        if let Some(content) = patch.content {
            model.content = Set(content);
        }
        if let Some(status) = patch.status {
            model.status = Set(status.into());
        }
        if let Some(source_data) = patch.source_data {
            model.source_data = Set(content_post::SourceDataJson(source_data));
        }
        if let Some(original) = patch.original_content {
            model.original_content = Set(Some(original));
        }
        if let Some(scheduled) = patch.scheduled_date {
            model.scheduled_date = Set(scheduled.map(Into::into));
        }
        if let Some(platform) = patch.platform {
            model.platform = Set(Some(platform));
        }
        if let Some(tags) = patch.tags {
            model.tags = Set(Some(normalize_tags(tags)));
        }
        if let Some(history) = patch.edit_history {
            model.edit_history = Set(content_post::EditHistoryJson(history));
        }
        model.updated_at = Set(chrono::Utc::now().into());

        let updated = model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepoError::NotFound,
            other => write_err(other),
        })?;

        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = ContentPosts::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
