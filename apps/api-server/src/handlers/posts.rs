//! Post CRUD handlers and the list projections built on the store.

use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use cadence_core::domain::{NewPost, PostStatus};
use cadence_core::editor::{EditorDraft, EditorEvent};
use cadence_core::filter::PostFilter;
use cadence_core::ports::ScheduledRange;
use cadence_core::schedule;
use cadence_shared::dto::{
    AppendEditRequest, CreatePostRequest, DuplicatePostRequest, UpdatePostRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn post_missing(id: Uuid) -> AppError {
    AppError::NotFound(format!("Post {} not found", id))
}

/// POST /api/posts
///
/// Create a post. An optional `schedule: {date, time}` pair is combined
/// server-side; providing one without an explicit status schedules the post.
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let scheduled_date = match &req.schedule {
        Some(schedule) => {
            let time = schedule::parse_time_of_day(&schedule.time)?;
            Some(schedule::combine(schedule.date, time))
        }
        None => None,
    };
    let status = match (req.status, &scheduled_date) {
        (None, Some(_)) => Some(PostStatus::Scheduled),
        (status, _) => status,
    };

    let post = state
        .posts
        .create(NewPost {
            title: req.title,
            content: req.content,
            content_type: req.content_type,
            status,
            source_data: req.source_data,
            original_content: req.original_content,
            scheduled_date,
            platform: req.platform,
            tags: req.tags,
        })
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// GET /api/posts
///
/// The library view: every post newest-first, narrowed by the optional
/// `search`, `status` and `content_type` query criteria.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostFilter>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(query.apply(&posts)))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /api/posts/search?q=
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.search(&query.q).await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[derive(Debug, Deserialize)]
pub struct ScheduledQuery {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// GET /api/posts/scheduled?from&to
///
/// Scheduled posts inside the inclusive range, ascending by schedule.
pub async fn list_scheduled(
    state: web::Data<AppState>,
    query: web::Query<ScheduledQuery>,
) -> AppResult<HttpResponse> {
    let range = ScheduledRange {
        start: query.from,
        end: query.to,
    };
    let posts = state.posts.list_scheduled(range).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.posts.get(id).await?.ok_or_else(|| post_missing(id))?;
    Ok(HttpResponse::Ok().json(post))
}

/// PATCH /api/posts/{id}
///
/// The detail editor's save. Provided fields fold into editor events over
/// the stored post, so a date or time promotes the post to scheduled and a
/// status away from scheduled clears the schedule. The folded result must
/// pass the editor's save validation (non-empty title and content,
/// coherent future schedule).
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let current = state.posts.get(id).await?.ok_or_else(|| post_missing(id))?;

    let mut draft = EditorDraft::from_post(&current);
    if let Some(title) = req.title {
        draft = draft.apply(EditorEvent::SetTitle(title));
    }
    if let Some(content) = req.content {
        draft = draft.apply(EditorEvent::SetContent(content));
    }
    if let Some(status) = req.status {
        draft = draft.apply(EditorEvent::SetStatus(status));
    }
    if let Some(date) = req.schedule_date {
        draft = draft.apply(EditorEvent::PickDate(date));
    }
    if let Some(time) = &req.schedule_time {
        let time = schedule::parse_time_of_day(time)?;
        draft = draft.apply(EditorEvent::PickTime(time));
    }
    if let Some(platform) = req.platform {
        draft = draft.apply(EditorEvent::SetPlatform(Some(platform)));
    }
    if let Some(tags) = req.tags {
        // Wholesale replacement rather than add/remove events.
        draft.tags = tags;
    }

    let patch = draft.into_patch(Utc::now())?;
    let updated = state.posts.update(id, patch).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/posts/{id}/duplicate
pub async fn duplicate_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<DuplicatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let copy = state.posts.duplicate(id, body.into_inner().title).await?;
    Ok(HttpResponse::Created().json(copy))
}

/// POST /api/posts/{id}/edits
pub async fn append_edit(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<AppendEditRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    let updated = state
        .posts
        .append_edit_history(id, req.changes, req.content)
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}
