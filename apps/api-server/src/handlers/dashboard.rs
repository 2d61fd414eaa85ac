//! Dashboard summary handler.

use actix_web::{HttpResponse, web};
use chrono::{Duration, Utc};

use cadence_core::ports::ScheduledRange;
use cadence_shared::dto::DashboardSummary;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// How many of the newest posts the dashboard previews.
const RECENT_POSTS: usize = 3;

/// GET /api/dashboard/summary
///
/// Headline numbers for the dashboard: total posts, posts scheduled within
/// the next seven days, and the most recently created posts.
pub async fn summary(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let now = Utc::now();
    let week = ScheduledRange::between(now, now + Duration::days(7));

    let posts = state.posts.list().await?;
    let upcoming = state.posts.list_scheduled(week).await?;

    let recent = posts.iter().take(RECENT_POSTS).cloned().collect();

    Ok(HttpResponse::Ok().json(DashboardSummary {
        total_posts: posts.len(),
        scheduled_this_week: upcoming.len(),
        recent,
    }))
}
