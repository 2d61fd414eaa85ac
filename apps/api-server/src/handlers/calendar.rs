//! Calendar handlers: the month grid and the chronological timeline.

use actix_web::{HttpResponse, web};
use chrono::{Duration, Months, NaiveDate, NaiveTime, Utc};

use cadence_core::calendar;
use cadence_core::ports::ScheduledRange;
use cadence_shared::dto::{CalendarMonthResponse, TimelineResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// The inclusive range covering the month that starts at `first`.
fn month_range(first: NaiveDate) -> ScheduledRange {
    let start = first.and_time(NaiveTime::MIN).and_utc();
    let end = first
        .checked_add_months(Months::new(1))
        .map(|next| next.and_time(NaiveTime::MIN).and_utc() - Duration::seconds(1));
    ScheduledRange {
        start: Some(start),
        end,
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, AppError> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid calendar month: {}-{}", year, month)))
}

/// GET /api/calendar/{year}/{month}
///
/// The month grid: whole weeks from Sunday, each cell carrying the posts
/// scheduled on that day.
pub async fn month_view(
    state: web::Data<AppState>,
    path: web::Path<(i32, u32)>,
) -> AppResult<HttpResponse> {
    let (year, month) = path.into_inner();
    let first = first_of_month(year, month)?;

    let posts = state.posts.list_scheduled(month_range(first)).await?;
    let cells = calendar::month_grid(first, Utc::now().date_naive(), &posts);

    Ok(HttpResponse::Ok().json(CalendarMonthResponse { year, month, cells }))
}

/// GET /api/calendar/{year}/{month}/timeline
///
/// The month's scheduled posts in chronological order.
pub async fn timeline_view(
    state: web::Data<AppState>,
    path: web::Path<(i32, u32)>,
) -> AppResult<HttpResponse> {
    let (year, month) = path.into_inner();
    let first = first_of_month(year, month)?;

    let posts = state.posts.list_scheduled(month_range(first)).await?;

    Ok(HttpResponse::Ok().json(TimelineResponse {
        posts: calendar::timeline(&posts),
    }))
}
