//! Data Transfer Objects - request/response types for the API.
//!
//! Post records themselves go over the wire as the domain `ContentPost`;
//! these types cover everything around them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cadence_core::calendar::DayCell;
use cadence_core::domain::{
    ContentPost, ContentType, LeadMagnetPrompt, PostPrompt, PostStatus, SourceData,
};
use cadence_core::ports::TopicIdea;

/// A schedule expressed the way the pickers produce it: a calendar date and
/// an `HH:MM` wall-clock time, combined server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulePayload {
    pub date: NaiveDate,
    pub time: String,
}

/// Request to create a post (save, or save-and-schedule).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: String,
    pub content_type: ContentType,
    pub status: Option<PostStatus>,
    pub source_data: SourceData,
    pub original_content: Option<String>,
    pub schedule: Option<SchedulePayload>,
    pub platform: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Request to update a post from the detail editor. Omitted fields keep
/// their stored values; providing a schedule date or time promotes the post
/// to scheduled, and a status other than scheduled clears the schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<PostStatus>,
    pub platform: Option<String>,
    pub tags: Option<Vec<String>>,
    pub schedule_date: Option<NaiveDate>,
    /// `HH:MM`.
    pub schedule_time: Option<String>,
}

/// Request to duplicate a post into a fresh draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DuplicatePostRequest {
    /// Title for the copy; defaults to "<title> (Copy)".
    pub title: Option<String>,
}

/// Request to record a revision of a post's content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppendEditRequest {
    /// What was asked to change, in the user's words.
    pub changes: String,
    /// The full new content.
    pub content: String,
}

/// Request to refine previously generated post text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinePostRequest {
    pub prompt: PostPrompt,
    pub generated_content: String,
    pub change_request: String,
}

/// Request to refine a previously generated lead magnet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefineLeadMagnetRequest {
    pub prompt: LeadMagnetPrompt,
    pub original_post: String,
    pub change_request: String,
}

/// Request for topic ideas within a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestTopicsRequest {
    pub category: String,
    pub description: String,
}

/// Generated text plus a title derived from its first line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPostResponse {
    pub content: String,
    pub suggested_title: String,
}

/// Topic ideas returned by the suggestion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicIdeasResponse {
    pub ideas: Vec<TopicIdea>,
}

/// The dashboard's headline numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_posts: usize,
    /// Posts scheduled within the next seven days.
    pub scheduled_this_week: usize,
    /// The three most recently created posts.
    pub recent: Vec<ContentPost>,
}

/// One month of the calendar view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarMonthResponse {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<DayCell>,
}

/// The timeline view: posts in schedule order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineResponse {
    pub posts: Vec<ContentPost>,
}
