//! Detail-editor state: a pure transition function over the fields a user
//! can change, and an optimistic-save session that rolls back cleanly.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::{ContentPost, PostPatch, PostStatus};
use crate::error::ValidationError;
use crate::schedule;

/// The editable view of a post while it is open in the detail editor.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorDraft {
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    pub platform: Option<String>,
    pub tags: Vec<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

/// One user interaction with the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    SetTitle(String),
    SetContent(String),
    SetStatus(PostStatus),
    PickDate(NaiveDate),
    PickTime(NaiveTime),
    SetPlatform(Option<String>),
    AddTag(String),
    RemoveTag(String),
}

impl EditorDraft {
    /// Open a post for editing. An existing schedule is split back into its
    /// date and time pickers.
    pub fn from_post(post: &ContentPost) -> Self {
        let (date, time) = match post.scheduled_date {
            Some(at) => (Some(at.date_naive()), Some(at.time())),
            None => (None, None),
        };
        Self {
            title: post.title.clone().unwrap_or_default(),
            content: post.content.clone(),
            status: post.status,
            platform: post.platform.clone(),
            tags: post.tags.clone(),
            date,
            time,
        }
    }

    /// Apply one editing event, returning the next draft state.
    ///
    /// Picking a date or time promotes the draft to scheduled; moving the
    /// status away from scheduled clears both pickers.
    pub fn apply(mut self, event: EditorEvent) -> Self {
        match event {
            EditorEvent::SetTitle(title) => self.title = title,
            EditorEvent::SetContent(content) => self.content = content,
            EditorEvent::SetStatus(status) => {
                self.status = status;
                if status != PostStatus::Scheduled {
                    self.date = None;
                    self.time = None;
                }
            }
            EditorEvent::PickDate(date) => {
                self.date = Some(date);
                self.status = PostStatus::Scheduled;
            }
            EditorEvent::PickTime(time) => {
                self.time = Some(time);
                self.status = PostStatus::Scheduled;
            }
            EditorEvent::SetPlatform(platform) => self.platform = platform,
            EditorEvent::AddTag(tag) => {
                let tag = tag.trim();
                if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
                    self.tags.push(tag.to_owned());
                }
            }
            EditorEvent::RemoveTag(tag) => self.tags.retain(|t| t != &tag),
        }
        self
    }

    /// Validate the draft and produce the patch to persist. The patch always
    /// sets `scheduled_date`: to the combined instant when scheduled, or to
    /// a clear when not.
    pub fn into_patch(&self, now: DateTime<Utc>) -> Result<PostPatch, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        let scheduled = schedule::resolve(self.status, self.date, self.time, now)?;
        Ok(PostPatch {
            title: Some(title.to_owned()),
            content: Some(self.content.clone()),
            status: Some(self.status),
            platform: self.platform.clone(),
            tags: Some(self.tags.clone()),
            scheduled_date: Some(scheduled),
            ..Default::default()
        })
    }
}

/// Tracks one post through an optimistic save.
///
/// The canonical record stays the single source of truth; a pending patch
/// overlays it while a save is in flight. A confirmed save adopts the
/// store's row, a failed one discards the overlay.
#[derive(Debug, Clone)]
pub struct EditSession {
    post: ContentPost,
    pending: Option<PostPatch>,
}

impl EditSession {
    pub fn new(post: ContentPost) -> Self {
        Self {
            post,
            pending: None,
        }
    }

    /// The last state confirmed by the store.
    pub fn post(&self) -> &ContentPost {
        &self.post
    }

    /// Whether a save is in flight. Callers disable the save control while
    /// this is true.
    pub fn is_saving(&self) -> bool {
        self.pending.is_some()
    }

    /// What should be displayed: the canonical record with any in-flight
    /// patch applied on top.
    pub fn view(&self) -> ContentPost {
        let mut view = self.post.clone();
        if let Some(patch) = &self.pending {
            let shown_at = view.updated_at;
            patch.apply_to(&mut view, shown_at);
        }
        view
    }

    /// Mark `patch` as in flight. Returns false (and changes nothing) when a
    /// save is already pending.
    pub fn begin_save(&mut self, patch: PostPatch) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(patch);
        true
    }

    /// The store confirmed the save; its row becomes canonical.
    pub fn commit(&mut self, canonical: ContentPost) {
        self.post = canonical;
        self.pending = None;
    }

    /// The store rejected the save; the overlay is discarded and the view
    /// returns to the canonical record.
    pub fn rollback(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContentType, NewPost, PostPrompt, SourceData, TopicType};
    use chrono::TimeZone;

    fn saved_post() -> ContentPost {
        ContentPost::new(NewPost {
            title: Some("Launch week".to_owned()),
            content: "We shipped it.".to_owned(),
            content_type: ContentType::CreatePost,
            status: None,
            source_data: SourceData::CreatePost(PostPrompt {
                category: "c".to_owned(),
                topic: "t".to_owned(),
                topic_type: TopicType::Text,
                tone: "casual".to_owned(),
            }),
            original_content: None,
            scheduled_date: None,
            platform: Some("LinkedIn".to_owned()),
            tags: Some(vec!["launch".to_owned()]),
        })
    }

    fn sept(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, d).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn opening_a_scheduled_post_splits_the_pickers() {
        let mut post = saved_post();
        post.status = PostStatus::Scheduled;
        post.scheduled_date = Some(Utc.with_ymd_and_hms(2026, 9, 2, 14, 30, 0).unwrap());

        let draft = EditorDraft::from_post(&post);
        assert_eq!(draft.date, Some(sept(2)));
        assert_eq!(draft.time, Some(hm(14, 30)));
    }

    #[test]
    fn picking_a_date_promotes_to_scheduled() {
        let draft = EditorDraft::from_post(&saved_post());
        assert_eq!(draft.status, PostStatus::Draft);

        let draft = draft.apply(EditorEvent::PickDate(sept(2)));
        assert_eq!(draft.status, PostStatus::Scheduled);

        let draft = draft.apply(EditorEvent::PickTime(hm(9, 0)));
        assert_eq!(draft.status, PostStatus::Scheduled);
    }

    #[test]
    fn leaving_scheduled_clears_the_pickers() {
        let draft = EditorDraft::from_post(&saved_post())
            .apply(EditorEvent::PickDate(sept(2)))
            .apply(EditorEvent::PickTime(hm(9, 0)))
            .apply(EditorEvent::SetStatus(PostStatus::Draft));

        assert_eq!(draft.status, PostStatus::Draft);
        assert_eq!(draft.date, None);
        assert_eq!(draft.time, None);
    }

    #[test]
    fn tag_events_dedupe() {
        let draft = EditorDraft::from_post(&saved_post())
            .apply(EditorEvent::AddTag("launch".to_owned()))
            .apply(EditorEvent::AddTag(" ai ".to_owned()))
            .apply(EditorEvent::RemoveTag("launch".to_owned()));
        assert_eq!(draft.tags, vec!["ai"]);
    }

    #[test]
    fn patch_clears_schedule_when_not_scheduled() {
        let patch = EditorDraft::from_post(&saved_post())
            .into_patch(noon())
            .unwrap();
        assert_eq!(patch.scheduled_date, Some(None));
        assert_eq!(patch.status, Some(PostStatus::Draft));
    }

    #[test]
    fn patch_carries_the_combined_instant() {
        let patch = EditorDraft::from_post(&saved_post())
            .apply(EditorEvent::PickDate(sept(2)))
            .apply(EditorEvent::PickTime(hm(14, 30)))
            .into_patch(noon())
            .unwrap();
        assert_eq!(
            patch.scheduled_date,
            Some(Some(Utc.with_ymd_and_hms(2026, 9, 2, 14, 30, 0).unwrap()))
        );
    }

    #[test]
    fn patch_requires_title_content_and_schedule() {
        let empty_title = EditorDraft::from_post(&saved_post())
            .apply(EditorEvent::SetTitle("  ".to_owned()))
            .into_patch(noon());
        assert_eq!(empty_title, Err(ValidationError::EmptyTitle));

        let empty_content = EditorDraft::from_post(&saved_post())
            .apply(EditorEvent::SetContent(String::new()))
            .into_patch(noon());
        assert_eq!(empty_content, Err(ValidationError::EmptyContent));

        let missing_time = EditorDraft::from_post(&saved_post())
            .apply(EditorEvent::PickDate(sept(2)))
            .into_patch(noon());
        assert_eq!(missing_time, Err(ValidationError::MissingSchedule));

        let past = EditorDraft::from_post(&saved_post())
            .apply(EditorEvent::PickDate(sept(1)))
            .apply(EditorEvent::PickTime(hm(8, 0)))
            .into_patch(noon());
        assert_eq!(past, Err(ValidationError::PastSchedule));
    }

    #[test]
    fn session_overlays_and_rolls_back() {
        let post = saved_post();
        let mut session = EditSession::new(post.clone());

        let patch = PostPatch {
            content: Some("Edited body.".to_owned()),
            ..Default::default()
        };
        assert!(session.begin_save(patch.clone()));
        assert!(session.is_saving());
        assert!(!session.begin_save(patch));

        assert_eq!(session.view().content, "Edited body.");
        assert_eq!(session.post().content, "We shipped it.");

        session.rollback();
        assert!(!session.is_saving());
        assert_eq!(session.view(), post);
    }

    #[test]
    fn session_adopts_the_confirmed_row() {
        let post = saved_post();
        let mut session = EditSession::new(post.clone());

        let mut canonical = post.clone();
        canonical.content = "Edited body.".to_owned();
        canonical.updated_at = post.updated_at + chrono::Duration::minutes(1);

        session.begin_save(PostPatch {
            content: Some("Edited body.".to_owned()),
            ..Default::default()
        });
        session.commit(canonical.clone());

        assert!(!session.is_saving());
        assert_eq!(session.view(), canonical);
    }
}
