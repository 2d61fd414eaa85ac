//! Calendar projections over scheduled posts: the month grid behind the
//! calendar view and the chronological timeline. Pure functions; callers
//! fetch, these shape.

use std::cmp::Ordering;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::ContentPost;

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for the leading and trailing days that pad the first and last
    /// weeks out to full length.
    pub in_month: bool,
    pub is_today: bool,
    pub posts: Vec<ContentPost>,
}

/// The Sunday of the week containing `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// Build the day-bucketed grid for the month containing `reference`.
///
/// The grid runs from the Sunday-started week of the 1st through the week of
/// the month's last day, so its length is always a multiple of seven. Posts
/// land in the cell matching their scheduled UTC calendar day and keep the
/// order they were given in; unscheduled posts land nowhere.
pub fn month_grid(reference: NaiveDate, today: NaiveDate, posts: &[ContentPost]) -> Vec<DayCell> {
    let first = reference.with_day(1).unwrap_or(reference);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(first);

    let start = week_start(first);
    let end = week_start(last)
        .checked_add_days(Days::new(6))
        .unwrap_or(last);

    let mut cells = Vec::new();
    let mut day = start;
    while day <= end {
        cells.push(DayCell {
            date: day,
            in_month: day.month() == reference.month() && day.year() == reference.year(),
            is_today: day == today,
            posts: posts
                .iter()
                .filter(|p| p.scheduled_date.map(|at| at.date_naive()) == Some(day))
                .cloned()
                .collect(),
        });
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    cells
}

/// All posts ordered for the timeline view: ascending `scheduled_date` with
/// `created_at` as tie-break; unscheduled posts sort last, ordered among
/// themselves by `created_at`.
pub fn timeline(posts: &[ContentPost]) -> Vec<ContentPost> {
    let mut ordered = posts.to_vec();
    ordered.sort_by(|a, b| match (a.scheduled_date, b.scheduled_date) {
        (Some(x), Some(y)) => x.cmp(&y).then(a.created_at.cmp(&b.created_at)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.created_at.cmp(&b.created_at),
    });
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContentPost, ContentType, NewPost, PostPrompt, SourceData, TopicType};
    use chrono::{DateTime, TimeZone, Utc};

    fn post(scheduled: Option<DateTime<Utc>>, created: DateTime<Utc>) -> ContentPost {
        let mut post = ContentPost::new(NewPost {
            title: None,
            content: "body".to_owned(),
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
            platform: None,
            tags: None,
        });
        post.scheduled_date = scheduled;
        post.created_at = created;
        post.updated_at = created;
        post
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_is_whole_weeks_starting_sunday() {
        // August 2026 starts on a Saturday and ends on a Monday.
        let cells = month_grid(day(2026, 8, 15), day(2026, 8, 15), &[]);
        assert_eq!(cells.len(), 42);
        assert_eq!(cells[0].date, day(2026, 7, 26));
        assert_eq!(cells[41].date, day(2026, 9, 5));
        assert!(!cells[0].in_month);
        assert!(cells[6].in_month); // August 1st
        assert!(!cells[41].in_month);
    }

    #[test]
    fn grid_can_be_exactly_four_weeks() {
        // February 2026 starts on a Sunday and has 28 days.
        let cells = month_grid(day(2026, 2, 10), day(2026, 2, 10), &[]);
        assert_eq!(cells.len(), 28);
        assert!(cells.iter().all(|c| c.in_month));
    }

    #[test]
    fn every_month_day_appears_once() {
        let cells = month_grid(day(2026, 8, 1), day(2026, 1, 1), &[]);
        for d in 1..=31 {
            let hits = cells
                .iter()
                .filter(|c| c.date == day(2026, 8, d) && c.in_month)
                .count();
            assert_eq!(hits, 1, "day {d}");
        }
    }

    #[test]
    fn posts_bucket_by_scheduled_day_in_given_order() {
        let morning = post(Some(at(2026, 8, 12, 9)), at(2026, 8, 1, 0));
        let evening = post(Some(at(2026, 8, 12, 18)), at(2026, 8, 2, 0));
        let unscheduled = post(None, at(2026, 8, 3, 0));
        let posts = vec![morning.clone(), evening.clone(), unscheduled];

        let cells = month_grid(day(2026, 8, 1), day(2026, 8, 1), &posts);
        let cell = cells.iter().find(|c| c.date == day(2026, 8, 12)).unwrap();
        assert_eq!(cell.posts.len(), 2);
        assert_eq!(cell.posts[0].id, morning.id);
        assert_eq!(cell.posts[1].id, evening.id);

        let buckets: usize = cells.iter().map(|c| c.posts.len()).sum();
        assert_eq!(buckets, 2);
    }

    #[test]
    fn today_is_flagged() {
        let cells = month_grid(day(2026, 8, 1), day(2026, 8, 23), &[]);
        let todays: Vec<_> = cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].date, day(2026, 8, 23));
    }

    #[test]
    fn timeline_sorts_scheduled_first() {
        let a = post(Some(at(2026, 8, 20, 9)), at(2026, 8, 1, 0));
        let b = post(Some(at(2026, 8, 10, 9)), at(2026, 8, 2, 0));
        let c = post(None, at(2026, 8, 3, 0));

        let ordered = timeline(&[a.clone(), c.clone(), b.clone()]);
        assert_eq!(ordered[0].id, b.id);
        assert_eq!(ordered[1].id, a.id);
        assert_eq!(ordered[2].id, c.id);
    }

    #[test]
    fn timeline_breaks_ties_by_created_at() {
        let when = at(2026, 8, 10, 9);
        let older = post(Some(when), at(2026, 8, 1, 0));
        let newer = post(Some(when), at(2026, 8, 2, 0));

        let ordered = timeline(&[newer.clone(), older.clone()]);
        assert_eq!(ordered[0].id, older.id);
        assert_eq!(ordered[1].id, newer.id);
    }
}
