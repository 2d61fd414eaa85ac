//! Library-view filtering: free-text search plus status and type narrowing.

use serde::Deserialize;

use crate::domain::{ContentPost, ContentType, PostStatus};

/// Narrowing criteria for the post library. Every `None` (or blank search)
/// means "all".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PostFilter {
    #[serde(default, alias = "q")]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<PostStatus>,
    #[serde(default)]
    pub content_type: Option<ContentType>,
}

impl PostFilter {
    /// True when `post` passes every active criterion.
    pub fn matches(&self, post: &ContentPost) -> bool {
        if let Some(query) = self.search.as_deref().map(str::trim) {
            if !query.is_empty() {
                let query = query.to_lowercase();
                let title_hit = post
                    .title
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&query);
                let content_hit = post.content.to_lowercase().contains(&query);
                if !title_hit && !content_hit {
                    return false;
                }
            }
        }
        if let Some(status) = self.status {
            if post.status != status {
                return false;
            }
        }
        if let Some(content_type) = self.content_type {
            if post.content_type != content_type {
                return false;
            }
        }
        true
    }

    /// The posts passing the filter, in their original order. The input is
    /// never mutated.
    pub fn apply(&self, posts: &[ContentPost]) -> Vec<ContentPost> {
        posts
            .iter()
            .filter(|post| self.matches(post))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewPost, PostPrompt, SourceData, TopicType};

    fn post(title: Option<&str>, content: &str) -> ContentPost {
        ContentPost::new(NewPost {
            title: title.map(str::to_owned),
            content: content.to_owned(),
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
        })
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_content() {
        let posts = vec![
            post(Some("Hello world"), "body"),
            post(None, "say hello to everyone"),
            post(Some("Other"), "unrelated"),
        ];
        let filter = PostFilter {
            search: Some("HELLO".to_owned()),
            ..Default::default()
        };
        let hits = filter.apply(&posts);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, posts[0].id);
        assert_eq!(hits[1].id, posts[1].id);
    }

    #[test]
    fn blank_search_matches_everything() {
        let posts = vec![post(None, "a"), post(None, "b")];
        let filter = PostFilter {
            search: Some("   ".to_owned()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&posts).len(), 2);
    }

    #[test]
    fn criteria_are_conjunctive() {
        let mut scheduled = post(Some("launch"), "body");
        scheduled.status = PostStatus::Scheduled;
        let draft = post(Some("launch plan"), "body");
        let posts = vec![scheduled.clone(), draft];

        let filter = PostFilter {
            search: Some("launch".to_owned()),
            status: Some(PostStatus::Scheduled),
            content_type: None,
        };
        let hits = filter.apply(&posts);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, scheduled.id);
    }

    #[test]
    fn filtering_is_idempotent_and_order_preserving() {
        let posts = vec![post(None, "alpha"), post(None, "beta"), post(None, "alpha two")];
        let filter = PostFilter {
            search: Some("alpha".to_owned()),
            ..Default::default()
        };
        let once = filter.apply(&posts);
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
        assert_eq!(once[0].id, posts[0].id);
        assert_eq!(once[1].id, posts[2].id);
    }

    #[test]
    fn untitled_posts_match_on_content_only() {
        let posts = vec![post(None, "quarterly numbers")];
        let by_title = PostFilter {
            search: Some("quarterly".to_owned()),
            ..Default::default()
        };
        assert_eq!(by_title.apply(&posts).len(), 1);
    }
}
