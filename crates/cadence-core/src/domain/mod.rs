//! Domain entities - the core business objects.

mod post;

mod source;

pub use post::{
    ContentPost, ContentType, EditHistoryEntry, NewPost, PostPatch, PostStatus, derive_title,
    normalize_tags,
};
pub use source::{
    EngagementOptions, LeadMagnetPrompt, MIN_OUTLINE_CHARS, PostPrompt, SourceData, TopicType,
    normalize_url,
};
