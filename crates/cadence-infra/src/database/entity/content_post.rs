//! SeaORM entity for the content_posts table.

use sea_orm::entity::prelude::*;
use sea_orm::{FromJsonQueryResult, Set};
use serde::{Deserialize, Serialize};

use cadence_core::domain::{ContentPost, ContentType, EditHistoryEntry, PostStatus, SourceData};

/// `status` column values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Status {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "scheduled")]
    Scheduled,
    #[sea_orm(string_value = "published")]
    Published,
    #[sea_orm(string_value = "archived")]
    Archived,
}

/// `content_type` column values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Kind {
    #[sea_orm(string_value = "create_post")]
    CreatePost,
    #[sea_orm(string_value = "lead_magnet")]
    LeadMagnet,
}

/// `source_data` JSONB payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SourceDataJson(pub SourceData);

/// `edit_history` JSONB payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct EditHistoryJson(pub Vec<EditHistoryEntry>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "content_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub content_type: Kind,
    pub status: Status,
    #[sea_orm(column_type = "JsonBinary")]
    pub source_data: SourceDataJson,
    #[sea_orm(column_type = "Text", nullable)]
    pub original_content: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub edit_history: EditHistoryJson,
    pub scheduled_date: Option<DateTimeWithTimeZone>,
    pub platform: Option<String>,
    pub tags: Option<Vec<String>>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<PostStatus> for Status {
    fn from(status: PostStatus) -> Self {
        match status {
            PostStatus::Draft => Status::Draft,
            PostStatus::Scheduled => Status::Scheduled,
            PostStatus::Published => Status::Published,
            PostStatus::Archived => Status::Archived,
        }
    }
}

impl From<Status> for PostStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Draft => PostStatus::Draft,
            Status::Scheduled => PostStatus::Scheduled,
            Status::Published => PostStatus::Published,
            Status::Archived => PostStatus::Archived,
        }
    }
}

impl From<ContentType> for Kind {
    fn from(content_type: ContentType) -> Self {
        match content_type {
            ContentType::CreatePost => Kind::CreatePost,
            ContentType::LeadMagnet => Kind::LeadMagnet,
        }
    }
}

impl From<Kind> for ContentType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::CreatePost => ContentType::CreatePost,
            Kind::LeadMagnet => ContentType::LeadMagnet,
        }
    }
}

/// Conversion from SeaORM Model to the domain post. A null tags column
/// reads as an empty list.
impl From<Model> for ContentPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            content_type: model.content_type.into(),
            status: model.status.into(),
            source_data: model.source_data.0,
            original_content: model.original_content,
            edit_history: model.edit_history.0,
            scheduled_date: model.scheduled_date.map(Into::into),
            platform: model.platform,
            tags: model.tags.unwrap_or_default(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from the domain post to a fully-set SeaORM ActiveModel.
impl From<ContentPost> for ActiveModel {
    fn from(post: ContentPost) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            content: Set(post.content),
            content_type: Set(post.content_type.into()),
            status: Set(post.status.into()),
            source_data: Set(SourceDataJson(post.source_data)),
            original_content: Set(post.original_content),
            edit_history: Set(EditHistoryJson(post.edit_history)),
            scheduled_date: Set(post.scheduled_date.map(Into::into)),
            platform: Set(post.platform),
            tags: Set(Some(post.tags)),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
