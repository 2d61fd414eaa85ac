use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContentPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContentPosts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContentPosts::Title).string().null())
                    .col(ColumnDef::new(ContentPosts::Content).text().not_null())
                    .col(ColumnDef::new(ContentPosts::ContentType).string().not_null())
                    .col(
                        ColumnDef::new(ContentPosts::Status)
                            .string()
                            .not_null()
                            .default("draft"),
                    )
                    .col(
                        ColumnDef::new(ContentPosts::SourceData)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContentPosts::OriginalContent).text().null())
                    .col(
                        ColumnDef::new(ContentPosts::EditHistory)
                            .json_binary()
                            .not_null()
                            .default("[]"),
                    )
                    .col(
                        ColumnDef::new(ContentPosts::ScheduledDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(ContentPosts::Platform).string().null())
                    .col(
                        ColumnDef::new(ContentPosts::Tags)
                            .array(ColumnType::Text)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ContentPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContentPosts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // List views sort on these; the calendar filters on scheduled_date.
        manager
            .create_index(
                Index::create()
                    .name("idx_content_posts_status")
                    .table(ContentPosts::Table)
                    .col(ContentPosts::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_content_posts_scheduled_date")
                    .table(ContentPosts::Table)
                    .col(ContentPosts::ScheduledDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_content_posts_created_at")
                    .table(ContentPosts::Table)
                    .col(ContentPosts::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContentPosts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ContentPosts {
    Table,
    Id,
    Title,
    Content,
    ContentType,
    Status,
    SourceData,
    OriginalContent,
    EditHistory,
    ScheduledDate,
    Platform,
    Tags,
    CreatedAt,
    UpdatedAt,
}
