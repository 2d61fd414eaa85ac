#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use cadence_core::domain::{PostPatch, PostPrompt, SourceData, TopicType};
    use cadence_core::error::RepoError;
    use cadence_core::ports::PostRepository;

    use crate::database::entity::content_post;
    use crate::database::postgres_repo::PostgresPostRepository;

    fn sample_row(id: uuid::Uuid) -> content_post::Model {
        let now = chrono::Utc::now();
        content_post::Model {
            id,
            title: Some("Test Post".to_owned()),
            content: "Content".to_owned(),
            content_type: content_post::Kind::CreatePost,
            status: content_post::Status::Draft,
            source_data: content_post::SourceDataJson(SourceData::CreatePost(PostPrompt {
                category: "Storytelling".to_owned(),
                topic: "Shipping".to_owned(),
                topic_type: TopicType::Text,
                tone: "Casual".to_owned(),
            })),
            original_content: None,
            edit_history: content_post::EditHistoryJson(Vec::new()),
            scheduled_date: None,
            platform: None,
            tags: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = uuid::Uuid::new_v4();

        // Mock the query expectation
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_row(post_id)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.find_by_id(post_id).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.id, post_id);
        assert_eq!(post.title.as_deref(), Some("Test Post"));
        // A null tags column reads back as an empty list.
        assert!(post.tags.is_empty());
    }

    #[tokio::test]
    async fn test_find_post_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<content_post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.find_by_id(uuid::Uuid::new_v4()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_insert_returns_stored_row() {
        let post_id = uuid::Uuid::new_v4();

        // Postgres inserts run INSERT .. RETURNING, so the mock serves the
        // stored row back as a query result.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_row(post_id)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let stored = repo.insert(sample_row(post_id).into()).await.unwrap();
        assert_eq!(stored.id, post_id);
        assert_eq!(stored.content, "Content");
    }

    #[tokio::test]
    async fn test_update_returns_refreshed_row() {
        let post_id = uuid::Uuid::new_v4();
        let mut row = sample_row(post_id);
        row.title = Some("Renamed".to_owned());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let patch = PostPatch {
            title: Some("Renamed".to_owned()),
            ..Default::default()
        };
        let updated = repo.update(post_id, patch).await.unwrap();
        assert_eq!(updated.title.as_deref(), Some("Renamed"));
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        // An UPDATE matching no rows surfaces as RecordNotUpdated.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<content_post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let patch = PostPatch {
            title: Some("Renamed".to_owned()),
            ..Default::default()
        };
        let err = repo.update(uuid::Uuid::new_v4(), patch).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_reports_missing_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        repo.delete(uuid::Uuid::new_v4()).await.unwrap();

        let err = repo.delete(uuid::Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }
}
