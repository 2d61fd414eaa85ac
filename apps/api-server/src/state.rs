//! Application state - shared across all handlers.

use std::sync::Arc;

use cadence_core::PostService;
use cadence_core::ports::ContentGenerator;
use cadence_infra::database::{DatabaseConfig, InMemoryPostRepository};
use cadence_infra::generator::{GeneratorConfig, WebhookGenerator};

#[cfg(feature = "postgres")]
use cadence_infra::database::PostgresPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub generator: Arc<dyn ContentGenerator>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>, generator: GeneratorConfig) -> Self {
        #[cfg(feature = "postgres")]
        let posts = {
            if let Some(config) = db_config {
                match cadence_infra::database::connect(config).await {
                    Ok(conn) => PostService::new(Arc::new(PostgresPostRepository::new(conn))),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        PostService::new(Arc::new(InMemoryPostRepository::new()))
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                PostService::new(Arc::new(InMemoryPostRepository::new()))
            }
        };

        #[cfg(not(feature = "postgres"))]
        let posts = {
            tracing::info!("Running without postgres feature - using in-memory store");
            PostService::new(Arc::new(InMemoryPostRepository::new()))
        };

        tracing::info!("Application state initialized");

        Self {
            posts,
            generator: Arc::new(WebhookGenerator::new(generator)),
        }
    }
}
