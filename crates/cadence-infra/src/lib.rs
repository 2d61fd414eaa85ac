//! # Cadence Infrastructure
//!
//! Concrete implementations of the ports defined in `cadence-core`: the
//! Postgres post store, its in-memory fallback, and the webhook client for
//! AI content generation.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory store only
//! - `postgres` - PostgreSQL post store via SeaORM

pub mod database;
pub mod generator;

// Re-exports - In-Memory
pub use database::{DatabaseConfig, InMemoryPostRepository};

pub use generator::{GeneratorConfig, GeneratorConfigError, WebhookGenerator};

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, connect};
