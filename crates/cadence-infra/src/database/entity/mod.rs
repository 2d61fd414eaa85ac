//! SeaORM entities.

pub mod content_post;
