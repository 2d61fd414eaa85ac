//! Outbound adapters for the AI content generation webhooks.

mod webhook;

pub use webhook::{GeneratorConfig, GeneratorConfigError, WebhookGenerator};
