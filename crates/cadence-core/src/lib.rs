//! # Cadence Core
//!
//! The domain layer of the Cadence content dashboard: post entities,
//! scheduling rules, editor transitions, and the projections the views are
//! built from. Pure business logic with zero infrastructure dependencies.

pub mod calendar;
pub mod domain;
pub mod editor;
pub mod error;
pub mod filter;
pub mod ports;
pub mod schedule;
pub mod service;

pub use error::DomainError;
pub use service::PostService;
