//! # Cadence Shared
//!
//! Types shared between the API surface and its clients.
//! In a full-stack Rust setup, this crate is compiled for both server and WASM.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
