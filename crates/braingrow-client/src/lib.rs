//! REST client for the BrainGrow platform API.
//!
//! Implements the repository traits defined in `braingrow-core` over HTTP.
//! The client is a thin I/O wrapper: it maps wire DTOs into domain models
//! and surfaces failures as `BraingrowError` without retrying.

pub mod api_client;
pub mod dto;

pub use api_client::{ApiClient, SharedSession};
