//! Video domain model and playback URL helpers.

pub mod model;
pub mod repository;
pub mod youtube;

pub use model::Video;
pub use repository::{VideoAssistant, VideoRepository};
