//! Video retrieval and Ask-AI collaborator traits.

use async_trait::async_trait;

use super::model::Video;
use crate::error::Result;

/// Read access to the platform's video endpoints.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Fetches personalized recommendations, up to `max_videos`.
    async fn recommendations(&self, max_videos: usize) -> Result<Vec<Video>>;

    /// Searches the catalog, up to `max_videos` results.
    async fn search(&self, query: &str, max_videos: usize) -> Result<Vec<Video>>;

    /// Fetches a single video by id.
    async fn get_video(&self, id: &str) -> Result<Video>;
}

/// Answers questions about a video's content.
#[async_trait]
pub trait VideoAssistant: Send + Sync {
    /// Asks a question about the given video and returns the answer text.
    async fn ask(&self, video_id: &str, question: &str) -> Result<String>;
}
