//! Wiring of the application services to the REST client.

use std::sync::Arc;

use braingrow_client::ApiClient;
use braingrow_core::config::ClientConfig;
use braingrow_core::error::Result;
use braingrow_core::profile::{ProfileRepository, UserProfile};
use braingrow_core::video::{Video, VideoRepository};

use crate::tendency_editor::TendencyEditor;
use crate::watch_session::WatchSession;

/// Entry point composing the client and the per-view services.
///
/// Owns the single `ApiClient` (and through it the session context) for
/// the lifetime of the application.
#[derive(Clone)]
pub struct Platform {
    client: Arc<ApiClient>,
}

impl Platform {
    /// Creates the platform wiring from configuration.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Arc::new(ApiClient::new(config)),
        }
    }

    /// The underlying API client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Logs in; on success the session token is stored for later calls.
    pub async fn login(&self, email: &str, password: &str) -> Result<bool> {
        self.client.login(email, password).await
    }

    /// Creates an account; on success the session token is stored.
    pub async fn signup(&self, email: &str, password: &str, name: &str) -> Result<bool> {
        self.client.signup(email, password, name).await
    }

    /// Clears the session.
    pub fn logout(&self) {
        self.client.logout();
    }

    /// Returns true when a session token is present.
    pub fn is_authenticated(&self) -> bool {
        self.client.is_authenticated()
    }

    /// Uploads a new profile photo and persists the stored URL on the
    /// profile, returning the updated profile.
    pub async fn set_profile_photo(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        mime_type: &str,
    ) -> Result<UserProfile> {
        let photo_url = self
            .client
            .upload_profile_photo(file_name, bytes, mime_type)
            .await?;
        self.client.update_profile(None, Some(&photo_url)).await
    }

    /// Opens the tendency editor, loading catalog and profile.
    pub async fn open_tendency_editor(&self) -> Result<TendencyEditor> {
        let mut editor = TendencyEditor::new();
        editor.load(&*self.client, &*self.client).await?;
        Ok(editor)
    }

    /// Opens a watch session for the given video id.
    pub async fn open_watch_session(&self, video_id: &str) -> Result<WatchSession> {
        let video: Video = self.client.get_video(video_id).await?;
        Ok(WatchSession::new(video))
    }

    /// Fetches home-page recommendations using the configured page size.
    pub async fn recommendations(&self, max_videos: usize) -> Result<Vec<Video>> {
        self.client.recommendations(max_videos).await
    }

    /// Searches the video catalog.
    pub async fn search(&self, query: &str, max_videos: usize) -> Result<Vec<Video>> {
        self.client.search(query, max_videos).await
    }
}
