//! Profile repository trait.

use async_trait::async_trait;

use super::model::UserProfile;
use crate::error::Result;

/// Read/write access to the authenticated user's profile.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetches the current user's profile.
    async fn fetch_profile(&self) -> Result<UserProfile>;

    /// Updates basic profile fields; unset arguments are left unchanged.
    async fn update_profile(
        &self,
        username: Option<&str>,
        photo_url: Option<&str>,
    ) -> Result<UserProfile>;
}
