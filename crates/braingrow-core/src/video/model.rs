//! Video domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A video as presented to the UI, already mapped from the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Platform-assigned video identifier.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Creator display name.
    pub author: String,
    /// Publication timestamp; absent when the wire value did not parse.
    pub published_at: Option<DateTime<Utc>>,
    pub category: String,
    /// View count at fetch time.
    pub views: u64,
    /// Absolute playback URL.
    pub url: String,
    /// Absolute cover image URL.
    pub cover_url: String,
    /// Optional metadata for logging and display.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub board: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}

impl Video {
    /// Embed URL when the playback URL points at YouTube; `None` for
    /// directly hosted videos, which play through a plain video element.
    pub fn youtube_embed_url(&self) -> Option<String> {
        super::youtube::embed_url(&self.url)
    }
}
