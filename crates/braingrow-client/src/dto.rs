//! Wire DTOs for the platform API.
//!
//! The API speaks camelCase JSON; these types absorb the per-endpoint
//! shape differences (e.g. `videoUrl` vs `url`, `imageUrl` vs `coverUrl`)
//! so the rest of the client deals only in domain models.

use braingrow_core::video::Video;
use braingrow_core::video::youtube::resolve_media_url;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier as the API sends it: numeric on some endpoints, string on
/// others.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(u64),
    Text(String),
}

impl WireId {
    pub fn into_string(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

/// Video record as returned by the recommendations, search, and single-
/// video endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDto {
    pub id: WireId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub creator: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub view_count: u64,
    /// Playback URL field used by the recommendations endpoint.
    #[serde(default)]
    pub video_url: Option<String>,
    /// Playback URL field used by search and single-video endpoints.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub board: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}

impl VideoDto {
    /// Maps the wire record into the domain model, resolving relative
    /// media URLs against the API base.
    pub fn into_video(self, api_base: &str) -> Video {
        let url = self.video_url.or(self.url).unwrap_or_default();
        let cover = self.cover_url.or(self.image_url).unwrap_or_default();
        let published_at = self
            .published_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Video {
            id: self.id.into_string(),
            title: self.title,
            description: self.description,
            author: self.creator,
            published_at,
            category: self.category,
            views: self.view_count,
            url: resolve_media_url(&url, api_base),
            cover_url: resolve_media_url(&cover, api_base),
            tags: self.tags,
            board: self.board,
            topic: self.topic,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest<'a> {
    pub question: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileUpdateRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<&'a str>,
    #[serde(rename = "photoUrl", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<&'a str>,
}

/// Response of the profile-photo upload endpoint.
#[derive(Debug, Deserialize)]
pub struct PhotoUploadResponse {
    #[serde(rename = "photoUrl")]
    pub photo_url: String,
}

/// Error body some endpoints return alongside a non-2xx status.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_shape_maps_to_video() {
        let dto: VideoDto = serde_json::from_str(
            r#"{
                "id": 42,
                "title": "Limits",
                "description": "Intro to limits",
                "creator": "BrainGrow",
                "publishedAt": "2024-03-01T12:00:00Z",
                "category": "math",
                "viewCount": 100,
                "videoUrl": "/media/limits.mp4",
                "imageUrl": "/covers/limits.png"
            }"#,
        )
        .unwrap();

        let video = dto.into_video("http://localhost:8080");
        assert_eq!(video.id, "42");
        assert_eq!(video.author, "BrainGrow");
        assert_eq!(video.url, "http://localhost:8080/media/limits.mp4");
        assert_eq!(video.cover_url, "http://localhost:8080/covers/limits.png");
        assert!(video.published_at.is_some());
    }

    #[test]
    fn test_single_video_shape_prefers_cover_url() {
        let dto: VideoDto = serde_json::from_str(
            r#"{
                "id": "v-1",
                "title": "Algebra",
                "creator": "BrainGrow",
                "url": "https://cdn.example.com/algebra.mp4",
                "coverUrl": "https://cdn.example.com/algebra.png",
                "tags": ["equations"],
                "board": "math",
                "topic": "algebra"
            }"#,
        )
        .unwrap();

        let video = dto.into_video("http://localhost:8080");
        assert_eq!(video.id, "v-1");
        assert_eq!(video.url, "https://cdn.example.com/algebra.mp4");
        assert_eq!(video.cover_url, "https://cdn.example.com/algebra.png");
        assert_eq!(video.board.as_deref(), Some("math"));
        assert!(video.published_at.is_none());
    }

    #[test]
    fn test_photo_upload_response_reads_camel_case_url() {
        let body: PhotoUploadResponse =
            serde_json::from_str(r#"{"photoUrl":"/photos/u-1.png"}"#).unwrap();
        assert_eq!(body.photo_url, "/photos/u-1.png");
    }

    #[test]
    fn test_ask_request_omits_unset_time_range() {
        let body = serde_json::to_string(&AskRequest {
            question: "why?",
            start_time: None,
            end_time: None,
        })
        .unwrap();
        assert_eq!(body, r#"{"question":"why?"}"#);
    }
}
