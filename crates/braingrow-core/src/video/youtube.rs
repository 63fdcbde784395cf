//! YouTube URL detection and embed helpers.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static YOUTUBE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(https?://)?(www\.)?(youtube\.com|youtu\.be)/").unwrap());

/// Returns true when the URL points at YouTube (scheme optional).
pub fn is_youtube_url(url: &str) -> bool {
    YOUTUBE_URL.is_match(url)
}

/// Extracts the video id from a YouTube URL.
///
/// Handles `youtu.be/<id>`, `youtube.com/watch?v=<id>` and
/// `youtube.com/embed/<id>`. Scheme-less URLs fail to parse and yield
/// `None`, matching the behavior of URL parsing in the display layer.
pub fn extract_video_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    if host.contains("youtu.be") {
        let id = parsed.path().trim_start_matches('/');
        return (!id.is_empty()).then(|| id.to_string());
    }

    if host.contains("youtube.com") {
        if parsed.path() == "/watch" {
            return parsed
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned());
        }
        let segments: Vec<&str> = parsed
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();
        if let Some(index) = segments.iter().position(|&seg| seg == "embed") {
            return segments.get(index + 1).map(|id| id.to_string());
        }
    }

    None
}

/// Builds the player embed URL for a YouTube playback URL, or `None` when
/// the URL is not YouTube or carries no extractable id.
pub fn embed_url(url: &str) -> Option<String> {
    if !is_youtube_url(url) {
        return None;
    }
    extract_video_id(url)
        .map(|id| format!("https://www.youtube.com/embed/{}?rel=0&modestbranding=1", id))
}

/// Resolves a possibly-relative media URL against the API base. Already
/// absolute URLs pass through; unresolvable input falls back to the raw
/// value.
pub fn resolve_media_url(raw: &str, base: &str) -> String {
    if raw.starts_with("http") {
        return raw.to_string();
    }
    Url::parse(base)
        .and_then(|base| base.join(raw))
        .map(String::from)
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_youtube_hosts() {
        assert!(is_youtube_url("https://www.youtube.com/watch?v=abc"));
        assert!(is_youtube_url("http://youtu.be/abc"));
        assert!(is_youtube_url("youtube.com/watch?v=abc"));
        assert!(!is_youtube_url("https://vimeo.com/123"));
    }

    #[test]
    fn test_extracts_watch_id() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extracts_short_and_embed_ids() {
        assert_eq!(
            extract_video_id("https://youtu.be/abc123"),
            Some("abc123".to_string())
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/xyz789"),
            Some("xyz789".to_string())
        );
    }

    #[test]
    fn test_schemeless_url_yields_no_id() {
        assert!(is_youtube_url("youtube.com/watch?v=abc"));
        assert_eq!(extract_video_id("youtube.com/watch?v=abc"), None);
        assert_eq!(embed_url("youtube.com/watch?v=abc"), None);
    }

    #[test]
    fn test_embed_url_shape() {
        assert_eq!(
            embed_url("https://youtu.be/abc123").as_deref(),
            Some("https://www.youtube.com/embed/abc123?rel=0&modestbranding=1")
        );
        assert_eq!(embed_url("https://example.com/v.mp4"), None);
    }

    #[test]
    fn test_resolve_media_url() {
        assert_eq!(
            resolve_media_url("/covers/a.png", "http://localhost:8080"),
            "http://localhost:8080/covers/a.png"
        );
        assert_eq!(
            resolve_media_url("https://cdn.example.com/a.png", "http://localhost:8080"),
            "https://cdn.example.com/a.png"
        );
    }
}
