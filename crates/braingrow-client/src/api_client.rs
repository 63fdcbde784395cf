//! REST API client for the BrainGrow platform.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, header, multipart};

use braingrow_core::config::ClientConfig;
use braingrow_core::error::{BraingrowError, Result};
use braingrow_core::profile::{ProfileRepository, UserProfile};
use braingrow_core::session::SessionContext;
use braingrow_core::tags::{TagCatalog, TagCatalogRepository, TendencyPayload, TendencyRepository};
use braingrow_core::video::{Video, VideoAssistant, VideoRepository};

use crate::dto::{
    AskRequest, AskResponse, AuthResponse, ErrorBody, LoginRequest, PhotoUploadResponse,
    ProfileUpdateRequest, SignupRequest, VideoDto,
};

/// Session shared between the client and the surrounding application.
pub type SharedSession = Arc<RwLock<SessionContext>>;

/// Client for the platform's REST API.
///
/// Holds the HTTP client, the API base URL, and the session context used
/// to attach the bearer token. All methods map failures into
/// [`BraingrowError`]; nothing here retries.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    session: SharedSession,
}

impl ApiClient {
    /// Creates a client with a fresh, unauthenticated session.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_session(config, Arc::new(RwLock::new(SessionContext::new())))
    }

    /// Creates a client sharing an existing session context.
    pub fn with_session(config: &ClientConfig, session: SharedSession) -> Self {
        Self {
            client: Client::new(),
            base_url: config.normalized_api_base().to_string(),
            timeout: Duration::from_secs(config.request_timeout_secs),
            session,
        }
    }

    /// The shared session context.
    pub fn session(&self) -> SharedSession {
        Arc::clone(&self.session)
    }

    /// Returns true when the session holds a token.
    pub fn is_authenticated(&self) -> bool {
        self.session.read().unwrap().is_authenticated()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attaches the bearer token when the session has one.
    fn auth_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.read().unwrap().bearer_header() {
            Some(value) => request.header(header::AUTHORIZATION, value),
            None => request,
        }
    }

    /// Maps a non-2xx response into an error, preferring the body's
    /// `error` field over the status reason.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        Err(BraingrowError::http(status.as_u16(), message))
    }

    /// Logs in and stores the issued token in the session. Returns false
    /// when the credentials are rejected; transport failures are errors.
    pub async fn login(&self, email: &str, password: &str) -> Result<bool> {
        let response = self
            .client
            .post(self.endpoint("/api/login"))
            .json(&LoginRequest { email, password })
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "login rejected");
            return Ok(false);
        }
        let body: AuthResponse = response.json().await?;
        match body.token {
            Some(token) => {
                self.session.write().unwrap().authenticate(token);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Creates an account and stores the issued token in the session.
    pub async fn signup(&self, email: &str, password: &str, name: &str) -> Result<bool> {
        let response = self
            .client
            .post(self.endpoint("/api/signup"))
            .json(&SignupRequest {
                email,
                password,
                name,
            })
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "signup rejected");
            return Ok(false);
        }
        let body: AuthResponse = response.json().await?;
        match body.token {
            Some(token) => {
                self.session.write().unwrap().authenticate(token);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Clears the session token.
    pub fn logout(&self) {
        self.session.write().unwrap().clear();
    }

    /// Uploads a profile photo and returns the URL the server stored it
    /// under. The caller persists that URL through
    /// [`ProfileRepository::update_profile`].
    pub async fn upload_profile_photo(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        mime_type: &str,
    ) -> Result<String> {
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|err| BraingrowError::internal(format!("invalid mime type: {}", err)))?;
        let form = multipart::Form::new().part("photo", part);

        let response = self
            .auth_request(self.client.post(self.endpoint("/api/profile/photo")))
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await?;
        let body: PhotoUploadResponse = Self::check(response).await?.json().await?;
        Ok(body.photo_url)
    }

    /// Asks a question about a video, optionally scoped to a time range.
    pub async fn ask_video_question(
        &self,
        video_id: &str,
        question: &str,
        start_time: Option<f64>,
        end_time: Option<f64>,
    ) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint(&format!("/api/videos/{}/ask", video_id)))
            .json(&AskRequest {
                question,
                start_time,
                end_time,
            })
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        let body: AskResponse = response.json().await.unwrap_or(AskResponse {
            answer: None,
            error: None,
        });
        if !status.is_success() {
            return Err(BraingrowError::http(
                status.as_u16(),
                body.error.unwrap_or_else(|| "Ask AI failed".to_string()),
            ));
        }
        body.answer
            .ok_or_else(|| BraingrowError::internal("ask response carried no answer"))
    }

    async fn fetch_videos(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<Video>> {
        let response = self
            .auth_request(self.client.get(self.endpoint(path)).query(query))
            .timeout(self.timeout)
            .send()
            .await?;
        let items: Vec<VideoDto> = Self::check(response).await?.json().await?;
        Ok(items
            .into_iter()
            .map(|dto| dto.into_video(&self.base_url))
            .collect())
    }
}

#[async_trait]
impl TagCatalogRepository for ApiClient {
    async fn fetch_catalog(&self) -> Result<TagCatalog> {
        let response = self
            .auth_request(self.client.get(self.endpoint("/api/tags")))
            .timeout(self.timeout)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}

#[async_trait]
impl TendencyRepository for ApiClient {
    async fn update_tendency(&self, payload: &TendencyPayload) -> Result<()> {
        let response = self
            .auth_request(self.client.put(self.endpoint("/api/profile/tendency")))
            .json(payload)
            .timeout(self.timeout)
            .send()
            .await?;
        tracing::debug!(status = %response.status(), "update tendency response");
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for ApiClient {
    async fn fetch_profile(&self) -> Result<UserProfile> {
        let response = self
            .auth_request(self.client.get(self.endpoint("/api/profile")))
            .timeout(self.timeout)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn update_profile(
        &self,
        username: Option<&str>,
        photo_url: Option<&str>,
    ) -> Result<UserProfile> {
        let response = self
            .auth_request(self.client.put(self.endpoint("/api/profile")))
            .json(&ProfileUpdateRequest {
                username,
                photo_url,
            })
            .timeout(self.timeout)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}

#[async_trait]
impl VideoRepository for ApiClient {
    async fn recommendations(&self, max_videos: usize) -> Result<Vec<Video>> {
        self.fetch_videos(
            "/api/recommendations",
            &[("maxVideo", max_videos.to_string())],
        )
        .await
    }

    async fn search(&self, query: &str, max_videos: usize) -> Result<Vec<Video>> {
        self.fetch_videos(
            "/api/search",
            &[
                ("query", query.to_string()),
                ("maxVideo", max_videos.to_string()),
            ],
        )
        .await
    }

    async fn get_video(&self, id: &str) -> Result<Video> {
        let response = self
            .client
            .get(self.endpoint(&format!("/api/video/{}", id)))
            .timeout(self.timeout)
            .send()
            .await?;
        let dto: VideoDto = Self::check(response).await?.json().await?;
        Ok(dto.into_video(&self.base_url))
    }
}

#[async_trait]
impl VideoAssistant for ApiClient {
    async fn ask(&self, video_id: &str, question: &str) -> Result<String> {
        self.ask_video_question(video_id, question, None, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let config = ClientConfig {
            api_base: "http://localhost:8080/".to_string(),
            ..ClientConfig::default()
        };
        let client = ApiClient::new(&config);
        assert_eq!(client.endpoint("/api/tags"), "http://localhost:8080/api/tags");
    }

    #[test]
    fn test_logout_clears_shared_session() {
        let client = ApiClient::new(&ClientConfig::default());
        client.session().write().unwrap().authenticate("tok");
        assert!(client.is_authenticated());

        client.logout();
        assert!(!client.is_authenticated());
    }
}
