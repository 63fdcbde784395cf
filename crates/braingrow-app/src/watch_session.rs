//! Watch-page session: a video plus its Ask-AI chat transcript.

use serde::Serialize;

use braingrow_core::chat::{ChatMarkdownRenderer, ChatMessage, ChatRole, MathTypesetter, Transcript};
use braingrow_core::video::{Video, VideoAssistant};

/// A transcript message rendered to trusted display markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedMessage {
    pub role: ChatRole,
    /// Pre-sanitized markup, safe to inject verbatim.
    pub html: String,
}

/// View-model for a single watch session.
///
/// The transcript is append-only: asking a question always appends the
/// user turn, then appends either the assistant's answer or the failure
/// text as an assistant turn, so the user's message is never dropped.
#[derive(Debug)]
pub struct WatchSession {
    video: Video,
    transcript: Transcript,
}

impl WatchSession {
    /// Starts a session for the given video with an empty transcript.
    pub fn new(video: Video) -> Self {
        Self {
            video,
            transcript: Transcript::new(),
        }
    }

    /// The video being watched.
    pub fn video(&self) -> &Video {
        &self.video
    }

    /// Embed URL when the video plays through YouTube.
    pub fn youtube_embed_url(&self) -> Option<String> {
        self.video.youtube_embed_url()
    }

    /// The raw transcript in append order.
    pub fn transcript(&self) -> &[ChatMessage] {
        self.transcript.messages()
    }

    /// Sends a question to the assistant. Blank questions are ignored.
    /// Returns whether a question was actually sent.
    pub async fn ask(&mut self, assistant: &dyn VideoAssistant, question: &str) -> bool {
        let question = question.trim();
        if question.is_empty() {
            return false;
        }

        self.transcript.push(ChatMessage::user(question));
        match assistant.ask(&self.video.id, question).await {
            Ok(answer) => self.transcript.push(ChatMessage::assistant(answer)),
            Err(err) => {
                tracing::warn!(video_id = %self.video.id, error = %err, "ask failed");
                self.transcript.push(ChatMessage::assistant(err.to_string()));
            }
        }
        true
    }

    /// Renders the whole transcript to display markup.
    pub fn rendered_transcript(&self, typesetter: &dyn MathTypesetter) -> Vec<RenderedMessage> {
        let renderer = ChatMarkdownRenderer::new(typesetter);
        self.transcript
            .messages()
            .iter()
            .map(|message| RenderedMessage {
                role: message.role,
                html: renderer.render(&message.text),
            })
            .collect()
    }
}
