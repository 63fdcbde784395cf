//! Ask-AI chat transcript and display rendering.

pub mod markdown;
pub mod math;
pub mod message;

pub use markdown::{ChatMarkdownRenderer, escape_html};
pub use math::{InlineMathTypesetter, MathTypesetter};
pub use message::{ChatMessage, ChatRole, Transcript};
