//! Application services for the BrainGrow client.
//!
//! View-model layer between the UI and the core/client crates: each
//! service owns the state of one view and talks to the platform through
//! the repository traits.

pub mod platform;
pub mod tendency_editor;
pub mod watch_session;

pub use platform::Platform;
pub use tendency_editor::TendencyEditor;
pub use watch_session::{RenderedMessage, WatchSession};
