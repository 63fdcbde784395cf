pub mod chat;
pub mod config;
pub mod error;
pub mod profile;
pub mod session;
pub mod tags;
pub mod video;

// Re-export common error type
pub use error::{BraingrowError, Result};
