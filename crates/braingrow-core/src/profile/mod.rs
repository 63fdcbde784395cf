//! User profile domain model and repository trait.

pub mod model;
pub mod repository;

pub use model::{SessionInfo, UserProfile};
pub use repository::ProfileRepository;
