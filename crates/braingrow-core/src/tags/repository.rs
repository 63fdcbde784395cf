//! Tag catalog and tendency persistence traits.

use async_trait::async_trait;

use super::catalog::TagCatalog;
use super::selection::TendencyPayload;
use crate::error::Result;

/// Read access to the board/topic catalog.
///
/// The catalog is fetched once per view lifetime; a failed fetch means
/// there is nothing to seed and the caller surfaces the error.
#[async_trait]
pub trait TagCatalogRepository: Send + Sync {
    /// Fetches the full board -> topic -> keywords catalog.
    async fn fetch_catalog(&self) -> Result<TagCatalog>;
}

/// Persistence for tendency selections.
///
/// Implementations never retry; failures are surfaced to the caller,
/// which decides whether to present a retry to the user.
#[async_trait]
pub trait TendencyRepository: Send + Sync {
    /// Persists a tendency payload (selection, tag list, or legacy string).
    async fn update_tendency(&self, payload: &TendencyPayload) -> Result<()>;
}
