use async_trait::async_trait;
use farelens_core::model::{LocationSuggestion, SearchQuery, SearchResult};

use crate::error::ClientResult;

/// Seam over the remote search service. Controllers depend on this trait
/// so they can be exercised against scripted backends in tests.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// One round-trip search. No retries; a failure is surfaced once.
    async fn search_flights(&self, query: &SearchQuery) -> ClientResult<SearchResult>;

    /// Location lookup for the autocomplete fields, raw text in.
    async fn autocomplete(&self, query: &str) -> ClientResult<Vec<LocationSuggestion>>;
}
