use crate::domain::{CacheRead, CacheStrategy, Quote};
use async_trait::async_trait;
use shared::Result;

// Ports are the pluggable extension points for the cache-aware record store.
// The production collaborator is a managed service; accel-store provides an
// in-memory stand-in with the same contract.

/// Port for the cache-aware record store.
#[async_trait]
pub trait QuoteStore: Send + Sync + 'static {
    /// Persist a new quote and return it with its assigned identifier.
    async fn create(&self, quote: String) -> Result<Quote>;

    /// Read a quote through the cached path. Missing ids (including 0 and
    /// negative ids) yield an empty read, never an error.
    async fn get(&self, id: i64, strategy: &CacheStrategy) -> Result<CacheRead<Quote>>;

    /// Replace the quote text for an existing record.
    async fn update(&self, id: i64, quote: String) -> Result<Quote>;

    /// Evict every cached read filed under any of the given tags. May fail
    /// with [`shared::Error::RateLimited`].
    async fn invalidate(&self, tags: &[String]) -> Result<()>;
}
